/// Render the import line re-exporting one class from its stem module
pub fn aggregator_entry(stem: &str, class_name: &str) -> String {
    format!("from .{} import {}", stem, class_name)
}

/// Render the aggregator body.
///
/// Entries are sorted on the full rendered line, not on the class name, and
/// joined with `'\n'` without a trailing newline.
pub fn render_aggregator(mut entries: Vec<String>) -> String {
    entries.sort();
    entries.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregator_entry() {
        assert_eq!(aggregator_entry("beta_gamma", "BetaGamma"), "from .beta_gamma import BetaGamma");
    }

    #[test]
    fn test_render_aggregator_sorts_rendered_lines() {
        let entries = vec![
            aggregator_entry("zeta", "Zeta"),
            aggregator_entry("alpha_beta", "AlphaBeta"),
            aggregator_entry("alpha", "Alpha"),
        ];

        // "from .alpha import" sorts before "from .alpha_beta" because ' ' < '_'
        assert_eq!(
            render_aggregator(entries),
            "from .alpha import Alpha\nfrom .alpha_beta import AlphaBeta\nfrom .zeta import Zeta"
        );
    }

    #[test]
    fn test_render_aggregator_empty() {
        assert_eq!(render_aggregator(Vec::new()), "");
    }
}
