pub mod line_parser;

use log::{debug, error, info};

use crate::class::types::{ExtractedClass, SplitStats};

// Re-export from submodules
pub use line_parser::{extract_class_name, is_class_start, CLASS_PREFIX};

/// Header and classes cut out of one source file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Lines preceding the first class-start line
    pub header: Vec<String>,

    /// Named classes in declaration order
    pub classes: Vec<ExtractedClass>,

    /// Line and class counts gathered while segmenting
    pub stats: SplitStats,
}

/// Splits a sequence of lines into a shared header and per-class blocks.
///
/// Boundaries are found with [`is_class_start`] only; there is no
/// indentation or bracket tracking. A class runs from its `class ` line up
/// to the next `class ` line or the end of input. A class-start line without
/// a name is reported and dropped together with the lines it owns.
#[derive(Debug, Default)]
pub struct ClassSegmenter;

impl ClassSegmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }

    /// Split raw text on `'\n'` and segment the resulting lines
    pub fn segment_text(&self, text: &str) -> Segmentation {
        let lines: Vec<&str> = text.split('\n').collect();
        self.segment(&lines)
    }

    /// Segment a sequence of lines
    pub fn segment<S: AsRef<str>>(&self, lines: &[S]) -> Segmentation {
        let first_class = lines.iter()
            .position(|line| is_class_start(line.as_ref()))
            .unwrap_or(lines.len());

        let header: Vec<String> = lines[..first_class].iter()
            .map(|line| line.as_ref().to_string())
            .collect();

        let mut starts: Vec<usize> = (first_class..lines.len())
            .filter(|&n| is_class_start(lines[n].as_ref()))
            .collect();
        let class_count = starts.len();
        starts.push(lines.len());

        let mut stats = SplitStats {
            total_lines: lines.len(),
            header_lines: header.len(),
            classes_found: class_count,
            ..Default::default()
        };

        let mut classes = Vec::with_capacity(class_count);
        for bounds in starts.windows(2) {
            let (start, end) = (bounds[0], bounds[1]);
            let start_line = lines[start].as_ref();

            let Some(name) = extract_class_name(start_line) else {
                error!("Unable to extract class name from {:?}", start_line);
                stats.unnamed_classes += 1;
                continue;
            };

            let content: Vec<String> = lines[start..end].iter()
                .map(|line| line.as_ref().to_string())
                .collect();

            info!("Class finished: {} ({} lines)", name, content.len());
            classes.push(ExtractedClass {
                name,
                header: header.clone(),
                content,
            });
        }

        debug!("Segmented {} lines into {} header lines and {} classes",
            stats.total_lines, stats.header_lines, classes.len());

        Segmentation { header, classes, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.split('\n').collect()
    }

    #[test]
    fn test_segment_header_and_classes() {
        let input = lines("import os\nclass Alpha:\n    x = 1\nclass BetaGamma:\n    y = 2");
        let result = ClassSegmenter::new().segment(&input);

        assert_eq!(result.header, vec!["import os"]);
        assert_eq!(result.classes.len(), 2);

        assert_eq!(result.classes[0].name, "Alpha");
        assert_eq!(result.classes[0].content, vec!["class Alpha:", "    x = 1"]);
        assert_eq!(result.classes[0].header, vec!["import os"]);

        assert_eq!(result.classes[1].name, "BetaGamma");
        assert_eq!(result.classes[1].content, vec!["class BetaGamma:", "    y = 2"]);
        assert_eq!(result.classes[1].header, vec!["import os"]);
    }

    #[test]
    fn test_segment_empty_input() {
        let input: Vec<&str> = Vec::new();
        let result = ClassSegmenter::new().segment(&input);

        assert!(result.header.is_empty());
        assert!(result.classes.is_empty());
        assert_eq!(result.stats, SplitStats::default());
    }

    #[test]
    fn test_segment_without_classes() {
        let input = lines("import os\n\nx = 1");
        let result = ClassSegmenter::new().segment(&input);

        assert_eq!(result.header, input);
        assert!(result.classes.is_empty());
        assert_eq!(result.stats.header_lines, 3);
    }

    #[test]
    fn test_segment_class_on_first_line() {
        let input = lines("class Only:\n    pass");
        let result = ClassSegmenter::new().segment(&input);

        assert!(result.header.is_empty());
        assert_eq!(result.classes.len(), 1);
        assert_eq!(result.classes[0].content, vec!["class Only:", "    pass"]);
    }

    #[test]
    fn test_segment_drops_unnamed_class_and_its_lines() {
        let input = lines("import re\nclass :\n    lost = 1\nclass Kept:\n    kept = 2");
        let result = ClassSegmenter::new().segment(&input);

        assert_eq!(result.classes.len(), 1);
        assert_eq!(result.classes[0].name, "Kept");
        assert_eq!(result.classes[0].content, vec!["class Kept:", "    kept = 2"]);
        assert_eq!(result.stats.classes_found, 2);
        assert_eq!(result.stats.unnamed_classes, 1);
    }

    #[test]
    fn test_segment_nested_class_is_not_a_boundary() {
        let input = lines("class Outer:\n    class Inner:\n        pass\n    z = 3");
        let result = ClassSegmenter::new().segment(&input);

        assert_eq!(result.classes.len(), 1);
        assert_eq!(result.classes[0].content.len(), 4);
    }

    #[test]
    fn test_segment_text_keeps_trailing_empty_line() {
        let result = ClassSegmenter::new().segment_text("class A:\n    pass\n");

        assert_eq!(result.classes[0].content, vec!["class A:", "    pass", ""]);
        assert_eq!(result.stats.total_lines, 3);
    }
}
