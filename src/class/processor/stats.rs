use std::path::PathBuf;

/// Statistics for one emit pass
#[derive(Debug, Default, Clone)]
pub struct EmitStats {
    /// Number of per-class files written
    pub class_files: usize,

    /// Number of entries in the aggregator
    pub aggregator_entries: usize,

    /// Paths of every written file, aggregator last
    pub written_files: Vec<PathBuf>,
}

impl EmitStats {
    /// Create a new emit stats instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a written per-class file
    pub fn record_class_file(&mut self, path: PathBuf) {
        self.class_files += 1;
        self.written_files.push(path);
    }

    /// Total number of files written, aggregator included
    pub fn files_written(&self) -> usize {
        self.written_files.len()
    }

    /// Number of class files that replaced an earlier one with the same stem
    pub fn overwritten_files(&self) -> usize {
        let mut unique = self.written_files.clone();
        unique.sort();
        unique.dedup();
        self.written_files.len() - unique.len()
    }
}
