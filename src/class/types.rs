use std::path::PathBuf;
use serde::Serialize;

/// Default directory the split files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Default extension of the split files
pub const DEFAULT_EXTENSION: &str = "py";

/// A class cut out of a multi-class source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedClass {
    /// Name of the class as declared
    pub name: String,

    /// Lines preceding the first class in the source file
    pub header: Vec<String>,

    /// Lines of the class, starting with its `class ` line
    pub content: Vec<String>,
}

impl ExtractedClass {
    /// Render the output body: header followed by content, newline separated
    pub fn render(&self) -> String {
        self.header.iter()
            .chain(self.content.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Options controlling where and how split files are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Directory receiving one file per class plus the aggregator
    pub output_dir: PathBuf,

    /// Extension of every written file, without the leading dot
    pub extension: String,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl SplitOptions {
    /// Create options for the given output directory with the default extension
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Path of the file a given stem is written to
    pub fn output_path(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", stem, self.extension))
    }

    /// Path of the aggregator file
    pub fn aggregator_path(&self) -> PathBuf {
        self.output_path("__init__")
    }
}

/// Statistics about a split run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SplitStats {
    /// Number of lines in the input
    pub total_lines: usize,

    /// Number of header lines shared by every class
    pub header_lines: usize,

    /// Number of `class ` lines encountered
    pub classes_found: usize,

    /// Number of `class ` lines dropped because no name could be extracted
    pub unnamed_classes: usize,

    /// Number of files written, aggregator included
    pub files_written: usize,
}

/// Result of splitting a file
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// The classes that were written out
    pub classes: Vec<ExtractedClass>,

    /// Paths of every written file, aggregator last
    pub written_files: Vec<PathBuf>,

    /// Statistics about the run
    pub stats: SplitStats,
}
