pub mod class;
pub mod config;
pub mod utils;

// Re-export main types and functions for easier access
pub use class::types::{ExtractedClass, SplitOptions, SplitResult, SplitStats};
pub use class::scanner::{ClassSegmenter, Segmentation};
pub use class::processor::ClassEmitter;
pub use class::splitter::{split_source, ClassSplitter};
pub use class::naming::camel_to_snake;
pub use config::SplitterConfig;

// Re-export utility functions
pub use utils::file_utils;
