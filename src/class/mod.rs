pub mod types;
pub mod naming;
pub mod scanner;
pub mod processor;
pub mod splitter;

// Re-export the main API for easier access
pub use types::{ExtractedClass, SplitOptions, SplitResult, SplitStats};
pub use naming::camel_to_snake;
pub use scanner::{ClassSegmenter, Segmentation};
pub use processor::ClassEmitter;
pub use splitter::{split_source, ClassSplitter};
