mod aggregator;
mod class_emitter;
mod stats;

// Re-export from submodules
pub use aggregator::{aggregator_entry, render_aggregator};
pub use class_emitter::ClassEmitter;
pub use stats::EmitStats;
