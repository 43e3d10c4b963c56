use anyhow::Result;
use log::{debug, info, warn};

use crate::class::naming::camel_to_snake;
use crate::class::types::{ExtractedClass, SplitOptions};
use crate::utils::file_utils;
use super::aggregator::{aggregator_entry, render_aggregator};
use super::stats::EmitStats;

/// Writes extracted classes to one file each plus a sorted aggregator
#[derive(Debug)]
pub struct ClassEmitter {
    /// Output directory and extension
    options: SplitOptions,
}

impl ClassEmitter {
    /// Create a new class emitter with the given options
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    /// Create a new class emitter with default options
    pub fn with_defaults() -> Self {
        Self::new(SplitOptions::default())
    }

    /// The options this emitter writes with
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Write every class and the aggregator.
    ///
    /// The output directory is created first. The first failed write aborts
    /// the pass; files already written stay on disk.
    pub fn emit(&self, classes: &[ExtractedClass]) -> Result<EmitStats> {
        file_utils::ensure_dir_exists(&self.options.output_dir)?;

        let mut stats = EmitStats::new();
        let mut entries = Vec::with_capacity(classes.len());

        for class in classes {
            let stem = camel_to_snake(&class.name);
            let out_path = self.options.output_path(&stem);
            entries.push(aggregator_entry(&stem, &class.name));

            info!("Writing class {} to {}", class.name, out_path.display());
            file_utils::write_string_to_file(&out_path, &class.render())?;
            stats.record_class_file(out_path);
        }

        let overwritten = stats.overwritten_files();
        if overwritten > 0 {
            warn!("{} class files were overwritten by classes with the same file name", overwritten);
        }

        let aggregator_path = self.options.aggregator_path();
        stats.aggregator_entries = entries.len();
        info!("Writing {} aggregator entries to {}", entries.len(), aggregator_path.display());
        file_utils::write_string_to_file(&aggregator_path, &render_aggregator(entries))?;
        stats.written_files.push(aggregator_path);

        debug!("Wrote {} files to {}", stats.files_written(), self.options.output_dir.display());
        Ok(stats)
    }
}
