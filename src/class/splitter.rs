use std::path::Path;

use anyhow::Result;
use log::info;

use crate::class::processor::ClassEmitter;
use crate::class::scanner::{ClassSegmenter, Segmentation};
use crate::class::types::{SplitOptions, SplitResult};
use crate::utils::file_utils;

/// Segment whole-file text into its header and classes
pub fn split_source(text: &str) -> Segmentation {
    ClassSegmenter::new().segment_text(text)
}

/// Reads a multi-class file, segments it and writes the split output
#[derive(Debug)]
pub struct ClassSplitter {
    segmenter: ClassSegmenter,
    emitter: ClassEmitter,
}

impl ClassSplitter {
    /// Create a new splitter writing with the given options
    pub fn new(options: SplitOptions) -> Self {
        Self {
            segmenter: ClassSegmenter::new(),
            emitter: ClassEmitter::new(options),
        }
    }

    /// Create a new splitter with default options
    pub fn with_defaults() -> Self {
        Self::new(SplitOptions::default())
    }

    /// Split one input file.
    ///
    /// Nothing is written when the input cannot be read.
    pub fn split_file(&self, input: impl AsRef<Path>) -> Result<SplitResult> {
        let lines = self.read_input(input)?;
        self.split_lines(&lines)
    }

    /// Read the input file as `'\n'` separated lines
    pub fn read_input(&self, input: impl AsRef<Path>) -> Result<Vec<String>> {
        let input = input.as_ref();
        info!("Splitting {}", input.display());
        file_utils::read_lines(input)
    }

    /// Segment already read lines and write the split output.
    ///
    /// Directory creation and write failures are returned as is; files
    /// written before the failure stay on disk.
    pub fn split_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<SplitResult> {
        let Segmentation { classes, mut stats, .. } = self.segmenter.segment(lines);

        let emitted = self.emitter.emit(&classes)?;
        stats.files_written = emitted.files_written();

        info!("Split {} classes into {}",
            classes.len(), self.emitter.options().output_dir.display());

        Ok(SplitResult {
            classes,
            written_files: emitted.written_files,
            stats,
        })
    }
}
