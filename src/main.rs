use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use class_splitter::{file_utils, ClassSplitter, SplitterConfig};

/// Split massive class file into pieces
#[derive(Parser, Debug)]
#[command(name = "class_splitter", version, long_about = None)]
struct Cli {
    /// File containing the classes to split
    input_filename: PathBuf,

    /// Directory receiving the split files [default: out]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Extension of the split files [default: py]
    #[arg(short, long)]
    extension: Option<String>,

    /// TOML config file providing output_dir and extension
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write run statistics as JSON to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SplitterConfig::load(path)?,
        None => SplitterConfig::default(),
    };
    let options = config.resolve(cli.output_dir, cli.extension);

    let splitter = ClassSplitter::new(options);
    let lines = match splitter.read_input(&cli.input_filename) {
        Ok(lines) => lines,
        Err(err) if file_utils::is_not_found(&err) => {
            error!("File not found: {}", cli.input_filename.display());
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let result = splitter.split_lines(&lines)?;

    if let Some(report_path) = &cli.report {
        let report = serde_json::to_string_pretty(&result.stats)
            .context("Failed to serialize split statistics")?;
        file_utils::write_string_to_file(report_path, &report)?;
        info!("Wrote report to {}", report_path.display());
    }

    Ok(())
}
