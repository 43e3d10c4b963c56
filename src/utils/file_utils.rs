use std::path::Path;
use std::fs;
use anyhow::{Result, Context};
use log::debug;

/// Create a directory if it doesn't exist
pub fn ensure_dir_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    Ok(())
}

/// Read a file to string with better error handling
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}

/// Read a file and split it on `'\n'`, keeping any `'\r'` and a trailing empty line
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = read_file_to_string(path)?;
    Ok(content.split('\n').map(str::to_string).collect())
}

/// Write a string to a file, replacing any previous content
pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write file {}", path.display()))
}

/// Check whether an error chain ends in a "not found" I/O error
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
        .any(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_is_idempotent() -> Result<()> {
        let temp_dir = tempdir()?;
        let dir = temp_dir.path().join("a").join("b");

        ensure_dir_exists(&dir)?;
        ensure_dir_exists(&dir)?;

        assert!(dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_read_lines_keeps_trailing_empty_line() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("input.py");
        fs::write(&path, "a\r\nb\n")?;

        assert_eq!(read_lines(&path)?, vec!["a\r", "b", ""]);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_not_found() -> Result<()> {
        let temp_dir = tempdir()?;
        let err = read_file_to_string(temp_dir.path().join("missing.py")).unwrap_err();

        assert!(is_not_found(&err));
        Ok(())
    }
}
