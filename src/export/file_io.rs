//! File I/O utilities with atomic writes
//!
//! Export artifacts are written to a temporary sibling and renamed into
//! place, so a destination file is either a complete document or untouched.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{FinanthropeError, FinanthropeResult};

/// Read a whole text file, failing if it doesn't exist
pub fn read_to_string_required<P: AsRef<Path>>(path: P) -> FinanthropeResult<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FinanthropeError::Io(format!(
            "File not found: {}",
            path.display()
        )));
    }

    fs::read_to_string(path)
        .map_err(|e| FinanthropeError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write bytes to a file atomically (write to temp, then rename)
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> FinanthropeResult<()> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FinanthropeError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| FinanthropeError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(FinanthropeError::Io(format!("Failed to write data: {}", e)));
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FinanthropeError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");

        write_bytes_atomic(&path, b"{\"lang\":\"fr\"}").unwrap();
        assert_eq!(read_to_string_required(&path).unwrap(), "{\"lang\":\"fr\"}");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("summary.pdf");

        write_bytes_atomic(&path, b"%PDF-1.4").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("summary.pdf.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("chart.svg");

        write_bytes_atomic(&path, b"<svg/>").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_to_string_required(temp_dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
