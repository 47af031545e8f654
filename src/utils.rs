//! File system helpers for the output directory.

use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test
/// by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing_dir() {
        let dir = std::env::temp_dir().join("chatonsky_journal_test_output");
        let _ = stdfs::remove_dir_all(&dir);

        ensure_writable_dir(dir.to_str().unwrap()).await.unwrap();
        assert!(dir.is_dir());

        let _ = stdfs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_accepts_existing_dir() {
        let dir = std::env::temp_dir();
        ensure_writable_dir(dir.to_str().unwrap()).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_rejects_file_path() {
        let file = std::env::temp_dir().join("chatonsky_journal_not_a_dir");
        stdfs::write(&file, b"x").unwrap();

        let result = ensure_writable_dir(file.to_str().unwrap()).await;
        assert!(result.is_err());

        let _ = stdfs::remove_file(&file);
    }
}
