//! Photo store
//!
//! Persists uploaded photos under generated unique filenames inside the cache
//! directory and reads them back by filename. Superseded photos are removed
//! through [`PhotoStore::remove`] so replaced or deleted items do not leave
//! files behind.

use crate::error::AppError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Directory-backed photo storage
#[derive(Debug)]
pub struct PhotoStore {
    dir: PathBuf,
    /// Per-process sequence, keeps names unique within the same millisecond
    sequence: AtomicU64,
}

impl PhotoStore {
    /// Create a photo store rooted at `dir`
    ///
    /// The directory is not touched until [`PhotoStore::ensure_dir`] or the
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Directory holding the stored photos
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the cache directory and any missing parents
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::Storage(format!(
                "Failed to create cache directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        debug!(dir = %self.dir.display(), "Cache directory ready");
        Ok(())
    }

    /// Write an uploaded photo and return its generated filename
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        let filename = self.generate_filename(original_name);
        let path = self.dir.join(&filename);

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                AppError::Storage(format!("Failed to create {}: {}", path.display(), e))
            })?;

        let written = match file.write_all(bytes).await {
            Ok(()) => file.sync_all().await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            drop(file);
            if let Err(cleanup) = fs::remove_file(&path).await {
                warn!(filename = %filename, error = %cleanup, "Failed to clean up partial photo");
            }
            return Err(AppError::Storage(format!(
                "Failed to write {}: {}",
                path.display(),
                e
            )));
        }

        info!(filename = %filename, size_bytes = bytes.len(), "Photo stored");
        Ok(filename)
    }

    /// Read a stored photo
    pub async fn retrieve(&self, filename: &str) -> Result<Vec<u8>, AppError> {
        if !is_plain_filename(filename) {
            return Err(AppError::PhotoNotFound(filename.to_string()));
        }

        fs::read(self.dir.join(filename)).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::PhotoNotFound(filename.to_string()),
            _ => AppError::Storage(format!("Failed to read {}: {}", filename, e)),
        })
    }

    /// Delete a stored photo; a file that is already gone is not an error
    pub async fn remove(&self, filename: &str) -> Result<(), AppError> {
        if !is_plain_filename(filename) {
            warn!(filename = %filename, "Refusing to remove photo outside the cache directory");
            return Ok(());
        }

        match fs::remove_file(self.dir.join(filename)).await {
            Ok(()) => {
                info!(filename = %filename, "Photo removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove {}: {}",
                filename, e
            ))),
        }
    }

    /// Remove a photo, logging instead of failing
    ///
    /// Used after the registry has already committed a change, when the
    /// request must succeed regardless of cleanup.
    pub async fn release(&self, filename: &str) {
        if let Err(e) = self.remove(filename).await {
            warn!(filename = %filename, error = %e, "Failed to release photo");
        }
    }

    /// Generate a unique filename: `{unix_millis}-{sequence}-{original}`
    fn generate_filename(&self, original_name: &str) -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}-{}", millis, sequence, sanitize_filename(original_name))
    }
}

/// Reduce an uploaded filename to a safe single path component
fn sanitize_filename(name: &str) -> String {
    // Browsers may send a full client path; keep only the last component
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "photo".to_string()
    } else {
        cleaned.to_string()
    }
}

/// True when `filename` names a file directly inside the cache directory
fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename != "."
        && !filename.contains("..")
        && !filename.contains(['/', '\\', '\0'])
}

/// Guess the content type of a stored photo from its extension
pub fn content_type(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
