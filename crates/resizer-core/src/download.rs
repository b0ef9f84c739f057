//! Delivering finished artifacts.
//!
//! [`DirectorySink`] writes into a download directory. Bytes go to a temporary
//! file first and are renamed into place without replacing anything, so a
//! failed or interrupted export never leaves a partial `resized_*.png`
//! behind. The temporary handle is consumed by the rename.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::error::{ResizeError, ResizeResult};
use crate::pipeline::{self, ExportRequest};
use crate::types::ResizedArtifact;

/// Give up picking a free name after this many numbered attempts
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Destination for exported PNGs.
pub trait DownloadSink: Send + Sync {
    /// Hand over one artifact. Returns where it ended up.
    fn deliver(&self, artifact: &ResizedArtifact) -> ResizeResult<PathBuf>;
}

/// Writes artifacts into a directory, browser style.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// `resized_64x64.png`, attempt 2 → `resized_64x64 (2).png`
pub fn numbered_name(file_name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return file_name.to_string();
    }
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{} ({}).{}", stem, attempt, ext),
        None => format!("{} ({})", file_name, attempt),
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, artifact: &ResizedArtifact) -> ResizeResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(artifact.bytes())?;
        temp.as_file().sync_all()?;

        let file_name = artifact.file_name();
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let target = self.dir.join(numbered_name(&file_name, attempt));
            match temp.persist_noclobber(&target) {
                Ok(_) => {
                    tracing::info!(path = %target.display(), bytes = artifact.bytes().len(), "Download saved");
                    return Ok(target);
                }
                Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => {
                    temp = e.file;
                }
                Err(e) => return Err(ResizeError::Io(e.error)),
            }
        }

        Err(ResizeError::Download(format!(
            "no free file name for {} in {}",
            file_name,
            self.dir.display()
        )))
    }
}

/// Render `request` and hand the result to `sink`, off the UI thread.
///
/// The artifact is dropped as soon as the sink returns.
pub async fn export_to(
    sink: Arc<dyn DownloadSink>,
    request: ExportRequest,
) -> ResizeResult<PathBuf> {
    let size = request.size;
    let artifact = pipeline::export(request).await?;

    let path = tokio::task::spawn_blocking(move || sink.deliver(&artifact))
        .await
        .map_err(|e| ResizeError::Download(format!("download task failed: {}", e)))??;

    tracing::debug!(size = size.edge(), "Export finished");
    Ok(path)
}
