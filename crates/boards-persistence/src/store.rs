use boards_core::SyncResult;
use std::path::Path;
use tokio::fs;

/// Write-to-temp-then-rename file writer.
///
/// The temp file lives in the destination's directory so the rename never
/// crosses filesystems; a crash mid-write leaves any existing snapshot
/// intact.
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> SyncResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).await?;

        let temp = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp.into_temp_path();
        fs::write(&temp_path, data).await?;
        temp_path.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    pub async fn read_all(path: &Path) -> SyncResult<Vec<u8>> {
        let data = fs::read(path).await?;
        Ok(data)
    }
}
