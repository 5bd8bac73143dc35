//! Moving staged directories to and from object storage.

use std::path::Path;

use bytes::Bytes;
use prep_common::{PrepError, PrepResult};
use tracing::{debug, info};

use crate::object_store::ObjectStorage;

/// Upload a staged directory (usually a Zarr store) file-by-file.
///
/// Whatever already lives under the destination prefix is deleted first,
/// so a re-run never leaves stale chunks from a prior layout behind.
///
/// Returns total bytes uploaded.
pub async fn upload_directory(
    storage: &ObjectStorage,
    local_path: &Path,
    storage_prefix: &str,
) -> PrepResult<u64> {
    let prefix = storage_prefix.trim_end_matches('/');
    let removed = storage.delete_prefix(prefix).await?;
    if removed > 0 {
        info!(prefix = %prefix, objects = removed, "cleared destination before upload");
    }

    let mut total_size = 0u64;
    for entry in walkdir::WalkDir::new(local_path) {
        let entry = entry.map_err(|e| PrepError::StorageError(e.to_string()))?;

        if entry.file_type().is_file() {
            let relative_path = entry
                .path()
                .strip_prefix(local_path)
                .map_err(|e| PrepError::StorageError(e.to_string()))?;

            let storage_path = format!("{}/{}", prefix, relative_path.display());

            let file_data = tokio::fs::read(entry.path()).await?;
            let file_size = file_data.len() as u64;
            total_size += file_size;

            storage.put(&storage_path, Bytes::from(file_data)).await?;
            debug!(path = %storage_path, size = file_size, "uploaded file");
        }
    }

    Ok(total_size)
}

/// Download everything under a prefix into a local directory, keeping
/// relative paths. Returns the number of objects fetched; an empty prefix
/// is fatal since every job expects its source to exist.
pub async fn download_prefix(
    storage: &ObjectStorage,
    storage_prefix: &str,
    local_path: &Path,
) -> PrepResult<usize> {
    let prefix = storage_prefix.trim_end_matches('/');
    let keys = storage.list(prefix).await?;
    if keys.is_empty() {
        return Err(PrepError::StorageError(format!(
            "nothing to download under '{}'",
            prefix
        )));
    }

    for key in &keys {
        let relative = key.strip_prefix(prefix).unwrap_or(key).trim_start_matches('/');
        let target = local_path.join(relative);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let data = storage.get(key).await?;
        tokio::fs::write(&target, &data).await?;
        debug!(key = %key, size = data.len(), "downloaded file");
    }

    Ok(keys.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_key(path: &Path) -> String {
        path.to_string_lossy().trim_start_matches('/').to_string()
    }

    #[tokio::test]
    async fn test_upload_and_download_round_trip() {
        let staged = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(staged.path().join("group")).unwrap();
        std::fs::write(staged.path().join("zarr.json"), b"{}").unwrap();
        std::fs::write(staged.path().join("group/c0"), b"chunk-bytes").unwrap();

        let remote = tempfile::tempdir().unwrap();
        let storage = ObjectStorage::local();
        let prefix = format!("{}/out.zarr", local_key(remote.path()));

        let uploaded = upload_directory(&storage, staged.path(), &prefix).await.unwrap();
        assert_eq!(uploaded, 2 + 11);

        let fetched = tempfile::tempdir().unwrap();
        let count = download_prefix(&storage, &prefix, fetched.path()).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            std::fs::read(fetched.path().join("group/c0")).unwrap(),
            b"chunk-bytes"
        );
    }

    #[tokio::test]
    async fn test_upload_overwrites_stale_objects() {
        let remote = tempfile::tempdir().unwrap();
        let storage = ObjectStorage::local();
        let prefix = format!("{}/out.zarr", local_key(remote.path()));

        storage
            .put(&format!("{}/stale-chunk", prefix), Bytes::from_static(b"old"))
            .await
            .unwrap();

        let staged = tempfile::tempdir().unwrap();
        std::fs::write(staged.path().join("zarr.json"), b"{}").unwrap();
        upload_directory(&storage, staged.path(), &prefix).await.unwrap();

        let keys = storage.list(&prefix).await.unwrap();
        assert_eq!(keys.len(), 1);
        assert!(keys[0].ends_with("zarr.json"));
    }

    #[tokio::test]
    async fn test_download_missing_prefix_is_fatal() {
        let remote = tempfile::tempdir().unwrap();
        let storage = ObjectStorage::local();
        let prefix = format!("{}/absent", local_key(remote.path()));
        let target = tempfile::tempdir().unwrap();

        assert!(download_prefix(&storage, &prefix, target.path()).await.is_err());
    }
}
