//! Object storage client for source data and cleaned output.

use std::sync::Arc;

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path;
use object_store::ObjectStore;
use prep_common::{PrepError, PrepResult};
use tracing::{debug, instrument};

/// A resolved storage URI: a client scoped to one bucket (or the local
/// filesystem) plus the object key within it.
pub struct StorageLocation {
    pub storage: ObjectStorage,
    pub key: String,
}

/// Resolve a URI to a scoped client and key.
///
/// `gs://` and `s3://` URIs pick up credentials from the environment;
/// anything else is treated as a local filesystem path.
pub fn resolve_uri(uri: &str) -> PrepResult<StorageLocation> {
    if uri.starts_with("gs://") {
        let (bucket, key) = split_bucket(uri, "gs://")?;
        Ok(StorageLocation {
            storage: ObjectStorage::gcs(&bucket)?,
            key,
        })
    } else if uri.starts_with("s3://") {
        let (bucket, key) = split_bucket(uri, "s3://")?;
        Ok(StorageLocation {
            storage: ObjectStorage::s3(&bucket)?,
            key,
        })
    } else {
        let path = uri.strip_prefix("file://").unwrap_or(uri);
        Ok(StorageLocation {
            storage: ObjectStorage::local(),
            key: path.trim_start_matches('/').to_string(),
        })
    }
}

/// Split a `scheme://bucket/key` URI into bucket and key.
fn split_bucket(uri: &str, scheme: &str) -> PrepResult<(String, String)> {
    let rest = &uri[scheme.len()..];
    match rest.split_once('/') {
        Some((bucket, key)) if !bucket.is_empty() && !key.is_empty() => {
            Ok((bucket.to_string(), key.to_string()))
        }
        _ => Err(PrepError::StorageError(format!(
            "malformed storage URI: {}",
            uri
        ))),
    }
}

/// Object storage client scoped to one bucket or the local filesystem.
#[derive(Clone)]
pub struct ObjectStorage {
    store: Arc<dyn ObjectStore>,
    root: String,
}

impl ObjectStorage {
    /// Client for a GCS bucket, configured from the environment.
    pub fn gcs(bucket: &str) -> PrepResult<Self> {
        let store = GoogleCloudStorageBuilder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| {
                PrepError::StorageError(format!("Failed to create GCS client: {}", e))
            })?;
        Ok(Self {
            store: Arc::new(store),
            root: format!("gs://{}", bucket),
        })
    }

    /// Client for an S3 bucket, configured from the environment.
    pub fn s3(bucket: &str) -> PrepResult<Self> {
        let store = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| {
                PrepError::StorageError(format!("Failed to create S3 client: {}", e))
            })?;
        Ok(Self {
            store: Arc::new(store),
            root: format!("s3://{}", bucket),
        })
    }

    /// Client for the local filesystem; keys are absolute paths without the
    /// leading slash.
    pub fn local() -> Self {
        Self {
            store: Arc::new(LocalFileSystem::new()),
            root: "file://".to_string(),
        }
    }

    /// Write bytes to a key.
    #[instrument(skip(self, data), fields(root = %self.root, key = %key))]
    pub async fn put(&self, key: &str, data: Bytes) -> PrepResult<()> {
        let location = Path::from(key);
        debug!(size = data.len(), "writing object");

        self.store
            .put(&location, data.into())
            .await
            .map_err(|e| PrepError::StorageError(format!("Failed to write {}: {}", key, e)))?;

        Ok(())
    }

    /// Read a whole object.
    #[instrument(skip(self), fields(root = %self.root, key = %key))]
    pub async fn get(&self, key: &str) -> PrepResult<Bytes> {
        let location = Path::from(key);

        let result = self
            .store
            .get(&location)
            .await
            .map_err(|e| PrepError::StorageError(format!("Failed to read {}: {}", key, e)))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| PrepError::StorageError(format!("Failed to read bytes: {}", e)))?;

        debug!(size = bytes.len(), "read object");
        Ok(bytes)
    }

    /// Whether an object exists.
    pub async fn exists(&self, key: &str) -> PrepResult<bool> {
        let location = Path::from(key);

        match self.store.head(&location).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(PrepError::StorageError(format!(
                "Failed to check {}: {}",
                key, e
            ))),
        }
    }

    /// List object keys under a prefix.
    pub async fn list(&self, prefix: &str) -> PrepResult<Vec<String>> {
        use futures::TryStreamExt;

        let prefix_path = Path::from(prefix);
        let mut keys = Vec::new();

        let mut stream = self.store.list(Some(&prefix_path));
        while let Some(meta) = stream
            .try_next()
            .await
            .map_err(|e| PrepError::StorageError(format!("List failed: {}", e)))?
        {
            keys.push(meta.location.to_string());
        }

        Ok(keys)
    }

    /// Delete an object.
    #[instrument(skip(self), fields(root = %self.root, key = %key))]
    pub async fn delete(&self, key: &str) -> PrepResult<()> {
        let location = Path::from(key);

        self.store
            .delete(&location)
            .await
            .map_err(|e| PrepError::StorageError(format!("Failed to delete {}: {}", key, e)))?;

        Ok(())
    }

    /// Delete every object under a prefix. Used before re-uploading an
    /// output so stale chunks from a prior layout never survive.
    #[instrument(skip(self), fields(root = %self.root, prefix = %prefix))]
    pub async fn delete_prefix(&self, prefix: &str) -> PrepResult<usize> {
        let keys = self.list(prefix).await?;
        for key in &keys {
            self.delete(key).await?;
        }
        debug!(count = keys.len(), "deleted prefix");
        Ok(keys.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bucket() {
        let (bucket, key) = split_bucket("gs://impactlab-data/climate/file.nc4", "gs://").unwrap();
        assert_eq!(bucket, "impactlab-data");
        assert_eq!(key, "climate/file.nc4");

        assert!(split_bucket("gs://bucket-only", "gs://").is_err());
        assert!(split_bucket("gs:///no-bucket", "gs://").is_err());
    }

    #[test]
    fn test_resolve_local_uri() {
        let resolved = resolve_uri("/tmp/scratch/out.zarr").unwrap();
        assert_eq!(resolved.key, "tmp/scratch/out.zarr");

        let resolved = resolve_uri("file:///tmp/scratch/out.zarr").unwrap();
        assert_eq!(resolved.key, "tmp/scratch/out.zarr");
    }

    #[tokio::test]
    async fn test_local_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ObjectStorage::local();
        let key = format!(
            "{}/a/b.bin",
            dir.path().to_string_lossy().trim_start_matches('/')
        );

        storage
            .put(&key, Bytes::from_static(b"payload"))
            .await
            .unwrap();
        assert!(storage.exists(&key).await.unwrap());
        assert_eq!(storage.get(&key).await.unwrap().as_ref(), b"payload");

        let prefix = format!("{}/a", dir.path().to_string_lossy().trim_start_matches('/'));
        let keys = storage.list(&prefix).await.unwrap();
        assert_eq!(keys.len(), 1);

        let deleted = storage.delete_prefix(&prefix).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(!storage.exists(&key).await.unwrap());
    }
}
