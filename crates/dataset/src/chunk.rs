//! Chunk layout requests for persisted arrays.

use std::collections::BTreeMap;

/// Requested chunk sizes by dimension name.
///
/// Dimensions without an entry are stored as a single chunk. Actual
/// partitioning is delegated to the Zarr writer; this is only the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkSpec {
    sizes: BTreeMap<String, u64>,
}

impl ChunkSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style entry.
    pub fn with(mut self, dim: impl Into<String>, size: u64) -> Self {
        self.sizes.insert(dim.into(), size);
        self
    }

    pub fn get(&self, dim: &str) -> Option<u64> {
        self.sizes.get(dim).copied()
    }

    /// Chunk shape for an array with the given dims and shape: the
    /// requested size capped at the dimension length, or the whole
    /// dimension when unspecified.
    pub fn chunk_shape(&self, dims: &[String], shape: &[usize]) -> Vec<u64> {
        dims.iter()
            .zip(shape.iter())
            .map(|(dim, &len)| {
                let len = len.max(1) as u64;
                self.get(dim).map(|c| c.min(len)).unwrap_or(len)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_shape() {
        let spec = ChunkSpec::new().with("time", 365).with("lat", 360);
        let dims = vec!["time".to_string(), "lat".to_string(), "lon".to_string()];
        assert_eq!(spec.chunk_shape(&dims, &[1000, 100, 720]), vec![365, 100, 720]);
    }

    #[test]
    fn test_zero_length_dimension() {
        let spec = ChunkSpec::new().with("sample", 1);
        let dims = vec!["sample".to_string()];
        assert_eq!(spec.chunk_shape(&dims, &[0]), vec![1]);
    }
}
