//! Storage for the cleaning jobs: object storage access plus NetCDF
//! reading and Zarr v3 reading/writing.
//!
//! Source files live in object storage (GCS, S3, or a local path) and are
//! staged to a temp directory before opening; outputs are written as Zarr
//! to a local staging directory and uploaded file-by-file.

pub mod cf_time;
pub mod netcdf_read;
pub mod object_store;
pub mod transfer;
pub mod zarr_read;
pub mod zarr_write;

pub use object_store::{resolve_uri, ObjectStorage, StorageLocation};
pub use netcdf_read::{read_netcdf_bytes, read_netcdf_file};
pub use transfer::{download_prefix, upload_directory};
pub use zarr_read::{read_zarr_dataset, read_zarr_tree};
pub use zarr_write::{write_zarr_dataset, write_zarr_tree};
