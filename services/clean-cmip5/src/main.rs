//! CMIP5 NEX-GDDP ensemble cleaning job.
//!
//! Assembles the per-file NASA NEX-GDDP archive into a scenario/model
//! tree, stages the assembled tree under the run's scratch prefix, then
//! splices historical runs onto the projections and publishes the merged
//! tree as a single Zarr store.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dataset::{ChunkSpec, Dataset};
use ensemble::{
    assemble_tree, expand_members, merge_scenarios, Cmip5Catalog, DatasetOpener, FILE_PATTERN,
};
use prep_common::{PrepResult, RunContext};
use storage::{
    read_netcdf_bytes, read_zarr_tree, resolve_uri, upload_directory, write_zarr_tree,
};

const OUT_ZARR: &str = "gs://new_carb_demo/clean_cmip5.zarr";

#[derive(Parser, Debug)]
#[command(name = "clean-cmip5")]
#[command(about = "Assemble and clean the CMIP5 NEX-GDDP ensemble")]
struct Args {
    /// Destination Zarr store
    #[arg(long, default_value = OUT_ZARR)]
    output: String,

    /// Local staging directory (default: a fresh temp dir)
    #[arg(long)]
    staging_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Opens NetCDF sources by fetching the raw bytes from object storage.
struct NetCdfOpener;

#[async_trait]
impl DatasetOpener for NetCdfOpener {
    async fn open(&self, uri: &str) -> PrepResult<Dataset> {
        let location = resolve_uri(uri)?;
        let data = location.storage.get(&location.key).await?;
        read_netcdf_bytes(&data)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let ctx = RunContext::from_env()?;
    info!(uid = %ctx.uid, user = %ctx.user, "Starting CMIP5 cleaning run");

    let mut _staging_guard = None;
    let staging = match &args.staging_dir {
        Some(dir) => dir.clone(),
        None => {
            let dir = tempfile::tempdir()?;
            let path = dir.path().to_path_buf();
            _staging_guard = Some(dir);
            path
        }
    };

    let catalog = Cmip5Catalog::nasa_nex();
    let members = expand_members(&catalog, FILE_PATTERN)?;
    info!(members = members.len(), "Expanded catalog");

    let tree = assemble_tree(&members, &NetCdfOpener, "cmip5").await?;

    let chunks = ChunkSpec::new()
        .with("time", 365)
        .with("lat", 360)
        .with("lon", 360);

    let assembled_dir = staging.join("assembled.zarr");
    write_zarr_tree(&tree, &assembled_dir, &chunks)?;

    let scratch_uri = ctx.scratch_path("cmip5.zarr");
    let scratch = resolve_uri(&scratch_uri)?;
    let staged_bytes = upload_directory(&scratch.storage, &assembled_dir, &scratch.key).await?;
    info!(uri = %scratch_uri, bytes = staged_bytes, "Staged assembled tree");

    // Merge from the staged store rather than the in-memory tree, so the
    // published output only ever reflects what round-trips through Zarr.
    let reopened = read_zarr_tree(&assembled_dir)?;
    let merged = merge_scenarios(&reopened)?;

    let merged_dir = staging.join("merged.zarr");
    write_zarr_tree(&merged, &merged_dir, &chunks)?;

    let out = resolve_uri(&args.output)?;
    let uploaded = upload_directory(&out.storage, &merged_dir, &out.key).await?;
    info!(uri = %args.output, bytes = uploaded, "Wrote cleaned CMIP5 ensemble");

    Ok(())
}
