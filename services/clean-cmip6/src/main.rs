//! CMIP6 GDPCIR ensemble cleaning job.
//!
//! For each target run, splices the historical Zarr store onto its SSP
//! projections, reduces tasmax/tasmin to a daily-mean tas estimate, and
//! publishes the resulting experiment/model tree as one Zarr store.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dataset::{ChunkSpec, Dataset};
use ensemble::{build_gdpcir_ensemble, estimate_tas, DatasetOpener, GDPCIR_TARGETS};
use prep_common::{PrepResult, RunContext};
use storage::{download_prefix, read_zarr_dataset, resolve_uri, upload_directory, write_zarr_tree};

const OUT_ZARR: &str = "gs://new_carb_demo/clean_cmip6.zarr";

#[derive(Parser, Debug)]
#[command(name = "clean-cmip6")]
#[command(about = "Assemble and clean the CMIP6 GDPCIR ensemble")]
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

/// Opens source Zarr stores by downloading them to a local directory.
struct ZarrOpener;

#[async_trait]
impl DatasetOpener for ZarrOpener {
    async fn open(&self, uri: &str) -> PrepResult<Dataset> {
        let location = resolve_uri(uri)?;
        let staged = tempfile::tempdir()?;
        download_prefix(&location.storage, &location.key, staged.path()).await?;
        read_zarr_dataset(staged.path(), "/")
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
    info!(uid = %ctx.uid, user = %ctx.user, "Starting CMIP6 cleaning run");

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

    let assembled = build_gdpcir_ensemble(GDPCIR_TARGETS, &ZarrOpener).await?;
    let mut tree = assembled.map_over_datasets(estimate_tas)?;
    tree.attrs.insert("uid", ctx.uid.to_string());
    tree.attrs.insert("created_at", ctx.started_at.to_rfc3339());

    let chunks = ChunkSpec::new()
        .with("time", 365 * 20)
        .with("lat", 90)
        .with("lon", 90);

    let out_dir = staging.join("cmip6.zarr");
    write_zarr_tree(&tree, &out_dir, &chunks)?;

    let out = resolve_uri(&args.output)?;
    let uploaded = upload_directory(&out.storage, &out_dir, &out.key).await?;
    info!(uri = %args.output, bytes = uploaded, "Wrote cleaned CMIP6 ensemble");

    Ok(())
}
