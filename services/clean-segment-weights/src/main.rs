//! Segment weight cleaning job.
//!
//! Cleans the census-tract segment weight CSV, wrapping longitudes into
//! [-180, 180), and publishes it as a Zarr store.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dataset::ChunkSpec;
use prep_common::RunContext;
use storage::{resolve_uri, upload_directory, write_zarr_dataset};
use tabular::{clean_segment_weights, Table};

const SEGMENT_WEIGHTS_URI: &str = "gs://rhg-data/impactlab-rhg/client-projects/2021-carb-cvm/data-prep/source_data/segment_weights/California_2019_census_tracts_weighted_by_population_0p25.csv";
const OUT_ZARR: &str = "gs://new_carb_demo/clean_cmip5_segment_weights.zarr";

#[derive(Parser, Debug)]
#[command(name = "clean-segment-weights")]
#[command(about = "Clean census-tract segment weights")]
struct Args {
    /// Source segment weight CSV
    #[arg(long, default_value = SEGMENT_WEIGHTS_URI)]
    source: String,

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
    info!(uid = %ctx.uid, user = %ctx.user, "Starting segment weight cleaning run");

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

    let source = resolve_uri(&args.source)?;
    let data = source.storage.get(&source.key).await?;
    let table = Table::from_reader(&data[..])?;
    info!(uri = %args.source, rows = table.len(), "Read segment weight table");

    let ds = clean_segment_weights(&table)?;

    let out_dir = staging.join("segment_weights.zarr");
    write_zarr_dataset(&ds, &out_dir, &ChunkSpec::new())?;

    let out = resolve_uri(&args.output)?;
    let uploaded = upload_directory(&out.storage, &out_dir, &out.key).await?;
    info!(uri = %args.output, bytes = uploaded, "Wrote cleaned segment weights");

    Ok(())
}
