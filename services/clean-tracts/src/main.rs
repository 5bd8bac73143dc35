//! Census tract shapefile cleaning job.
//!
//! Downloads the TIGER2019 tract shapefile, reads its polygons with the
//! GEOID duplicated under the `region` label, and publishes the result as
//! a Parquet file with WKB geometry.

use std::path::{Path, PathBuf};

use anyhow::Result;
use bytes::Bytes;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use prep_common::RunContext;
use storage::{download_prefix, resolve_uri};
use tabular::{read_tracts, write_tracts_parquet};

const GEO_PATH: &str = "/gcs/rhg-data/impactlab-rhg/spatial/shapefiles/source/us_census/TIGER2019/TRACT/tl_2019_06_tract";
const OUT_PARQUET: &str = "gs://new_carb_demo/clean_tracts.parquet";

#[derive(Parser, Debug)]
#[command(name = "clean-tracts")]
#[command(about = "Clean the TIGER2019 census tract shapefile")]
struct Args {
    /// Source shapefile directory
    #[arg(long, default_value = GEO_PATH)]
    source: String,

    /// Destination Parquet file
    #[arg(long, default_value = OUT_PARQUET)]
    output: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Find the .shp file in a downloaded shapefile directory.
fn find_shp(dir: &Path) -> Result<PathBuf> {
    for entry in walkdir::WalkDir::new(dir) {
        let entry = entry?;
        if entry.path().extension().is_some_and(|e| e == "shp") {
            return Ok(entry.path().to_path_buf());
        }
    }
    anyhow::bail!("no .shp file under {}", dir.display())
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
    info!(uid = %ctx.uid, user = %ctx.user, "Starting tract cleaning run");

    let source = resolve_uri(&args.source)?;
    let staged = tempfile::tempdir()?;
    let fetched = download_prefix(&source.storage, &source.key, staged.path()).await?;
    info!(uri = %args.source, files = fetched, "Downloaded shapefile");

    let shp_path = find_shp(staged.path())?;
    let tracts = read_tracts(&shp_path)?;
    info!(tracts = tracts.len(), "Read tract shapefile");

    let mut buffer = Vec::new();
    write_tracts_parquet(&tracts, &mut buffer)?;

    let out = resolve_uri(&args.output)?;
    let size = buffer.len();
    out.storage.put(&out.key, Bytes::from(buffer)).await?;
    info!(uri = %args.output, bytes = size, "Wrote cleaned tracts");

    Ok(())
}
