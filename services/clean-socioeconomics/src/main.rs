//! Socioeconomic variable cleaning job.
//!
//! Cleans income residuals, 2019 per-capita income, and age-binned
//! population, outer-joins them on census tract, drops incomplete
//! regions, and publishes the result as a Zarr store.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dataset::ChunkSpec;
use prep_common::RunContext;
use storage::{read_netcdf_bytes, resolve_uri, upload_directory, write_zarr_dataset};
use tabular::{clean_income_adjusted, clean_pci, clean_pop, merge_socioeconomics, Table};

const INCOME_PATH: &str = "/gcs/rhg-data/impactlab-rhg/client-projects/2021-carb-cvm/data-prep/output_data/income_adjusted.nc4";
const PCI2019_URI: &str = "gs://rhg-data/impactlab-rhg/client-projects/2021-carb-cvm/data-prep/output_data/PCI_2019.csv";
const POP_URI: &str = "gs://rhg-data/impactlab-rhg/client-projects/2021-carb-cvm/data-prep/output_data/population_age_binned.csv";
const OUT_ZARR: &str = "gs://new_carb_demo/clean_socioeconomics.zarr";

#[derive(Parser, Debug)]
#[command(name = "clean-socioeconomics")]
#[command(about = "Clean and join socioeconomic variables by census tract")]
struct Args {
    /// Income residual NetCDF source
    #[arg(long, default_value = INCOME_PATH)]
    income: String,

    /// Per-capita income CSV source
    #[arg(long, default_value = PCI2019_URI)]
    pci: String,

    /// Age-binned population CSV source
    #[arg(long, default_value = POP_URI)]
    population: String,

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

async fn fetch_table(uri: &str) -> Result<Table> {
    let location = resolve_uri(uri)?;
    let data = location.storage.get(&location.key).await?;
    Ok(Table::from_reader(&data[..])?)
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
    info!(uid = %ctx.uid, user = %ctx.user, "Starting socioeconomics cleaning run");

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

    let income_raw = {
        let location = resolve_uri(&args.income)?;
        let data = location.storage.get(&location.key).await?;
        read_netcdf_bytes(&data)?
    };
    let income = clean_income_adjusted(income_raw)?;
    let pci = clean_pci(&fetch_table(&args.pci).await?)?;
    let pop = clean_pop(&fetch_table(&args.population).await?)?;

    let merged = merge_socioeconomics(&income, &pci, &pop)?;

    let chunks = ChunkSpec::new().with("region", 1000);
    let out_dir = staging.join("socioeconomics.zarr");
    write_zarr_dataset(&merged, &out_dir, &chunks)?;

    let out = resolve_uri(&args.output)?;
    let uploaded = upload_directory(&out.storage, &out_dir, &out.key).await?;
    info!(uri = %args.output, bytes = uploaded, "Wrote cleaned socioeconomics");

    Ok(())
}
