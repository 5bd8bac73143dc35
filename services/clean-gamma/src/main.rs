//! Gamma coefficient sampling job.
//!
//! Parses a CSVV coefficient file, draws multivariate-normal samples from
//! its point estimates and covariance matrix, and publishes the structured
//! sample/age_cohort/degree/covarname array as a Zarr store.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use csvv_parser::Csvv;
use dataset::ChunkSpec;
use gamma::{build_gamma_dataset, N_SAMPLES, SEED};
use prep_common::RunContext;
use storage::{resolve_uri, upload_directory, write_zarr_dataset};

const CSVV_URI: &str =
    "gs://rhg-data-scratch/brews/Agespec_interaction_GMFD_POLY-4_TINV_CYA_NW_w1.csvv";
const OUT_ZARR: &str = "gs://new_carb_demo/clean_gamma.zarr";

#[derive(Parser, Debug)]
#[command(name = "clean-gamma")]
#[command(about = "Sample and structure CSVV gamma coefficients")]
struct Args {
    /// Source CSVV file
    #[arg(long, default_value = CSVV_URI)]
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
    info!(uid = %ctx.uid, user = %ctx.user, "Starting gamma cleaning run");

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
    let text = String::from_utf8(data.to_vec())?;
    let csvv = Csvv::parse(&text)?;
    info!(uri = %args.source, coefficients = csvv.body.gamma.len(), "Parsed CSVV file");

    let mut ds = build_gamma_dataset(&csvv.body, SEED, N_SAMPLES)?;
    ds.attrs.insert("uid", ctx.uid.to_string());
    ds.attrs.insert("created_at", ctx.started_at.to_rfc3339());

    let chunks = ChunkSpec::new().with("sample", 1);
    let out_dir = staging.join("gamma.zarr");
    write_zarr_dataset(&ds, &out_dir, &chunks)?;

    let out = resolve_uri(&args.output)?;
    let uploaded = upload_directory(&out.storage, &out_dir, &out.key).await?;
    info!(uri = %args.output, bytes = uploaded, "Wrote sampled gamma coefficients");

    Ok(())
}
