//! Entry point for the uploader CLI.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use s3_uploader::backpressure::BackpressureController;
use s3_uploader::config::CliArgs;
use s3_uploader::object_store::{ObjectStore, S3ObjectStore};
use s3_uploader::thread_pool_builder::ThreadPoolBuilder;
use s3_uploader::walker::Walker;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();

    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .context("failed to initialize logging")?;

    let store: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(
        &args.access_key,
        &args.secret_key,
        &args.bucket,
        &args.region,
    )?);

    let mut pool = ThreadPoolBuilder::new()
        .with_name_str("uploader")
        .with_workers(args.workers)
        .with_join_error_handler(
            |name, message| {
                error!("worker {name} exited with an error: {message}")
            }
        )
        .build()?;

    let mut walker = Walker::new(store, BackpressureController::new(args.batch_size));
    for path in &args.paths {
        walker.submit_path(&pool, path);
    }

    // Drains everything scheduled so far and joins the workers; failed uploads were already
    // logged by the workers and do not change the exit code.
    if let Err(e) = pool.shutdown() {
        error!("{e:#}");
    }

    Ok(())
}
