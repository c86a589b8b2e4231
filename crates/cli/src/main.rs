//! FaceFeat - Main Entry Point

use anyhow::Result;
use clap::Parser;
use cli::{init_logging, run, Args};
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.json_logs)?;
    info!("=== FaceFeat v{} ===", env!("CARGO_PKG_VERSION"));

    let output = run(&args)?;
    println!("{output}");
    Ok(())
}
