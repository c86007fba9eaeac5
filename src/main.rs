use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use aircheck::program::Config;
use aircheck::runner::ProgramRunner;
use aircheck::tagger::LoftyTagger;
use aircheck::transport::FfmpegTransport;

#[derive(Parser)]
#[command(name = "aircheck", about = "Scheduled radio broadcast recorder")]
struct Cli {
    /// Program configuration JSON file
    config: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    info!("loading config: {}", cli.config.display());
    let config = Config::load(&cli.config).context("configuration load failed")?;
    info!("found {} program(s) to process", config.programs.len());

    let transport = FfmpegTransport::new();
    let tagger = LoftyTagger;
    let runner = ProgramRunner::new(&transport, &tagger);

    // Individual failures are already logged; the process still exits 0
    // once every program has been attempted.
    runner.run_all(&config.programs, Local::now().naive_local());
    Ok(())
}
