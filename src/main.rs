// Entry point: renders the four Kaelion figures and prints the banner.
use clap::Parser;
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

use kaelion::cli::Args;
use kaelion::config::RenderConfig;
use kaelion::figures;

fn main() {
    // Parse first so --help stays free of log noise.
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the banner.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = RenderConfig::load_or_default(&args.config).with_out_dir(args.out_dir);

    if let Err(err) = figures::render_all(&config) {
        eprintln!("figure generation failed: {err}");
        std::process::exit(1);
    }
    println!("{}", figures::confirmation_banner());
}
