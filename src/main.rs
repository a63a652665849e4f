// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use flatten::cli::Cli;
use flatten::config::{Config, OutputDestination};
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    // Logging to stderr, controlled by RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Starting flatten v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = Config::from(cli);
    log::debug!("Configuration: {:?}", config);

    let result = match &config.output_destination {
        OutputDestination::Stdout => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            flatten::run(&config, &mut writer)
        }
        OutputDestination::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file '{}'", path.display()))?;
            let mut writer = BufWriter::new(file);
            flatten::run(&config, &mut writer)
        }
    };

    if let Err(e) = result {
        // Broken pipe on stdout (e.g. piping into `head`) is not an error.
        if let flatten::Error::Output(io_err) = &e {
            if io_err.kind() == io::ErrorKind::BrokenPipe {
                return Ok(());
            }
        }
        let mut stderr = io::stderr();
        let _ = writeln!(stderr, "Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
