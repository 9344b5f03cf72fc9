use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, info};

use rentbook::cli::Cli;
use rentbook::config::load_config;
use rentbook::workbook::{generate_workbook, save_workbook};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Warnings always reach stderr; --verbose turns on the progress lines.
    // RUST_LOG still wins when set.
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(path) => {
            println!("✓ Excel file generated successfully: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)?;

    let output_path = config.resolve_output_path(cli.output.clone());
    info!("Output will be saved to: {}", output_path.display());

    let mut workbook = generate_workbook(&config)?;
    save_workbook(&mut workbook, &output_path)?;

    Ok(output_path)
}
