//! Legacy generator: writes the fixed sample workbook, no config file needed

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use rentbook::sample::generate_sample_workbook;
use rentbook::workbook::save_workbook;

const DEFAULT_OUTPUT: &str = "نموذج إدارة العمارات والشقق.xlsx";

#[derive(Parser)]
#[command(name = "rentbook-legacy")]
#[command(about = "Generate the sample building-management workbook (legacy variant)")]
struct Cli {
    /// Output Excel file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => {
            println!(
                "✓ Excel file generated successfully: {}",
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut workbook = generate_sample_workbook()?;
    save_workbook(&mut workbook, &cli.output)?;
    Ok(())
}
