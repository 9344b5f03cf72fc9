use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rentbook")]
#[command(about = "Generate an Excel workbook for building management from a JSON config")]
pub struct Cli {
    /// Path to configuration JSON file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Output Excel file path (default: from config or "output.xlsx")
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
