use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use miette::Result;
use weather_summary::{generate_daily_summary, generate_summary, load_data_from_csv};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Only {
    Overview,
    Daily,
}

/// Summarize daily weather records stored as `date,low,high` rows.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Csv file with a header row, temperatures in degrees Fahrenheit
    file: PathBuf,

    /// Print only one of the two summaries
    #[arg(long, value_enum)]
    only: Option<Only>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let records = load_data_from_csv(&args.file)?;
    info!("{} records in {}", records.len(), args.file.display());

    if args.only != Some(Only::Daily) {
        println!("{}", generate_summary(&records)?);
    }
    if args.only != Some(Only::Overview) {
        println!("{}", generate_daily_summary(&records)?);
    }

    Ok(())
}
