use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pattern_unmap::config::AppConfig;
use pattern_unmap::errors::AppError;
use pattern_unmap::mapping::MappingTable;
use pattern_unmap::{logger, transform};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "pattern-unmap",
    version,
    about = "Map a coded data file back to the patterns it was generated from"
)]
struct Cli {
    /// Coded input file to decode
    #[arg(short, long)]
    infile: PathBuf,

    /// Where to write the decoded output
    #[arg(short, long)]
    outfile: PathBuf,

    /// Mapping between patterns and pattern numbers
    #[arg(short, long)]
    mapfile: PathBuf,
}

fn main() -> ExitCode {
    logger::init();
    let cli = Cli::parse();
    let cfg = AppConfig {
        infile: cli.infile,
        outfile: cli.outfile,
        mapfile: cli.mapfile,
    };

    match run(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cfg: &AppConfig) -> Result<(), AppError> {
    info!("Loading mapping from {}", cfg.mapfile.display());
    let table = MappingTable::load(&cfg.mapfile)?;

    info!(
        "Rewriting {} into {}",
        cfg.infile.display(),
        cfg.outfile.display()
    );
    transform::rewrite(&table, &cfg.infile, &cfg.outfile)?;
    Ok(())
}
