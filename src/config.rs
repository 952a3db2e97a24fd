use std::path::PathBuf;

/// File paths for one run, built once from the parsed command line and
/// passed into the load and rewrite phases.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub infile: PathBuf,
    pub outfile: PathBuf,
    pub mapfile: PathBuf,
}
