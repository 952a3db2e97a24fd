use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot open {}: {source}", file.display())]
    Open {
        file: PathBuf,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{}:{}: expected two whitespace-separated fields, found {}", file.display(), line, found)]
    MalformedLine {
        file: PathBuf,
        line: usize,
        found: usize,
    },
}
