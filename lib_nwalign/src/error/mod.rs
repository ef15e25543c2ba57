use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to open input file {path:?}: {source}")]
    OpenInputFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input file {path:?} contains fewer than two sequence lines")]
    MissingSequenceLine { path: PathBuf },

    #[error("Unable to write alignment report to {path:?}: {source}")]
    WriteReport {
        path: PathBuf,
        source: std::io::Error,
    },
}
