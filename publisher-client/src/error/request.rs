use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RequestError {
    #[error("File Read Error: {path}: {source} {location}")]
    FileRead {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File Name Error: {path} has no final path component {location}")]
    NoFileName {
        location: ErrorLocation,
        path: PathBuf,
    },
}
