use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Root directory not found: {0}")]
    RootNotFound(String),

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to read file: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BridgeError>;
