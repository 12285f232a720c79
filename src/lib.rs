pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod handlers;
pub mod ignore;
pub mod scanner;

pub use cli::Cli;
pub use config::{ScanConfig, DEFAULT_IGNORE, DEFAULT_MAX_FILE_SIZE};
pub use document::assemble;
pub use error::{BridgeError, Result};
pub use ignore::IgnoreSet;
pub use scanner::{
    FileRecord, ScanOutcome, ScanRequest, Scanner, SymbolEntry, SymbolExtractor, SymbolRegistry,
    SymbolSummary,
};
