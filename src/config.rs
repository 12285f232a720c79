//! Scan configuration: ignore defaults and the size gate.

/// Default ignore patterns applied to every full scan.
///
/// Covers common VCS/dependency/build artifacts plus this tool's own
/// output files, so a generated bundle is never bundled back in.
pub const DEFAULT_IGNORE: &[&str] = &[
    ".git",
    ".idea",
    ".vscode",
    "__pycache__",
    "node_modules",
    "venv",
    "env",
    "target",
    ".DS_Store",
    "*.pyc",
    "*.o",
    "*.so",
    "*.png",
    "*.jpg",
    "*.dll",
    "*.exe",
    "llm_context.xml",
    "README.md",
    "LICENSE",
];

/// Files larger than this are skipped during a full scan unless the
/// caller names them explicitly.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024;

/// Configuration for a [`Scanner`](crate::scanner::Scanner).
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Glob-style ignore patterns matched against basenames.
    pub ignore_patterns: Vec<String>,
    /// Size gate in bytes for non-forced files.
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: DEFAULT_IGNORE.iter().map(|p| p.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl ScanConfig {
    /// Create a config with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the size gate.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Append extra ignore patterns on top of the defaults.
    pub fn with_extra_ignores(mut self, patterns: impl IntoIterator<Item = String>) -> Self {
        self.ignore_patterns.extend(patterns);
        self
    }
}
