//! Tree scanning: target resolution, size gating, rendering and symbol
//! summaries.

pub mod render;
pub mod symbols;
pub mod walker;

use crate::config::ScanConfig;
use crate::error::{BridgeError, Result};
use crate::ignore::IgnoreSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

pub use symbols::{PythonExtractor, SymbolEntry, SymbolExtractor, SymbolRegistry, NO_SYMBOLS};

/// What to scan.
///
/// An empty `explicit_files` list means a full scan: the whole tree under
/// `root_dir` is walked with ignore rules and size gating applied. A
/// non-empty list means a focused scan: only the named root-relative files
/// are considered, ignore rules do not apply, and size gating is bypassed
/// for exactly those files.
#[derive(Debug, Clone, Default)]
pub struct ScanRequest {
    pub root_dir: PathBuf,
    pub explicit_files: Vec<String>,
}

impl ScanRequest {
    /// Full scan of `root_dir`.
    pub fn full(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            explicit_files: Vec::new(),
        }
    }

    /// Focused scan of the given root-relative files.
    pub fn focused(
        root_dir: impl Into<PathBuf>,
        files: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            explicit_files: files.into_iter().map(Into::into).collect(),
        }
    }

    fn is_focused(&self) -> bool {
        !self.explicit_files.is_empty()
    }
}

/// One surviving file, ready for assembly.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the scan root.
    pub relative_path: String,
    pub size_bytes: u64,
    /// Full line-numbered rendering, or the single-line skip placeholder.
    pub rendered_content: String,
    /// Empty when the file was skipped by the size gate.
    pub raw_content: String,
    /// Empty when no raw content was read.
    pub symbol_summary: String,
}

/// Per-file symbol block, produced only for files whose content was read.
#[derive(Debug, Clone)]
pub struct SymbolSummary {
    pub relative_path: String,
    pub summary: String,
}

/// Result of one scan, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub symbol_summaries: Vec<SymbolSummary>,
    pub records: Vec<FileRecord>,
}

/// The context-packaging scanner.
///
/// Holds its configuration and symbol registry; each call to [`scan`]
/// builds a fresh [`IgnoreSet`] snapshot, so concurrent scans share no
/// mutable state.
///
/// [`scan`]: Scanner::scan
pub struct Scanner {
    config: ScanConfig,
    registry: SymbolRegistry,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            registry: SymbolRegistry::default(),
        }
    }

    /// Replace the symbol registry (e.g. to add extractors).
    pub fn with_registry(mut self, registry: SymbolRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Scan per the request.
    ///
    /// Fails only when the root is missing or not a directory. Per-file
    /// errors (permission, non-UTF-8 content) drop that file from both
    /// outputs and never fail the scan.
    pub fn scan(&self, request: &ScanRequest) -> Result<ScanOutcome> {
        let root = request.root_dir.as_path();
        if !root.exists() {
            return Err(BridgeError::RootNotFound(root.display().to_string()));
        }
        if !root.is_dir() {
            return Err(BridgeError::NotADirectory(root.display().to_string()));
        }

        let targets = self.resolve_targets(request);
        debug!(count = targets.len(), focused = request.is_focused(), "Resolved scan targets");

        let mut outcome = ScanOutcome::default();
        for target in &targets {
            match self.process_file(root, target) {
                Ok((record, summary)) => {
                    if let Some(summary) = summary {
                        outcome.symbol_summaries.push(summary);
                    }
                    outcome.records.push(record);
                }
                Err(e) => {
                    // Per-file failures are absorbed: the file is dropped
                    // from both outputs and the scan continues.
                    debug!(path = %target.path.display(), error = %e, "Dropping unreadable file");
                }
            }
        }

        Ok(outcome)
    }

    /// Resolve the ordered target list for the request.
    fn resolve_targets(&self, request: &ScanRequest) -> Vec<Target> {
        let root = request.root_dir.as_path();

        if request.is_focused() {
            // Caller order is preserved; nonexistent entries are dropped.
            // Ignore rules never apply to an explicit selection.
            return request
                .explicit_files
                .iter()
                .filter_map(|rel| {
                    let path = root.join(rel);
                    if path.exists() {
                        Some(Target { path, forced: true })
                    } else {
                        trace!(rel = %rel, "Explicit file does not exist, dropping");
                        None
                    }
                })
                .collect();
        }

        let ignore = IgnoreSet::build(root, &self.config);
        walker::collect_files(root, &ignore)
            .into_iter()
            .map(|path| Target {
                path,
                forced: false,
            })
            .collect()
    }

    fn process_file(&self, root: &Path, target: &Target) -> Result<(FileRecord, Option<SymbolSummary>)> {
        let relative_path = target
            .path
            .strip_prefix(root)
            .unwrap_or(&target.path)
            .display()
            .to_string();

        let size_bytes = fs::metadata(&target.path)
            .map_err(|e| read_error(&target.path, e))?
            .len();

        let (rendered_content, raw_content) =
            if size_bytes > self.config.max_file_size && !target.forced {
                (render::skip_placeholder(size_bytes), String::new())
            } else {
                let raw = fs::read_to_string(&target.path)
                    .map_err(|e| read_error(&target.path, e))?;
                (render::render_numbered(&raw), raw)
            };

        // Skip placeholders (and empty files) yield no symbol entry.
        let summary = if raw_content.is_empty() {
            None
        } else {
            Some(SymbolSummary {
                relative_path: relative_path.clone(),
                summary: self
                    .registry
                    .summarize(Path::new(&relative_path), &raw_content),
            })
        };

        let symbol_summary = summary
            .as_ref()
            .map(|s| s.summary.clone())
            .unwrap_or_default();

        Ok((
            FileRecord {
                relative_path,
                size_bytes,
                rendered_content,
                raw_content,
                symbol_summary,
            },
            summary,
        ))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

struct Target {
    path: PathBuf,
    forced: bool,
}

fn read_error(path: &Path, source: std::io::Error) -> BridgeError {
    BridgeError::ReadError {
        path: path.display().to_string(),
        source,
    }
}
