//! Ignore-rule resolution for full-tree scans.
//!
//! Patterns are matched against basenames only. This deliberately does not
//! implement full gitignore semantics (no `!` negation, no directory-scoped
//! patterns): the effective rule is "does any pattern match the file or
//! directory name", which is what the bundle format relies on.

use crate::config::ScanConfig;
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A compiled ignore pattern.
struct IgnorePattern {
    matcher: GlobMatcher,
    /// For patterns ending in `/`: the bare directory name to match.
    dir_name: Option<String>,
}

/// Effective ignore rule set for one scan root.
///
/// Built once per scan from the configured defaults plus an optional
/// `.gitignore` directly under the root; immutable afterwards.
pub struct IgnoreSet {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreSet {
    /// Build the rule set for `root` from the config's patterns plus any
    /// `.gitignore` found directly under `root`.
    pub fn build(root: &Path, config: &ScanConfig) -> Self {
        let mut raw: Vec<String> = config.ignore_patterns.clone();
        raw.extend(Self::load_gitignore(root));

        let patterns = raw
            .iter()
            .filter_map(|p| Self::compile(p))
            .collect::<Vec<_>>();

        Self { patterns }
    }

    /// Read non-empty, non-comment lines from `<root>/.gitignore`.
    ///
    /// A missing or unreadable file contributes nothing; the resolver
    /// itself never fails.
    fn load_gitignore(root: &Path) -> Vec<String> {
        let gitignore = root.join(".gitignore");
        let Ok(content) = fs::read_to_string(&gitignore) else {
            return Vec::new();
        };

        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }

    fn compile(pattern: &str) -> Option<IgnorePattern> {
        let matcher = match Glob::new(pattern) {
            Ok(glob) => glob.compile_matcher(),
            Err(e) => {
                debug!(pattern, error = %e, "Skipping invalid ignore pattern");
                return None;
            }
        };

        let dir_name = pattern
            .ends_with('/')
            .then(|| pattern.trim_end_matches('/').to_string());

        Some(IgnorePattern { matcher, dir_name })
    }

    /// Whether `path` should be excluded from a full scan.
    ///
    /// Only the basename is consulted: a pattern matches when it
    /// glob-matches the name, or when it is a bare directory pattern
    /// (`name/`) and the basename equals `name`.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();

        self.patterns.iter().any(|p| {
            p.matcher.is_match(name.as_ref())
                || p.dir_name.as_deref() == Some(name.as_ref())
        })
    }
}
