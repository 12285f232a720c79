//! Per-extension symbol extraction.
//!
//! Extractors are registered by file extension so new languages can be
//! added without touching the scanner. The shipped rule covers Python
//! top-level-ish declarations, which is what the bundle's symbol map was
//! designed around.

use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// Leading whitespace, keyword, then whitespace; matched per line.
static PYTHON_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(class|def)\s+").unwrap());

/// Placeholder summary for files with no recognized declarations.
pub const NO_SYMBOLS: &str = "No symbols detected.";

/// One recognized declaration within a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// 1-based line number.
    pub line_number: usize,
    /// Declaration text, trimmed, trailing `:` stripped.
    pub declaration: String,
}

/// Extracts declarations from raw file content.
pub trait SymbolExtractor {
    fn extract(&self, content: &str) -> Vec<SymbolEntry>;
}

/// `class`/`def` declarations in Python sources.
#[derive(Default)]
pub struct PythonExtractor;

impl PythonExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolExtractor for PythonExtractor {
    fn extract(&self, content: &str) -> Vec<SymbolEntry> {
        content
            .split('\n')
            .enumerate()
            .filter(|(_, line)| PYTHON_DECLARATION.is_match(line))
            .map(|(i, line)| SymbolEntry {
                line_number: i + 1,
                declaration: line.trim().trim_end_matches(':').to_string(),
            })
            .collect()
    }
}

/// Registry mapping file extensions to extractors.
pub struct SymbolRegistry {
    extractors: HashMap<String, Box<dyn SymbolExtractor>>,
}

impl SymbolRegistry {
    /// An empty registry with no extractors.
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Register an extractor for a file extension (without the dot).
    pub fn register(&mut self, extension: impl Into<String>, extractor: Box<dyn SymbolExtractor>) {
        self.extractors.insert(extension.into(), extractor);
    }

    /// Summarize `content` for the file at `path`.
    ///
    /// Returns the joined `Line <n>: <declaration>` list, or
    /// [`NO_SYMBOLS`] when the extension is unrecognized or nothing
    /// matched.
    pub fn summarize(&self, path: &Path, content: &str) -> String {
        let entries = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.extractors.get(ext))
            .map(|extractor| extractor.extract(content))
            .unwrap_or_default();

        if entries.is_empty() {
            return NO_SYMBOLS.to_string();
        }

        entries
            .iter()
            .map(|e| format!("Line {}: {}", e.line_number, e.declaration))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for SymbolRegistry {
    /// Registry with the shipped Python rule.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("py", Box::new(PythonExtractor::new()));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_class_and_def() {
        let content = "class A:\n    def b():\n        pass";
        let summary = SymbolRegistry::default().summarize(Path::new("a.py"), content);
        assert_eq!(summary, "Line 1: class A\nLine 2: def b()");
    }

    #[test]
    fn test_python_no_matches() {
        let content = "x = 1\nprint(x)\n";
        let summary = SymbolRegistry::default().summarize(Path::new("a.py"), content);
        assert_eq!(summary, NO_SYMBOLS);
    }

    #[test]
    fn test_unrecognized_extension() {
        let content = "class A:\n";
        let summary = SymbolRegistry::default().summarize(Path::new("a.rb"), content);
        assert_eq!(summary, NO_SYMBOLS);
    }

    #[test]
    fn test_no_extension() {
        let summary = SymbolRegistry::default().summarize(Path::new("Makefile"), "def x():");
        assert_eq!(summary, NO_SYMBOLS);
    }

    #[test]
    fn test_keyword_requires_following_whitespace() {
        // `classify` and `define` must not count as declarations
        let content = "classify = 1\ndefine()\ndef real():";
        let summary = SymbolRegistry::default().summarize(Path::new("a.py"), content);
        assert_eq!(summary, "Line 3: def real()");
    }

    #[test]
    fn test_indented_declarations_kept_in_order() {
        let content = "def a():\n    pass\nclass B:\n    def c(self):\n        pass";
        let extractor = PythonExtractor::new();
        let entries = extractor.extract(content);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].line_number, 1);
        assert_eq!(entries[0].declaration, "def a()");
        assert_eq!(entries[2].line_number, 4);
        assert_eq!(entries[2].declaration, "def c(self)");
    }

    #[test]
    fn test_custom_extractor_registration() {
        struct MarkerExtractor;
        impl SymbolExtractor for MarkerExtractor {
            fn extract(&self, content: &str) -> Vec<SymbolEntry> {
                content
                    .split('\n')
                    .enumerate()
                    .filter(|(_, l)| l.starts_with("fn "))
                    .map(|(i, l)| SymbolEntry {
                        line_number: i + 1,
                        declaration: l.trim().to_string(),
                    })
                    .collect()
            }
        }

        let mut registry = SymbolRegistry::default();
        registry.register("rs", Box::new(MarkerExtractor));

        let summary = registry.summarize(Path::new("lib.rs"), "fn main() {}");
        assert_eq!(summary, "Line 1: fn main() {}");
    }
}
