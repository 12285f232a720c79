//! Line-numbered content rendering and the size-skip placeholder.

/// Render raw text with 1-based line numbers, right-aligned to width 4.
///
/// Splits on `\n` over the raw text, so a trailing newline produces a
/// final numbered empty line. The rendering always covers the whole
/// file; there is no truncation.
pub fn render_numbered(raw: &str) -> String {
    raw.split('\n')
        .enumerate()
        .map(|(i, line)| format!("{:>4} | {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single-line substitute for a file excluded by the size gate.
pub fn skip_placeholder(size_bytes: u64) -> String {
    format!(
        "// [ctx-bridge] File too large (~{:.1}KB), skipped. Name it with --focus to force inclusion.",
        size_bytes as f64 / 1024.0
    )
}
