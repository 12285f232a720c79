//! Deterministic assembly of the final bundle document.
//!
//! `assemble` is a pure function of its inputs: same records, query and
//! timestamp produce a byte-identical document.

pub mod protocol;

use crate::scanner::{FileRecord, SymbolSummary};
use protocol::PROTOCOL_PREAMBLE;

/// Separator under each symbol block.
const SECTION_RULE: &str = "------------------------------";

/// Build the final bundle.
///
/// Sections appear in a fixed order every run: metadata, protocol
/// preamble, symbol map (scan order), file contents (discovery order),
/// then the verbatim user query.
pub fn assemble(
    symbol_summaries: &[SymbolSummary],
    records: &[FileRecord],
    user_query: &str,
    timestamp: &str,
) -> String {
    let symbols = symbol_section(symbol_summaries);
    let files = file_section(records);

    format!(
        "<project_context>\n    <meta><timestamp>{timestamp}</timestamp></meta>\n    {PROTOCOL_PREAMBLE}\n    <symbol_map>\n{symbols}\n    </symbol_map>\n    <project_files>\n{files}\n    </project_files>\n    <user_query>\n        {user_query}\n    </user_query>\n</project_context>"
    )
}

fn symbol_section(summaries: &[SymbolSummary]) -> String {
    summaries
        .iter()
        .map(|s| format!("File: {}\n{}\n{}", s.relative_path, s.summary, SECTION_RULE))
        .collect::<Vec<_>>()
        .join("\n")
}

fn file_section(records: &[FileRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "    <file path=\"{}\">\n<![CDATA[\n{}\n]]>\n    </file>",
                r.relative_path,
                escape_cdata(&r.rendered_content)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split any embedded `]]>` so the CDATA container cannot terminate
/// early. The format has no nested-delimiter escape of its own.
fn escape_cdata(content: &str) -> String {
    content.replace("]]>", "]]]]><![CDATA[>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rel: &str, rendered: &str) -> FileRecord {
        FileRecord {
            relative_path: rel.to_string(),
            size_bytes: rendered.len() as u64,
            rendered_content: rendered.to_string(),
            raw_content: String::new(),
            symbol_summary: String::new(),
        }
    }

    #[test]
    fn test_empty_skeleton_is_stable() {
        let a = assemble(&[], &[], "", "2024-01-01 00:00:00");
        let b = assemble(&[], &[], "", "2024-01-01 00:00:00");
        assert_eq!(a, b);

        assert!(a.starts_with("<project_context>"));
        assert!(a.ends_with("</project_context>"));
        assert!(a.contains("<meta><timestamp>2024-01-01 00:00:00</timestamp></meta>"));
        assert!(a.contains("<symbol_map>"));
        assert!(a.contains("</symbol_map>"));
        assert!(a.contains("<project_files>"));
        assert!(a.contains("</project_files>"));
        assert!(a.contains("<user_query>\n        \n    </user_query>"));
    }

    #[test]
    fn test_only_timestamp_varies() {
        let a = assemble(&[], &[], "", "t1");
        let b = assemble(&[], &[], "", "t2");
        assert_eq!(a.replace("t1", "TS"), b.replace("t2", "TS"));
    }

    #[test]
    fn test_symbol_section_order_and_rule() {
        let summaries = vec![
            SymbolSummary {
                relative_path: "a.py".to_string(),
                summary: "Line 1: class A".to_string(),
            },
            SymbolSummary {
                relative_path: "b.py".to_string(),
                summary: "No symbols detected.".to_string(),
            },
        ];

        let doc = assemble(&summaries, &[], "", "t");
        let a_pos = doc.find("File: a.py").unwrap();
        let b_pos = doc.find("File: b.py").unwrap();
        assert!(a_pos < b_pos);
        assert!(doc.contains(&format!("File: a.py\nLine 1: class A\n{SECTION_RULE}")));
    }

    #[test]
    fn test_file_blocks_wrapped_in_cdata() {
        let records = vec![record("src/a.py", "   1 | x = 1")];
        let doc = assemble(&[], &records, "", "t");

        assert!(doc.contains(
            "    <file path=\"src/a.py\">\n<![CDATA[\n   1 | x = 1\n]]>\n    </file>"
        ));
    }

    #[test]
    fn test_cdata_terminator_in_content_is_escaped() {
        let records = vec![record("odd.txt", "before ]]> after")];
        let doc = assemble(&[], &records, "", "t");

        // The raw terminator must not appear inside the block body
        assert!(doc.contains("before ]]]]><![CDATA[> after"));
    }

    #[test]
    fn test_user_query_verbatim() {
        let doc = assemble(&[], &[], "Fix the <bug> & ship it", "t");
        assert!(doc.contains("<user_query>\n        Fix the <bug> & ship it\n    </user_query>"));
    }

    #[test]
    fn test_file_order_matches_record_order() {
        let records = vec![record("z.py", "   1 | z"), record("a.py", "   1 | a")];
        let doc = assemble(&[], &records, "", "t");

        let z_pos = doc.find("path=\"z.py\"").unwrap();
        let a_pos = doc.find("path=\"a.py\"").unwrap();
        assert!(z_pos < a_pos);
    }
}
