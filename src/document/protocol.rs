//! Static protocol preamble embedded in every bundle.

/// Instructional text telling the model how to read the bundle and how
/// to format its reply. Static, never data-dependent.
pub const PROTOCOL_PREAMBLE: &str = "
Communication Rules:
1. Read <symbol_map> first for an overview of the project.
2. Analyze <project_files>; every line carries its line number.
3. Output strictly in the following format:
   @Filename
   [Context] (Simple explanation why)
   [Action] (Refactor/Add/Fix)
   [Code] (The code snippet)
";
