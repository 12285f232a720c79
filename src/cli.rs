use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ctx-bridge",
    version,
    about = "Packages a source tree into an annotated XML context bundle for LLM chat sessions",
    long_about = "ctx-bridge scans a project tree, renders each file with line numbers plus a \
symbol map, and assembles everything into a single XML-like document you can paste into an \
LLM chat. Pipe the output into your clipboard tool of choice (pbcopy, xclip, wl-copy)."
)]
pub struct Cli {
    /// Project root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Root-relative file to include, repeatable; restricts the scan to
    /// exactly these files and bypasses the size gate for them
    #[arg(short = 'f', long = "focus", value_name = "REL_PATH")]
    pub focus: Vec<String>,

    /// Free-text instruction appended to the bundle
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Write the bundle to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Size gate in bytes for non-focused files
    #[arg(long, value_name = "BYTES", default_value_t = crate::config::DEFAULT_MAX_FILE_SIZE)]
    pub max_file_size: u64,

    /// Extra ignore pattern on top of the defaults, repeatable
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
