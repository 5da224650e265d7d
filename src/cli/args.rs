//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "container-get")]
#[command(author, version, about = "Read a value out of a JSON document by key path", long_about = None)]
pub struct Args {
    /// JSON document to read ("-" for stdin)
    pub file: PathBuf,

    /// Key path, one segment per argument
    pub keys: Vec<String>,

    /// Output the value as pretty JSON
    #[arg(long, env = "CONTAINER_GET_JSON")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Whether the document should come from stdin
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}
