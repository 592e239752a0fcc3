use clap::Parser;
use std::path::PathBuf;

/// A local-first markdown note keeper for the terminal.
#[derive(Parser, Debug)]
#[command(name = "jotmark", version, about)]
pub struct Cli {
    /// Path of the notes file. Defaults to the user data directory;
    /// the JOTMARK_FILE environment variable also overrides it.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}
