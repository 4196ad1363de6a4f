use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Suppress progress lines on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate a pseudocode file to JavaScript
    Translate {
        /// Input pseudocode file
        input: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Reject unbalanced for/endfor structure
        #[arg(long)]
        strict: bool,
        /// Print a per-shape line count to stderr
        #[arg(long)]
        summary: bool,
    },
    /// Render a JSON-lines log of messages posted by a generated program
    Render {
        /// File with one `{"kind":"stdout","text":...}` object per line
        messages: PathBuf,
    },
}
