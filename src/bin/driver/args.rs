use clap::Parser;
use std::path::PathBuf;

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Print the token stream and stop
    #[arg(long)]
    pub lex: bool,

    /// Check the syntax, print the tree and stop
    #[arg(long)]
    pub parse: bool,

    /// Keep the internal LABELn names instead of renumbering them
    #[arg(long)]
    pub raw_labels: bool,

    /// Write the pseudo-assembly here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    pub input: PathBuf,
}
