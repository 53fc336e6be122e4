use clap::Parser;
use std::path::PathBuf;

/// Arguments for the index command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all files of a bundle:\n    ascompose index ./bundle\n\n\
                  Only index metadata directories:\n    ascompose index ./bundle --relevant /usr/share/metainfo\n\n\
                  Print the index as JSON:\n    ascompose index ./bundle --json")]
pub struct IndexArgs {
    /// Root directory of the bundle
    pub root: PathBuf,

    /// Only index this subtree (can be given multiple times)
    #[arg(long, value_name = "PATH")]
    pub relevant: Vec<String>,

    /// Print the index as JSON
    #[arg(long)]
    pub json: bool,
}
