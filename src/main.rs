//! ascompose - AppStream compose inspector
//!
//! Command line front end for indexing bundle units, checking icon policies
//! and looking up compose hint tags.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use appstream_compose::cli::{Cli, Commands};
use appstream_compose::commands;

/// Install the stderr log subscriber. `RUST_LOG` applies unless `-v` is given.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Index(args) => commands::index::run(args),
        Commands::IconPolicy(args) => commands::icon_policy::run(cli.config.as_deref(), args),
        Commands::HintTags(args) => commands::hint_tags::run(args),
        Commands::Explain(args) => commands::explain::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
