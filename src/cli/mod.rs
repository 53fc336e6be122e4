//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - index: Index command arguments
//! - icon_policy: Icon policy command arguments
//! - hint_tags: Hint tag listing arguments
//! - explain: Explain command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod explain;
pub mod hint_tags;
pub mod icon_policy;
pub mod index;

pub use completions::CompletionsArgs;
pub use explain::ExplainArgs;
pub use hint_tags::HintTagsArgs;
pub use icon_policy::IconPolicyArgs;
pub use index::IndexArgs;

/// ascompose - AppStream compose inspector
///
/// Inspect bundle units, icon policies and compose hint tags.
#[derive(Parser, Debug)]
#[command(
    name = "ascompose",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Inspect the building blocks of AppStream metadata composition",
    long_about = "ascompose indexes bundle directories, normalizes icon caching policies and \
                  explains the hints raised while composing AppStream metadata.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  ascompose index ./bundle                   \x1b[90m# List the files of a bundle\x1b[0m\n   \
                  ascompose icon-policy '64x64=cached'       \x1b[90m# Normalize an icon policy\x1b[0m\n   \
                  ascompose hint-tags --severity error       \x1b[90m# List fatal hint tags\x1b[0m\n   \
                  ascompose explain file-read-error fname=a  \x1b[90m# Render a hint explanation\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Compose configuration file
    #[arg(long, short = 'c', global = true, env = "ASCOMPOSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the files of a bundle directory
    Index(IndexArgs),

    /// Parse and normalize an icon policy
    #[command(name = "icon-policy")]
    IconPolicy(IconPolicyArgs),

    /// List the registered compose hint tags
    #[command(name = "hint-tags")]
    HintTags(HintTagsArgs),

    /// Render the explanation of a hint tag
    Explain(ExplainArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_index() {
        let cli = Cli::try_parse_from(["ascompose", "index", "/srv/bundle", "--json"]).unwrap();
        match cli.command {
            Commands::Index(args) => {
                assert_eq!(args.root, PathBuf::from("/srv/bundle"));
                assert!(args.json);
                assert!(args.relevant.is_empty());
            }
            _ => panic!("Expected Index command"),
        }
    }

    #[test]
    fn test_cli_parsing_index_relevant_paths() {
        let cli = Cli::try_parse_from([
            "ascompose",
            "index",
            "/srv/bundle",
            "--relevant",
            "/usr/share/metainfo",
            "--relevant",
            "/usr/share/applications",
        ])
        .unwrap();
        match cli.command {
            Commands::Index(args) => assert_eq!(args.relevant.len(), 2),
            _ => panic!("Expected Index command"),
        }
    }

    #[test]
    fn test_cli_parsing_icon_policy_without_value() {
        let cli = Cli::try_parse_from(["ascompose", "icon-policy"]).unwrap();
        match cli.command {
            Commands::IconPolicy(args) => assert!(args.policy.is_none()),
            _ => panic!("Expected IconPolicy command"),
        }
    }

    #[test]
    fn test_cli_parsing_explain_vars() {
        let cli = Cli::try_parse_from([
            "ascompose",
            "explain",
            "file-read-error",
            "fname=foo.xml",
            "msg=gone",
        ])
        .unwrap();
        match cli.command {
            Commands::Explain(args) => {
                assert_eq!(args.tag, "file-read-error");
                assert_eq!(
                    args.vars,
                    vec![
                        ("fname".to_string(), "foo.xml".to_string()),
                        ("msg".to_string(), "gone".to_string()),
                    ]
                );
            }
            _ => panic!("Expected Explain command"),
        }
    }

    #[test]
    fn test_cli_parsing_explain_rejects_bad_var() {
        assert!(Cli::try_parse_from(["ascompose", "explain", "file-read-error", "novalue"]).is_err());
    }

    #[test]
    fn test_cli_parsing_global_flags() {
        let cli = Cli::try_parse_from([
            "ascompose",
            "hint-tags",
            "-v",
            "--config",
            "/etc/ascompose.yaml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/ascompose.yaml")));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["ascompose", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }
}
