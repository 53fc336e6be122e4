use clap::Parser;

/// Arguments for the hint-tags command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all hint tags:\n    ascompose hint-tags\n\n\
                  List tags that drop components:\n    ascompose hint-tags --severity error")]
pub struct HintTagsArgs {
    /// Only list tags of this severity
    #[arg(long, short = 's', value_parser = ["error", "warning", "info", "pedantic"])]
    pub severity: Option<String>,
}
