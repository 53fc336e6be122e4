use clap::Parser;

/// Arguments for the explain command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a raw explanation template:\n    ascompose explain no-metainfo\n\n\
                  Fill in template variables:\n    ascompose explain file-read-error fname=foo.xml msg='Permission denied'")]
pub struct ExplainArgs {
    /// Hint tag to explain
    pub tag: String,

    /// Template variables as NAME=VALUE
    #[arg(value_name = "NAME=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))
}
