use clap::Parser;

/// Arguments for the icon-policy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the configured (or default) policy:\n    ascompose icon-policy\n\n\
                  Normalize a policy string:\n    ascompose icon-policy '48x48=cached,128x128@2=cached-remote'")]
pub struct IconPolicyArgs {
    /// Policy in WIDTHxHEIGHT[@SCALE]=STATE,... form
    pub policy: Option<String>,
}
