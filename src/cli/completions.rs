use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ascompose completions bash > ~/.bash_completion.d/ascompose\n\n\
                  Generate zsh completions:\n    ascompose completions zsh > ~/.zfunc/_ascompose\n\n\
                  Generate fish completions:\n    ascompose completions fish > ~/.config/fish/completions/ascompose.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
