//! Icon policy command implementation

use std::path::Path;

use console::Style;

use crate::cli::IconPolicyArgs;
use crate::config::ComposeConfig;
use crate::error::Result;
use crate::icon_policy::IconPolicy;

/// Run icon-policy command
///
/// Prints the normalized policy. A non-compliant policy is still printed in
/// its healed form before the error is returned.
pub fn run(config: Option<&Path>, args: IconPolicyArgs) -> Result<()> {
    let mut policy = IconPolicy::default();

    let loaded = match (&args.policy, config) {
        (Some(text), _) => policy.load_from_str(text),
        (None, Some(path)) => {
            policy = ComposeConfig::from_file(path)?.icon_policy()?;
            Ok(())
        }
        (None, None) => Ok(()),
    };

    print_policy(&policy);
    loaded
}

fn print_policy(policy: &IconPolicy) {
    for entry in policy.iter() {
        let key = if entry.scale > 1 {
            format!("{0}x{0}@{1}", entry.size, entry.scale)
        } else {
            format!("{0}x{0}", entry.size)
        };
        let state = if entry.state.is_cached() {
            Style::new().green().apply_to(entry.state)
        } else {
            Style::new().dim().apply_to(entry.state)
        };
        println!("  {key:<12} {state}");
    }
    println!();
    println!("{policy}");
}
