//! Explain command implementation

use console::Style;

use crate::cli::ExplainArgs;
use crate::error::Result;
use crate::hint::{Hint, HintTagRegistry};

/// Run explain command
pub fn run(args: ExplainArgs) -> Result<()> {
    let registry = HintTagRegistry::with_defaults();
    let hint = build_hint(&registry, &args)?;

    println!(
        "{} ({})",
        Style::new().bold().yellow().apply_to(hint.tag()),
        hint.severity()
    );
    if let Some(explanation) = hint.format_explanation() {
        println!("{explanation}");
    }
    Ok(())
}

fn build_hint(registry: &HintTagRegistry, args: &ExplainArgs) -> Result<Hint> {
    let mut hint = Hint::new_for_tag(registry, &args.tag)?;
    for (name, value) in &args.vars {
        hint.add_explanation_var(name, value);
    }
    Ok(hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComposeError;

    #[test]
    fn test_build_hint_fills_vars() {
        let registry = HintTagRegistry::with_defaults();
        let args = ExplainArgs {
            tag: "file-read-error".to_string(),
            vars: vec![
                ("fname".to_string(), "foo.xml".to_string()),
                ("msg".to_string(), "gone".to_string()),
            ],
        };
        let hint = build_hint(&registry, &args).unwrap();
        assert_eq!(
            hint.format_explanation().unwrap(),
            "Unable to read data from file <code>foo.xml</code>: gone"
        );
    }

    #[test]
    fn test_build_hint_unknown_tag() {
        let registry = HintTagRegistry::with_defaults();
        let args = ExplainArgs {
            tag: "no-such-tag".to_string(),
            vars: Vec::new(),
        };
        assert!(matches!(
            build_hint(&registry, &args),
            Err(ComposeError::UnknownHintTag { .. })
        ));
    }
}
