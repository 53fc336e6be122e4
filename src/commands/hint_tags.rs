//! Hint tag listing command

use console::Style;

use crate::cli::HintTagsArgs;
use crate::error::Result;
use crate::hint::{HintTag, HintTagRegistry, Severity};

/// Run hint-tags command
pub fn run(args: HintTagsArgs) -> Result<()> {
    let registry = HintTagRegistry::with_defaults();
    let filter: Option<Severity> = args.severity.as_deref().and_then(|s| s.parse().ok());

    let tags = select_tags(&registry, filter);
    for tag in &tags {
        println!(
            "{:<36} {}",
            Style::new().bold().apply_to(&tag.tag),
            severity_style(tag.severity).apply_to(tag.severity)
        );
    }
    println!();
    println!("{} tags", tags.len());

    Ok(())
}

fn select_tags(registry: &HintTagRegistry, filter: Option<Severity>) -> Vec<&HintTag> {
    registry
        .tags()
        .filter(|t| filter.is_none_or(|s| t.severity == s))
        .collect()
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Error => Style::new().red(),
        Severity::Warning => Style::new().yellow(),
        Severity::Info => Style::new().cyan(),
        Severity::Pedantic | Severity::Unknown => Style::new().dim(),
    }
}
