//! Index command implementation
//!
//! Opens a bundle directory as a unit and prints the files it contains.

use console::Style;
use serde::Serialize;

use crate::cli::IndexArgs;
use crate::error::Result;
use crate::unit::{DirectoryUnit, Unit};

#[derive(Debug, Serialize)]
struct IndexReport<'a> {
    root: String,
    bundle_id_safe: &'a str,
    files: Vec<&'a str>,
}

/// Run index command
pub fn run(args: IndexArgs) -> Result<()> {
    let mut unit = DirectoryUnit::new(&args.root);
    for path in &args.relevant {
        unit.add_relevant_path(path);
    }
    unit.open()?;

    let output = if args.json {
        render_json(&unit)?
    } else {
        render_text(&unit)
    };
    unit.close();

    print!("{output}");
    Ok(())
}

fn render_json(unit: &DirectoryUnit) -> Result<String> {
    let report = IndexReport {
        root: unit.root().display().to_string(),
        bundle_id_safe: unit.bundle_id_safe(),
        files: unit.contents().iter().map(String::as_str).collect(),
    };
    let json = serde_json::to_string_pretty(&report).map_err(|e| {
        crate::error::ComposeError::IoError {
            message: format!("Failed to serialize index: {e}"),
        }
    })?;
    Ok(format!("{json}\n"))
}

fn render_text(unit: &DirectoryUnit) -> String {
    let mut out = format!(
        "{} ({} files)\n",
        Style::new().bold().yellow().apply_to(unit.root().display()),
        unit.contents().len()
    );
    for file in unit.contents() {
        out.push_str(&format!("  {file}\n"));
    }
    out
}
