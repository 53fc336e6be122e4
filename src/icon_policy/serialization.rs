//! String form of the icon policy: `WIDTHxHEIGHT[@SCALE]=STATE,...`

use super::{IconPolicyEntry, IconState};

#[derive(Debug, Default)]
pub(super) struct ParsedEntries {
    pub entries: Vec<IconPolicyEntry>,
    pub errors: Vec<String>,
}

pub(super) fn parse_entries(s: &str) -> ParsedEntries {
    let mut parsed = ParsedEntries::default();

    for raw in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match parse_entry(raw) {
            Ok(entry) => parsed.entries.push(entry),
            Err(reason) => {
                tracing::debug!(entry = raw, %reason, "skipping malformed icon policy entry");
                parsed.errors.push(format!("'{raw}': {reason}"));
            }
        }
    }

    parsed
}

fn parse_entry(raw: &str) -> Result<IconPolicyEntry, String> {
    let (dimensions, state) = raw
        .split_once('=')
        .ok_or_else(|| "expected SIZE=STATE".to_string())?;
    let state: IconState = state.trim().parse().map_err(|e| format!("{e}"))?;

    let (geometry, scale) = match dimensions.trim().split_once('@') {
        Some((geometry, scale)) => (geometry, parse_number(scale, "scale")?),
        None => (dimensions.trim(), 1),
    };
    let (width, height) = geometry
        .split_once('x')
        .ok_or_else(|| "expected WIDTHxHEIGHT".to_string())?;
    let width = parse_number(width, "width")?;
    let height = parse_number(height, "height")?;

    if width != height {
        return Err(format!("icons must be square, got {width}x{height}"));
    }

    Ok(IconPolicyEntry {
        size: width,
        scale,
        state,
    })
}

fn parse_number(value: &str, what: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(0) => Err(format!("{what} must not be zero")),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid {what} '{value}'")),
    }
}

pub(super) fn format_entries(entries: &[IconPolicyEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            if e.scale > 1 {
                format!("{0}x{0}@{1}={2}", e.size, e.scale, e.state)
            } else {
                format!("{0}x{0}={1}", e.size, e.state)
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
