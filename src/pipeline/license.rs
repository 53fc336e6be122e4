//! Metadata license checks
//!
//! Metadata may only be merged into a catalog if it is available under a
//! permissive license. The check works on simple SPDX expressions: license
//! ids joined by `AND` and `OR`, where `AND` binds tighter.

/// Decides whether a license expression is acceptable for metadata
pub trait LicenseOracle {
    fn is_metadata_license(&self, expression: &str) -> bool;
}

/// Licenses accepted for metadata by default
pub const PERMISSIVE_METADATA_LICENSES: &[&str] = &[
    "FSFAP",
    "MIT",
    "0BSD",
    "CC0-1.0",
    "CC-BY-3.0",
    "CC-BY-4.0",
    "CC-BY-SA-3.0",
    "CC-BY-SA-4.0",
    "GFDL-1.1",
    "GFDL-1.2",
    "GFDL-1.3",
    "BSL-1.0",
    "FTL",
    "FSFUL",
];

/// Accepts expressions built only from [`PERMISSIVE_METADATA_LICENSES`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveLicenses;

impl LicenseOracle for PermissiveLicenses {
    fn is_metadata_license(&self, expression: &str) -> bool {
        if expression.contains(['(', ')']) {
            return false;
        }

        let tokens: Vec<&str> = expression.split_whitespace().collect();
        if tokens.is_empty() {
            return false;
        }

        let mut any_group = false;
        for group in tokens.split(|t| t.eq_ignore_ascii_case("OR")) {
            match evaluate_and_group(group) {
                Some(ok) => any_group |= ok,
                None => return false,
            }
        }
        any_group
    }
}

/// `Some(true)` if every license in the group is permissive, `None` if malformed
fn evaluate_and_group(group: &[&str]) -> Option<bool> {
    if group.is_empty() {
        return None;
    }

    let mut all = true;
    for (i, token) in group.iter().enumerate() {
        let expect_license = i % 2 == 0;
        if expect_license {
            if is_operator(token) {
                return None;
            }
            all &= is_permissive(token);
        } else if !token.eq_ignore_ascii_case("AND") {
            return None;
        }
    }

    // a trailing AND leaves the last operand missing
    if group.len() % 2 == 0 {
        return None;
    }
    Some(all)
}

fn is_operator(token: &str) -> bool {
    ["AND", "OR", "WITH"]
        .iter()
        .any(|op| token.eq_ignore_ascii_case(op))
}

fn is_permissive(license: &str) -> bool {
    let license = license.strip_suffix('+').unwrap_or(license);
    PERMISSIVE_METADATA_LICENSES.contains(&license)
}
