//! Desktop-entry parsing

use std::mem;

use super::{DesktopEntryOutcome, DesktopEntryParser};
use crate::domain::Component;
use crate::error::Result;
use crate::hint::VALIDATOR_TAG_PREFIX;
use crate::result::{ComponentHandle, ComposeResult};

/// Desktop-entry issue tags recorded without the validator prefix
const UNPREFIXED_ISSUE_TAGS: &[&str] = &["desktop-entry-hidden-set", "desktop-entry-empty-onlyshowin"];

/// Categories of entries that are not synthesized into components on their own
const STANDALONE_IGNORED_CATEGORIES: &[&str] = &["Settings", "DesktopSettings", "ConsoleOnly"];

const EMPTY_DESKTOP_FILE_MSG: &str = "Desktop file was empty or nonexistent. \
     Please ensure that it isn't a symbolic link to contents of a different package.";

/// Read a desktop-entry file into a new component or into `existing`.
///
/// New components are added to `result`; an existing one has the data
/// chained into its GCID. Settings and console-only entries are dropped
/// without a hint when no existing component is given and `ignore_nodisplay`
/// is not set. Returns the component the data went into, or `None` if it was
/// refused.
pub fn parse_desktop_entry_data(
    result: &mut ComposeResult,
    parser: &dyn DesktopEntryParser,
    existing: Option<ComponentHandle>,
    data: &[u8],
    de_basename: &str,
    ignore_nodisplay: bool,
) -> Option<ComponentHandle> {
    if data.is_empty() {
        result.add_hint_by_cid(
            de_basename,
            "desktop-file-error",
            &[("msg", EMPTY_DESKTOP_FILE_MSG)],
        );
        return None;
    }

    let (handle, outcome) = match existing {
        Some(handle) => {
            let outcome = amend_component(result, parser, handle, data, de_basename, ignore_nodisplay)?;
            let outcome = accepted_or_hint(result, de_basename, outcome)?;
            if let Some(cpt) = result.component_mut(handle) {
                cpt.priority = 0;
            }
            result.update_gcid(handle, Some(data));
            (handle, outcome)
        }
        None => {
            let mut cpt = Component::new(de_basename);
            let outcome = parser.parse_desktop_entry(&mut cpt, data, ignore_nodisplay);
            let outcome = accepted_or_hint(result, de_basename, outcome)?;

            if !ignore_nodisplay
                && STANDALONE_IGNORED_CATEGORIES
                    .iter()
                    .any(|c| cpt.has_category(c))
            {
                tracing::debug!(file = de_basename, "ignoring settings or console-only entry");
                return None;
            }

            cpt.priority = 0;
            let handle = match result.add_component(cpt, Some(data)) {
                Ok(handle) => handle,
                Err(e) => {
                    tracing::debug!(file = de_basename, error = %e, "desktop entry was not accepted");
                    return None;
                }
            };
            (handle, outcome)
        }
    };

    for issue in outcome.issues {
        let tag = if UNPREFIXED_ISSUE_TAGS.contains(&issue.tag.as_str()) {
            issue.tag
        } else {
            format!("{VALIDATOR_TAG_PREFIX}{}", issue.tag)
        };
        let hint = issue.hint.as_deref().unwrap_or_default();
        result.add_hint(
            Some(handle),
            &tag,
            &[("location", de_basename), ("hint", hint)],
        );
    }

    Some(handle)
}

/// Parse into an existing component, keeping its id
fn amend_component(
    result: &mut ComposeResult,
    parser: &dyn DesktopEntryParser,
    handle: ComponentHandle,
    data: &[u8],
    de_basename: &str,
    ignore_nodisplay: bool,
) -> Option<Result<DesktopEntryOutcome>> {
    let cpt = result.component_mut(handle)?;
    let previous_id = mem::replace(&mut cpt.id, de_basename.to_string());
    let outcome = parser.parse_desktop_entry(cpt, data, ignore_nodisplay);
    cpt.id = previous_id;
    Some(outcome)
}

/// Turn a parser error into a hint, and drop entries the parser refused
fn accepted_or_hint(
    result: &mut ComposeResult,
    de_basename: &str,
    outcome: Result<DesktopEntryOutcome>,
) -> Option<DesktopEntryOutcome> {
    match outcome {
        Ok(outcome) if outcome.accepted => Some(outcome),
        Ok(_) => None,
        Err(e) => {
            result.add_hint_by_cid(
                de_basename,
                "desktop-file-error",
                &[("msg", e.to_string().as_str())],
            );
            None
        }
    }
}
