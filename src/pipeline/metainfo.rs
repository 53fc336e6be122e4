//! Metainfo parsing and validation

use super::{LicenseOracle, MetainfoParser, Validator};
use crate::domain::ComponentKind;
use crate::hint::VALIDATOR_TAG_PREFIX;
use crate::result::{ComponentHandle, ComposeResult};

/// Validator tag for outdated metainfo, reported under the compose tag instead
const VALIDATOR_ANCIENT_TAG: &str = "metainfo-ancient";

/// Parse a metainfo document and add the component it describes to `result`.
///
/// Returns `None` if the data was refused. Documents that cannot be parsed or
/// lack an id are reported as general hints; a non-permissive metadata
/// license or an unknown component kind drops the component again.
pub fn parse_metainfo_data(
    result: &mut ComposeResult,
    parser: &dyn MetainfoParser,
    licenses: &dyn LicenseOracle,
    data: &[u8],
    mi_basename: &str,
) -> Option<ComponentHandle> {
    let component = match parser.parse_metainfo(data) {
        Ok(Some(component)) => component,
        Ok(None) => return None,
        Err(e) => {
            result.add_hint(
                None,
                "ancient-metadata",
                &[("fname", mi_basename), ("error", e.to_string().as_str())],
            );
            return None;
        }
    };

    if !component.has_id() {
        result.add_hint(None, "metainfo-no-id", &[("fname", mi_basename)]);
        return None;
    }

    let license = component.metadata_license.clone().unwrap_or_default();
    let kind = component.kind;

    let handle = match result.add_component(component, Some(data)) {
        Ok(handle) => handle,
        Err(e) => {
            tracing::debug!(file = mi_basename, error = %e, "component was not accepted");
            return None;
        }
    };

    if !licenses.is_metadata_license(&license) {
        result.add_hint(
            Some(handle),
            "metainfo-license-invalid",
            &[("license", license.as_str())],
        );
        return None;
    }

    if kind == ComponentKind::Unknown {
        result.add_hint_simple(Some(handle), "metainfo-unknown-type");
        return None;
    }

    Some(handle)
}

/// Validate the metainfo data of a component and record the issues as hints.
///
/// Validator tags are recorded with the `asv-` prefix, except for the
/// validator's outdated-metadata finding which becomes `ancient-metadata`.
pub fn validate_metainfo_data_for_component(
    result: &mut ComposeResult,
    validator: &mut dyn Validator,
    handle: ComponentHandle,
    data: &[u8],
    mi_basename: &str,
    release_data: Option<&[u8]>,
) {
    let Some(cid) = result.component(handle).map(|c| c.id.clone()) else {
        return;
    };

    validator.set_check_urls(false);
    validator.clear_issues();
    validator.clear_release_data();

    if let Some(release_data) = release_data {
        let release_name = format!("{cid}.releases.xml");
        if let Err(e) = validator.add_release_bytes(&release_name, release_data) {
            tracing::warn!(component = %cid, error = %e, "failed to add release metadata");
        }
    }

    validator.validate_bytes(data);

    for (file_name, issues) in validator.issues_per_file() {
        let file_name = file_name.as_deref().unwrap_or(mi_basename);

        for issue in issues {
            if issue.tag == VALIDATOR_ANCIENT_TAG {
                result.add_hint_simple(Some(handle), "ancient-metadata");
                continue;
            }

            let tag = format!("{VALIDATOR_TAG_PREFIX}{}", issue.tag);
            let location = match issue.line {
                Some(line) => format!("{file_name}:{line}"),
                None => file_name.to_string(),
            };
            let hint = issue.hint.as_deref().unwrap_or_default();

            result.add_hint(
                Some(handle),
                &tag,
                &[("location", location.as_str()), ("hint", hint)],
            );
        }
    }
}
