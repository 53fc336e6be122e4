//! Composing units into results
//!
//! [`Composer`] drives the ingestion pipeline over every metadata file of a
//! unit: metainfo files first, then the desktop-entry files they launch, then
//! desktop-entry files without metainfo. GCIDs are always fed in that order.

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::ComposeConfig;
use crate::error::Result;
use crate::hint::HintTagRegistry;
use crate::pipeline::{
    self, DesktopEntryParser, LicenseOracle, MetainfoParser, PermissiveLicenses, ReleaseFetcher,
    Validator,
};
use crate::result::{ComponentHandle, ComposeResult};
use crate::unit::Unit;

/// A metainfo file whose component was accepted
struct AcceptedMetainfo {
    handle: ComponentHandle,
    filename: String,
    data: Vec<u8>,
}

/// Composes units with a fixed set of metadata collaborators
pub struct Composer {
    config: ComposeConfig,
    registry: Arc<HintTagRegistry>,
    metainfo_parser: Box<dyn MetainfoParser>,
    desktop_parser: Box<dyn DesktopEntryParser>,
    validator: Box<dyn Validator>,
    licenses: Box<dyn LicenseOracle>,
    fetcher: Option<Box<dyn ReleaseFetcher>>,
}

impl Composer {
    /// Create a composer. The hint registry holds the compose tags and every
    /// tag the validator can emit.
    pub fn new(
        config: ComposeConfig,
        metainfo_parser: Box<dyn MetainfoParser>,
        desktop_parser: Box<dyn DesktopEntryParser>,
        validator: Box<dyn Validator>,
    ) -> Self {
        let registry = HintTagRegistry::builder()
            .with_validator_tags(validator.issue_tags())
            .build();

        Self {
            config,
            registry: Arc::new(registry),
            metainfo_parser,
            desktop_parser,
            validator,
            licenses: Box::new(PermissiveLicenses),
            fetcher: None,
        }
    }

    pub fn with_license_oracle(mut self, licenses: Box<dyn LicenseOracle>) -> Self {
        self.licenses = licenses;
        self
    }

    pub fn with_release_fetcher(mut self, fetcher: Box<dyn ReleaseFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<HintTagRegistry> {
        &self.registry
    }

    /// Compose all metadata found in `unit`.
    ///
    /// Only failing to open the unit is an error. Every problem with an
    /// individual file ends up as a hint in the returned result.
    pub fn compose_unit(&mut self, unit: &mut dyn Unit) -> Result<ComposeResult> {
        unit.open()?;

        let mut result = ComposeResult::for_bundle(
            Arc::clone(&self.registry),
            unit.bundle_kind(),
            unit.bundle_id(),
        );
        result.set_origin(self.config.origin.as_deref());

        let accepted = self.process_metainfo_files(&mut result, unit);
        let mut seen_desktop_files = HashSet::new();
        for mi in &accepted {
            self.process_accepted_metainfo(&mut result, unit, mi, &mut seen_desktop_files);
        }
        self.process_standalone_desktop_files(&mut result, unit, &seen_desktop_files);

        if self.config.has_component_filter() && result.components_count() == 0 {
            result.add_hint_simple(None, "filters-but-no-output");
        }

        tracing::debug!(
            unit = unit.bundle_id(),
            components = result.components_count(),
            hints = result.hints_count(),
            "composed unit"
        );
        unit.close();
        Ok(result)
    }

    fn metainfo_dir(&self) -> String {
        format!("{}/share/metainfo/", self.config.prefix_path())
    }

    fn legacy_metainfo_dir(&self) -> String {
        format!("{}/share/appdata/", self.config.prefix_path())
    }

    fn applications_dir(&self) -> String {
        format!("{}/share/applications/", self.config.prefix_path())
    }

    fn process_metainfo_files(
        &self,
        result: &mut ComposeResult,
        unit: &dyn Unit,
    ) -> Vec<AcceptedMetainfo> {
        let metainfo_dir = self.metainfo_dir();
        let mut files = files_in(unit, &metainfo_dir, ".xml");

        // legacy files only count if there is no current file of the same name
        for legacy in files_in(unit, &self.legacy_metainfo_dir(), ".xml") {
            let current = format!("{metainfo_dir}{}", basename(&legacy));
            if !unit.contents().contains(&current) {
                files.push(legacy);
            }
        }

        let mut accepted = Vec::new();
        for filename in files {
            let data = match unit.read_data(&filename) {
                Ok(data) => data,
                Err(e) => {
                    result.add_hint(
                        None,
                        "file-read-error",
                        &[("fname", filename.as_str()), ("msg", e.to_string().as_str())],
                    );
                    continue;
                }
            };

            let Some(handle) = pipeline::parse_metainfo_data(
                result,
                self.metainfo_parser.as_ref(),
                self.licenses.as_ref(),
                &data,
                basename(&filename),
            ) else {
                continue;
            };

            if !self.keep_filtered(result, handle) {
                continue;
            }

            accepted.push(AcceptedMetainfo {
                handle,
                filename,
                data,
            });
        }
        accepted
    }

    fn process_accepted_metainfo(
        &mut self,
        result: &mut ComposeResult,
        unit: &dyn Unit,
        mi: &AcceptedMetainfo,
        seen_desktop_files: &mut HashSet<String>,
    ) {
        if result.is_component_ignored(mi.handle) {
            return;
        }

        let release_data = pipeline::process_metainfo_releases(
            result,
            unit,
            self.metainfo_parser.as_ref(),
            self.fetcher.as_deref(),
            mi.handle,
            &mi.filename,
            self.config.release_options(),
        );

        if self.config.validate {
            pipeline::validate_metainfo_data_for_component(
                result,
                self.validator.as_mut(),
                mi.handle,
                &mi.data,
                basename(&mi.filename),
                release_data.as_deref(),
            );
        }

        let launchables = result
            .component(mi.handle)
            .map(|c| c.launchables.clone())
            .unwrap_or_default();
        let applications_dir = self.applications_dir();

        for desktop_id in launchables {
            let path = format!("{applications_dir}{desktop_id}");
            if !unit.file_exists(&path) {
                result.add_hint(
                    Some(mi.handle),
                    "missing-launchable-desktop-file",
                    &[("desktop_id", desktop_id.as_str())],
                );
                continue;
            }
            seen_desktop_files.insert(path.clone());

            let Some(data) = read_or_hint(result, unit, &path) else {
                continue;
            };
            pipeline::parse_desktop_entry_data(
                result,
                self.desktop_parser.as_ref(),
                Some(mi.handle),
                &data,
                &desktop_id,
                true,
            );
        }

        if let Some(release_data) = release_data {
            result.update_gcid(mi.handle, Some(&release_data));
        }
    }

    fn process_standalone_desktop_files(
        &self,
        result: &mut ComposeResult,
        unit: &dyn Unit,
        seen_desktop_files: &HashSet<String>,
    ) {
        for path in files_in(unit, &self.applications_dir(), ".desktop") {
            if seen_desktop_files.contains(&path) {
                continue;
            }
            let de_basename = basename(&path);
            if result.handle_for_id(de_basename).is_some() {
                continue;
            }

            let Some(data) = read_or_hint(result, unit, &path) else {
                continue;
            };
            let Some(handle) = pipeline::parse_desktop_entry_data(
                result,
                self.desktop_parser.as_ref(),
                None,
                &data,
                de_basename,
                false,
            ) else {
                continue;
            };

            if self.keep_filtered(result, handle) {
                result.add_hint_simple(Some(handle), "no-metainfo");
            }
        }
    }

    /// Drop the component unless the id filter allows it
    fn keep_filtered(&self, result: &mut ComposeResult, handle: ComponentHandle) -> bool {
        let Some(cid) = result.component(handle).map(|c| c.id.clone()) else {
            return false;
        };
        if self.config.allows_component(&cid) {
            return true;
        }

        tracing::debug!(component = %cid, "component is not in the allowed set");
        result.remove_component(handle);
        result.remove_hints_for_id(&cid);
        false
    }
}

fn read_or_hint(result: &mut ComposeResult, unit: &dyn Unit, path: &str) -> Option<Vec<u8>> {
    match unit.read_data(path) {
        Ok(data) => Some(data),
        Err(e) => {
            result.add_hint(
                None,
                "file-read-error",
                &[("fname", path), ("msg", e.to_string().as_str())],
            );
            None
        }
    }
}

/// Direct children of `dir` ending in `suffix`, sorted
fn files_in(unit: &dyn Unit, dir: &str, suffix: &str) -> Vec<String> {
    unit.contents()
        .iter()
        .filter(|path| {
            path.strip_prefix(dir)
                .is_some_and(|name| !name.contains('/') && name.ends_with(suffix))
        })
        .cloned()
        .collect()
}

fn basename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}
