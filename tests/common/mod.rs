//! Common test utilities for appstream-compose integration tests
//!
//! Metadata collaborators are replaced by fakes reading a small line-based
//! format, so tests control exactly which components and issues come out.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use appstream_compose::domain::{BundleKind, Component, ComponentKind, Release, ReleasesKind};
use appstream_compose::error::{self, Result};
use appstream_compose::hint::{HintTagRegistry, Severity, ValidatorIssueTag};
use appstream_compose::pipeline::{
    DesktopEntryOutcome, DesktopEntryParser, FileIssues, MetainfoParser, ReleaseFetcher,
    ValidatorIssue, Validator,
};
use appstream_compose::unit::{Unit, UnitInfo, unit_path};
use appstream_compose::{ComposeConfig, Composer};
use tempfile::TempDir;

/// A bundle tree on disk for integration tests
pub struct TestBundle {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the bundle root
    pub path: PathBuf,
}

impl TestBundle {
    /// Create a new, empty bundle tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file below the bundle root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path.trim_start_matches('/'));
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a metainfo document to `usr/share/metainfo/<name>`
    pub fn write_metainfo(&self, name: &str, content: &str) {
        self.write_file(&format!("usr/share/metainfo/{name}"), content);
    }

    /// Write a desktop entry to `usr/share/applications/<name>`
    pub fn write_desktop_entry(&self, name: &str, content: &str) {
        self.write_file(&format!("usr/share/applications/{name}"), content);
    }

    /// Create a directory below the bundle root
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir = self.path.join(path);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Get path to the ascompose binary
    pub fn ascompose_bin() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_ascompose"))
    }
}

/// Non-empty lines as `(line number, key, value)`, skipping comments and group headers
fn key_values(data: &[u8]) -> impl Iterator<Item = (usize, &str, Option<&str>)> {
    std::str::from_utf8(data)
        .unwrap_or_default()
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#') && !line.starts_with('['))
        .map(|(n, line)| match line.split_once('=') {
            Some((key, value)) => (n, key.trim(), Some(value.trim())),
            None => (n, line, None),
        })
}

/// Metainfo parser for documents made of `key=value` lines.
///
/// Known keys: `id`, `kind`, `name`, `license`, `launchable`, `release`,
/// `releases` (`external` switches to external release data) and
/// `releases_url`. A line without `=` is a parse error, and a document with
/// the single line `empty` describes no component.
#[derive(Debug, Default)]
pub struct FakeMetainfoParser;

impl MetainfoParser for FakeMetainfoParser {
    fn parse_metainfo(&self, data: &[u8]) -> Result<Option<Component>> {
        if data.trim_ascii() == b"empty" {
            return Ok(None);
        }

        let mut cpt = Component::default();
        for (line, key, value) in key_values(data) {
            let Some(value) = value else {
                return Err(error::metadata::parse_failed(format!(
                    "line {line}: expected key=value"
                )));
            };
            match key {
                "id" => cpt.id = value.to_string(),
                "kind" => cpt.kind = value.parse().unwrap_or_default(),
                "name" => cpt.name = Some(value.to_string()),
                "license" => cpt.metadata_license = Some(value.to_string()),
                "launchable" => cpt.launchables.push(value.to_string()),
                "release" => cpt.releases.push(Release::new(value)),
                "releases" if value == "external" => cpt.releases_kind = ReleasesKind::External,
                "releases_url" => cpt.releases_url = Some(value.to_string()),
                _ => {}
            }
        }
        Ok(Some(cpt))
    }

    fn load_releases(&self, component: &mut Component, data: &[u8]) -> Result<()> {
        let mut releases = Vec::new();
        for (line, key, value) in key_values(data) {
            match (key, value) {
                ("release", Some(version)) if !version.is_empty() => {
                    releases.push(Release::new(version));
                }
                _ => {
                    return Err(error::metadata::releases_parse_failed(format!(
                        "line {line}: expected release=VERSION"
                    )));
                }
            }
        }
        component.releases = releases;
        Ok(())
    }
}

/// Desktop-entry parser understanding `Name`, `Categories`, `Hidden` and `NoDisplay`.
///
/// `Hidden=true` reports a `desktop-entry-hidden-set` issue, any other
/// unknown key an `unknown-key` issue. `NoDisplay=true` rejects the entry
/// unless `ignore_nodisplay` is set. Data without a `[Desktop Entry]` group
/// is a parse error.
#[derive(Debug, Default)]
pub struct FakeDesktopEntryParser;

impl DesktopEntryParser for FakeDesktopEntryParser {
    fn parse_desktop_entry(
        &self,
        component: &mut Component,
        data: &[u8],
        ignore_nodisplay: bool,
    ) -> Result<DesktopEntryOutcome> {
        let text = std::str::from_utf8(data).unwrap_or_default();
        if !text.contains("[Desktop Entry]") {
            return Err(error::metadata::desktop_entry_failed(
                "no [Desktop Entry] group",
            ));
        }

        let mut outcome = DesktopEntryOutcome {
            accepted: true,
            issues: Vec::new(),
        };
        for (_, key, value) in key_values(data) {
            let value = value.unwrap_or_default();
            match key {
                "Name" => component.name = Some(value.to_string()),
                "Categories" => component.categories.extend(
                    value
                        .split(';')
                        .filter(|c| !c.is_empty())
                        .map(str::to_string),
                ),
                "Hidden" if value == "true" => outcome.issues.push(
                    ValidatorIssue::new("desktop-entry-hidden-set", Severity::Warning)
                        .with_hint("Hidden=true"),
                ),
                "NoDisplay" if value == "true" && !ignore_nodisplay => {
                    outcome.accepted = false;
                }
                "Type" | "Exec" | "Hidden" | "NoDisplay" => {}
                other => outcome.issues.push(
                    ValidatorIssue::new("unknown-key", Severity::Info).with_hint(other),
                ),
            }
        }

        if component.kind == ComponentKind::Unknown {
            component.kind = ComponentKind::DesktopApp;
        }
        Ok(outcome)
    }
}

/// What a [`FakeValidator`] saw, shared with the test after the validator moved away
#[derive(Debug, Default)]
pub struct ValidatorLog {
    pub validated: Vec<Vec<u8>>,
    pub release_files: Vec<String>,
    pub check_urls: Option<bool>,
}

/// Validator returning a fixed set of issues for every document
#[derive(Debug, Default)]
pub struct FakeValidator {
    pub issues: Vec<FileIssues>,
    pub log: Rc<RefCell<ValidatorLog>>,
    pending: Vec<FileIssues>,
}

impl FakeValidator {
    pub fn new(issues: Vec<FileIssues>) -> Self {
        Self {
            issues,
            ..Self::default()
        }
    }

    /// A validator reporting nothing
    pub fn silent() -> Self {
        Self::default()
    }
}

impl Validator for FakeValidator {
    fn set_check_urls(&mut self, check: bool) {
        self.log.borrow_mut().check_urls = Some(check);
    }

    fn clear_issues(&mut self) {
        self.pending.clear();
    }

    fn clear_release_data(&mut self) {
        self.log.borrow_mut().release_files.clear();
    }

    fn add_release_bytes(&mut self, file_name: &str, _data: &[u8]) -> Result<()> {
        self.log.borrow_mut().release_files.push(file_name.to_string());
        Ok(())
    }

    fn validate_bytes(&mut self, data: &[u8]) {
        self.log.borrow_mut().validated.push(data.to_vec());
        self.pending = self.issues.clone();
    }

    fn issues_per_file(&self) -> Vec<FileIssues> {
        self.pending.clone()
    }

    fn issue_tags(&self) -> Vec<ValidatorIssueTag> {
        vec![
            ValidatorIssueTag::new(
                "cid-has-number-prefix",
                Severity::Info,
                "The component ID segment starts with a number.",
            ),
            ValidatorIssueTag::new(
                "metainfo-ancient",
                Severity::Warning,
                "The metainfo file uses an ancient version of the format.",
            ),
            ValidatorIssueTag::new(
                "url-not-secure",
                Severity::Error,
                "The URL is not using a secure connection.",
            ),
            ValidatorIssueTag::new(
                "unknown-key",
                Severity::Info,
                "The desktop entry contains an unknown key.",
            ),
        ]
    }
}

/// Release fetcher serving canned responses by URL
#[derive(Debug, Default)]
pub struct FakeReleaseFetcher {
    pub responses: HashMap<String, Vec<u8>>,
}

impl FakeReleaseFetcher {
    pub fn with_response(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.as_bytes().to_vec());
        self
    }
}

impl ReleaseFetcher for FakeReleaseFetcher {
    fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| error::metadata::download_failed(url, "404 Not Found"))
    }
}

/// Registry with the compose tags and every tag [`FakeValidator`] can emit
pub fn test_registry() -> Arc<HintTagRegistry> {
    let registry = HintTagRegistry::builder()
        .with_validator_tags(FakeValidator::silent().issue_tags())
        .build();
    Arc::new(registry)
}

/// Composer wired to the fake collaborators
pub fn test_composer(config: ComposeConfig, validator: FakeValidator) -> Composer {
    Composer::new(
        config,
        Box::new(FakeMetainfoParser),
        Box::new(FakeDesktopEntryParser),
        Box::new(validator),
    )
}

/// Minimal valid metainfo document for a desktop application
pub fn desktop_app_metainfo(cid: &str) -> String {
    format!("id={cid}\nkind=desktop-application\nname={cid}\nlicense=CC0-1.0\n")
}

/// Unit serving files from memory
#[derive(Debug, Default)]
pub struct MemoryUnit {
    info: UnitInfo,
    files: BTreeMap<String, Vec<u8>>,
    pub closed: bool,
}

impl MemoryUnit {
    pub fn new(kind: BundleKind, bundle_id: &str) -> Self {
        Self {
            info: UnitInfo::new(kind, bundle_id),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files
            .insert(unit_path(path), content.as_bytes().to_vec());
        self
    }
}

impl Unit for MemoryUnit {
    fn info(&self) -> &UnitInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut UnitInfo {
        &mut self.info
    }

    fn open(&mut self) -> Result<()> {
        let contents: BTreeSet<String> = self.files.keys().cloned().collect();
        self.info.set_contents(contents);
        self.closed = false;
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn dir_exists(&self, path: &str) -> bool {
        let prefix = format!("{}/", unit_path(path).trim_end_matches('/'));
        self.files.keys().any(|f| f.starts_with(&prefix))
    }

    fn read_data(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .get(&unit_path(path))
            .cloned()
            .ok_or_else(|| error::unit::read_failed(unit_path(path), "No such file or directory"))
    }
}
