//! Ingestion glue between metadata collaborators and [`ComposeResult`]
//!
//! Parsing, validating and fetching metadata is done by external
//! collaborators behind the traits in this module. The functions in the
//! submodules drive them for one file at a time and turn every problem they
//! report into a hint on the result. None of them abort: a broken file only
//! affects the components it describes.
//!
//! [`ComposeResult`]: crate::result::ComposeResult

pub mod desktop;
pub mod license;
pub mod metainfo;
pub mod releases;

pub use desktop::parse_desktop_entry_data;
pub use license::{LicenseOracle, PermissiveLicenses};
pub use metainfo::{parse_metainfo_data, validate_metainfo_data_for_component};
pub use releases::{ReleaseOptions, process_metainfo_releases};

use crate::domain::Component;
use crate::error::Result;
use crate::hint::{Severity, ValidatorIssueTag};

/// A finding reported by the validator or the desktop-entry parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorIssue {
    pub tag: String,
    pub severity: Severity,
    pub hint: Option<String>,
    pub line: Option<u32>,
}

impl ValidatorIssue {
    pub fn new(tag: impl Into<String>, severity: Severity) -> Self {
        Self {
            tag: tag.into(),
            severity,
            hint: None,
            line: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

/// Issues found in one file. A `None` file name means the validated document itself.
pub type FileIssues = (Option<String>, Vec<ValidatorIssue>);

/// Decodes metainfo documents into components
pub trait MetainfoParser {
    /// Parse one metainfo document.
    ///
    /// `Ok(None)` means the document was readable but described no component.
    fn parse_metainfo(&self, data: &[u8]) -> Result<Option<Component>>;

    /// Replace the releases of `component` with the ones in an external release file
    fn load_releases(&self, component: &mut Component, data: &[u8]) -> Result<()>;
}

/// Result of reading a desktop-entry file into a component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopEntryOutcome {
    /// `false` if the entry asked not to be shown and was ignored
    pub accepted: bool,
    pub issues: Vec<ValidatorIssue>,
}

/// Reads XDG desktop-entry files into components
pub trait DesktopEntryParser {
    /// Read `data` into `component`, creating or amending its fields.
    ///
    /// With `ignore_nodisplay` set, fields that hide the entry (`NoDisplay`,
    /// `Hidden`, ...) do not cause it to be rejected.
    fn parse_desktop_entry(
        &self,
        component: &mut Component,
        data: &[u8],
        ignore_nodisplay: bool,
    ) -> Result<DesktopEntryOutcome>;
}

/// Metadata validator
pub trait Validator {
    fn set_check_urls(&mut self, check: bool);

    fn clear_issues(&mut self);

    fn clear_release_data(&mut self);

    /// Make an external release file available to the next validation run
    fn add_release_bytes(&mut self, file_name: &str, data: &[u8]) -> Result<()>;

    fn validate_bytes(&mut self, data: &[u8]);

    /// Issues of the last validation run, grouped by file
    fn issues_per_file(&self) -> Vec<FileIssues>;

    /// Every issue tag this validator can emit
    fn issue_tags(&self) -> Vec<ValidatorIssueTag>;
}

/// Downloads release metadata from the network
pub trait ReleaseFetcher {
    fn download(&self, url: &str) -> Result<Vec<u8>>;
}
