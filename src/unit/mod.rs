//! Units: bundles with files in them
//!
//! A [`Unit`] gives the compose core read access to the files of one bundle,
//! independent of how the bundle is stored. Paths handed to and returned by a
//! unit are relative to the bundle root and start with `/`, mirroring the
//! installed layout (`/usr/share/metainfo/foo.xml`).

pub mod directory;

use std::collections::BTreeSet;

pub use directory::DirectoryUnit;

use crate::domain::BundleKind;
use crate::error::Result;

/// Bookkeeping shared by every unit implementation
#[derive(Debug, Clone, Default)]
pub struct UnitInfo {
    bundle_kind: BundleKind,
    bundle_id: String,
    bundle_id_safe: String,
    contents: BTreeSet<String>,
    relevant_paths: Vec<String>,
}

impl UnitInfo {
    pub fn new(bundle_kind: BundleKind, bundle_id: &str) -> Self {
        let mut info = Self {
            bundle_kind,
            ..Self::default()
        };
        info.set_bundle_id(bundle_id);
        info
    }

    pub fn bundle_kind(&self) -> BundleKind {
        self.bundle_kind
    }

    pub fn set_bundle_kind(&mut self, kind: BundleKind) {
        self.bundle_kind = kind;
    }

    pub fn bundle_id(&self) -> &str {
        &self.bundle_id
    }

    /// Bundle id normalized for use in file names
    pub fn bundle_id_safe(&self) -> &str {
        &self.bundle_id_safe
    }

    pub fn set_bundle_id(&mut self, id: &str) {
        self.bundle_id = id.to_string();
        self.bundle_id_safe = safe_bundle_id(id);
    }

    pub fn contents(&self) -> &BTreeSet<String> {
        &self.contents
    }

    pub fn set_contents(&mut self, contents: BTreeSet<String>) {
        self.contents = contents;
    }

    pub fn relevant_paths(&self) -> &[String] {
        &self.relevant_paths
    }

    /// Restrict indexing to `path`; duplicates are ignored
    pub fn add_relevant_path(&mut self, path: &str) {
        if !self.relevant_paths.iter().any(|p| p == path) {
            self.relevant_paths.push(path.to_string());
        }
    }
}

/// Access to the files of one bundle
pub trait Unit {
    fn info(&self) -> &UnitInfo;

    fn info_mut(&mut self) -> &mut UnitInfo;

    /// Build the file index. Must be called before any query.
    fn open(&mut self) -> Result<()>;

    /// Release whatever [`Unit::open`] acquired. Calling it twice is harmless.
    fn close(&mut self);

    fn file_exists(&self, path: &str) -> bool {
        self.info().contents().contains(&unit_path(path))
    }

    fn dir_exists(&self, path: &str) -> bool;

    /// Read a whole file
    fn read_data(&self, path: &str) -> Result<Vec<u8>>;

    fn bundle_kind(&self) -> BundleKind {
        self.info().bundle_kind()
    }

    fn bundle_id(&self) -> &str {
        self.info().bundle_id()
    }

    fn bundle_id_safe(&self) -> &str {
        self.info().bundle_id_safe()
    }

    /// Indexed files, sorted
    fn contents(&self) -> &BTreeSet<String> {
        self.info().contents()
    }

    fn add_relevant_path(&mut self, path: &str) {
        self.info_mut().add_relevant_path(path);
    }
}

/// Normalize a unit path to its `/`-prefixed form
pub fn unit_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn safe_bundle_id(id: &str) -> String {
    if id == "/" {
        return "root".to_string();
    }

    let replaced = id.replace(['/', '\\'], "-").replace(':', "_");
    let trimmed = replaced
        .strip_prefix('-')
        .or_else(|| replaced.strip_prefix('.'))
        .unwrap_or(&replaced);

    if trimmed.is_empty() {
        "BADNAME".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_bundle_id() {
        assert_eq!(safe_bundle_id("/"), "root");
        assert_eq!(safe_bundle_id("/srv/bundles/foo"), "srv-bundles-foo");
        assert_eq!(safe_bundle_id("C:\\bundles\\foo"), "C_-bundles-foo");
        assert_eq!(safe_bundle_id(".hidden"), "hidden");
        assert_eq!(safe_bundle_id("--x"), "-x");
        assert_eq!(safe_bundle_id("-"), "BADNAME");
        assert_eq!(safe_bundle_id(""), "BADNAME");
    }

    #[test]
    fn test_relevant_paths_are_deduplicated() {
        let mut info = UnitInfo::new(BundleKind::Unknown, "/srv");
        info.add_relevant_path("/usr/share/metainfo");
        info.add_relevant_path("/usr/share/applications");
        info.add_relevant_path("/usr/share/metainfo");
        assert_eq!(
            info.relevant_paths(),
            &["/usr/share/metainfo".to_string(), "/usr/share/applications".to_string()]
        );
    }

    #[test]
    fn test_unit_path() {
        assert_eq!(unit_path("usr/share"), "/usr/share");
        assert_eq!(unit_path("/usr/share"), "/usr/share");
    }
}
