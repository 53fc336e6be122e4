//! Component data model
//!
//! A plain data holder filled by the metainfo and desktop-entry parsers.
//! The compose core only reads and adjusts the handful of fields modelled here.

use super::kinds::{BundleKind, ComponentKind, MergeKind, ReleasesKind};

/// Reference from a component to the bundle that ships it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRef {
    pub kind: BundleKind,
    pub id: String,
}

/// A single release entry, newest first in [`Component::releases`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Release {
    pub version: String,
    pub timestamp: Option<u64>,
}

impl Release {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            timestamp: None,
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Component {
    pub id: String,
    pub kind: ComponentKind,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub metadata_license: Option<String>,
    pub merge_kind: MergeKind,
    pub priority: i32,
    pub pkgnames: Vec<String>,
    pub bundles: Vec<BundleRef>,
    pub categories: Vec<String>,
    /// Desktop-entry IDs from `launchable type="desktop-id"` tags
    pub launchables: Vec<String>,
    pub releases: Vec<Release>,
    pub releases_kind: ReleasesKind,
    pub releases_url: Option<String>,
    /// Catalog origin the component is published under
    pub origin: Option<String>,
}

impl Component {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: ComponentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Attach a bundle reference, replacing any existing one of the same kind
    pub fn add_bundle(&mut self, bundle: BundleRef) {
        self.bundles.retain(|b| b.kind != bundle.kind);
        self.bundles.push(bundle);
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_bundle_replaces_same_kind() {
        let mut cpt = Component::new("org.example.App");
        cpt.add_bundle(BundleRef {
            kind: BundleKind::Flatpak,
            id: "app/org.example.App/x86_64/stable".to_string(),
        });
        cpt.add_bundle(BundleRef {
            kind: BundleKind::Flatpak,
            id: "app/org.example.App/x86_64/beta".to_string(),
        });
        assert_eq!(cpt.bundles.len(), 1);
        assert!(cpt.bundles[0].id.ends_with("beta"));
    }

    #[test]
    fn test_has_id() {
        assert!(!Component::default().has_id());
        assert!(Component::new("a.b").has_id());
    }
}
