//! Directory-backed units
//!
//! Indexes a plain directory tree. Symbolic links to directories are never
//! followed, so a link pointing back at the root cannot loop and nothing
//! outside the tree gets indexed. Subdirectories we are not allowed to read
//! are skipped; any other I/O error fails [`Unit::open`].

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{Unit, UnitInfo, unit_path};
use crate::domain::BundleKind;
use crate::error::{self, Result};

/// A unit whose contents are a directory on the local file system
#[derive(Debug, Clone)]
pub struct DirectoryUnit {
    info: UnitInfo,
    root: PathBuf,
}

impl DirectoryUnit {
    /// Create a unit for `root`. The bundle id defaults to the root path.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = canonical_root(root.as_ref());
        let info = UnitInfo::new(BundleKind::Unknown, &root.to_string_lossy());
        Self { info, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn set_root(&mut self, root: impl AsRef<Path>) {
        self.root = canonical_root(root.as_ref());
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    fn walk_roots(&self) -> Vec<PathBuf> {
        if self.info.relevant_paths().is_empty() {
            return vec![self.root.clone()];
        }
        self.info
            .relevant_paths()
            .iter()
            .map(|p| self.full_path(p))
            .filter(|p| p.exists())
            .collect()
    }

    fn index_tree(&self, start: &Path, contents: &mut BTreeSet<String>) -> Result<()> {
        let walker = WalkDir::new(start)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let denied = err
                        .io_error()
                        .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied);
                    match err.path() {
                        Some(path) if denied && path != self.root.as_path() => {
                            tracing::debug!(path = %path.display(), "skipping unreadable directory");
                            continue;
                        }
                        _ => {}
                    }
                    return Err(error::unit::open_failed(
                        self.root.to_string_lossy(),
                        err.to_string(),
                    ));
                }
            };

            let is_file = if entry.path_is_symlink() {
                fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
            } else {
                entry.file_type().is_file()
            };
            if !is_file {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                contents.insert(relative_unit_path(relative));
            }
        }

        Ok(())
    }
}

impl Unit for DirectoryUnit {
    fn info(&self) -> &UnitInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut UnitInfo {
        &mut self.info
    }

    fn open(&mut self) -> Result<()> {
        if let Err(e) = fs::read_dir(&self.root) {
            return Err(error::unit::open_failed(
                self.root.to_string_lossy(),
                e.to_string(),
            ));
        }

        let mut contents = BTreeSet::new();
        for start in self.walk_roots() {
            self.index_tree(&start, &mut contents)?;
        }

        tracing::debug!(
            root = %self.root.display(),
            files = contents.len(),
            "indexed directory unit"
        );
        self.info.set_contents(contents);
        Ok(())
    }

    fn close(&mut self) {}

    fn file_exists(&self, path: &str) -> bool {
        self.full_path(path).exists()
    }

    fn dir_exists(&self, path: &str) -> bool {
        self.full_path(path).is_dir()
    }

    fn read_data(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(self.full_path(path))
            .map_err(|e| error::unit::read_failed(unit_path(path), e.to_string()))
    }
}

fn canonical_root(root: &Path) -> PathBuf {
    let raw = root.to_string_lossy();
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("/")
    } else {
        PathBuf::from(trimmed)
    }
}

fn relative_unit_path(relative: &Path) -> String {
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("/{}", parts.join("/"))
}
