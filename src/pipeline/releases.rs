//! Release metadata handling

use super::{MetainfoParser, ReleaseFetcher};
use crate::domain::{ComponentKind, ReleasesKind};
use crate::result::{ComponentHandle, ComposeResult};
use crate::unit::Unit;

/// Number of releases kept for a component by default
pub const DEFAULT_MAX_RELEASE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseOptions {
    /// Download external release data from its URL instead of reading the local file
    pub allow_net: bool,
    /// Keep only this many of the newest releases. Operating systems keep all.
    pub max_release_count: usize,
}

impl Default for ReleaseOptions {
    fn default() -> Self {
        Self {
            allow_net: false,
            max_release_count: DEFAULT_MAX_RELEASE_COUNT,
        }
    }
}

/// Load external release data for a component and prune old releases.
///
/// External release data is downloaded when `allow_net` is set and the
/// component has a releases URL; otherwise `releases/<id>.releases.xml` next
/// to the metainfo file is read from the unit. Problems are recorded as
/// general hints. Returns the release data that was read, if any.
pub fn process_metainfo_releases(
    result: &mut ComposeResult,
    unit: &dyn Unit,
    parser: &dyn MetainfoParser,
    fetcher: Option<&dyn ReleaseFetcher>,
    handle: ComponentHandle,
    mi_filename: &str,
    options: ReleaseOptions,
) -> Option<Vec<u8>> {
    let (cid, kind, releases_kind, releases_url) = {
        let cpt = result.component(handle)?;
        (
            cpt.id.clone(),
            cpt.kind,
            cpt.releases_kind,
            cpt.releases_url.clone(),
        )
    };

    let mut release_data = None;
    if releases_kind == ReleasesKind::External {
        if let Some(cpt) = result.component_mut(handle) {
            cpt.releases.clear();
        }

        let Some((data, uri)) =
            fetch_release_data(result, unit, fetcher, &cid, releases_url, mi_filename, options)
        else {
            return None;
        };

        let loaded = match result.component_mut(handle) {
            Some(cpt) => parser.load_releases(cpt, &data),
            None => Ok(()),
        };
        if let Err(e) = loaded {
            result.add_hint(
                None,
                "metainfo-releases-read-failed",
                &[("path", uri.as_str()), ("msg", e.to_string().as_str())],
            );
            return Some(data);
        }
        release_data = Some(data);
    }

    if kind != ComponentKind::OperatingSystem {
        if let Some(cpt) = result.component_mut(handle) {
            cpt.releases.truncate(options.max_release_count);
        }
    }

    release_data
}

/// Fetch release data from the network or the unit, returning it with its location
fn fetch_release_data(
    result: &mut ComposeResult,
    unit: &dyn Unit,
    fetcher: Option<&dyn ReleaseFetcher>,
    cid: &str,
    releases_url: Option<String>,
    mi_filename: &str,
    options: ReleaseOptions,
) -> Option<(Vec<u8>, String)> {
    if options.allow_net {
        if let (Some(url), Some(fetcher)) = (releases_url, fetcher) {
            return match fetcher.download(&url) {
                Ok(data) => Some((data, url)),
                Err(e) => {
                    result.add_hint(
                        None,
                        "metainfo-releases-download-failed",
                        &[("url", url.as_str()), ("msg", e.to_string().as_str())],
                    );
                    None
                }
            };
        }
    }

    let path = local_release_path(mi_filename, cid);
    match unit.read_data(&path) {
        Ok(data) => Some((data, path)),
        Err(e) => {
            result.add_hint(
                None,
                "file-read-error",
                &[("fname", path.as_str()), ("msg", e.to_string().as_str())],
            );
            None
        }
    }
}

fn local_release_path(mi_filename: &str, cid: &str) -> String {
    let dir = match mi_filename.rfind('/') {
        Some(0) => "",
        Some(i) => &mi_filename[..i],
        None => ".",
    };
    format!("{dir}/releases/{cid}.releases.xml")
}
