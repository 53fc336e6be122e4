//! Errors reported by metadata parsers, validators and fetchers

use super::ComposeError;

/// Creates a metainfo parse failed error
pub fn parse_failed(reason: impl Into<String>) -> ComposeError {
    ComposeError::MetadataParseFailed {
        reason: reason.into(),
    }
}

/// Creates a desktop-entry parse failed error
pub fn desktop_entry_failed(reason: impl Into<String>) -> ComposeError {
    ComposeError::DesktopEntryParseFailed {
        reason: reason.into(),
    }
}

/// Creates a release data parse failed error
pub fn releases_parse_failed(reason: impl Into<String>) -> ComposeError {
    ComposeError::ReleasesParseFailed {
        reason: reason.into(),
    }
}

/// Creates a release data download failed error
pub fn download_failed(url: impl Into<String>, reason: impl Into<String>) -> ComposeError {
    ComposeError::ReleaseDownloadFailed {
        url: url.into(),
        reason: reason.into(),
    }
}
