//! Error types and handling for appstream-compose
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`unit`]: Bundle unit errors
//! - [`config`]: Configuration errors
//! - [`metadata`]: Errors reported by the metadata collaborators

pub mod config;
pub mod metadata;
pub mod unit;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for compose operations
#[derive(Error, Diagnostic, Debug)]
pub enum ComposeError {
    // Unit errors
    #[error("Failed to open unit at '{path}': {reason}")]
    #[diagnostic(
        code(appstream_compose::unit::open_failed),
        help("The bundle root must be an existing, readable directory")
    )]
    UnitOpenFailed { path: String, reason: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(appstream_compose::unit::read_failed))]
    FileReadFailed { path: String, reason: String },

    // Result errors
    #[error("Can not add component without ID to results set")]
    #[diagnostic(code(appstream_compose::result::component_without_id))]
    ComponentWithoutId,

    // Hint errors
    #[error("The selected hint tag '{tag}' could not be found. Unable to create hint object.")]
    #[diagnostic(
        code(appstream_compose::hint::unknown_tag),
        help("Every hint tag must be registered in the hint tag registry before use")
    )]
    UnknownHintTag { tag: String },

    // Icon policy errors
    #[error("Invalid icon policy: {message}")]
    #[diagnostic(
        code(appstream_compose::icon_policy::invalid),
        help("Entries look like WIDTHxHEIGHT[@SCALE]=STATE, e.g. 64x64=cached,128x128@2=cached-remote")
    )]
    IconPolicyInvalid { message: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(appstream_compose::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(appstream_compose::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(appstream_compose::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(appstream_compose::config::invalid))]
    ConfigInvalid { message: String },

    // Collaborator errors
    #[error("{reason}")]
    #[diagnostic(code(appstream_compose::metadata::parse_failed))]
    MetadataParseFailed { reason: String },

    #[error("{reason}")]
    #[diagnostic(code(appstream_compose::metadata::desktop_entry_failed))]
    DesktopEntryParseFailed { reason: String },

    #[error("{reason}")]
    #[diagnostic(code(appstream_compose::metadata::releases_parse_failed))]
    ReleasesParseFailed { reason: String },

    #[error("Failed to download '{url}': {reason}")]
    #[diagnostic(code(appstream_compose::metadata::download_failed))]
    ReleaseDownloadFailed { url: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(appstream_compose::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ComposeError {
    fn from(err: std::io::Error) -> Self {
        ComposeError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ComposeError {
    fn from(err: serde_yaml::Error) -> Self {
        ComposeError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ComposeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ComposeError::UnknownHintTag {
            tag: "no-such-tag".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The selected hint tag 'no-such-tag' could not be found. Unable to create hint object."
        );
    }

    #[test]
    fn test_error_code() {
        let err = ComposeError::ComponentWithoutId;
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("appstream_compose::result::component_without_id".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ComposeError = io_err.into();
        assert!(matches!(err, ComposeError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("prefix: [unclosed");
        let err: ComposeError = parse_result.unwrap_err().into();
        assert!(matches!(err, ComposeError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_collaborator_errors_show_reason_verbatim() {
        let err = metadata::parse_failed("unexpected end of document");
        assert_eq!(err.to_string(), "unexpected end of document");
    }

    #[test]
    fn test_unit_open_failed() {
        let err = unit::open_failed("/srv/bundle", "No such file or directory");
        assert!(matches!(err, ComposeError::UnitOpenFailed { .. }));
        assert!(err.to_string().contains("/srv/bundle"));
    }

    #[test]
    fn test_config_invalid() {
        let err = config::invalid("prefix must be absolute");
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
