//! Unit errors

use super::ComposeError;

/// Creates a unit open failed error
pub fn open_failed(path: impl Into<String>, reason: impl Into<String>) -> ComposeError {
    ComposeError::UnitOpenFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ComposeError {
    ComposeError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
