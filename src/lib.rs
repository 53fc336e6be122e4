//! appstream-compose - AppStream metadata composition
//!
//! Turns the metadata files found in a bundle (metainfo XML, desktop-entry
//! files, release data) into a validated, content-addressed set of catalog
//! components annotated with hints.
//!
//! The building blocks, from the bottom up:
//! - [`unit`]: access to the files of one bundle
//! - [`hint`]: diagnostics and their tag registry
//! - [`result`]: per-unit aggregation of components, hints and global IDs
//! - [`icon_policy`]: icon caching decisions
//! - [`pipeline`]: glue between metadata collaborators and a result
//! - [`compose`]: the driver that composes a whole unit

pub mod cli;
pub mod commands;
pub mod compose;
pub mod config;
pub mod domain;
pub mod error;
pub mod hash;
pub mod hint;
pub mod icon_policy;
pub mod pipeline;
pub mod result;
pub mod unit;

pub use compose::Composer;
pub use config::ComposeConfig;
pub use error::{ComposeError, Result};
pub use hint::{Hint, HintTagRegistry, Severity};
pub use icon_policy::{IconPolicy, IconState};
pub use result::{ComponentHandle, ComposeResult};
pub use unit::{DirectoryUnit, Unit};
