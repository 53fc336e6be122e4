//! Configuration file handling for appstream-compose
//!
//! This module contains data structures for:
//! - `ascompose.yaml` - Compose settings (install prefix, filters, icon policy, ...)

pub mod compose;

pub use compose::ComposeConfig;
