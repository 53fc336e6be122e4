//! Domain models for appstream-compose
//!
//! The component model consumed by the compose core. Parsers produce these
//! objects; the core adjusts bundle information, priorities and releases.

pub mod component;
pub mod kinds;

pub use component::{BundleRef, Component, Release};
pub use kinds::{BundleKind, ComponentKind, MergeKind, ReleasesKind};
