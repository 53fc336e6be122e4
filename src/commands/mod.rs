//! Command implementations for the ascompose CLI

pub mod completions;
pub mod explain;
pub mod hint_tags;
pub mod icon_policy;
pub mod index;
pub mod version;
