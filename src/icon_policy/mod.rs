//! Icon caching policy
//!
//! Decides, per icon size and scale factor, whether icons are stored in the
//! local media cache, referenced remotely, both, or not at all. The 64x64 icon
//! at scale 1 is what clients fall back to, so it must always be cached.

mod serialization;

use std::fmt;
use std::str::FromStr;

use crate::error::{ComposeError, Result};

/// Size and scale of the icon that must always be cached
pub const MANDATORY_ICON: (u32, u32) = (64, 1);

/// What to do with icons of a given size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconState {
    Ignored,
    CachedRemote,
    CachedOnly,
    RemoteOnly,
}

impl IconState {
    /// Key used in the policy string form
    pub fn as_str(self) -> &'static str {
        match self {
            IconState::Ignored => "ignored",
            IconState::CachedRemote => "cached-remote",
            IconState::CachedOnly => "cached",
            IconState::RemoteOnly => "remote",
        }
    }

    pub fn is_cached(self) -> bool {
        matches!(self, IconState::CachedOnly | IconState::CachedRemote)
    }

    pub fn is_remote(self) -> bool {
        matches!(self, IconState::RemoteOnly | IconState::CachedRemote)
    }
}

impl fmt::Display for IconState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconState {
    type Err = ComposeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ignored" => Ok(IconState::Ignored),
            "cached-remote" => Ok(IconState::CachedRemote),
            "cached" => Ok(IconState::CachedOnly),
            "remote" => Ok(IconState::RemoteOnly),
            other => Err(ComposeError::IconPolicyInvalid {
                message: format!("unknown icon state '{other}'"),
            }),
        }
    }
}

/// One row of the policy table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPolicyEntry {
    pub size: u32,
    pub scale: u32,
    pub state: IconState,
}

/// Ordered icon policy table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPolicy {
    entries: Vec<IconPolicyEntry>,
}

impl Default for IconPolicy {
    fn default() -> Self {
        let mut policy = Self::empty();
        policy.set_policy(48, 1, IconState::CachedOnly);
        policy.set_policy(48, 2, IconState::CachedOnly);
        policy.set_policy(64, 1, IconState::CachedOnly);
        policy.set_policy(64, 2, IconState::CachedOnly);
        policy.set_policy(128, 1, IconState::CachedRemote);
        policy.set_policy(128, 2, IconState::CachedRemote);
        policy
    }
}

impl IconPolicy {
    /// The default policy
    pub fn new() -> Self {
        Self::default()
    }

    fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set the state for icons of `size` at `scale`, replacing any existing entry.
    ///
    /// A scale of 0 is treated as 1. The mandatory 64x64 icon is always kept
    /// in the cache; a non-caching state for it is replaced by
    /// [`IconState::CachedOnly`].
    pub fn set_policy(&mut self, size: u32, scale: u32, state: IconState) {
        let scale = if scale < 1 {
            tracing::warn!(size, "an icon scale of 0 is invalid, resetting to 1");
            1
        } else {
            scale
        };

        let state = if (size, scale) == MANDATORY_ICON && !state.is_cached() {
            tracing::warn!(
                state = %state,
                "the 64x64 icon must always be cached, using 'cached' instead"
            );
            IconState::CachedOnly
        } else {
            state
        };

        self.upsert(size, scale, state);
    }

    /// State for icons of `size` at `scale`, if the policy mentions them
    pub fn state_for(&self, size: u32, scale: u32) -> Option<IconState> {
        self.entries
            .iter()
            .find(|e| e.size == size && e.scale == scale)
            .map(|e| e.state)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &IconPolicyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole table with the policy in `s`.
    ///
    /// Parsing is best effort: malformed entries are skipped and reported in
    /// the returned error while the good ones are kept. If the result leaves
    /// the 64x64 icon uncached it is forced to [`IconState::CachedOnly`] and
    /// an error is returned as well.
    pub fn load_from_str(&mut self, s: &str) -> Result<()> {
        let parsed = serialization::parse_entries(s);

        self.entries.clear();
        for entry in parsed.entries {
            self.upsert(entry.size, entry.scale, entry.state);
        }

        let mut problems = parsed.errors;
        let (size, scale) = MANDATORY_ICON;
        match self.state_for(size, scale) {
            Some(state) if !state.is_cached() => {
                tracing::warn!(
                    state = %state,
                    "icon policy does not cache 64x64 icons, forcing 'cached'"
                );
                self.upsert(size, scale, IconState::CachedOnly);
                problems.push(format!(
                    "64x64 icons must be cached, but the policy sets '{state}'"
                ));
            }
            Some(_) => {}
            None => self.upsert(size, scale, IconState::CachedOnly),
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ComposeError::IconPolicyInvalid {
                message: problems.join("; "),
            })
        }
    }

    fn upsert(&mut self, size: u32, scale: u32, state: IconState) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.size == size && e.scale == scale)
        {
            Some(entry) => entry.state = state,
            None => self.entries.push(IconPolicyEntry { size, scale, state }),
        }
    }
}

impl fmt::Display for IconPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialization::format_entries(&self.entries))
    }
}

impl FromStr for IconPolicy {
    type Err = ComposeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut policy = Self::empty();
        policy.load_from_str(s)?;
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = IconPolicy::default();
        assert_eq!(
            policy.to_string(),
            "48x48=cached,48x48@2=cached,64x64=cached,64x64@2=cached,\
             128x128=cached-remote,128x128@2=cached-remote"
        );
        assert_eq!(policy.len(), 6);
    }

    #[test]
    fn test_set_policy_upserts_in_place() {
        let mut policy = IconPolicy::default();
        policy.set_policy(48, 2, IconState::Ignored);
        policy.set_policy(256, 1, IconState::RemoteOnly);

        let keys: Vec<(u32, u32)> = policy.iter().map(|e| (e.size, e.scale)).collect();
        assert_eq!(
            keys,
            vec![(48, 1), (48, 2), (64, 1), (64, 2), (128, 1), (128, 2), (256, 1)]
        );
        assert_eq!(policy.state_for(48, 2), Some(IconState::Ignored));
    }

    #[test]
    fn test_set_policy_clamps_scale() {
        let mut policy = IconPolicy::default();
        policy.set_policy(48, 0, IconState::Ignored);
        assert_eq!(policy.state_for(48, 1), Some(IconState::Ignored));
        assert_eq!(policy.state_for(48, 0), None);
    }

    #[test]
    fn test_set_policy_keeps_mandatory_icon_cached() {
        let mut policy = IconPolicy::default();
        policy.set_policy(64, 1, IconState::RemoteOnly);
        assert_eq!(policy.state_for(64, 1), Some(IconState::CachedOnly));
        policy.set_policy(64, 1, IconState::CachedRemote);
        assert_eq!(policy.state_for(64, 1), Some(IconState::CachedRemote));
    }

    #[test]
    fn test_load_replaces_table() {
        let mut policy = IconPolicy::default();
        policy
            .load_from_str("48x48=cached,128x128@2=cached-remote")
            .unwrap();

        assert_eq!(policy.state_for(48, 1), Some(IconState::CachedOnly));
        assert_eq!(policy.state_for(128, 2), Some(IconState::CachedRemote));
        assert_eq!(policy.state_for(64, 1), Some(IconState::CachedOnly));
        assert_eq!(policy.state_for(48, 2), None);
        assert_eq!(policy.len(), 3);
    }

    #[test]
    fn test_load_heals_uncached_mandatory_icon() {
        let mut policy = IconPolicy::default();
        let err = policy.load_from_str("64x64=remote").unwrap_err();
        assert!(matches!(err, ComposeError::IconPolicyInvalid { .. }));
        assert_eq!(policy.state_for(64, 1), Some(IconState::CachedOnly));
        assert_eq!(policy.len(), 1);
    }

    #[test]
    fn test_load_is_best_effort() {
        let mut policy = IconPolicy::default();
        let err = policy
            .load_from_str("48x48=cached,64x32=cached,0x0=cached,128x128@0=remote,96x96=bogus,64x64=cached-remote")
            .unwrap_err();

        let ComposeError::IconPolicyInvalid { message } = err else {
            panic!("unexpected error");
        };
        assert!(message.contains("64x32"));
        assert!(message.contains("bogus"));
        assert_eq!(policy.to_string(), "48x48=cached,64x64=cached-remote");
    }

    #[test]
    fn test_from_str_roundtrip() {
        let policy: IconPolicy = "64x64=cached,128x128@2=cached-remote,32x32=ignored"
            .parse()
            .unwrap();
        assert_eq!(
            policy.to_string(),
            "64x64=cached,128x128@2=cached-remote,32x32=ignored"
        );
        let again: IconPolicy = policy.to_string().parse().unwrap();
        assert_eq!(again, policy);
    }

    #[test]
    fn test_state_flags() {
        assert!(IconState::CachedRemote.is_cached());
        assert!(IconState::CachedRemote.is_remote());
        assert!(!IconState::RemoteOnly.is_cached());
        assert!(!IconState::Ignored.is_remote());
        assert_eq!("cached".parse::<IconState>().unwrap(), IconState::CachedOnly);
        assert!("cached-only".parse::<IconState>().is_err());
    }
}
