//! Hint tag registry
//!
//! An immutable table mapping a hint tag to its severity and explanation
//! template. Built once through [`HintTagRegistryBuilder`] and then shared
//! (usually through an `Arc`) with every [`crate::result::ComposeResult`].

use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::Severity;
use super::tags::{COMPOSE_HINT_TAGS, VALIDATOR_TAG_PREFIX};

/// Severity and explanation template registered for a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintTag {
    pub tag: String,
    pub severity: Severity,
    pub explanation: Arc<str>,
}

/// An issue tag exposed by the metadata validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorIssueTag {
    pub tag: String,
    pub severity: Severity,
    pub explanation: String,
}

impl ValidatorIssueTag {
    pub fn new(tag: impl Into<String>, severity: Severity, explanation: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            severity,
            explanation: explanation.into(),
        }
    }
}

/// Closed set of known hint tags
#[derive(Debug, Clone)]
pub struct HintTagRegistry {
    tags: IndexMap<String, HintTag>,
}

impl HintTagRegistry {
    /// Start a registry pre-populated with the compose hint tags
    pub fn builder() -> HintTagRegistryBuilder {
        HintTagRegistryBuilder::empty().with_compose_tags()
    }

    /// A registry holding only the compose hint tags
    pub fn with_defaults() -> Self {
        Self::builder().build()
    }

    pub fn get(&self, tag: &str) -> Option<&HintTag> {
        self.tags.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// Severity of `tag`, or [`Severity::Unknown`] if it is not registered
    pub fn severity(&self, tag: &str) -> Severity {
        self.get(tag).map_or(Severity::Unknown, |t| t.severity)
    }

    pub fn explanation(&self, tag: &str) -> Option<&str> {
        self.get(tag).map(|t| &*t.explanation)
    }

    /// All tags in registration order
    pub fn tags(&self) -> impl Iterator<Item = &HintTag> {
        self.tags.values()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Builder for [`HintTagRegistry`]
#[derive(Debug, Default)]
pub struct HintTagRegistryBuilder {
    tags: IndexMap<String, HintTag>,
}

impl HintTagRegistryBuilder {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register the built-in compose tags
    pub fn with_compose_tags(mut self) -> Self {
        for def in COMPOSE_HINT_TAGS {
            if !self.add_tag(def.tag, def.severity, def.explanation, false) {
                tracing::error!(
                    tag = def.tag,
                    "duplicate compose hint tag in tag list, keeping the first definition"
                );
            }
        }
        self
    }

    /// Register validator issue tags under the `asv-` prefix.
    ///
    /// The explanation is prefixed with the issue location and hint, and
    /// validator errors are registered as warnings. A validator finding on its
    /// own never drops a component; the compose core raises its own error hint
    /// when an issue makes composing impossible.
    pub fn with_validator_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = ValidatorIssueTag>,
    {
        for vtag in tags {
            let compose_tag = format!("{VALIDATOR_TAG_PREFIX}{}", vtag.tag);
            let explanation = format!(
                "<code>{{{{location}}}}</code> - <em>{{{{hint}}}}</em><br/>{}",
                escape_markup(&vtag.explanation)
            );
            let severity = match vtag.severity {
                Severity::Error => Severity::Warning,
                other => other,
            };

            if !self.add_tag(&compose_tag, severity, &explanation, false) {
                tracing::error!(tag = %vtag.tag, "duplicate validator issue tag in tag list");
            }
        }
        self
    }

    /// Register a single tag.
    ///
    /// Returns `false` if the tag already exists and `override_existing` is not
    /// set. When overriding, the new severity is never lower than the
    /// registered one.
    pub fn add_tag(
        &mut self,
        tag: &str,
        severity: Severity,
        explanation: &str,
        override_existing: bool,
    ) -> bool {
        match self.tags.entry(tag.to_string()) {
            Entry::Occupied(mut existing) => {
                if !override_existing {
                    return false;
                }
                let current = existing.get().severity;
                let severity = if severity.rank() < current.rank() {
                    current
                } else {
                    severity
                };
                existing.insert(HintTag {
                    tag: tag.to_string(),
                    severity,
                    explanation: Arc::from(explanation),
                });
                true
            }
            Entry::Vacant(slot) => {
                slot.insert(HintTag {
                    tag: tag.to_string(),
                    severity,
                    explanation: Arc::from(explanation),
                });
                true
            }
        }
    }

    pub fn build(self) -> HintTagRegistry {
        HintTagRegistry { tags: self.tags }
    }
}

fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
