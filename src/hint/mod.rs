//! Compose hints
//!
//! A [`Hint`] is one diagnostic occurrence. Its severity and explanation
//! template are copied from the [`HintTagRegistry`] when it is created and do
//! not change afterwards; only the template variables are mutable.

pub mod format;
pub mod registry;
pub mod severity;
pub mod tags;

use std::sync::Arc;

pub use format::format_template;
pub use registry::{HintTag, HintTagRegistry, HintTagRegistryBuilder, ValidatorIssueTag};
pub use severity::Severity;
pub use tags::{COMPOSE_HINT_TAGS, HintTagDef, VALIDATOR_TAG_PREFIX};

use crate::error::{ComposeError, Result};

/// A single diagnostic raised while composing a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    tag: String,
    severity: Severity,
    explanation_tmpl: Option<Arc<str>>,
    vars: Vec<(String, String)>,
}

impl Hint {
    /// Create a hint for a registered tag.
    ///
    /// Fails with [`ComposeError::UnknownHintTag`] if the tag is not in the
    /// registry or was registered without a usable severity.
    pub fn new_for_tag(registry: &HintTagRegistry, tag: &str) -> Result<Self> {
        let Some(def) = registry.get(tag) else {
            return Err(ComposeError::UnknownHintTag {
                tag: tag.to_string(),
            });
        };
        if def.severity == Severity::Unknown {
            return Err(ComposeError::UnknownHintTag {
                tag: tag.to_string(),
            });
        }

        Ok(Self {
            tag: def.tag.clone(),
            severity: def.severity,
            explanation_tmpl: Some(Arc::clone(&def.explanation)),
            vars: Vec::new(),
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn explanation_template(&self) -> Option<&str> {
        self.explanation_tmpl.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_valid(&self) -> bool {
        !self.tag.is_empty() && self.severity != Severity::Unknown
    }

    /// Set a template variable, overwriting an existing value in place
    pub fn add_explanation_var(&mut self, name: &str, text: &str) {
        if let Some((_, value)) = self.vars.iter_mut().find(|(n, _)| n == name) {
            *value = text.to_string();
        } else {
            self.vars.push((name.to_string(), text.to_string()));
        }
    }

    /// Template variables in insertion order
    pub fn explanation_vars(&self) -> &[(String, String)] {
        &self.vars
    }

    /// Render the explanation template, `None` if the hint has no template
    pub fn format_explanation(&self) -> Option<String> {
        self.explanation_tmpl
            .as_deref()
            .map(|tmpl| format_template(tmpl, &self.vars))
    }
}
