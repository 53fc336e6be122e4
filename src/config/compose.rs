//! Compose configuration (ascompose.yaml) data structures

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};
use crate::icon_policy::IconPolicy;
use crate::pipeline::ReleaseOptions;
use crate::pipeline::releases::DEFAULT_MAX_RELEASE_COUNT;

fn default_prefix() -> String {
    "/usr".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_release_count() -> usize {
    DEFAULT_MAX_RELEASE_COUNT
}

/// Settings for composing units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeConfig {
    /// Installation prefix metadata is searched under
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Catalog origin name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Allow downloading external release data
    #[serde(default)]
    pub allow_net: bool,

    /// Run the metadata validator on metainfo files
    #[serde(default = "default_true")]
    pub validate: bool,

    /// Only keep components with these ids (empty keeps everything)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_component_ids: Vec<String>,

    /// Icon policy in `WIDTHxHEIGHT[@SCALE]=STATE,...` form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_policy: Option<String>,

    /// Number of newest releases to keep per component
    #[serde(default = "default_max_release_count")]
    pub max_release_count: usize,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            origin: None,
            allow_net: false,
            validate: true,
            allowed_component_ids: Vec::new(),
            icon_policy: None,
            max_release_count: DEFAULT_MAX_RELEASE_COUNT,
        }
    }
}

impl ComposeConfig {
    /// Parse compose configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load compose configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(error::config::not_found(display));
        }

        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(&display, e.to_string()))?;
        let config: Self = serde_yaml::from_str(&yaml)
            .map_err(|e| error::config::parse_failed(&display, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize compose configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate compose configuration
    pub fn validate(&self) -> Result<()> {
        if !self.prefix.starts_with('/') {
            return Err(error::config::invalid(format!(
                "prefix must be an absolute path, got '{}'",
                self.prefix
            )));
        }

        if self.max_release_count == 0 {
            return Err(error::config::invalid(
                "max_release_count must be at least 1",
            ));
        }

        if self.allowed_component_ids.iter().any(String::is_empty) {
            return Err(error::config::invalid(
                "allowed_component_ids must not contain empty ids",
            ));
        }

        if let Some(policy) = &self.icon_policy {
            policy
                .parse::<IconPolicy>()
                .map_err(|e| error::config::invalid(e.to_string()))?;
        }

        Ok(())
    }

    /// Prefix without a trailing separator, `""` for `/`
    pub fn prefix_path(&self) -> &str {
        self.prefix.trim_end_matches('/')
    }

    /// Icon policy to use, the default policy if none is configured
    pub fn icon_policy(&self) -> Result<IconPolicy> {
        match &self.icon_policy {
            Some(policy) => policy.parse(),
            None => Ok(IconPolicy::default()),
        }
    }

    pub fn release_options(&self) -> ReleaseOptions {
        ReleaseOptions {
            allow_net: self.allow_net,
            max_release_count: self.max_release_count,
        }
    }

    /// Whether components with `cid` are kept
    pub fn allows_component(&self, cid: &str) -> bool {
        self.allowed_component_ids.is_empty() || self.allowed_component_ids.iter().any(|a| a == cid)
    }

    pub fn has_component_filter(&self) -> bool {
        !self.allowed_component_ids.is_empty()
    }
}
