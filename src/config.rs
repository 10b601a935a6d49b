use crate::core::error::ConfigError;
use crate::core::step::StepKind;
use crate::steps::image::DEFAULT_EXTENSIONS;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub title: String,
    pub log_level: String,
    pub message: MessageConfig,
    pub image: ImageConfig,
    /// Prompt shown for each stage; missing kinds fall back to a built-in prompt.
    pub prompts: IndexMap<StepKind, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub min_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub extensions: Vec<String>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            title: "New message".to_string(),
            log_level: "warn".to_string(),
            message: MessageConfig::default(),
            image: ImageConfig::default(),
            prompts: IndexMap::new(),
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { min_length: 1 }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

impl WizardConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&raw)?;
        tracing::debug!(path = %path.display(), "loaded wizard config");
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null rather than an empty map.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let listed = self
            .image
            .extensions
            .iter()
            .any(|ext| !ext.trim().trim_start_matches('.').is_empty());
        if !listed {
            return Err(ConfigError::NoImageExtensions);
        }
        Ok(())
    }

    pub fn prompt(&self, kind: StepKind) -> &str {
        self.prompts
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| default_prompt(kind))
    }
}

fn default_prompt(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Name => "Your name (first and last)",
        StepKind::Message => "Your message",
        StepKind::Image => "Path to an image",
        StepKind::Final => "Review and submit with :next",
    }
}
