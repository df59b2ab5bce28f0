//! Shared configuration loader for the AML toolchain.
//!
//! `defaults/aml.default.toml` is embedded into every binary so that the documented defaults
//! and runtime behavior stay in sync. Applications layer user files and CLI overrides on top via
//! [`Loader`] before deserializing into [`AmlConfig`].

use aml_render::RenderOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/aml.default.toml");

/// Top-level configuration consumed by AML applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AmlConfig {
    pub render: RenderConfig,
    #[serde(default)]
    pub annotations: AnnotationsConfig,
    pub inspect: InspectConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RenderConfig {
    pub truncated: bool,
    pub show_private: bool,
}

impl RenderConfig {
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            truncated: self.truncated,
            show_private: self.show_private,
        }
    }
}

/// Dictionary locations. Both are optional; without them no annotations are rendered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnotationsConfig {
    #[serde(default)]
    pub chinese_dictionary: Option<PathBuf>,
    #[serde(default)]
    pub english_dictionary: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, used when `RUST_LOG` is unset
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<AmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AmlConfig, ConfigError> {
    Loader::new().build()
}
