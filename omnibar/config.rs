use std::{
  fs,
  path::Path,
  time::Duration,
};

use serde::Deserialize;

use crate::{
  handlers::query::DEFAULT_DEBOUNCE,
  session::DEFAULT_CLOSE,
};

/// Runtime tunables, loadable from a TOML file. Everything has a default;
/// an absent file is not an error at this layer (callers decide whether a
/// missing path is fatal).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OmnibarConfig {
  /// Trailing debounce for query commits, in milliseconds.
  pub debounce_ms:   u64,
  /// Close transition length, in milliseconds.
  pub close_ms:      u64,
  /// Skip the close transition entirely (reduced-motion preference).
  pub reduce_motion: bool,
}

impl Default for OmnibarConfig {
  fn default() -> Self {
    Self {
      debounce_ms:   DEFAULT_DEBOUNCE.as_millis() as u64,
      close_ms:      DEFAULT_CLOSE.as_millis() as u64,
      reduce_motion: false,
    }
  }
}

impl OmnibarConfig {
  pub fn debounce(&self) -> Duration {
    Duration::from_millis(self.debounce_ms)
  }

  pub fn close(&self) -> Duration {
    Duration::from_millis(self.close_ms)
  }

  pub fn from_toml(raw: &str) -> Result<Self, ConfigLoadError> {
    Ok(toml::from_str(raw)?)
  }

  pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
    let raw = fs::read_to_string(path)?;
    Self::from_toml(&raw)
  }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
  #[error("failed to read config file: {0}")]
  Io(#[from] std::io::Error),
  #[error("invalid config: {0}")]
  BadConfig(#[from] toml::de::Error),
}
