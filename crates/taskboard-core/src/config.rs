use anyhow::Context;
use serde::Deserialize;
use tracing::{
  info,
  warn
};

use crate::list::DEFAULT_PREVIEW_CHARS;

pub const DEFAULT_STORAGE_KEY: &str =
  "tasks";

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct AppConfig {
  #[serde(default = "default_version")]
  pub version:                   u32,
  /// Browser storage slot holding the
  /// task document.
  #[serde(
    default = "default_storage_key"
  )]
  pub storage_key:               String,
  #[serde(
    default = "default_preview_chars"
  )]
  pub description_preview_chars: usize
}

fn default_version() -> u32 {
  1
}

fn default_storage_key() -> String {
  DEFAULT_STORAGE_KEY.to_string()
}

fn default_preview_chars() -> usize {
  DEFAULT_PREVIEW_CHARS
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      version:                   default_version(),
      storage_key:
        default_storage_key(),
      description_preview_chars:
        default_preview_chars()
    }
  }
}

impl AppConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config: Self =
      toml::from_str(raw).context(
        "failed to parse taskboard \
         config"
      )?;
    config.sanitize();
    info!(
      version = config.version,
      storage_key = %config.storage_key,
      preview_chars =
        config.description_preview_chars,
      "loaded taskboard config"
    );
    Ok(config)
  }

  pub fn sanitize(&mut self) {
    let trimmed =
      self.storage_key.trim().to_string();
    if trimmed.is_empty() {
      warn!(
        "blank storage_key; using \
         default"
      );
      self.storage_key =
        default_storage_key();
    } else {
      self.storage_key = trimmed;
    }

    if self.description_preview_chars
      == 0
    {
      warn!(
        "description_preview_chars \
         must be positive; using \
         default"
      );
      self.description_preview_chars =
        default_preview_chars();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_uses_defaults() {
    let config =
      AppConfig::from_toml_str("")
        .expect("parse");
    assert_eq!(
      config,
      AppConfig::default()
    );
    assert_eq!(
      config.storage_key,
      "tasks"
    );
    assert_eq!(
      config.description_preview_chars,
      30
    );
  }

  #[test]
  fn explicit_values_are_kept() {
    let config = AppConfig::from_toml_str(
      "version = 2\nstorage_key = \
       \" board \"\ndescription_preview_chars = 12\n"
    )
    .expect("parse");
    assert_eq!(config.version, 2);
    assert_eq!(
      config.storage_key,
      "board"
    );
    assert_eq!(
      config.description_preview_chars,
      12
    );
  }

  #[test]
  fn unusable_values_fall_back() {
    let config = AppConfig::from_toml_str(
      "storage_key = \"  \"\n\
       description_preview_chars = 0\n"
    )
    .expect("parse");
    assert_eq!(
      config.storage_key,
      DEFAULT_STORAGE_KEY
    );
    assert_eq!(
      config.description_preview_chars,
      DEFAULT_PREVIEW_CHARS
    );
  }

  #[test]
  fn malformed_toml_is_an_error() {
    assert!(
      AppConfig::from_toml_str(
        "storage_key = "
      )
      .is_err()
    );
  }
}
