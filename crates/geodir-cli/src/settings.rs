//! Runtime configuration.
//!
//! Layered with the `config` crate: an optional TOML file, then `GEODIR_*`
//! environment variables (`__` separates nested keys, e.g.
//! `GEODIR_MAP__ACCESS_TOKEN`).

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use geodir_map::MapConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// JSON seed file; the built-in directory is used when unset.
  pub seed_path:    Option<PathBuf>,
  /// Log destination for the TUI, which cannot log to its own terminal.
  pub log_file:     Option<PathBuf>,
  /// Program used to open external map links.
  pub open_command: String,
  pub map:          MapConfig,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      seed_path:    None,
      log_file:     None,
      open_command: "xdg-open".to_owned(),
      map:          MapConfig::default(),
    }
  }
}

impl Settings {
  /// Read `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("GEODIR")
          .prefix_separator("_")
          .separator("__"),
      )
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}

#[cfg(test)]
mod tests {
  use geodir_map::MapMode;

  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let settings = Settings::load(&dir.path().join("geodir.toml")).unwrap();
    assert_eq!(settings.open_command, "xdg-open");
    assert_eq!(settings.map, MapConfig::default());
    assert!(settings.seed_path.is_none());
  }

  #[test]
  fn file_values_override_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("geodir.toml");
    std::fs::write(
      &path,
      r#"
seed_path = "/srv/geodir/seed.json"
open_command = "open"

[map]
mode = "widget"
access_token = "pk.test"
"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(
      settings.seed_path.as_deref(),
      Some(Path::new("/srv/geodir/seed.json"))
    );
    assert_eq!(settings.open_command, "open");
    assert_eq!(settings.map.mode, MapMode::Widget);
    assert_eq!(settings.map.access_token(), Some("pk.test"));
    assert_eq!(settings.map.style, "mapbox/streets-v11");
  }
}
