//! Map configuration, deserialised from the `[map]` table.

use serde::Deserialize;

/// How the renderer is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapMode {
  /// Widget when an access token is configured, links otherwise.
  #[default]
  Auto,
  Widget,
  Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
  pub mode:         MapMode,
  /// Map-provider credential; enables the interactive widget.
  pub access_token: Option<String>,
  /// Provider style id, e.g. `mapbox/streets-v11`.
  pub style:        String,
}

impl Default for MapConfig {
  fn default() -> Self {
    Self {
      mode:         MapMode::Auto,
      access_token: None,
      style:        "mapbox/streets-v11".to_owned(),
    }
  }
}

impl MapConfig {
  /// The access token, if one is set and non-blank.
  pub fn access_token(&self) -> Option<&str> {
    self
      .access_token
      .as_deref()
      .map(str::trim)
      .filter(|t| !t.is_empty())
  }
}
