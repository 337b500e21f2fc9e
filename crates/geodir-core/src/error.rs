//! Error types for `geodir-core`.

use std::path::PathBuf;

use thiserror::Error;

use crate::profile::ProfileId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("profile not found: {0}")]
  ProfileNotFound(ProfileId),

  #[error("duplicate profile id: {0}")]
  DuplicateId(ProfileId),

  #[error("invalid coordinates: lat={lat}, lng={lng}")]
  InvalidCoordinates { lat: f64, lng: f64 },

  /// A required field was blank. Raised by the presentation layer only.
  #[error("{0}")]
  Validation(String),

  #[error("failed to read {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

impl Error {
  /// `true` for the not-found signal of update / delete / select, which
  /// callers report but never treat as fatal.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::ProfileNotFound(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
