//! Required-field checks for the presentation layer.
//!
//! The store never calls these: consumers run them before `add` / `update`
//! and show the message to the user instead of invoking the store.

use crate::{Error, NewProfile, ProfilePatch, Result};

pub const REQUIRED_FIELDS_MESSAGE: &str =
  "Name and description are required fields.";

fn is_blank(s: &str) -> bool { s.trim().is_empty() }

/// A new profile needs a non-blank name and description.
pub fn new_profile(input: &NewProfile) -> Result<()> {
  if is_blank(&input.name) || is_blank(&input.description) {
    return Err(Error::Validation(REQUIRED_FIELDS_MESSAGE.to_owned()));
  }
  Ok(())
}

/// A patch may not blank out the name or description.
pub fn patch(patch: &ProfilePatch) -> Result<()> {
  let blanks = |field: &Option<String>| field.as_deref().is_some_and(is_blank);
  if blanks(&patch.name) || blanks(&patch.description) {
    return Err(Error::Validation(REQUIRED_FIELDS_MESSAGE.to_owned()));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn whitespace_name_is_rejected() {
    let err = new_profile(&NewProfile::new("   ", "Desc")).unwrap_err();
    assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
    assert!(new_profile(&NewProfile::new("Test", "Desc")).is_ok());
  }

  #[test]
  fn patch_without_required_fields_is_allowed() {
    assert!(patch(&ProfilePatch::new().city("Pune")).is_ok());
    assert!(patch(&ProfilePatch::new().description("")).is_err());
  }
}
