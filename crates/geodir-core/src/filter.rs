//! Search criteria and the predicate evaluated over the collection.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Transient query criteria. Absent (or blank) criteria are permissive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
  /// Case-insensitive substring of the profile name.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name:     Option<String>,
  /// Case-insensitive substring of any textual address field.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
  /// Every listed tag must be present on the profile (exact match).
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub tags:     Vec<String>,
}

impl SearchFilters {
  pub fn new() -> Self { Self::default() }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn location(mut self, location: impl Into<String>) -> Self {
    self.location = Some(location.into());
    self
  }

  pub fn tag(mut self, tag: impl Into<String>) -> Self {
    self.tags.push(tag.into());
    self
  }

  /// `true` when no criterion would exclude anything.
  pub fn is_empty(&self) -> bool {
    active(&self.name).is_none()
      && active(&self.location).is_none()
      && self.tags.is_empty()
  }

  /// The conjunction of the name, location and tag criteria.
  pub fn matches(&self, profile: &Profile) -> bool {
    let name_match = active(&self.name)
      .is_none_or(|needle| contains_folded(&profile.name, needle));

    let location_match = active(&self.location).is_none_or(|needle| {
      profile
        .address
        .text_fields()
        .iter()
        .any(|field| contains_folded(field, needle))
    });

    let tags_match = self.tags.iter().all(|tag| profile.has_tag(tag));

    name_match && location_match && tags_match
  }

  /// Profiles that pass [`Self::matches`], in their original order.
  pub fn apply<'a, I>(&self, profiles: I) -> Vec<&'a Profile>
  where
    I: IntoIterator<Item = &'a Profile>,
  {
    profiles.into_iter().filter(|p| self.matches(p)).collect()
  }
}

/// A criterion only counts when it is present and non-empty.
fn active(criterion: &Option<String>) -> Option<&str> {
  criterion.as_deref().filter(|s| !s.is_empty())
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Split comma-separated tag input into trimmed, non-empty tags.
pub fn parse_tags(input: &str) -> Vec<String> {
  input
    .split(',')
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .map(str::to_owned)
    .collect()
}
