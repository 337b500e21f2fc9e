//! Map markers derived from profiles.

use geodir_core::{Profile, ProfileId};
use serde::Serialize;

/// Everything a map needs to place and label one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
  pub profile_id: ProfileId,
  pub lat:        f64,
  pub lng:        f64,
  pub name:       String,
  pub image_url:  String,
  /// One-line postal address.
  pub address:    String,
}

impl Marker {
  pub fn from_profile(profile: &Profile) -> Self {
    let address = profile
      .address
      .text_fields()
      .into_iter()
      .filter(|s| !s.trim().is_empty())
      .collect::<Vec<_>>()
      .join(", ");
    Self {
      profile_id: profile.id.clone(),
      lat: profile.address.coordinates.lat,
      lng: profile.address.coordinates.lng,
      name: profile.name.clone(),
      image_url: profile.image_url.clone(),
      address,
    }
  }
}
