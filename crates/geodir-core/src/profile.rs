//! Profile types, the sole entity of the directory.
//!
//! A [`Profile`] is what the store owns. A [`NewProfile`] is what callers
//! hand to [`crate::store::ProfileStore::add`]; the store assigns identity,
//! timestamps and coordinate repair on the way in.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Image shown for profiles created without an image URL.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-1.2.1&auto=format&fit=crop&w=256&q=80";

/// Default location substituted for missing or non-finite coordinates
/// (Bangalore city centre).
pub const FALLBACK_COORDINATES: Coordinates = Coordinates {
  lat: 12.9716,
  lng: 77.5946,
};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Opaque profile identifier. Assigned once at creation; never changes.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
  /// A fresh random identifier.
  pub fn generate() -> Self { Self(Uuid::new_v4().to_string()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ProfileId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for ProfileId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl From<String> for ProfileId {
  fn from(s: String) -> Self { Self(s) }
}

// ─── Location ────────────────────────────────────────────────────────────────

/// A latitude / longitude pair in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
  #[serde(default = "missing_degrees", deserialize_with = "lenient_degrees")]
  pub lat: f64,
  #[serde(default = "missing_degrees", deserialize_with = "lenient_degrees")]
  pub lng: f64,
}

impl Coordinates {
  /// Placeholder for coordinates that were absent from the input.
  pub const MISSING: Coordinates = Coordinates {
    lat: f64::NAN,
    lng: f64::NAN,
  };

  pub fn new(lat: f64, lng: f64) -> Self { Self { lat, lng } }

  /// Both axes are finite numbers.
  pub fn is_valid(&self) -> bool { self.lat.is_finite() && self.lng.is_finite() }

  /// Build coordinates from free-text form input. Text that does not parse
  /// as a number becomes NaN on that axis, leaving repair to the store.
  pub fn parse_lenient(lat: &str, lng: &str) -> Self {
    let parse = |s: &str| s.trim().parse::<f64>().unwrap_or(f64::NAN);
    Self {
      lat: parse(lat),
      lng: parse(lng),
    }
  }
}

impl Default for Coordinates {
  fn default() -> Self { Self::MISSING }
}

fn missing_degrees() -> f64 { f64::NAN }

/// Accepts a JSON number, a numeric string, or anything else (mapped to
/// NaN) so that malformed seed data reaches the repair path instead of
/// failing the whole load.
fn lenient_degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
  D: Deserializer<'de>,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  Ok(match value {
    serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
    serde_json::Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
    _ => f64::NAN,
  })
}

/// A postal address with its geographic position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
  pub street:      String,
  pub city:        String,
  pub state:       String,
  pub zip:         String,
  pub country:     String,
  #[serde(default)]
  pub coordinates: Coordinates,
}

impl Address {
  /// The textual fields, in declaration order. Coordinates are excluded.
  pub fn text_fields(&self) -> [&str; 5] {
    [&self.street, &self.city, &self.state, &self.zip, &self.country]
  }

  /// "City, State", skipping whichever part is blank.
  pub fn summary(&self) -> String {
    [self.city.as_str(), self.state.as_str()]
      .into_iter()
      .filter(|s| !s.trim().is_empty())
      .collect::<Vec<_>>()
      .join(", ")
  }
}

/// Address as supplied at creation time; coordinates may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewAddress {
  pub street:      String,
  pub city:        String,
  pub state:       String,
  pub zip:         String,
  pub country:     String,
  pub coordinates: Option<Coordinates>,
}

// ─── Contact ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
  pub email:   String,
  pub phone:   String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub website: Option<String>,
}

// ─── Profile ─────────────────────────────────────────────────────────────────

/// A directory record. Owned exclusively by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub id:           ProfileId,
  pub name:         String,
  pub image_url:    String,
  pub description:  String,
  pub address:      Address,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub contact_info: Option<ContactInfo>,
  /// Display tags; also the exact-match search criterion.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub tags:         Vec<String>,
  /// Display only; never filtered on.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub interests:    Vec<String>,
  pub created_at:   DateTime<Utc>,
  pub updated_at:   DateTime<Utc>,
}

impl Profile {
  pub fn has_tag(&self, tag: &str) -> bool { self.tags.iter().any(|t| t == tag) }
}

/// Input to [`crate::store::ProfileStore::add`]. Identity and timestamps are
/// always set by the store; they are not accepted from callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewProfile {
  pub name:         String,
  pub description:  String,
  pub image_url:    Option<String>,
  pub address:      NewAddress,
  pub contact_info: Option<ContactInfo>,
  pub tags:         Vec<String>,
  pub interests:    Vec<String>,
}

impl NewProfile {
  /// Convenience constructor with every optional field left empty.
  pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      description: description.into(),
      ..Self::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_lenient_maps_garbage_to_nan() {
    let c = Coordinates::parse_lenient(" 19.07 ", "east-ish");
    assert_eq!(c.lat, 19.07);
    assert!(c.lng.is_nan());
    assert!(!c.is_valid());
  }

  #[test]
  fn infinite_coordinates_are_invalid() {
    assert!(!Coordinates::new(f64::INFINITY, 0.0).is_valid());
    assert!(Coordinates::new(0.0, 0.0).is_valid());
  }

  #[test]
  fn profile_json_uses_camel_case_keys() {
    let json = serde_json::json!({
      "id": "7",
      "name": "Asha Rao",
      "imageUrl": "https://example.com/a.png",
      "description": "Cartographer",
      "address": {
        "street": "MG Road", "city": "Bangalore", "state": "KA",
        "zip": "560001", "country": "India",
        "coordinates": { "lat": 12.97, "lng": 77.59 }
      },
      "contactInfo": { "email": "asha@example.com", "phone": "+91 80 1234" },
      "tags": ["Maps"],
      "createdAt": "2023-01-15T12:00:00Z",
      "updatedAt": "2023-06-20T16:30:00Z"
    });
    let profile: Profile = serde_json::from_value(json).unwrap();
    assert_eq!(profile.id.as_str(), "7");
    assert_eq!(profile.image_url, "https://example.com/a.png");
    assert_eq!(profile.contact_info.as_ref().unwrap().website, None);
    assert!(profile.interests.is_empty());

    let back = serde_json::to_value(&profile).unwrap();
    assert!(back.get("contactInfo").is_some());
    assert!(back.get("createdAt").is_some());
    assert!(back.get("interests").is_none());
  }

  #[test]
  fn non_numeric_seed_coordinates_deserialize_as_nan() {
    let json = serde_json::json!({ "lat": "abc", "lng": null });
    let c: Coordinates = serde_json::from_value(json).unwrap();
    assert!(c.lat.is_nan() && c.lng.is_nan());

    let json = serde_json::json!({ "lat": "18.52", "lng": 73.85 });
    let c: Coordinates = serde_json::from_value(json).unwrap();
    assert_eq!(c, Coordinates::new(18.52, 73.85));
  }

  #[test]
  fn address_summary_skips_blank_parts() {
    let mut address = Address {
      street:      String::new(),
      city:        "Mumbai".into(),
      state:       "MH".into(),
      zip:         String::new(),
      country:     "India".into(),
      coordinates: FALLBACK_COORDINATES,
    };
    assert_eq!(address.summary(), "Mumbai, MH");
    address.state.clear();
    assert_eq!(address.summary(), "Mumbai");
  }
}
