//! Partial updates.
//!
//! A [`ProfilePatch`] lists only the fields a caller wants to change. Every
//! `Some` replaces the stored value; every `None` leaves it alone. The
//! address is merged field by field, so changing the city does not reset
//! the coordinates.

use crate::{
  Error, Result,
  profile::{Address, ContactInfo, Coordinates, Profile},
};

/// Per-field changes to an [`Address`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressPatch {
  pub street:      Option<String>,
  pub city:        Option<String>,
  pub state:       Option<String>,
  pub zip:         Option<String>,
  pub country:     Option<String>,
  pub coordinates: Option<Coordinates>,
}

impl AddressPatch {
  pub fn is_empty(&self) -> bool { *self == Self::default() }

  /// A patch that replaces every field of the address.
  pub fn replace_with(address: Address) -> Self {
    Self {
      street:      Some(address.street),
      city:        Some(address.city),
      state:       Some(address.state),
      zip:         Some(address.zip),
      country:     Some(address.country),
      coordinates: Some(address.coordinates),
    }
  }

  fn apply(self, address: &mut Address) {
    if let Some(v) = self.street {
      address.street = v;
    }
    if let Some(v) = self.city {
      address.city = v;
    }
    if let Some(v) = self.state {
      address.state = v;
    }
    if let Some(v) = self.zip {
      address.zip = v;
    }
    if let Some(v) = self.country {
      address.country = v;
    }
    if let Some(v) = self.coordinates {
      address.coordinates = v;
    }
  }
}

/// The fields of a [`Profile`] that may change after creation. `id` and
/// `created_at` are absent on purpose; `updated_at` is set by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
  pub name:         Option<String>,
  pub description:  Option<String>,
  pub image_url:    Option<String>,
  pub address:      Option<AddressPatch>,
  /// `Some(None)` removes the contact info.
  pub contact_info: Option<Option<ContactInfo>>,
  pub tags:         Option<Vec<String>>,
  pub interests:    Option<Vec<String>>,
}

impl ProfilePatch {
  pub fn new() -> Self { Self::default() }

  pub fn is_empty(&self) -> bool { *self == Self::default() }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn image_url(mut self, url: impl Into<String>) -> Self {
    self.image_url = Some(url.into());
    self
  }

  pub fn address(mut self, address: AddressPatch) -> Self {
    self.address = Some(address);
    self
  }

  pub fn city(mut self, city: impl Into<String>) -> Self {
    self.address.get_or_insert_with(AddressPatch::default).city =
      Some(city.into());
    self
  }

  pub fn coordinates(mut self, coordinates: Coordinates) -> Self {
    self.address.get_or_insert_with(AddressPatch::default).coordinates =
      Some(coordinates);
    self
  }

  pub fn contact_info(mut self, contact: Option<ContactInfo>) -> Self {
    self.contact_info = Some(contact);
    self
  }

  pub fn tags<I, S>(mut self, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.tags = Some(tags.into_iter().map(Into::into).collect());
    self
  }

  pub fn interests<I, S>(mut self, interests: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.interests = Some(interests.into_iter().map(Into::into).collect());
    self
  }

  /// Coordinates carried by the patch must be finite. Checked by the store
  /// before anything is merged.
  pub fn check_coordinates(&self) -> Result<()> {
    match self.address.as_ref().and_then(|a| a.coordinates) {
      Some(c) if !c.is_valid() => Err(Error::InvalidCoordinates {
        lat: c.lat,
        lng: c.lng,
      }),
      _ => Ok(()),
    }
  }

  /// Merge into `profile`. Does not touch `id`, `created_at` or
  /// `updated_at`.
  pub(crate) fn apply(self, profile: &mut Profile) {
    if let Some(v) = self.name {
      profile.name = v;
    }
    if let Some(v) = self.description {
      profile.description = v;
    }
    if let Some(v) = self.image_url {
      profile.image_url = v;
    }
    if let Some(address) = self.address {
      address.apply(&mut profile.address);
    }
    if let Some(v) = self.contact_info {
      profile.contact_info = v;
    }
    if let Some(v) = self.tags {
      profile.tags = v;
    }
    if let Some(v) = self.interests {
      profile.interests = v;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn city_and_coordinates_share_one_address_patch() {
    let patch = ProfilePatch::new()
      .city("Pune")
      .coordinates(Coordinates::new(18.52, 73.85));
    let address = patch.address.unwrap();
    assert_eq!(address.city.as_deref(), Some("Pune"));
    assert_eq!(address.coordinates, Some(Coordinates::new(18.52, 73.85)));
    assert!(address.street.is_none());
  }

  #[test]
  fn non_finite_patch_coordinates_are_rejected() {
    let patch = ProfilePatch::new().coordinates(Coordinates::MISSING);
    assert!(matches!(
      patch.check_coordinates(),
      Err(Error::InvalidCoordinates { .. })
    ));
    assert!(ProfilePatch::new().name("x").check_coordinates().is_ok());
  }

  #[test]
  fn empty_patch_is_empty() {
    assert!(ProfilePatch::new().is_empty());
    assert!(!ProfilePatch::new().tags(Vec::<String>::new()).is_empty());
    assert!(AddressPatch::default().is_empty());
  }
}
