//! [`ProfileStore`], the single source of truth for profile records.
//!
//! The store is a plain owned value. Consumers receive it by reference
//! (`&ProfileStore` to read, `&mut ProfileStore` to mutate); there is no
//! global instance and no interior mutability. Every operation completes
//! before it returns.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  filter::SearchFilters,
  patch::ProfilePatch,
  profile::{
    Address, Coordinates, FALLBACK_COORDINATES, NewProfile,
    PLACEHOLDER_IMAGE_URL, Profile, ProfileId,
  },
  seed,
};

// ─── Notices ─────────────────────────────────────────────────────────────────

/// Reported when the store substituted [`FALLBACK_COORDINATES`] for missing
/// or non-finite input. A notice, not an error: the record was stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateRepair {
  /// What the caller supplied; `None` if coordinates were omitted.
  pub rejected:    Option<Coordinates>,
  pub substituted: Coordinates,
}

/// Outcome of [`ProfileStore::add`].
#[derive(Debug, Clone, PartialEq)]
pub struct Added {
  pub id:     ProfileId,
  pub repair: Option<CoordinateRepair>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// In-memory profile collection with a selection and active search filters.
///
/// Profiles keep insertion order and ids are unique.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
  profiles: Vec<Profile>,
  /// Held by identity and resolved on read, so it always reflects the
  /// latest merged record.
  selected: Option<ProfileId>,
  filters:  SearchFilters,
}

impl ProfileStore {
  /// An empty store.
  pub fn new() -> Self { Self::default() }

  /// A store bootstrapped from `profiles`.
  ///
  /// Invalid coordinates are repaired the same way [`Self::add`] repairs
  /// them. Duplicate ids are rejected.
  pub fn with_seed(profiles: Vec<Profile>) -> Result<Self> {
    let mut seen = HashSet::with_capacity(profiles.len());
    let mut store = Self::new();
    for mut profile in profiles {
      if !seen.insert(profile.id.clone()) {
        return Err(Error::DuplicateId(profile.id));
      }
      if !profile.address.coordinates.is_valid() {
        warn!(
          id = %profile.id,
          "seed profile has invalid coordinates; using fallback location"
        );
        profile.address.coordinates = FALLBACK_COORDINATES;
      }
      store.profiles.push(profile);
    }
    info!(count = store.profiles.len(), "profile store seeded");
    Ok(store)
  }

  /// A store holding the built-in bootstrap profiles.
  pub fn from_builtin_seed() -> Self {
    // The built-in seed has unique ids and valid coordinates.
    Self {
      profiles: seed::builtin(),
      ..Self::default()
    }
  }

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Append a new profile and select it.
  ///
  /// Never fails. Required-field validation is the caller's job; missing or
  /// non-finite coordinates are replaced with [`FALLBACK_COORDINATES`] and
  /// reported through [`Added::repair`].
  pub fn add(&mut self, input: NewProfile) -> Added {
    let now = Utc::now();
    let id = ProfileId::generate();

    let (coordinates, repair) = match input.address.coordinates {
      Some(c) if c.is_valid() => (c, None),
      rejected => {
        warn!(
          %id,
          ?rejected,
          "missing or invalid coordinates; using fallback location"
        );
        (FALLBACK_COORDINATES, Some(CoordinateRepair {
          rejected,
          substituted: FALLBACK_COORDINATES,
        }))
      }
    };

    let image_url = input
      .image_url
      .filter(|u| !u.trim().is_empty())
      .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_owned());

    let profile = Profile {
      id: id.clone(),
      name: input.name,
      image_url,
      description: input.description,
      address: Address {
        street: input.address.street,
        city: input.address.city,
        state: input.address.state,
        zip: input.address.zip,
        country: input.address.country,
        coordinates,
      },
      contact_info: input.contact_info,
      tags: input.tags,
      interests: input.interests,
      created_at: now,
      updated_at: now,
    };

    info!(%id, name = %profile.name, "profile added");
    self.profiles.push(profile);
    self.selected = Some(id.clone());

    Added { id, repair }
  }

  /// Merge `patch` into the profile with `id` and refresh `updated_at`.
  ///
  /// Returns [`Error::ProfileNotFound`] for an unknown id and
  /// [`Error::InvalidCoordinates`] for non-finite patch coordinates; the
  /// collection is unchanged in both cases.
  pub fn update(&mut self, id: &ProfileId, patch: ProfilePatch) -> Result<&Profile> {
    let index = self.position(id)?;
    patch.check_coordinates()?;

    let profile = &mut self.profiles[index];
    patch.apply(profile);
    profile.updated_at = Utc::now();

    info!(%id, "profile updated");
    Ok(&self.profiles[index])
  }

  /// Remove the profile with `id`, clearing the selection if it pointed at
  /// it. Returns the removed record.
  pub fn delete(&mut self, id: &ProfileId) -> Result<Profile> {
    let index = self.position(id)?;
    let removed = self.profiles.remove(index);

    if self.selected.as_ref() == Some(id) {
      self.selected = None;
    }

    info!(%id, "profile deleted");
    Ok(removed)
  }

  /// Select a profile by id, or clear the selection with `None`.
  pub fn set_selected_profile(&mut self, id: Option<&ProfileId>) -> Result<()> {
    match id {
      Some(id) => {
        self.position(id)?;
        self.selected = Some(id.clone());
      }
      None => self.selected = None,
    }
    Ok(())
  }

  /// Replace the active filters wholesale.
  pub fn set_search_filters(&mut self, filters: SearchFilters) {
    debug!(?filters, "search filters replaced");
    self.filters = filters;
  }

  pub fn clear_search_filters(&mut self) {
    self.set_search_filters(SearchFilters::default());
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  /// All profiles in insertion order.
  pub fn profiles(&self) -> &[Profile] { &self.profiles }

  pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
    self.profiles.iter().find(|p| &p.id == id)
  }

  pub fn len(&self) -> usize { self.profiles.len() }

  pub fn is_empty(&self) -> bool { self.profiles.is_empty() }

  pub fn selected_profile(&self) -> Option<&Profile> {
    self.selected.as_ref().and_then(|id| self.get(id))
  }

  pub fn search_filters(&self) -> &SearchFilters { &self.filters }

  /// Profiles passing the active filters, recomputed on every call.
  pub fn filtered_profiles(&self) -> Vec<&Profile> {
    self.filters.apply(&self.profiles)
  }

  /// Distinct tags across the collection, in first-seen order.
  pub fn all_tags(&self) -> Vec<&str> {
    let mut seen = HashSet::new();
    self
      .profiles
      .iter()
      .flat_map(|p| p.tags.iter().map(String::as_str))
      .filter(|t| seen.insert(*t))
      .collect()
  }

  fn position(&self, id: &ProfileId) -> Result<usize> {
    self
      .profiles
      .iter()
      .position(|p| &p.id == id)
      .ok_or_else(|| Error::ProfileNotFound(id.clone()))
  }
}
