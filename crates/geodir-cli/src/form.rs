//! Add / edit dialog state.
//!
//! The form holds free text for every editable field. Submitting turns it
//! into a [`NewProfile`] (add) or a [`ProfilePatch`] holding only the fields
//! that changed (edit).

use geodir_core::{
  AddressPatch, ContactInfo, Coordinates, NewAddress, NewProfile, Profile,
  ProfileId, ProfilePatch, filter::parse_tags,
};

// ─── Fields ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Name,
  ImageUrl,
  Description,
  Street,
  City,
  State,
  Zip,
  Country,
  Lat,
  Lng,
  Email,
  Phone,
  Website,
  Tags,
  Interests,
}

impl Field {
  pub const ALL: [Field; 15] = [
    Field::Name,
    Field::ImageUrl,
    Field::Description,
    Field::Street,
    Field::City,
    Field::State,
    Field::Zip,
    Field::Country,
    Field::Lat,
    Field::Lng,
    Field::Email,
    Field::Phone,
    Field::Website,
    Field::Tags,
    Field::Interests,
  ];

  pub fn label(self) -> &'static str {
    match self {
      Field::Name => "Name *",
      Field::ImageUrl => "Image URL",
      Field::Description => "Description *",
      Field::Street => "Street",
      Field::City => "City",
      Field::State => "State",
      Field::Zip => "ZIP",
      Field::Country => "Country",
      Field::Lat => "Latitude",
      Field::Lng => "Longitude",
      Field::Email => "Email",
      Field::Phone => "Phone",
      Field::Website => "Website",
      Field::Tags => "Tags (comma separated)",
      Field::Interests => "Interests (comma separated)",
    }
  }

  fn index(self) -> usize {
    Field::ALL.iter().position(|f| *f == self).unwrap_or_default()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
  Add,
  Edit(ProfileId),
}

// ─── Form ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ProfileForm {
  pub mode:   FormMode,
  pub cursor: usize,
  values:     [String; 15],
  /// Values the form was opened with; edits are diffed against these.
  original:   [String; 15],
}

impl ProfileForm {
  /// An empty add dialog.
  pub fn add() -> Self {
    Self {
      mode:     FormMode::Add,
      cursor:   0,
      values:   Default::default(),
      original: Default::default(),
    }
  }

  /// An edit dialog pre-filled from `profile`.
  pub fn edit(profile: &Profile) -> Self {
    let contact = profile.contact_info.clone().unwrap_or_default();
    let values = [
      profile.name.clone(),
      profile.image_url.clone(),
      profile.description.clone(),
      profile.address.street.clone(),
      profile.address.city.clone(),
      profile.address.state.clone(),
      profile.address.zip.clone(),
      profile.address.country.clone(),
      profile.address.coordinates.lat.to_string(),
      profile.address.coordinates.lng.to_string(),
      contact.email,
      contact.phone,
      contact.website.unwrap_or_default(),
      profile.tags.join(", "),
      profile.interests.join(", "),
    ];
    Self {
      mode: FormMode::Edit(profile.id.clone()),
      cursor: 0,
      original: values.clone(),
      values,
    }
  }

  pub fn title(&self) -> &'static str {
    match self.mode {
      FormMode::Add => " Add New Profile ",
      FormMode::Edit(_) => " Edit Profile ",
    }
  }

  pub fn value(&self, field: Field) -> &str { &self.values[field.index()] }

  pub fn set(&mut self, field: Field, value: impl Into<String>) {
    self.values[field.index()] = value.into();
  }

  pub fn current_field(&self) -> Field { Field::ALL[self.cursor] }

  // ── Editing ───────────────────────────────────────────────────────────

  pub fn next_field(&mut self) { self.cursor = (self.cursor + 1) % Field::ALL.len(); }

  pub fn prev_field(&mut self) {
    self.cursor = (self.cursor + Field::ALL.len() - 1) % Field::ALL.len();
  }

  pub fn push_char(&mut self, c: char) { self.values[self.cursor].push(c); }

  pub fn pop_char(&mut self) { self.values[self.cursor].pop(); }

  // ── Conversion ────────────────────────────────────────────────────────

  fn text(&self, field: Field) -> String { self.value(field).trim().to_owned() }

  fn changed(&self, field: Field) -> bool {
    let i = field.index();
    self.values[i].trim() != self.original[i].trim()
  }

  fn contact_info(&self) -> Option<ContactInfo> {
    let email = self.text(Field::Email);
    let phone = self.text(Field::Phone);
    let website = self.text(Field::Website);
    if email.is_empty() && phone.is_empty() && website.is_empty() {
      return None;
    }
    Some(ContactInfo {
      email,
      phone,
      website: (!website.is_empty()).then_some(website),
    })
  }

  /// Both coordinate fields blank means "not supplied".
  fn coordinates(&self) -> Option<Coordinates> {
    let (lat, lng) = (self.value(Field::Lat), self.value(Field::Lng));
    if lat.trim().is_empty() && lng.trim().is_empty() {
      None
    } else {
      Some(Coordinates::parse_lenient(lat, lng))
    }
  }

  pub fn to_new_profile(&self) -> NewProfile {
    let image_url = self.text(Field::ImageUrl);
    NewProfile {
      name:         self.text(Field::Name),
      description:  self.text(Field::Description),
      image_url:    (!image_url.is_empty()).then_some(image_url),
      address:      NewAddress {
        street:      self.text(Field::Street),
        city:        self.text(Field::City),
        state:       self.text(Field::State),
        zip:         self.text(Field::Zip),
        country:     self.text(Field::Country),
        coordinates: self.coordinates(),
      },
      contact_info: self.contact_info(),
      tags:         parse_tags(self.value(Field::Tags)),
      interests:    parse_tags(self.value(Field::Interests)),
    }
  }

  /// A patch containing exactly the fields edited since the form opened.
  pub fn to_patch(&self) -> ProfilePatch {
    let pick = |field: Field| self.changed(field).then(|| self.text(field));

    let address = AddressPatch {
      street:      pick(Field::Street),
      city:        pick(Field::City),
      state:       pick(Field::State),
      zip:         pick(Field::Zip),
      country:     pick(Field::Country),
      coordinates: (self.changed(Field::Lat) || self.changed(Field::Lng))
        .then(|| {
          Coordinates::parse_lenient(self.value(Field::Lat), self.value(Field::Lng))
        }),
    };
    let contact_changed = [Field::Email, Field::Phone, Field::Website]
      .into_iter()
      .any(|f| self.changed(f));

    ProfilePatch {
      name:         pick(Field::Name),
      description:  pick(Field::Description),
      image_url:    pick(Field::ImageUrl),
      address:      (!address.is_empty()).then_some(address),
      contact_info: contact_changed.then(|| self.contact_info()),
      tags:         self
        .changed(Field::Tags)
        .then(|| parse_tags(self.value(Field::Tags))),
      interests:    self
        .changed(Field::Interests)
        .then(|| parse_tags(self.value(Field::Interests))),
    }
  }
}
