//! Scenario tests for `ProfileStore`.

use chrono::Utc;

use crate::{
  AddressPatch, Coordinates, Error, NewAddress, NewProfile, Profile,
  ProfileId, ProfilePatch, ProfileStore, SearchFilters,
  profile::{
    Address, ContactInfo, FALLBACK_COORDINATES, PLACEHOLDER_IMAGE_URL,
  },
};

fn profile(id: &str, name: &str, city: &str, tags: &[&str]) -> Profile {
  let now = Utc::now();
  Profile {
    id:           ProfileId::from(id),
    name:         name.into(),
    image_url:    PLACEHOLDER_IMAGE_URL.into(),
    description:  format!("{name} from {city}"),
    address:      Address {
      street:      "1 Main Rd".into(),
      city:        city.into(),
      state:       "State".into(),
      zip:         "400001".into(),
      country:     "India".into(),
      coordinates: Coordinates::new(19.076, 72.8777),
    },
    contact_info: None,
    tags:         tags.iter().map(|t| t.to_string()).collect(),
    interests:    Vec::new(),
    created_at:   now,
    updated_at:   now,
  }
}

fn india_store() -> ProfileStore {
  ProfileStore::with_seed(vec![
    profile("b", "Asha Rao", "Bangalore", &["Design", "Maps"]),
    profile("m", "Vikram Shah", "Mumbai", &["Engineering"]),
  ])
  .expect("seed")
}

fn new_profile(name: &str) -> NewProfile {
  NewProfile {
    address: NewAddress {
      city: "Pune".into(),
      coordinates: Some(Coordinates::new(18.52, 73.85)),
      ..NewAddress::default()
    },
    ..NewProfile::new(name, "Desc")
  }
}

fn names(profiles: &[&Profile]) -> Vec<String> {
  profiles.iter().map(|p| p.name.clone()).collect()
}

// ─── Add ─────────────────────────────────────────────────────────────────────

#[test]
fn add_assigns_id_and_equal_timestamps() {
  let mut store = india_store();
  let added = store.add(new_profile("Test"));
  assert!(added.repair.is_none());

  let matching: Vec<_> =
    store.profiles().iter().filter(|p| p.id == added.id).collect();
  assert_eq!(matching.len(), 1);
  assert_eq!(matching[0].created_at, matching[0].updated_at);
  assert_eq!(store.len(), 3);
}

#[test]
fn add_appends_in_insertion_order_and_selects() {
  let mut store = india_store();
  let first = store.add(new_profile("First"));
  let second = store.add(new_profile("Second"));

  let order: Vec<_> = store.profiles().iter().map(|p| p.id.clone()).collect();
  assert_eq!(order[2], first.id);
  assert_eq!(order[3], second.id);
  assert_eq!(store.selected_profile().unwrap().id, second.id);
}

#[test]
fn add_without_coordinates_uses_fallback_and_selects() {
  let mut store = ProfileStore::new();
  let added = store.add(NewProfile::new("Test", "Desc"));

  let repair = added.repair.expect("repair notice");
  assert_eq!(repair.rejected, None);
  assert_eq!(repair.substituted, FALLBACK_COORDINATES);

  let selected = store.selected_profile().unwrap();
  assert_eq!(selected.id, added.id);
  assert_eq!(selected.address.coordinates, FALLBACK_COORDINATES);
}

#[test]
fn add_with_nan_coordinates_uses_fallback() {
  let mut store = ProfileStore::new();
  let mut input = NewProfile::new("Test", "Desc");
  input.address.coordinates = Some(Coordinates::new(f64::NAN, f64::NAN));

  let added = store.add(input);
  assert!(added.repair.unwrap().rejected.unwrap().lat.is_nan());
  assert_eq!(
    store.get(&added.id).unwrap().address.coordinates,
    FALLBACK_COORDINATES
  );
}

#[test]
fn add_with_lenient_form_input_repairs_bad_axis() {
  let mut store = ProfileStore::new();
  let mut input = NewProfile::new("Test", "Desc");
  input.address.coordinates = Some(Coordinates::parse_lenient("12.3", "n/a"));

  let added = store.add(input);
  assert!(added.repair.is_some());
  assert_eq!(
    store.get(&added.id).unwrap().address.coordinates,
    FALLBACK_COORDINATES
  );
}

#[test]
fn add_defaults_blank_image_to_placeholder() {
  let mut store = ProfileStore::new();
  let mut input = new_profile("Test");
  input.image_url = Some("  ".into());
  let id = store.add(input).id;
  assert_eq!(store.get(&id).unwrap().image_url, PLACEHOLDER_IMAGE_URL);

  let mut input = new_profile("Pic");
  input.image_url = Some("https://example.com/p.png".into());
  let id = store.add(input).id;
  assert_eq!(store.get(&id).unwrap().image_url, "https://example.com/p.png");
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[test]
fn update_changes_only_the_patched_field() {
  let mut store = india_store();
  let id = ProfileId::from("b");
  let before = store.get(&id).unwrap().clone();

  let after = store
    .update(&id, ProfilePatch::new().name("Asha R."))
    .unwrap()
    .clone();

  assert_eq!(after.name, "Asha R.");
  assert!(after.updated_at >= before.updated_at);
  let normalised = Profile {
    name: before.name.clone(),
    updated_at: before.updated_at,
    ..after
  };
  assert_eq!(normalised, before);
}

#[test]
fn update_merges_address_fields_individually() {
  let mut store = india_store();
  let id = ProfileId::from("m");
  let patch = ProfilePatch::new().address(AddressPatch {
    city: Some("Navi Mumbai".into()),
    ..AddressPatch::default()
  });
  let updated = store.update(&id, patch).unwrap();

  assert_eq!(updated.address.city, "Navi Mumbai");
  assert_eq!(updated.address.street, "1 Main Rd");
  assert_eq!(updated.address.coordinates, Coordinates::new(19.076, 72.8777));
}

#[test]
fn update_replaces_and_clears_whole_lists_and_contact() {
  let mut store = india_store();
  let id = ProfileId::from("b");
  store
    .update(
      &id,
      ProfilePatch::new()
        .tags(["Maps"])
        .contact_info(Some(ContactInfo {
          email:   "asha@example.com".into(),
          phone:   "+91 80".into(),
          website: None,
        })),
    )
    .unwrap();
  assert_eq!(store.get(&id).unwrap().tags, vec!["Maps"]);
  assert!(store.get(&id).unwrap().contact_info.is_some());

  store
    .update(&id, ProfilePatch::new().contact_info(None))
    .unwrap();
  assert!(store.get(&id).unwrap().contact_info.is_none());
}

#[test]
fn update_unknown_id_reports_not_found_and_changes_nothing() {
  let mut store = india_store();
  let before = store.profiles().to_vec();

  let err = store
    .update(&ProfileId::from("zzz"), ProfilePatch::new().name("X"))
    .unwrap_err();
  assert!(err.is_not_found());
  assert_eq!(store.profiles(), before.as_slice());
}

#[test]
fn update_with_invalid_coordinates_is_rejected_untouched() {
  let mut store = india_store();
  let id = ProfileId::from("b");
  let before = store.get(&id).unwrap().clone();

  let err = store
    .update(
      &id,
      ProfilePatch::new()
        .name("Changed")
        .coordinates(Coordinates::new(f64::NAN, 1.0)),
    )
    .unwrap_err();
  assert!(matches!(err, Error::InvalidCoordinates { .. }));
  assert_eq!(store.get(&id).unwrap(), &before);
}

#[test]
fn selection_reflects_updates() {
  let mut store = india_store();
  let id = ProfileId::from("m");
  store.set_selected_profile(Some(&id)).unwrap();
  store
    .update(&id, ProfilePatch::new().description("Updated"))
    .unwrap();
  assert_eq!(store.selected_profile().unwrap().description, "Updated");
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[test]
fn delete_is_idempotent() {
  let mut store = india_store();
  let id = ProfileId::from("b");

  let removed = store.delete(&id).unwrap();
  assert_eq!(removed.name, "Asha Rao");
  assert_eq!(store.len(), 1);

  assert!(store.delete(&id).unwrap_err().is_not_found());
  assert_eq!(store.len(), 1);
}

#[test]
fn delete_selected_clears_selection() {
  let mut store = india_store();
  let added = store.add(new_profile("Temp"));
  assert!(store.selected_profile().is_some());

  store.delete(&added.id).unwrap();
  assert!(store.selected_profile().is_none());
}

#[test]
fn delete_other_keeps_selection() {
  let mut store = india_store();
  let keep = ProfileId::from("m");
  store.set_selected_profile(Some(&keep)).unwrap();
  store.delete(&ProfileId::from("b")).unwrap();
  assert_eq!(store.selected_profile().unwrap().id, keep);
}

// ─── Selection ───────────────────────────────────────────────────────────────

#[test]
fn selecting_unknown_id_keeps_previous_selection() {
  let mut store = india_store();
  let id = ProfileId::from("b");
  store.set_selected_profile(Some(&id)).unwrap();

  assert!(
    store
      .set_selected_profile(Some(&ProfileId::from("nope")))
      .is_err()
  );
  assert_eq!(store.selected_profile().unwrap().id, id);

  store.set_selected_profile(None).unwrap();
  assert!(store.selected_profile().is_none());
}

// ─── Filtering ───────────────────────────────────────────────────────────────

#[test]
fn empty_filters_return_everything_in_order() {
  let store = ProfileStore::from_builtin_seed();
  let all: Vec<_> = store.profiles().iter().collect();
  assert_eq!(store.filtered_profiles(), all);
}

#[test]
fn location_filter_is_case_insensitive() {
  let mut store = india_store();
  store.set_search_filters(SearchFilters::new().location("mumbai"));
  assert_eq!(names(&store.filtered_profiles()), vec!["Vikram Shah"]);
}

#[test]
fn location_filter_matches_any_text_field() {
  let mut store = ProfileStore::from_builtin_seed();
  store.set_search_filters(SearchFilters::new().location("peachtree"));
  assert_eq!(names(&store.filtered_profiles()), vec!["Sarah Williams"]);

  store.set_search_filters(SearchFilters::new().location("usa"));
  assert_eq!(store.filtered_profiles().len(), 6);

  store.set_search_filters(SearchFilters::new().location("021"));
  assert_eq!(names(&store.filtered_profiles()), vec!["David Chen"]);
}

#[test]
fn name_filter_is_case_insensitive_substring() {
  let mut store = ProfileStore::from_builtin_seed();
  store.set_search_filters(SearchFilters::new().name("JOHN"));
  assert_eq!(names(&store.filtered_profiles()), vec!["Michael Johnson"]);
}

#[test]
fn tag_filter_is_exact_and_case_sensitive() {
  let mut store = ProfileStore::from_builtin_seed();
  store.set_search_filters(SearchFilters::new().tag("Product"));
  assert_eq!(names(&store.filtered_profiles()), vec![
    "Jane Cooper",
    "Robert Kim"
  ]);

  store.set_search_filters(SearchFilters::new().tag("product"));
  assert!(store.filtered_profiles().is_empty());

  store.set_search_filters(SearchFilters::new().tag("Prod"));
  assert!(store.filtered_profiles().is_empty());
}

#[test]
fn tag_filter_requires_every_tag() {
  let mut store = ProfileStore::from_builtin_seed();
  store.set_search_filters(SearchFilters::new().tag("Product").tag("SaaS"));
  assert_eq!(names(&store.filtered_profiles()), vec!["Robert Kim"]);
}

#[test]
fn criteria_combine_with_and() {
  let mut store = ProfileStore::from_builtin_seed();
  store.set_search_filters(
    SearchFilters::new().name("kim").location("seattle").tag("Strategy"),
  );
  assert_eq!(names(&store.filtered_profiles()), vec!["Robert Kim"]);

  store.set_search_filters(
    SearchFilters::new().name("jane").location("seattle"),
  );
  assert!(store.filtered_profiles().is_empty());
}

#[test]
fn set_search_filters_replaces_wholesale() {
  let mut store = ProfileStore::from_builtin_seed();
  store.set_search_filters(SearchFilters::new().name("jane").tag("Design"));
  store.set_search_filters(SearchFilters::new().location("austin"));

  assert_eq!(store.search_filters().name, None);
  assert!(store.search_filters().tags.is_empty());
  assert_eq!(names(&store.filtered_profiles()), vec!["Emily Rodriguez"]);

  store.clear_search_filters();
  assert_eq!(store.filtered_profiles().len(), 6);
}

#[test]
fn filtered_view_tracks_mutations() {
  let mut store = india_store();
  store.set_search_filters(SearchFilters::new().location("pune"));
  assert!(store.filtered_profiles().is_empty());

  store.add(new_profile("Newcomer"));
  assert_eq!(names(&store.filtered_profiles()), vec!["Newcomer"]);
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

#[test]
fn seed_with_duplicate_ids_is_rejected() {
  let err = ProfileStore::with_seed(vec![
    profile("x", "One", "Goa", &[]),
    profile("x", "Two", "Goa", &[]),
  ])
  .unwrap_err();
  assert!(matches!(err, Error::DuplicateId(id) if id.as_str() == "x"));
}

#[test]
fn seed_with_invalid_coordinates_is_repaired() {
  let mut broken = profile("x", "One", "Goa", &[]);
  broken.address.coordinates = Coordinates::MISSING;
  let store = ProfileStore::with_seed(vec![broken]).unwrap();
  assert_eq!(
    store.profiles()[0].address.coordinates,
    FALLBACK_COORDINATES
  );
}

#[test]
fn all_tags_are_distinct_in_first_seen_order() {
  let store = ProfileStore::from_builtin_seed();
  let tags = store.all_tags();
  assert_eq!(&tags[..4], &["Design", "Research", "Product", "Engineering"]);
  assert_eq!(tags.iter().filter(|t| **t == "Strategy").count(), 1);
}
