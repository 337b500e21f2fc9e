//! Bootstrap data: the built-in directory and JSON seed files.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
  Error, Result,
  profile::{Address, ContactInfo, Coordinates, Profile, ProfileId},
};

/// Load a JSON array of profiles from `path`.
///
/// Coordinates that are missing or non-numeric deserialize as NaN and are
/// repaired by [`crate::store::ProfileStore::with_seed`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Profile>> {
  let path = path.as_ref();
  let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  let profiles: Vec<Profile> = serde_json::from_str(&raw)?;
  info!(path = %path.display(), count = profiles.len(), "seed file loaded");
  Ok(profiles)
}

struct Seed {
  id:          &'static str,
  name:        &'static str,
  image:       &'static str,
  description: &'static str,
  address:     [&'static str; 5],
  lat_lng:     (f64, f64),
  email:       &'static str,
  phone:       &'static str,
  website:     Option<&'static str>,
  tags:        [&'static str; 3],
  interests:   [&'static str; 3],
  created_at:  &'static str,
  updated_at:  &'static str,
}

const IMAGE_BASE: &str = "https://images.unsplash.com/photo-";
const IMAGE_PARAMS: &str = "?ixlib=rb-1.2.1&auto=format&fit=crop&w=256&q=80";

const SEEDS: [Seed; 6] = [
  Seed {
    id:          "1",
    name:        "Jane Cooper",
    image:       "1494790108377-be9c29b29330",
    description: "UX Designer & Researcher with 5+ years of experience creating user-centric digital products",
    address:     ["123 Market St", "San Francisco", "CA", "94105", "USA"],
    lat_lng:     (37.7749, -122.4194),
    email:       "jane.cooper@example.com",
    phone:       "+1 (415) 555-1234",
    website:     Some("janecooper.design"),
    tags:        ["Design", "Research", "Product"],
    interests:   ["Photography", "Hiking", "Typography"],
    created_at:  "2023-01-15T12:00:00Z",
    updated_at:  "2023-06-20T16:30:00Z",
  },
  Seed {
    id:          "2",
    name:        "Michael Johnson",
    image:       "1568602471122-7832951cc4c5",
    description: "Software Engineer specializing in full-stack development with React and Node.js",
    address:     ["456 5th Ave", "New York", "NY", "10018", "USA"],
    lat_lng:     (40.7128, -74.0060),
    email:       "michael.johnson@example.com",
    phone:       "+1 (212) 555-5678",
    website:     None,
    tags:        ["Engineering", "JavaScript", "React"],
    interests:   ["Gaming", "Machine Learning", "Coffee"],
    created_at:  "2023-02-10T10:15:00Z",
    updated_at:  "2023-05-18T14:45:00Z",
  },
  Seed {
    id:          "3",
    name:        "Sarah Williams",
    image:       "1544005313-94ddf0286df2",
    description: "Marketing Specialist with expertise in digital campaigns and data-driven strategies",
    address:     ["789 Peachtree St", "Atlanta", "GA", "30308", "USA"],
    lat_lng:     (33.7490, -84.3880),
    email:       "sarah.williams@example.com",
    phone:       "+1 (404) 555-9012",
    website:     Some("sarahwilliams.marketing"),
    tags:        ["Marketing", "Analytics", "Strategy"],
    interests:   ["Yoga", "Travel", "Cooking"],
    created_at:  "2023-03-05T09:30:00Z",
    updated_at:  "2023-07-12T11:20:00Z",
  },
  Seed {
    id:          "4",
    name:        "David Chen",
    image:       "1547425260-76bcadfb4f2c",
    description: "Data Scientist focusing on predictive analytics and machine learning algorithms",
    address:     ["101 Main St", "Boston", "MA", "02110", "USA"],
    lat_lng:     (42.3601, -71.0589),
    email:       "david.chen@example.com",
    phone:       "+1 (617) 555-3456",
    website:     None,
    tags:        ["Data Science", "Python", "ML"],
    interests:   ["Chess", "Reading", "Music"],
    created_at:  "2023-01-25T15:45:00Z",
    updated_at:  "2023-06-30T13:10:00Z",
  },
  Seed {
    id:          "5",
    name:        "Emily Rodriguez",
    image:       "1573496359142-b8d87734a5a2",
    description: "Project Manager with 8+ years leading cross-functional teams in tech and finance sectors",
    address:     ["555 Congress Ave", "Austin", "TX", "78701", "USA"],
    lat_lng:     (30.2672, -97.7431),
    email:       "emily.rodriguez@example.com",
    phone:       "+1 (512) 555-7890",
    website:     Some("emilyrodriguez.pm"),
    tags:        ["Project Management", "Agile", "Leadership"],
    interests:   ["Running", "Dogs", "Interior Design"],
    created_at:  "2023-04-12T08:20:00Z",
    updated_at:  "2023-08-05T16:50:00Z",
  },
  Seed {
    id:          "6",
    name:        "Robert Kim",
    image:       "1500648767791-00dcc994a43e",
    description: "Product Manager focused on building scalable B2B SaaS solutions",
    address:     ["222 Pine St", "Seattle", "WA", "98101", "USA"],
    lat_lng:     (47.6062, -122.3321),
    email:       "robert.kim@example.com",
    phone:       "+1 (206) 555-2345",
    website:     None,
    tags:        ["Product", "SaaS", "Strategy"],
    interests:   ["Rock Climbing", "Photography", "Cooking"],
    created_at:  "2023-02-18T11:40:00Z",
    updated_at:  "2023-07-25T09:15:00Z",
  },
];

/// The directory's built-in bootstrap profiles.
pub fn builtin() -> Vec<Profile> { SEEDS.iter().map(Seed::to_profile).collect() }

impl Seed {
  fn to_profile(&self) -> Profile {
    let [street, city, state, zip, country] = self.address.map(str::to_owned);
    Profile {
      id: ProfileId::from(self.id),
      name: self.name.to_owned(),
      image_url: format!("{IMAGE_BASE}{}{IMAGE_PARAMS}", self.image),
      description: self.description.to_owned(),
      address: Address {
        street,
        city,
        state,
        zip,
        country,
        coordinates: Coordinates::new(self.lat_lng.0, self.lat_lng.1),
      },
      contact_info: Some(ContactInfo {
        email:   self.email.to_owned(),
        phone:   self.phone.to_owned(),
        website: self.website.map(str::to_owned),
      }),
      tags: self.tags.map(str::to_owned).to_vec(),
      interests: self.interests.map(str::to_owned).to_vec(),
      created_at: timestamp(self.created_at),
      updated_at: timestamp(self.updated_at),
    }
  }
}

/// Seed timestamps are compile-time literals in RFC 3339 form.
fn timestamp(s: &str) -> DateTime<Utc> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use std::{collections::HashSet, io::Write as _};

  use super::*;

  #[test]
  fn builtin_seed_has_unique_ids_and_valid_coordinates() {
    let profiles = builtin();
    assert_eq!(profiles.len(), 6);
    let ids: HashSet<_> = profiles.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids.len(), profiles.len());
    assert!(profiles.iter().all(|p| p.address.coordinates.is_valid()));
    assert!(profiles.iter().all(|p| p.created_at <= p.updated_at));
  }

  #[test]
  fn builtin_timestamps_parse() {
    let jane = &builtin()[0];
    assert_eq!(jane.created_at.to_rfc3339(), "2023-01-15T12:00:00+00:00");
  }

  #[test]
  fn load_file_reads_profile_array() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&builtin()[..2]).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = load_file(file.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].name, "Michael Johnson");
  }

  #[test]
  fn load_file_missing_path_reports_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err}");
  }

  #[test]
  fn load_file_rejects_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    assert!(matches!(load_file(file.path()), Err(Error::Json(_))));
  }
}
