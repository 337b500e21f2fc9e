//! Core types and the in-memory profile store for geodir.
//!
//! This crate has no UI or map-provider dependencies.
//! The presentation layer and the map collaborator depend on it; it reads
//! nothing from disk except an optional seed file.

pub mod error;
pub mod filter;
pub mod patch;
pub mod profile;
pub mod seed;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use filter::SearchFilters;
pub use patch::{AddressPatch, ProfilePatch};
pub use profile::{
  Address, ContactInfo, Coordinates, NewAddress, NewProfile, Profile,
  ProfileId,
};
pub use store::{Added, CoordinateRepair, ProfileStore};

#[cfg(test)]
mod tests;
