//! External-maps deep links.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{LocationRenderer, MapTarget, Rendering};

/// Title used when a link stands for a whole list of profiles.
pub const ALL_PROFILES_TITLE: &str = "All Profiles";

/// A clickable link to an external maps site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
  /// Button label, e.g. "View Jane Cooper's Location on Google Maps".
  pub label: String,
  pub url:   String,
}

/// Characters left unescaped in a URI component: ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'!')
  .remove(b'~')
  .remove(b'*')
  .remove(b'\'')
  .remove(b'(')
  .remove(b')');

/// `https://www.google.com/maps?q=<lat>,<lng>&z=15&t=m&hl=en&title=<title>`
/// with `title` percent-encoded as a URI component (space is `%20`).
pub fn google_maps_url(lat: f64, lng: f64, title: &str) -> String {
  let title = utf8_percent_encode(title, URI_COMPONENT);
  format!("https://www.google.com/maps?q={lat},{lng}&z=15&t=m&hl=en&title={title}")
}

/// Renders every target as a Google Maps link. Needs no credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalLinkRenderer;

impl ExternalLinkRenderer {
  pub(crate) fn link_for(target: &MapTarget<'_>) -> Option<ExternalLink> {
    match target {
      MapTarget::Single(p) => {
        let c = p.address.coordinates;
        Some(ExternalLink {
          label: format!("View {}'s Location on Google Maps", p.name),
          url:   google_maps_url(c.lat, c.lng, &p.name),
        })
      }
      // A link can only centre on one place; use the first profile.
      MapTarget::Many(list) => list.first().map(|p| {
        let c = p.address.coordinates;
        ExternalLink {
          label: "View All Locations on Google Maps".to_owned(),
          url:   google_maps_url(c.lat, c.lng, ALL_PROFILES_TITLE),
        }
      }),
    }
  }
}

impl LocationRenderer for ExternalLinkRenderer {
  fn name(&self) -> &'static str { "link" }

  fn render(&self, target: &MapTarget<'_>) -> Rendering {
    Self::link_for(target).map_or(Rendering::Empty, Rendering::Link)
  }
}
