//! Plain-text and JSON output for the non-interactive subcommands.

use geodir_core::Profile;
use geodir_map::Rendering;
use serde_json::{Value, json};

/// One line per profile: id, name, location summary and tags.
pub fn profile_lines(profiles: &[&Profile]) -> Vec<String> {
  profiles
    .iter()
    .map(|p| {
      let mut line = format!("{:<38} {}", p.id.as_str(), p.name);
      let summary = p.address.summary();
      if !summary.is_empty() {
        line.push_str(&format!(" ({summary})"));
      }
      if !p.tags.is_empty() {
        line.push_str(&format!(" [{}]", p.tags.join(", ")));
      }
      line
    })
    .collect()
}

pub fn profiles_json(profiles: &[&Profile]) -> serde_json::Result<String> {
  serde_json::to_string_pretty(profiles)
}

/// The map data for `rendering`: the widget's GeoJSON and static image, or
/// the external link.
pub fn rendering_json(rendering: &Rendering) -> Value {
  match rendering {
    Rendering::Widget(view) => json!({
      "kind": "widget",
      "center": { "lat": view.center.0, "lng": view.center.1 },
      "zoom": view.zoom,
      "staticImageUrl": view.static_image_url,
      "markers": view.geojson(),
      "link": { "label": view.fallback.label, "url": view.fallback.url },
    }),
    Rendering::Link(link) => json!({
      "kind": "link",
      "link": { "label": link.label, "url": link.url },
    }),
    Rendering::Empty => json!({
      "kind": "empty",
      "message": geodir_map::NO_LOCATION_MESSAGE,
    }),
  }
}

/// Label and URL on separate lines, or the no-location message.
pub fn rendering_text(rendering: &Rendering) -> String {
  match rendering.link() {
    Some(link) => format!("{}\n{}", link.label, link.url),
    None => geodir_map::NO_LOCATION_MESSAGE.to_owned(),
  }
}

#[cfg(test)]
mod tests {
  use geodir_core::seed;
  use geodir_map::{ExternalLinkRenderer, LocationRenderer, MapTarget};

  use super::*;

  #[test]
  fn lines_include_location_and_tags() {
    let profiles = seed::builtin();
    let lines = profile_lines(&[&profiles[0]]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with('1'));
    assert!(lines[0].ends_with("Jane Cooper (San Francisco, CA) [Design, Research, Product]"));
  }

  #[test]
  fn json_is_camel_case() {
    let profiles = seed::builtin();
    let out = profiles_json(&[&profiles[1]]).unwrap();
    assert!(out.contains("\"imageUrl\""));
    assert!(out.contains("\"contactInfo\""));
    let parsed: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["address"]["coordinates"]["lat"], 40.7128);
  }

  #[test]
  fn link_rendering_text_and_json() {
    let profiles = seed::builtin();
    let rendering = ExternalLinkRenderer.render(&MapTarget::Single(&profiles[2]));
    let text = rendering_text(&rendering);
    assert!(text.starts_with("View Sarah Williams's Location on Google Maps\nhttps://www.google.com/maps?q=33.749,-84.388&"));

    let value = rendering_json(&rendering);
    assert_eq!(value["kind"], "link");
    assert!(value["link"]["url"].as_str().unwrap().ends_with("title=Sarah%20Williams"));
  }

  #[test]
  fn empty_rendering_reports_no_location() {
    assert_eq!(rendering_text(&Rendering::Empty), geodir_map::NO_LOCATION_MESSAGE);
    assert_eq!(rendering_json(&Rendering::Empty)["kind"], "empty");
  }
}
