//! Interactive-widget rendering.
//!
//! Produces the data an embedded map widget needs: markers, a viewport
//! (centre, zoom, bounds) and the provider's static-image URL. Tile
//! rendering itself belongs to the widget.

use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::{
  ExternalLink, LocationRenderer, MapTarget, Marker, Rendering,
  link::ExternalLinkRenderer,
};

/// Zoom used when a single profile is shown.
pub const SINGLE_PROFILE_ZOOM: u8 = 15;

const STATIC_IMAGE_SIZE: &str = "600x400";
const PIN_COLOR: &str = "1abc9c";

/// A latitude / longitude bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
  pub south: f64,
  pub west:  f64,
  pub north: f64,
  pub east:  f64,
}

impl Bounds {
  /// The smallest box containing every marker. `None` for no markers.
  pub fn around(markers: &[Marker]) -> Option<Self> {
    let first = markers.first()?;
    let start = Self {
      south: first.lat,
      west:  first.lng,
      north: first.lat,
      east:  first.lng,
    };
    Some(markers.iter().skip(1).fold(start, |b, m| Self {
      south: b.south.min(m.lat),
      west:  b.west.min(m.lng),
      north: b.north.max(m.lat),
      east:  b.east.max(m.lng),
    }))
  }

  /// `(lat, lng)` of the box centre.
  pub fn center(&self) -> (f64, f64) {
    ((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
  }

  /// Larger of the two spans, in degrees.
  pub fn span(&self) -> f64 { (self.north - self.south).max(self.east - self.west) }
}

/// Everything needed to draw the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
  pub markers:          Vec<Marker>,
  /// `(lat, lng)`.
  pub center:           (f64, f64),
  pub zoom:             u8,
  pub bounds:           Bounds,
  /// Provider static map with one pin per marker; `None` if the configured
  /// style does not form a valid URL.
  pub static_image_url: Option<String>,
  /// Link for opening the location outside the widget.
  pub fallback:         ExternalLink,
}

impl WidgetView {
  /// The markers as a GeoJSON `FeatureCollection`.
  pub fn geojson(&self) -> Value {
    let features: Vec<Value> = self
      .markers
      .iter()
      .map(|m| {
        json!({
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [m.lng, m.lat] },
          "properties": {
            "profileId": m.profile_id,
            "name": m.name,
            "imageUrl": m.image_url,
            "address": m.address,
          },
        })
      })
      .collect();
    json!({ "type": "FeatureCollection", "features": features })
  }
}

/// Zoom level that fits a bounding box of `span` degrees.
fn zoom_for_span(span: f64) -> u8 {
  match span {
    s if s < 0.05 => 13,
    s if s < 0.5 => 10,
    s if s < 5.0 => 7,
    s if s < 20.0 => 5,
    s if s < 60.0 => 3,
    _ => 1,
  }
}

/// Renders targets for an embedded map widget. Requires a provider
/// access token.
#[derive(Debug, Clone)]
pub struct InteractiveWidgetRenderer {
  access_token: String,
  style:        String,
}

impl InteractiveWidgetRenderer {
  pub fn new(access_token: impl Into<String>, style: impl Into<String>) -> Self {
    Self {
      access_token: access_token.into(),
      style:        style.into(),
    }
  }

  fn static_image_url(&self, view: &WidgetViewParts<'_>) -> Option<String> {
    let pins = view
      .markers
      .iter()
      .map(|m| format!("pin-s+{PIN_COLOR}({},{})", m.lng, m.lat))
      .collect::<Vec<_>>()
      .join(",");
    let viewport = if view.markers.len() == 1 {
      let (lat, lng) = view.center;
      format!("{lng},{lat},{}", view.zoom)
    } else {
      "auto".to_owned()
    };
    let raw = format!(
      "https://api.mapbox.com/styles/v1/{}/static/{pins}/{viewport}/{STATIC_IMAGE_SIZE}",
      self.style
    );
    match Url::parse(&raw) {
      Ok(mut url) => {
        url
          .query_pairs_mut()
          .append_pair("access_token", &self.access_token);
        Some(url.into())
      }
      Err(e) => {
        debug!(error = %e, style = %self.style, "static map url rejected");
        None
      }
    }
  }
}

struct WidgetViewParts<'a> {
  markers: &'a [Marker],
  center:  (f64, f64),
  zoom:    u8,
}

impl LocationRenderer for InteractiveWidgetRenderer {
  fn name(&self) -> &'static str { "widget" }

  fn render(&self, target: &MapTarget<'_>) -> Rendering {
    let markers: Vec<Marker> = target
      .profiles()
      .iter()
      .map(|p| Marker::from_profile(p))
      .collect();
    let (Some(bounds), Some(fallback)) = (
      Bounds::around(&markers),
      ExternalLinkRenderer::link_for(target),
    ) else {
      return Rendering::Empty;
    };

    let zoom = match target {
      MapTarget::Single(_) => SINGLE_PROFILE_ZOOM,
      MapTarget::Many(_) => zoom_for_span(bounds.span()),
    };
    let center = bounds.center();
    let static_image_url = self.static_image_url(&WidgetViewParts {
      markers: &markers,
      center,
      zoom,
    });

    Rendering::Widget(WidgetView {
      markers,
      center,
      zoom,
      bounds,
      static_image_url,
      fallback,
    })
  }
}
