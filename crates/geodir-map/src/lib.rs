//! Location visualisation for geodir profiles.
//!
//! A [`LocationRenderer`] turns one profile or a list of profiles into a
//! [`Rendering`]: either an interactive-widget view (markers, viewport,
//! provider static image) or a plain external-maps deep link. Which
//! variant a consumer gets is decided once, from [`MapConfig`], by
//! [`renderer_for`]. Renderers never touch the store.
//!
//! # Quick start
//!
//! ```no_run
//! use geodir_core::ProfileStore;
//! use geodir_map::{MapConfig, MapTarget, Rendering, renderer_for};
//!
//! let store = ProfileStore::from_builtin_seed();
//! let renderer = renderer_for(&MapConfig::default());
//! if let Rendering::Link(link) = renderer.render(&MapTarget::Single(&store.profiles()[0])) {
//!   println!("{}: {}", link.label, link.url);
//! }
//! ```

pub mod config;
pub mod link;
pub mod marker;
pub mod widget;

pub use config::{MapConfig, MapMode};
pub use link::{ExternalLink, ExternalLinkRenderer, google_maps_url};
pub use marker::Marker;
pub use widget::{Bounds, InteractiveWidgetRenderer, WidgetView};

use geodir_core::Profile;
use tracing::{info, warn};

pub const NO_LOCATION_MESSAGE: &str = "No location data available";

// ─── Inputs and outputs ──────────────────────────────────────────────────────

/// What to show on the map.
#[derive(Debug, Clone)]
pub enum MapTarget<'a> {
  Single(&'a Profile),
  Many(Vec<&'a Profile>),
}

impl<'a> MapTarget<'a> {
  /// The selected profile if there is one, otherwise the whole visible
  /// list.
  pub fn for_view(selected: Option<&'a Profile>, visible: Vec<&'a Profile>) -> Self {
    match selected {
      Some(p) => Self::Single(p),
      None => Self::Many(visible),
    }
  }

  pub fn profiles(&self) -> &[&'a Profile] {
    match self {
      Self::Single(p) => std::slice::from_ref(p),
      Self::Many(list) => list,
    }
  }
}

/// The output of a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendering {
  Widget(WidgetView),
  Link(ExternalLink),
  /// Nothing to place on a map ([`NO_LOCATION_MESSAGE`]).
  Empty,
}

impl Rendering {
  /// The external link for this rendering, if any. Widget views carry one
  /// as a fallback.
  pub fn link(&self) -> Option<&ExternalLink> {
    match self {
      Self::Widget(view) => Some(&view.fallback),
      Self::Link(link) => Some(link),
      Self::Empty => None,
    }
  }
}

// ─── Capability ──────────────────────────────────────────────────────────────

/// A strategy for showing profile locations.
pub trait LocationRenderer {
  /// Short identifier used in logs and the status line.
  fn name(&self) -> &'static str;

  fn render(&self, target: &MapTarget<'_>) -> Rendering;
}

/// Pick the renderer described by `config`.
///
/// `auto` uses the interactive widget only when a provider access token is
/// configured. `widget` without a token degrades to the link renderer.
pub fn renderer_for(config: &MapConfig) -> Box<dyn LocationRenderer> {
  let token = config.access_token();
  let renderer: Box<dyn LocationRenderer> = match (config.mode, token) {
    (MapMode::Link, _) => Box::new(ExternalLinkRenderer),
    (MapMode::Auto | MapMode::Widget, Some(token)) => Box::new(
      InteractiveWidgetRenderer::new(token, config.style.clone()),
    ),
    (MapMode::Widget, None) => {
      warn!("map widget requested without an access token; using external links");
      Box::new(ExternalLinkRenderer)
    }
    (MapMode::Auto, None) => Box::new(ExternalLinkRenderer),
  };
  info!(renderer = renderer.name(), "location renderer selected");
  renderer
}

#[cfg(test)]
mod tests {
  use geodir_core::ProfileStore;

  use super::*;

  fn config(mode: MapMode, token: Option<&str>) -> MapConfig {
    MapConfig {
      mode,
      access_token: token.map(str::to_owned),
      ..MapConfig::default()
    }
  }

  #[test]
  fn auto_mode_follows_token_presence() {
    assert_eq!(renderer_for(&config(MapMode::Auto, None)).name(), "link");
    assert_eq!(renderer_for(&config(MapMode::Auto, Some(""))).name(), "link");
    assert_eq!(
      renderer_for(&config(MapMode::Auto, Some("pk.test"))).name(),
      "widget"
    );
  }

  #[test]
  fn explicit_modes() {
    assert_eq!(
      renderer_for(&config(MapMode::Link, Some("pk.test"))).name(),
      "link"
    );
    assert_eq!(renderer_for(&config(MapMode::Widget, None)).name(), "link");
  }

  #[test]
  fn for_view_prefers_selection() {
    let store = ProfileStore::from_builtin_seed();
    let all: Vec<_> = store.profiles().iter().collect();

    let target = MapTarget::for_view(Some(&store.profiles()[2]), all.clone());
    assert!(matches!(target, MapTarget::Single(p) if p.name == "Sarah Williams"));

    let target = MapTarget::for_view(None, all);
    assert_eq!(target.profiles().len(), 6);
  }

  #[test]
  fn empty_list_renders_empty_for_both_variants() {
    let target = MapTarget::Many(Vec::new());
    assert_eq!(ExternalLinkRenderer.render(&target), Rendering::Empty);
    let widget = InteractiveWidgetRenderer::new("pk.test", "mapbox/streets-v11");
    assert_eq!(widget.render(&target), Rendering::Empty);
    assert!(Rendering::Empty.link().is_none());
  }
}
