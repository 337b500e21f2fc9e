//! Map pane.
//!
//! A widget rendering is drawn as a world map canvas with one marker per
//! profile, framed on the view's bounds. A link rendering shows the
//! external-maps button.

use geodir_map::{ExternalLink, Rendering, WidgetView};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{
    Block, Borders, Paragraph, Wrap,
    canvas::{Canvas, Map, MapResolution},
  },
};

/// Degrees of padding around the marker bounds.
const MIN_PADDING: f64 = 2.0;

pub fn draw(f: &mut Frame, area: Rect, rendering: &Rendering) {
  let block = Block::default()
    .title(" Map ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  match rendering {
    Rendering::Widget(view) => draw_widget(f, area, block, view),
    Rendering::Link(link) => {
      let inner = block.inner(area);
      f.render_widget(block, area);
      f.render_widget(
        Paragraph::new(link_lines(link)).wrap(Wrap { trim: false }),
        inner,
      );
    }
    Rendering::Empty => {
      let inner = block.inner(area);
      f.render_widget(block, area);
      f.render_widget(
        Paragraph::new(geodir_map::NO_LOCATION_MESSAGE)
          .style(Style::default().fg(Color::DarkGray)),
        inner,
      );
    }
  }
}

fn link_lines(link: &ExternalLink) -> Vec<Line<'static>> {
  vec![
    Line::from(Span::styled(
      link.label.clone(),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )),
    Line::from(""),
    Line::from(Span::styled(link.url.clone(), Style::default().fg(Color::Blue))),
    Line::from(""),
    Line::from(Span::styled(
      "[o] open in browser",
      Style::default().fg(Color::DarkGray),
    )),
  ]
}

fn draw_widget(f: &mut Frame, area: Rect, block: Block<'_>, view: &WidgetView) {
  let b = view.bounds;
  let pad = (b.span() * 0.2).max(MIN_PADDING);
  let x_bounds = [(b.west - pad).max(-180.0), (b.east + pad).min(180.0)];
  let y_bounds = [(b.south - pad).max(-90.0), (b.north + pad).min(90.0)];

  let title = format!(" Map ({} markers, zoom {}) ", view.markers.len(), view.zoom);
  let canvas = Canvas::default()
    .block(block.title(title))
    .x_bounds(x_bounds)
    .y_bounds(y_bounds)
    .paint(|ctx| {
      ctx.draw(&Map {
        color:      Color::DarkGray,
        resolution: MapResolution::High,
      });
      ctx.layer();
      for marker in &view.markers {
        ctx.print(
          marker.lng,
          marker.lat,
          Span::styled(
            format!("● {}", marker.name),
            Style::default().fg(Color::Green),
          ),
        );
      }
    });
  f.render_widget(canvas, area);
}
