//! Profile detail screen: every field of the selected profile plus its map.

use geodir_core::Profile;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{app::App, ui::map};

// ─── Public entry ─────────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(profile) = app.store.selected_profile() else {
    let block = Block::default()
      .title(" Profile ")
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("Profile not found.").style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
    .split(area);

  let block = Block::default()
    .title(format!(" {} ", profile.name))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(cols[0]);
  f.render_widget(block, cols[0]);
  f.render_widget(
    Paragraph::new(detail_lines(profile))
      .wrap(Wrap { trim: false })
      .scroll((app.detail_scroll, 0)),
    inner,
  );

  map::draw(f, cols[1], &app.map_rendering());
}

// ─── Formatting helpers ───────────────────────────────────────────────────────

fn heading(text: &str) -> Line<'static> {
  Line::from(Span::styled(
    text.to_owned(),
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  ))
}

fn row(label: &str, value: &str) -> Line<'static> {
  Line::from(vec![
    Span::styled(format!("{label:<10}"), Style::default().fg(Color::DarkGray)),
    Span::raw(value.to_owned()),
  ])
}

fn detail_lines(profile: &Profile) -> Vec<Line<'static>> {
  let mut lines = vec![
    Line::from(profile.description.clone()),
    Line::from(""),
    heading("Location"),
  ];

  let address = &profile.address;
  for (label, value) in [
    ("Street", &address.street),
    ("City", &address.city),
    ("State", &address.state),
    ("ZIP", &address.zip),
    ("Country", &address.country),
  ] {
    if !value.trim().is_empty() {
      lines.push(row(label, value));
    }
  }
  let c = address.coordinates;
  lines.push(row("Coords", &format!("{}, {}", c.lat, c.lng)));

  if let Some(contact) = &profile.contact_info {
    lines.push(Line::from(""));
    lines.push(heading("Contact"));
    if !contact.email.is_empty() {
      lines.push(row("Email", &contact.email));
    }
    if !contact.phone.is_empty() {
      lines.push(row("Phone", &contact.phone));
    }
    if let Some(website) = contact.website.as_deref().filter(|w| !w.is_empty()) {
      lines.push(row("Website", website));
    }
  }

  if !profile.tags.is_empty() {
    lines.push(Line::from(""));
    lines.push(heading("Tags"));
    lines.push(Line::from(profile.tags.join(", ")));
  }
  if !profile.interests.is_empty() {
    lines.push(Line::from(""));
    lines.push(heading("Interests"));
    lines.push(Line::from(profile.interests.join(", ")));
  }

  lines.push(Line::from(""));
  lines.push(heading("Activity"));
  lines.push(row("Created", &profile.created_at.format("%B %-d, %Y").to_string()));
  lines.push(row("Updated", &profile.updated_at.format("%B %-d, %Y").to_string()));
  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    profile.image_url.clone(),
    Style::default().fg(Color::DarkGray),
  )));
  lines
}
