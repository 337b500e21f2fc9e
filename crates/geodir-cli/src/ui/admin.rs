//! Admin table: every profile, unfiltered.

use ratatui::{
  Frame,
  layout::{Constraint, Rect},
  style::{Color, Modifier, Style},
  widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::app::App;

/// Tags shown per row before collapsing the rest into "+N".
const VISIBLE_TAGS: usize = 3;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(format!(" Profile Management ({}) ", app.store.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  if app.store.is_empty() {
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("No profiles yet. Press n to add one.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let header = Row::new(["Name", "Location", "Tags", "Email"]).style(
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );

  let rows = app.store.profiles().iter().map(|p| {
    Row::new([
      Cell::from(p.name.clone()),
      Cell::from(p.address.summary()),
      Cell::from(tag_summary(&p.tags)),
      Cell::from(
        p.contact_info
          .as_ref()
          .map(|c| c.email.clone())
          .unwrap_or_default(),
      ),
    ])
  });

  let table = Table::new(rows, [
    Constraint::Percentage(25),
    Constraint::Percentage(25),
    Constraint::Percentage(30),
    Constraint::Percentage(20),
  ])
  .header(header)
  .block(block)
  .row_highlight_style(
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  let mut state = TableState::default();
  state.select(Some(app.admin_cursor));
  f.render_stateful_widget(table, area, &mut state);
}

/// First few tags, then "+N" for the remainder.
fn tag_summary(tags: &[String]) -> String {
  let shown = tags
    .iter()
    .take(VISIBLE_TAGS)
    .map(String::as_str)
    .collect::<Vec<_>>()
    .join(", ");
  match tags.len().saturating_sub(VISIBLE_TAGS) {
    0 => shown,
    rest => format!("{shown} +{rest}"),
  }
}
