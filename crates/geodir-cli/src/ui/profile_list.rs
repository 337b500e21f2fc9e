//! Search bar and profile list.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, SearchField};

/// Render the search bar and the filtered list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(3), Constraint::Min(0)])
    .split(area);

  draw_search_bar(f, rows[0], app);
  draw_list(f, rows[1], app);
}

fn draw_search_bar(f: &mut Frame, area: Rect, app: &App) {
  let focused = app.search.focus.is_some();
  // Offer the known tags while the tag input has focus.
  let title = if app.search.focus == Some(SearchField::Tags) {
    format!(" Search  tags: {} ", app.store.all_tags().join(", "))
  } else {
    " Search ".to_owned()
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::DarkGray }));

  let input = |label: &str, value: &str, field: SearchField| {
    let active = app.search.focus == Some(field);
    let cursor = if active { "_" } else { "" };
    let style = if active {
      Style::default().fg(Color::Yellow)
    } else {
      Style::default()
    };
    vec![
      Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
      Span::styled(format!("{value}{cursor}"), style),
      Span::raw("  "),
    ]
  };

  let line = Line::from(
    [
      input("name", &app.search.name, SearchField::Name),
      input("location", &app.search.location, SearchField::Location),
      input("tags", &app.search.tags, SearchField::Tags),
    ]
    .concat(),
  );
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

fn draw_list(f: &mut Frame, area: Rect, app: &App) {
  let filtered = app.store.filtered_profiles();
  let total = app.store.len();

  let title = if app.store.search_filters().is_empty() {
    format!(" Profiles ({total}) ")
  } else {
    format!(" Profiles ({}/{}) ", filtered.len(), total)
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  if filtered.is_empty() {
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("No profiles match the current filters.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let selected_id = app.store.selected_profile().map(|p| &p.id);

  let items: Vec<ListItem> = filtered
    .iter()
    .map(|profile| {
      let marker = if Some(&profile.id) == selected_id { "● " } else { "  " };
      let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Green)),
        Span::styled(
          profile.name.clone(),
          Style::default().add_modifier(Modifier::BOLD),
        ),
      ];
      let summary = profile.address.summary();
      if !summary.is_empty() {
        spans.push(Span::styled(
          format!("  {summary}"),
          Style::default().fg(Color::Gray),
        ));
      }
      if !profile.tags.is_empty() {
        spans.push(Span::styled(
          format!("  [{}]", profile.tags.join(", ")),
          Style::default().fg(Color::DarkGray),
        ));
      }
      ListItem::new(Line::from(spans))
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.list_cursor.min(filtered.len() - 1)));

  f.render_stateful_widget(
    List::new(items)
      .block(block)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      ),
    area,
    &mut state,
  );
}
