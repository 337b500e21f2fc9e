//! TUI rendering. Orchestrates all panes.

pub mod admin;
pub mod form;
pub mod map;
pub mod profile_detail;
pub mod profile_list;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Flex, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen, StatusKind};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let left = Span::styled(
    " geodir  [/] search  [a] admin  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("map: {}  {} ", app.renderer.name(), Local::now().format("%Y-%m-%d")),
    Style::default().fg(Color::Gray),
  );

  let pad = area
    .width
    .saturating_sub(left.width() as u16)
    .saturating_sub(right.width() as u16);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::DarkGray)),
    area,
  );
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  match app.screen {
    Screen::List => draw_list_screen(f, area, app),
    Screen::Detail => profile_detail::draw(f, area, app),
    Screen::Admin => admin::draw(f, area, app),
    Screen::Form => {
      admin::draw(f, area, app);
      if let Some(form) = &app.form {
        form::draw(f, area, form);
      }
    }
    Screen::ConfirmDelete => {
      admin::draw(f, area, app);
      draw_confirm_delete(f, area, app);
    }
  }
}

fn draw_list_screen(f: &mut Frame, area: Rect, app: &App) {
  if !app.show_map {
    profile_list::draw(f, area, app);
    return;
  }
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
    .split(area);
  profile_list::draw(f, cols[0], app);
  map::draw(f, cols[1], &app.map_rendering());
}

/// A centred rectangle of fixed size, clipped to `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
    .flex(Flex::Center)
    .areas(area);
  let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
    .flex(Flex::Center)
    .areas(row);
  cell
}

fn draw_confirm_delete(f: &mut Frame, area: Rect, app: &App) {
  let name = app
    .pending_delete
    .as_ref()
    .and_then(|id| app.store.get(id))
    .map(|p| p.name.as_str())
    .unwrap_or("(unknown)");

  let popup = centered(area, 50, 5);
  let block = Block::default()
    .title(" Delete Profile ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let inner = block.inner(popup);
  f.render_widget(ratatui::widgets::Clear, popup);
  f.render_widget(block, popup);
  f.render_widget(
    Paragraph::new(vec![
      Line::from(format!("Are you sure you want to delete {name}?")),
      Line::from(""),
      Line::from(Span::styled(
        "[y] delete  [n] cancel",
        Style::default().fg(Color::DarkGray),
      )),
    ]),
    inner,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.screen {
    Screen::List if app.search.focus.is_some() => {
      ("SEARCH", "Type to edit  Tab next field  Enter apply  Esc clear")
    }
    Screen::List => (
      "NORMAL",
      "↑↓/jk navigate  Enter detail  Space show on map  m map  o open  Esc deselect",
    ),
    Screen::Detail => ("DETAIL", "↑↓/jk scroll  e edit  o open map  Esc back"),
    Screen::Admin => ("ADMIN", "↑↓/jk navigate  n new  e edit  d delete  Esc back"),
    Screen::Form => ("EDIT", "Tab/Shift-Tab field  Enter save  Esc cancel"),
    Screen::ConfirmDelete => ("CONFIRM", "y delete  n cancel"),
  };

  let (message, color) = match &app.status {
    Some(status) => (
      status.message.as_str(),
      match status.kind {
        StatusKind::Success => Color::Green,
        StatusKind::Warning => Color::Yellow,
        StatusKind::Error => Color::Red,
      },
    ),
    None => (hints, Color::DarkGray),
  };

  let line = Line::from(vec![
    Span::styled(
      format!(" {mode_label} "),
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(format!("  {message}"), Style::default().fg(color)),
  ]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
