//! Add / edit dialog, drawn over the admin table.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
  form::{Field, ProfileForm},
  ui::centered,
};

const LABEL_WIDTH: usize = 28;

pub fn draw(f: &mut Frame, area: Rect, form: &ProfileForm) {
  let height = Field::ALL.len() as u16 + 4;
  let popup = centered(area, 80, height);

  let block = Block::default()
    .title(form.title())
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(popup);
  f.render_widget(Clear, popup);
  f.render_widget(block, popup);

  let current = form.current_field();
  let mut lines: Vec<Line> = Field::ALL
    .iter()
    .map(|&field| {
      let active = field == current;
      let label_style = if active {
        Style::default()
          .fg(Color::Yellow)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::DarkGray)
      };
      let cursor = if active { "_" } else { "" };
      Line::from(vec![
        Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
        Span::raw(format!("{}{cursor}", form.value(field))),
      ])
    })
    .collect();

  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    "* required. Leave both coordinates blank to use the default location.",
    Style::default().fg(Color::DarkGray),
  )));

  f.render_widget(Paragraph::new(lines), inner);
}
