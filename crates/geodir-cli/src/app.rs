//! Application state machine and event dispatcher.
//!
//! [`App`] borrows the store for its whole lifetime and is the only thing
//! that mutates it. Views read `&App` and never mutate.

use std::process::{Child, Command};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use geodir_core::{
  Profile, ProfileId, ProfileStore, SearchFilters, filter::parse_tags,
  validate,
};
use geodir_map::{LocationRenderer, MapTarget, Rendering};
use tracing::{debug, info, warn};

use crate::form::{FormMode, ProfileForm};

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Search bar, profile list and optional map pane.
  List,
  /// One profile in full, with its map pane.
  Detail,
  /// Table of every profile with add / edit / delete actions.
  Admin,
  /// Add or edit dialog over the admin table.
  Form,
  /// Delete confirmation over the admin table.
  ConfirmDelete,
}

// ─── Search bar ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
  Name,
  Location,
  Tags,
}

impl SearchField {
  fn next(self) -> Self {
    match self {
      Self::Name => Self::Location,
      Self::Location => Self::Tags,
      Self::Tags => Self::Name,
    }
  }
}

/// Text typed into the search bar; applied to the store on Enter.
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
  pub name:     String,
  pub location: String,
  pub tags:     String,
  /// `Some` while the user is typing.
  pub focus:    Option<SearchField>,
}

impl SearchBar {
  fn input_mut(&mut self, field: SearchField) -> &mut String {
    match field {
      SearchField::Name => &mut self.name,
      SearchField::Location => &mut self.location,
      SearchField::Tags => &mut self.tags,
    }
  }

  pub fn is_blank(&self) -> bool {
    self.name.is_empty() && self.location.is_empty() && self.tags.is_empty()
  }

  pub fn to_filters(&self) -> SearchFilters {
    let non_empty = |s: &str| {
      let s = s.trim();
      (!s.is_empty()).then(|| s.to_owned())
    };
    SearchFilters {
      name:     non_empty(&self.name),
      location: non_empty(&self.location),
      tags:     parse_tags(&self.tags),
    }
  }
}

// ─── Status line ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
  Success,
  Warning,
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
  pub kind:    StatusKind,
  pub message: String,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<'s> {
  /// The directory. Owned by `main`, lent to the app.
  pub store: &'s mut ProfileStore,

  pub renderer: Box<dyn LocationRenderer>,

  /// Current screen / keyboard focus.
  pub screen: Screen,

  pub search: SearchBar,

  /// Cursor position within the *filtered* profile list.
  pub list_cursor: usize,

  /// Cursor position within the admin table (all profiles).
  pub admin_cursor: usize,

  /// Whether the list screen shows the map pane.
  pub show_map: bool,

  /// Scroll offset within the detail pane.
  pub detail_scroll: u16,

  /// Open add / edit dialog.
  pub form: Option<ProfileForm>,

  /// Screen the add / edit dialog returns to.
  pub form_origin: Screen,

  /// Profile awaiting delete confirmation.
  pub pending_delete: Option<ProfileId>,

  /// One-line message shown in the status bar.
  pub status: Option<Status>,

  /// Program that opens external links.
  pub open_command: String,

  /// Opener processes not yet reaped.
  openers: Vec<Child>,
}

impl<'s> App<'s> {
  pub fn new(
    store: &'s mut ProfileStore,
    renderer: Box<dyn LocationRenderer>,
    open_command: impl Into<String>,
  ) -> Self {
    Self {
      store,
      renderer,
      screen: Screen::List,
      search: SearchBar::default(),
      list_cursor: 0,
      admin_cursor: 0,
      show_map: false,
      detail_scroll: 0,
      form: None,
      form_origin: Screen::Admin,
      pending_delete: None,
      status: None,
      open_command: open_command.into(),
      openers: Vec::new(),
    }
  }

  // ── Derived data ──────────────────────────────────────────────────────

  /// The profile under the list cursor in the filtered view, if any.
  pub fn cursor_profile(&self) -> Option<&Profile> {
    self.store.filtered_profiles().get(self.list_cursor).copied()
  }

  /// The profile under the admin cursor, if any.
  pub fn admin_profile(&self) -> Option<&Profile> {
    self.store.profiles().get(self.admin_cursor)
  }

  /// What the map pane should show: the selection, or the visible list.
  pub fn map_rendering(&self) -> Rendering {
    let target = MapTarget::for_view(
      self.store.selected_profile(),
      self.store.filtered_profiles(),
    );
    self.renderer.render(&target)
  }

  fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
    self.status = Some(Status {
      kind,
      message: message.into(),
    });
  }

  /// Number of opener processes still running.
  pub fn running_openers(&self) -> usize { self.openers.len() }

  /// Wait for opener processes that have exited. Called on every tick.
  pub fn reap_openers(&mut self) {
    self.openers.retain_mut(|child| match child.try_wait() {
      Ok(Some(status)) => {
        debug!(%status, "opener exited");
        false
      }
      Ok(None) => true,
      Err(e) => {
        warn!(error = %e, "failed to poll opener");
        false
      }
    });
  }

  // ── Key handling ──────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    // A message lasts until the next key press.
    self.status = None;

    if self.search.focus.is_some() {
      self.handle_search_key(key);
      return true;
    }

    match self.screen {
      Screen::List => self.handle_list_key(key),
      Screen::Detail => self.handle_detail_key(key),
      Screen::Admin => self.handle_admin_key(key),
      Screen::Form => {
        self.handle_form_key(key);
        true
      }
      Screen::ConfirmDelete => {
        self.handle_confirm_key(key);
        true
      }
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) {
    let Some(field) = self.search.focus else {
      return;
    };
    match key.code {
      KeyCode::Esc => {
        self.search = SearchBar::default();
        self.store.clear_search_filters();
        self.list_cursor = 0;
      }
      KeyCode::Enter => {
        self.search.focus = None;
        self.store.set_search_filters(self.search.to_filters());
        self.list_cursor = 0;
      }
      KeyCode::Tab => self.search.focus = Some(field.next()),
      KeyCode::Backspace => {
        self.search.input_mut(field).pop();
      }
      KeyCode::Char(c) => self.search.input_mut(field).push(c),
      _ => {}
    }
  }

  fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.store.filtered_profiles().len();
        if self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      // Select and show on the map.
      KeyCode::Char(' ') => {
        if self.select_cursor_profile() {
          self.show_map = true;
        }
      }

      // Open detail
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if self.select_cursor_profile() {
          self.detail_scroll = 0;
          self.screen = Screen::Detail;
        }
      }

      KeyCode::Char('/') => self.search.focus = Some(SearchField::Name),
      KeyCode::Char('m') => self.show_map = !self.show_map,
      KeyCode::Char('o') => self.open_map_link(),
      KeyCode::Char('a') => self.screen = Screen::Admin,
      KeyCode::Esc => {
        // Cannot fail for `None`.
        let _ = self.store.set_selected_profile(None);
      }
      _ => {}
    }
    true
  }

  fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      // Back to list; the selection is kept.
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => self.screen = Screen::List,

      KeyCode::Down | KeyCode::Char('j') => {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
      }

      KeyCode::Char('o') => self.open_map_link(),
      KeyCode::Char('e') => {
        if let Some(profile) = self.store.selected_profile() {
          let form = ProfileForm::edit(profile);
          self.open_form(form);
        }
      }
      _ => {}
    }
    true
  }

  fn handle_admin_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Esc => self.screen = Screen::List,

      KeyCode::Down | KeyCode::Char('j') => {
        if self.admin_cursor + 1 < self.store.len() {
          self.admin_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.admin_cursor = self.admin_cursor.saturating_sub(1);
      }

      KeyCode::Char('n') => self.open_form(ProfileForm::add()),
      KeyCode::Char('e') | KeyCode::Enter => {
        if let Some(form) = self.admin_profile().map(ProfileForm::edit) {
          self.open_form(form);
        }
      }
      KeyCode::Char('d') | KeyCode::Delete => {
        if let Some(id) = self.admin_profile().map(|p| p.id.clone()) {
          self.pending_delete = Some(id);
          self.screen = Screen::ConfirmDelete;
        }
      }
      _ => {}
    }
    true
  }

  fn handle_form_key(&mut self, key: KeyEvent) {
    let Some(form) = self.form.as_mut() else {
      self.screen = self.form_origin;
      return;
    };
    match key.code {
      KeyCode::Esc => self.close_form(),
      KeyCode::Enter => self.submit_form(),
      KeyCode::Tab | KeyCode::Down => form.next_field(),
      KeyCode::BackTab | KeyCode::Up => form.prev_field(),
      KeyCode::Backspace => form.pop_char(),
      KeyCode::Char(c) => form.push_char(c),
      _ => {}
    }
  }

  fn handle_confirm_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char('y') | KeyCode::Enter => self.confirm_delete(),
      KeyCode::Char('n') | KeyCode::Esc => {
        self.pending_delete = None;
        self.screen = Screen::Admin;
      }
      _ => {}
    }
  }

  // ── Actions ───────────────────────────────────────────────────────────

  fn select_cursor_profile(&mut self) -> bool {
    let Some(id) = self.cursor_profile().map(|p| p.id.clone()) else {
      return false;
    };
    self.store.set_selected_profile(Some(&id)).is_ok()
  }

  fn open_form(&mut self, form: ProfileForm) {
    self.form_origin = self.screen;
    self.form = Some(form);
    self.screen = Screen::Form;
  }

  fn close_form(&mut self) {
    self.form = None;
    self.screen = self.form_origin;
  }

  fn submit_form(&mut self) {
    let Some(form) = self.form.as_ref() else {
      return;
    };
    match form.mode.clone() {
      FormMode::Add => {
        let input = form.to_new_profile();
        if let Err(e) = validate::new_profile(&input) {
          self.set_status(StatusKind::Error, format!("Validation Error: {e}"));
          return;
        }
        let added = self.store.add(input);
        self.admin_cursor = self.store.len().saturating_sub(1);
        match added.repair {
          Some(repair) => self.set_status(
            StatusKind::Warning,
            format!(
              "Profile added. Coordinates were missing or invalid; using default location ({}, {}).",
              repair.substituted.lat, repair.substituted.lng
            ),
          ),
          None => self.set_status(StatusKind::Success, "Profile added successfully!"),
        }
        self.close_form();
      }
      FormMode::Edit(id) => {
        let patch = form.to_patch();
        if let Err(e) = validate::patch(&patch) {
          self.set_status(StatusKind::Error, format!("Validation Error: {e}"));
          return;
        }
        match self.store.update(&id, patch) {
          Ok(_) => {
            self.set_status(StatusKind::Success, "Profile updated successfully!");
            self.close_form();
          }
          Err(e) if e.is_not_found() => {
            warn!(%id, "edited profile no longer exists");
            self.set_status(StatusKind::Error, e.to_string());
            self.close_form();
          }
          // Invalid coordinates: keep the dialog open for correction.
          Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
      }
    }
  }

  fn confirm_delete(&mut self) {
    if let Some(id) = self.pending_delete.take() {
      match self.store.delete(&id) {
        Ok(_) => self.set_status(StatusKind::Success, "Profile deleted successfully!"),
        Err(e) => self.set_status(StatusKind::Error, e.to_string()),
      }
      self.admin_cursor = self
        .admin_cursor
        .min(self.store.len().saturating_sub(1));
      let visible = self.store.filtered_profiles().len();
      self.list_cursor = self.list_cursor.min(visible.saturating_sub(1));
    }
    self.screen = Screen::Admin;
  }

  fn open_map_link(&mut self) {
    let rendering = self.map_rendering();
    let Some(link) = rendering.link() else {
      self.set_status(StatusKind::Warning, geodir_map::NO_LOCATION_MESSAGE);
      return;
    };
    info!(url = %link.url, "opening map link");
    match Command::new(&self.open_command).arg(&link.url).spawn() {
      Ok(child) => {
        self.openers.push(child);
        self.set_status(StatusKind::Success, format!("Opened {}", link.url));
      }
      Err(e) => {
        warn!(error = %e, command = %self.open_command, "failed to open link");
        self.set_status(
          StatusKind::Error,
          format!("Could not run {}: {e}. Link: {}", self.open_command, link.url),
        );
      }
    }
  }
}
