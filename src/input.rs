use ratatui::crossterm::event::{self, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

use crate::app::{App, AppMode};
use crate::text::char_to_byte_index;

// --- Key events ---

pub fn handle_key_event(app: &mut App, key: event::KeyEvent) {
  if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
    app.should_quit = true;
    return;
  }

  if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
    app.next_theme();
    return;
  }

  if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('b') {
    app.toggle_sidebar();
    return;
  }

  // The overlay is modal while open.
  if app.overlay.is_some() {
    handle_overlay_key(app, key);
    return;
  }

  match app.mode {
    AppMode::Browse => handle_browse_key(app, key),
    AppMode::Search => handle_search_key(app, key),
    AppMode::Sidebar => handle_sidebar_key(app, key),
  }
}

fn handle_overlay_key(app: &mut App, key: event::KeyEvent) {
  match key.code {
    KeyCode::Esc | KeyCode::Char('x') => app.close_overlay(),
    KeyCode::Down | KeyCode::Char('j') => {
      if let Some(o) = app.overlay.as_mut() {
        o.scroll_down();
      }
    }
    KeyCode::Up | KeyCode::Char('k') => {
      if let Some(o) = app.overlay.as_mut() {
        o.scroll_up();
      }
    }
    _ => {}
  }
}

fn handle_browse_key(app: &mut App, key: event::KeyEvent) {
  match key.code {
    KeyCode::Char('/') => {
      app.mode = AppMode::Search;
    }
    KeyCode::Left | KeyCode::Char('h') => {
      app.categories.prev();
    }
    KeyCode::Right | KeyCode::Char('l') => {
      app.categories.next();
    }
    KeyCode::Enter => {
      let idx = app.categories.active;
      app.activate_category(idx);
    }
    KeyCode::Char(c @ '1'..='9') => {
      // Header icons by ordinal.
      app.activate_icon(c as usize - '1' as usize);
    }
    KeyCode::Down | KeyCode::Char('j') => {
      let count = crate::catalog::records().len();
      let i = app.list_state.selected().map_or(0, |i| (i + 1) % count);
      app.list_state.select(Some(i));
    }
    KeyCode::Up | KeyCode::Char('k') => {
      let count = crate::catalog::records().len();
      let i = app.list_state.selected().map_or(0, |i| if i == 0 { count - 1 } else { i - 1 });
      app.list_state.select(Some(i));
    }
    KeyCode::Esc | KeyCode::Char('q') => {
      app.should_quit = true;
    }
    _ => {}
  }
}

fn handle_search_key(app: &mut App, key: event::KeyEvent) {
  match key.code {
    KeyCode::Enter => {
      if app.suggest.selected_record().is_some() {
        app.choose_selected_suggestion();
      } else {
        app.submit_query();
      }
    }
    KeyCode::Char(c) => {
      let byte_idx = char_to_byte_index(&app.input, app.cursor_position);
      app.input.insert(byte_idx, c);
      app.cursor_position += 1;
      app.on_query_edit(Instant::now());
    }
    KeyCode::Backspace => {
      if app.cursor_position > 0 {
        app.cursor_position -= 1;
        let byte_idx = char_to_byte_index(&app.input, app.cursor_position);
        app.input.remove(byte_idx);
        app.on_query_edit(Instant::now());
      }
    }
    KeyCode::Delete => {
      if app.cursor_position < app.input.chars().count() {
        let byte_idx = char_to_byte_index(&app.input, app.cursor_position);
        app.input.remove(byte_idx);
        app.on_query_edit(Instant::now());
      }
    }
    KeyCode::Left => {
      app.cursor_position = app.cursor_position.saturating_sub(1);
    }
    KeyCode::Right => {
      if app.cursor_position < app.input.chars().count() {
        app.cursor_position += 1;
      }
    }
    KeyCode::Home => {
      app.cursor_position = 0;
    }
    KeyCode::End => {
      app.cursor_position = app.input.chars().count();
    }
    KeyCode::Down => {
      app.suggest.select_next();
    }
    KeyCode::Up => {
      app.suggest.select_prev();
    }
    KeyCode::Esc => {
      if app.suggest.is_visible() {
        app.suggest.hide();
      } else if !app.input.is_empty() {
        app.input.clear();
        app.cursor_position = 0;
        app.input_scroll = 0;
        app.suggest.hide();
      } else {
        app.mode = AppMode::Browse;
      }
    }
    _ => {}
  }
}

fn handle_sidebar_key(app: &mut App, key: event::KeyEvent) {
  match key.code {
    KeyCode::Enter => {
      app.activate_sidebar_link();
    }
    KeyCode::Down | KeyCode::Char('j') => {
      app.sidebar.select_next();
    }
    KeyCode::Up | KeyCode::Char('k') => {
      app.sidebar.select_prev();
    }
    KeyCode::Esc => {
      app.sidebar.set_open(false);
      app.mode = AppMode::Browse;
    }
    _ => {}
  }
}

// --- Pointer events ---

fn hits(area: Option<Rect>, pos: Position) -> bool {
  area.is_some_and(|r| r.contains(pos))
}

fn row_at(rows: &[Rect], pos: Position) -> Option<usize> {
  rows.iter().position(|r| r.contains(pos))
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
  let pos = Position::new(mouse.column, mouse.row);

  // The overlay is modal: only its close control and scrolling respond.
  if app.overlay.is_some() {
    match mouse.kind {
      MouseEventKind::Down(MouseButton::Left) if hits(app.hit.overlay_close, pos) => app.close_overlay(),
      MouseEventKind::ScrollDown if hits(app.hit.overlay, pos) => {
        if let Some(o) = app.overlay.as_mut() {
          o.scroll_down();
        }
      }
      MouseEventKind::ScrollUp if hits(app.hit.overlay, pos) => {
        if let Some(o) = app.overlay.as_mut() {
          o.scroll_up();
        }
      }
      _ => {}
    }
    return;
  }

  if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
    return;
  }

  // Document-level dismissals run for every press, before targeted dispatch.
  if !hits(app.hit.input, pos) && !hits(app.hit.suggest, pos) {
    app.suggest.hide();
  }
  let over_sidebar_or_toggle = hits(app.hit.sidebar, pos) || hits(app.hit.menu_btn, pos);
  if !over_sidebar_or_toggle {
    let narrow = app.narrow();
    app.sidebar.on_outside_press(narrow);
    if !app.sidebar.open && app.mode == AppMode::Sidebar {
      app.mode = AppMode::Browse;
    }
  }

  // Targeted dispatch.
  if let Some(i) = row_at(&app.hit.suggest_rows, pos) {
    app.choose_suggestion(i);
  } else if hits(app.hit.input, pos) {
    app.mode = AppMode::Search;
  } else if hits(app.hit.menu_btn, pos) {
    app.toggle_sidebar();
  } else if let Some(i) = row_at(&app.hit.icons, pos) {
    app.activate_icon(i);
  } else if let Some(i) = row_at(&app.hit.categories, pos) {
    app.activate_category(i);
  } else if let Some(i) = row_at(&app.hit.sidebar_links, pos) {
    app.sidebar.selected = i;
    app.activate_sidebar_link();
  }
}
