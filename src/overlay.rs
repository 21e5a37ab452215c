//! The search results overlay.
//!
//! Not a persistent component: the app holds `Option<ResultsOverlay>`.
//! `open` builds a fresh surface with the uncapped match set for the query;
//! reopening replaces the previous one in place, and closing drops it
//! entirely, so a later open starts from scratch.

use crate::catalog::Record;
use crate::matcher::find_matches;
use crate::text::sanitize;

pub struct ResultsOverlay {
  /// The literal query shown in the header, sanitized for display.
  pub query: String,
  pub rows: Vec<&'static Record>,
  pub scroll: usize,
}

impl ResultsOverlay {
  /// Compute the full (uncapped) match set for `query` over `records`.
  pub fn open(records: &'static [Record], query: &str) -> Self {
    let rows = find_matches(records, query);
    Self { query: sanitize(query), rows, scroll: 0 }
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub fn scroll_down(&mut self) {
    if self.scroll + 1 < self.rows.len() {
      self.scroll += 1;
    }
  }

  pub fn scroll_up(&mut self) {
    self.scroll = self.scroll.saturating_sub(1);
  }
}
