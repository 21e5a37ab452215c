//! Sidebar open/close state.

use crate::constants::{LinkSpec, constants};

pub struct Sidebar {
  pub open: bool,
  /// Highlighted link while the sidebar has keyboard focus.
  pub selected: usize,
}

impl Sidebar {
  pub fn new(open: bool) -> Self {
    Self { open, selected: 0 }
  }

  pub fn links(&self) -> &'static [LinkSpec] {
    &constants().sidebar_links
  }

  pub fn toggle(&mut self) {
    self.open = !self.open;
  }

  pub fn set_open(&mut self, open: bool) {
    self.open = open;
  }

  /// Activate the highlighted link: closes the sidebar and hands back the
  /// navigation target.
  pub fn activate_selected(&mut self) -> &'static LinkSpec {
    let link = &self.links()[self.selected.min(self.links().len() - 1)];
    self.open = false;
    link
  }

  /// A pointer press outside the sidebar and its toggles closes it, but only
  /// in narrow-viewport mode.
  pub fn on_outside_press(&mut self, narrow: bool) {
    if narrow && self.open {
      self.open = false;
    }
  }

  pub fn select_next(&mut self) {
    let count = self.links().len();
    if count > 0 {
      self.selected = (self.selected + 1) % count;
    }
  }

  pub fn select_prev(&mut self) {
    let count = self.links().len();
    if count > 0 {
      self.selected = if self.selected == 0 { count - 1 } else { self.selected - 1 };
    }
  }
}
