//! Navigation destinations, header icon controls, and the category bar.
//!
//! "Navigation" here is deliberately thin: a `Page` value displayed in the
//! main area. Icons and categories are one-line event-to-page mappings.

use crate::constants::{CategorySpec, IconSpec, constants};

// --- Pages ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
  Home,
  /// A category listing page, named `category-<slug>`.
  Category(String),
  /// A named destination from an icon or sidebar link.
  Target(String),
}

impl Page {
  pub fn label(&self) -> String {
    match self {
      Page::Home => "home".to_string(),
      Page::Category(slug) => format!("category-{}", slug),
      Page::Target(target) => target.clone(),
    }
  }
}

// --- Icon controls ---

/// Resolve an icon activation to its navigation target.
/// Icons without a target are inert.
pub fn icon_destination(icon: &IconSpec) -> Option<Page> {
  icon.target.as_ref().map(|t| Page::Target(t.clone()))
}

pub fn icons() -> &'static [IconSpec] {
  &constants().icons
}

// --- Category bar ---

/// A mutually-exclusive row of category tabs; exactly one is active.
pub struct CategoryBar {
  pub active: usize,
}

impl Default for CategoryBar {
  fn default() -> Self {
    Self::new()
  }
}

impl CategoryBar {
  pub fn new() -> Self {
    Self { active: 0 }
  }

  pub fn tabs(&self) -> &'static [CategorySpec] {
    &constants().categories
  }

  /// Mark `idx` active (deactivating the rest by exclusivity) and return the
  /// category page to navigate to. Tabs without a slug fall back to `all`.
  pub fn activate(&mut self, idx: usize) -> Page {
    self.active = idx.min(self.tabs().len().saturating_sub(1));
    let slug = self.tabs()[self.active].slug.as_deref().unwrap_or("all");
    Page::Category(slug.to_string())
  }

  pub fn next(&mut self) {
    self.active = (self.active + 1) % self.tabs().len();
  }

  pub fn prev(&mut self) {
    self.active = if self.active == 0 { self.tabs().len() - 1 } else { self.active - 1 };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_pages_follow_naming_convention() {
    let mut bar = CategoryBar::new();
    let gaming = bar.tabs().iter().position(|c| c.slug.as_deref() == Some("gaming")).unwrap();
    assert_eq!(bar.activate(gaming).label(), "category-gaming");
    assert_eq!(bar.active, gaming);
  }

  #[test]
  fn slugless_tab_defaults_to_all() {
    let mut bar = CategoryBar::new();
    assert_eq!(bar.activate(0), Page::Category("all".to_string()));
    assert_eq!(bar.activate(0).label(), "category-all");
  }

  #[test]
  fn activation_is_exclusive() {
    let mut bar = CategoryBar::new();
    bar.activate(2);
    bar.activate(1);
    // One active index at a time; the previous activation is replaced.
    assert_eq!(bar.active, 1);
  }

  #[test]
  fn icons_without_target_are_inert() {
    let inert = icons().iter().find(|i| i.target.is_none()).unwrap();
    assert_eq!(icon_destination(inert), None);
    let live = icons().iter().find(|i| i.target.is_some()).unwrap();
    assert!(matches!(icon_destination(live), Some(Page::Target(_))));
  }
}
