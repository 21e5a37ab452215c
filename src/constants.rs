//! Application constants loaded from `constants.ron` at compile time.
//!
//! The RON file is embedded via `include_str!` so it's always available —
//! no runtime file I/O. Parsed once on first access via `LazyLock`.

use serde::Deserialize;
use std::sync::LazyLock;

/// A header icon control. Icons without a `target` do nothing when activated.
#[derive(Debug, Deserialize)]
pub struct IconSpec {
  pub label: String,
  pub target: Option<String>,
}

/// A category tab. A missing `slug` falls back to `all` on activation.
#[derive(Debug, Deserialize)]
pub struct CategorySpec {
  pub label: String,
  pub slug: Option<String>,
}

/// A sidebar navigation link.
#[derive(Debug, Deserialize)]
pub struct LinkSpec {
  pub label: String,
  pub target: String,
}

/// All tuneable application constants.
#[derive(Debug, Deserialize)]
pub struct Constants {
  // Search
  pub debounce_ms: u64,
  pub suggestion_cap: usize,

  // Event loop
  pub tick_ms: u64,

  // Layout
  pub sidebar_cols: u16,
  pub narrow_viewport_cols: u16,

  pub icons: Vec<IconSpec>,
  pub categories: Vec<CategorySpec>,
  pub sidebar_links: Vec<LinkSpec>,
}

static CONSTANTS: LazyLock<Constants> = LazyLock::new(|| {
  // Safety: the RON file is embedded at compile time; if it's malformed this is a build-time error.
  ron::from_str(include_str!("../constants.ron")).expect("constants.ron must be valid RON (embedded at compile time)")
});

/// Returns a reference to the parsed application constants.
pub fn constants() -> &'static Constants {
  &CONSTANTS
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_constants_parse() {
    let c = constants();
    assert_eq!(c.debounce_ms, 180);
    assert_eq!(c.suggestion_cap, 6);
    assert!(!c.categories.is_empty());
  }

  #[test]
  fn first_category_has_no_slug() {
    // The "All" tab exercises the default-slug path.
    assert!(constants().categories[0].slug.is_none());
  }
}
