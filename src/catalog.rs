//! The static record catalog backing search.
//!
//! Records are embedded from `catalog.ron` at compile time and parsed once
//! on first access — the dataset is constant process-wide state, never
//! mutated after startup.

use serde::Deserialize;
use std::sync::LazyLock;

/// One searchable catalog entry. View count and recency are pre-formatted
/// display strings, not numeric fields.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Record {
  pub id: String,
  pub title: String,
  pub channel: String,
  pub view_label: String,
  pub recency_label: String,
}

static CATALOG: LazyLock<Vec<Record>> = LazyLock::new(|| {
  // Safety: the RON file is embedded at compile time; if it's malformed this is a build-time error.
  ron::from_str(include_str!("../catalog.ron")).expect("catalog.ron must be valid RON (embedded at compile time)")
});

/// Returns the full catalog in its fixed dataset order.
pub fn records() -> &'static [Record] {
  &CATALOG
}
