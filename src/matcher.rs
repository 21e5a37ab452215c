//! Pure query matching over the catalog.

use crate::catalog::Record;

/// Filter `records` down to those whose title or channel contains `query`,
/// case-insensitively, preserving dataset order.
///
/// An empty or whitespace-only query yields an empty set; callers distinguish
/// "no query" from "no matches" themselves. Total over all string input,
/// including non-ASCII (containment is code-point based via `str::contains`).
pub fn find_matches<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
  let needle = query.trim().to_lowercase();
  if needle.is_empty() {
    return Vec::new();
  }
  records
    .iter()
    .filter(|r| r.title.to_lowercase().contains(&needle) || r.channel.to_lowercase().contains(&needle))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::records;

  fn rec(id: &str, title: &str, channel: &str) -> Record {
    Record {
      id: id.to_string(),
      title: title.to_string(),
      channel: channel.to_string(),
      view_label: "1K".to_string(),
      recency_label: "now".to_string(),
    }
  }

  // --- Predicate ---

  #[test]
  fn case_insensitive() {
    assert_eq!(find_matches(records(), "GAMING"), find_matches(records(), "gaming"));
    assert!(!find_matches(records(), "GAMING").is_empty());
  }

  #[test]
  fn matches_title_or_channel() {
    let data = vec![rec("a", "Morning News", "Daily"), rec("b", "Cooking", "NewsRoom")];
    let out = find_matches(&data, "news");
    assert_eq!(out.len(), 2);
  }

  #[test]
  fn substring_property() {
    let q = "pod";
    for r in find_matches(records(), q) {
      assert!(r.title.to_lowercase().contains(q) || r.channel.to_lowercase().contains(q));
    }
  }

  #[test]
  fn non_ascii_query() {
    let data = vec![rec("a", "Café Sessions", "München Live")];
    assert_eq!(find_matches(&data, "café").len(), 1);
    assert_eq!(find_matches(&data, "münchen").len(), 1);
  }

  // --- Order & empties ---

  #[test]
  fn preserves_dataset_order() {
    let out = find_matches(records(), "gaming");
    let titles: Vec<&str> = out.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Gaming Highlights: Best Plays", "How to Start Gaming on PC"]);
  }

  #[test]
  fn result_is_subsequence_of_dataset() {
    let out = find_matches(records(), "e");
    let mut last = 0;
    for r in out {
      let pos = records().iter().position(|d| d.id == r.id).unwrap();
      assert!(pos >= last);
      last = pos;
    }
  }

  #[test]
  fn empty_and_whitespace_queries_yield_nothing() {
    assert!(find_matches(records(), "").is_empty());
    assert!(find_matches(records(), "   ").is_empty());
  }

  #[test]
  fn unmatched_query_yields_nothing() {
    assert!(find_matches(records(), "zzz").is_empty());
  }
}
