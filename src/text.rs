//! Text helpers shared across rendering.

// --- Sanitization ---

/// Strip control characters (including escape sequences) from interpolated
/// text so record fields and raw queries render as inert literal content.
/// Printable characters such as `<`, `>`, `&`, `"` pass through unchanged —
/// terminal cells never parse them as markup.
pub fn sanitize(s: &str) -> String {
  s.chars().filter(|c| !c.is_control()).collect()
}

// --- Width & truncation ---

/// Compute the display width of the first `n` chars (accounting for double-width CJK).
pub fn display_width(s: &str, n: usize) -> usize {
  use unicode_width::UnicodeWidthChar;
  s.chars().take(n).map(|c| c.width().unwrap_or(0)).sum()
}

/// Truncate a string to `max_width` characters, appending "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
  if s.chars().count() <= max_width {
    s.to_string()
  } else {
    let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    format!("{}…", truncated)
  }
}

/// Convert a char index to a byte offset within the string.
pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
  s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
  use super::*;

  // --- sanitize ---

  #[test]
  fn sanitize_passes_markup_chars_through() {
    assert_eq!(sanitize("<script>alert(1)</script>"), "<script>alert(1)</script>");
    assert_eq!(sanitize(r#"Tom & "Jerry" <live>"#), r#"Tom & "Jerry" <live>"#);
  }

  #[test]
  fn sanitize_strips_control_sequences() {
    assert_eq!(sanitize("a\x1b[31mred\x1b[0m"), "a[31mred[0m");
    assert_eq!(sanitize("line\r\nbreak\ttab"), "linebreaktab");
  }

  // --- truncate_str ---

  #[test]
  fn truncate_short_string_unchanged() {
    assert_eq!(truncate_str("hello", 10), "hello");
  }

  #[test]
  fn truncate_long_string_adds_ellipsis() {
    assert_eq!(truncate_str("hello world", 6), "hello…");
  }

  // --- char_to_byte_index ---

  #[test]
  fn char_to_byte_multibyte() {
    let s = "aé日"; // a=1 byte, é=2 bytes, 日=3 bytes
    assert_eq!(char_to_byte_index(s, 0), 0);
    assert_eq!(char_to_byte_index(s, 1), 1);
    assert_eq!(char_to_byte_index(s, 2), 3);
    assert_eq!(char_to_byte_index(s, 3), 6); // past end
  }

  #[test]
  fn display_width_handles_wide_chars() {
    assert_eq!(display_width("日本", 2), 4);
    assert_eq!(display_width("abc", 2), 2);
  }
}
