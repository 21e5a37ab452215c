//! Debounced search suggestions.
//!
//! The panel is a small state machine: `Hidden` until a non-empty query
//! survives the debounce quiet period, then `Visible` with up to
//! `suggestion_cap` leading matches. A non-empty query with zero matches
//! stays `Visible` with no rows (rendered as nothing) rather than resetting
//! to `Hidden`; only clearing the query hides the panel.

use std::time::{Duration, Instant};

use crate::catalog::Record;
use crate::matcher::find_matches;

// --- Debounce ---

/// A cancellable single-shot timer. At most one deadline is outstanding;
/// rescheduling replaces the previous one, so only the last edit in a burst
/// fires, and only after the burst has been quiet for the full interval.
#[derive(Debug)]
pub struct DebounceTimer {
  interval: Duration,
  deadline: Option<Instant>,
}

impl DebounceTimer {
  pub fn new(interval: Duration) -> Self {
    Self { interval, deadline: None }
  }

  /// Schedule (or replace) the pending deadline at `now + interval`.
  pub fn schedule(&mut self, now: Instant) {
    self.deadline = Some(now + self.interval);
  }

  /// Drop any pending deadline.
  pub fn cancel(&mut self) {
    self.deadline = None;
  }

  pub fn is_pending(&self) -> bool {
    self.deadline.is_some()
  }

  /// Returns true (and clears the deadline) once `now` has reached it.
  /// Fires at most once per schedule.
  pub fn fire_due(&mut self, now: Instant) -> bool {
    match self.deadline {
      Some(deadline) if now >= deadline => {
        self.deadline = None;
        true
      }
      _ => false,
    }
  }
}

// --- Panel state ---

#[derive(Debug, PartialEq, Eq)]
pub enum SuggestState {
  Hidden,
  Visible(Vec<&'static Record>),
}

pub struct SuggestPanel {
  records: &'static [Record],
  cap: usize,
  timer: DebounceTimer,
  state: SuggestState,
  /// Highlighted row, the keyboard analogue of per-row pointer focus.
  pub selected: Option<usize>,
}

impl SuggestPanel {
  pub fn new(records: &'static [Record], interval: Duration, cap: usize) -> Self {
    Self { records, cap, timer: DebounceTimer::new(interval), state: SuggestState::Hidden, selected: None }
  }

  /// Note a keystroke: cancel any pending evaluation and schedule a fresh one.
  pub fn on_edit(&mut self, now: Instant) {
    self.timer.schedule(now);
  }

  /// Drive the debounce timer; evaluates `query` when the quiet period has
  /// elapsed. Returns true if an evaluation ran.
  pub fn poll(&mut self, now: Instant, query: &str) -> bool {
    if self.timer.fire_due(now) {
      self.evaluate(query);
      true
    } else {
      false
    }
  }

  /// Recompute suggestions for `query` immediately.
  pub fn evaluate(&mut self, query: &str) {
    if query.trim().is_empty() {
      self.state = SuggestState::Hidden;
      self.selected = None;
      return;
    }
    let mut matches = find_matches(self.records, query);
    matches.truncate(self.cap);
    self.selected = match self.selected {
      Some(i) if i < matches.len() => Some(i),
      _ => None,
    };
    self.state = SuggestState::Visible(matches);
  }

  /// Hide the panel and drop any pending evaluation. Used for outside
  /// pointer presses and after a suggestion is chosen.
  pub fn hide(&mut self) {
    self.timer.cancel();
    self.state = SuggestState::Hidden;
    self.selected = None;
  }

  pub fn is_visible(&self) -> bool {
    matches!(self.state, SuggestState::Visible(_))
  }

  /// Whether a debounced evaluation is still outstanding.
  pub fn is_pending(&self) -> bool {
    self.timer.is_pending()
  }

  /// Visible rows; empty both when hidden and when a query matched nothing.
  pub fn rows(&self) -> &[&'static Record] {
    match &self.state {
      SuggestState::Visible(rows) => rows,
      SuggestState::Hidden => &[],
    }
  }

  pub fn state(&self) -> &SuggestState {
    &self.state
  }

  pub fn select_next(&mut self) {
    let count = self.rows().len();
    if count > 0 {
      self.selected = Some(self.selected.map_or(0, |i| (i + 1) % count));
    }
  }

  pub fn select_prev(&mut self) {
    let count = self.rows().len();
    if count > 0 {
      self.selected = Some(self.selected.map_or(count - 1, |i| if i == 0 { count - 1 } else { i - 1 }));
    }
  }

  pub fn selected_record(&self) -> Option<&'static Record> {
    self.selected.and_then(|i| self.rows().get(i).copied())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::records;

  fn panel() -> SuggestPanel {
    SuggestPanel::new(records(), Duration::from_millis(180), 6)
  }

  // --- Debounce timer ---

  #[test]
  fn fires_only_after_quiet_period() {
    let t0 = Instant::now();
    let mut timer = DebounceTimer::new(Duration::from_millis(180));
    timer.schedule(t0);
    assert!(!timer.fire_due(t0 + Duration::from_millis(100)));
    assert!(timer.fire_due(t0 + Duration::from_millis(180)));
    // One-shot: already fired.
    assert!(!timer.fire_due(t0 + Duration::from_millis(500)));
  }

  #[test]
  fn reschedule_replaces_pending_deadline() {
    let t0 = Instant::now();
    let mut timer = DebounceTimer::new(Duration::from_millis(180));
    timer.schedule(t0);
    timer.schedule(t0 + Duration::from_millis(100));
    // The earlier deadline (t0+180) was cancelled by the reschedule.
    assert!(!timer.fire_due(t0 + Duration::from_millis(200)));
    assert!(timer.fire_due(t0 + Duration::from_millis(280)));
  }

  #[test]
  fn keystroke_burst_coalesces_to_one_evaluation() {
    // Keystrokes at t=0, t=50, t=100 with a 180ms interval: exactly one
    // evaluation, at or after t=280, using the final input.
    let t0 = Instant::now();
    let ms = Duration::from_millis;
    let mut p = panel();

    p.on_edit(t0); // "g"
    p.on_edit(t0 + ms(50)); // "ga"
    p.on_edit(t0 + ms(100)); // "gaming"

    assert!(!p.poll(t0 + ms(150), "gaming"));
    assert!(!p.poll(t0 + ms(279), "gaming"));
    assert!(p.poll(t0 + ms(280), "gaming"));
    assert_eq!(p.rows().len(), 2);
    // No second firing for the same burst.
    assert!(!p.poll(t0 + ms(400), "gaming"));
  }

  // --- Panel state machine ---

  #[test]
  fn empty_query_hides_panel() {
    let mut p = panel();
    p.evaluate("gaming");
    assert!(p.is_visible());
    p.evaluate("");
    assert_eq!(*p.state(), SuggestState::Hidden);
    p.evaluate("   ");
    assert_eq!(*p.state(), SuggestState::Hidden);
  }

  #[test]
  fn no_matches_stays_visible_with_no_rows() {
    // Distinct from the empty-query case: the panel remains Visible but
    // renders nothing.
    let mut p = panel();
    p.evaluate("zzz");
    assert!(p.is_visible());
    assert!(p.rows().is_empty());
  }

  #[test]
  fn caps_at_six_in_matcher_order() {
    let mut p = panel();
    // Single letters hit most of the catalog; the cap keeps the first six.
    p.evaluate("e");
    let full = find_matches(records(), "e");
    assert!(full.len() > 6);
    assert_eq!(p.rows().len(), 6);
    assert_eq!(p.rows(), &full[..6]);
  }

  #[test]
  fn gaming_scenario_shows_both_in_dataset_order() {
    let mut p = panel();
    p.evaluate("gaming");
    let titles: Vec<&str> = p.rows().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Gaming Highlights: Best Plays", "How to Start Gaming on PC"]);
  }

  #[test]
  fn hide_cancels_pending_evaluation() {
    let t0 = Instant::now();
    let mut p = panel();
    p.on_edit(t0);
    p.hide();
    assert!(!p.poll(t0 + Duration::from_millis(500), "gaming"));
    assert!(!p.is_visible());
  }

  #[test]
  fn selection_wraps_both_ways() {
    let mut p = panel();
    p.evaluate("gaming");
    p.select_next();
    assert_eq!(p.selected, Some(0));
    p.select_next();
    assert_eq!(p.selected, Some(1));
    p.select_next();
    assert_eq!(p.selected, Some(0));
    p.select_prev();
    assert_eq!(p.selected, Some(1));
    assert_eq!(p.selected_record().unwrap().title, "How to Start Gaming on PC");
  }
}
