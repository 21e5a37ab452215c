use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::catalog;
use crate::config::Config;
use crate::constants::constants;
use crate::nav::{CategoryBar, Page, icon_destination, icons};
use crate::overlay::ResultsOverlay;
use crate::sidebar::Sidebar;
use crate::suggest::SuggestPanel;
use crate::theme::{THEMES, Theme};

// --- Modes ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
  /// Navigating the listing, category tabs, and icons.
  Browse,
  /// Editing the search input; suggestions may be visible.
  Search,
  /// Keyboard focus inside the open sidebar.
  Sidebar,
}

// --- Hit targets ---

/// Screen regions recorded during the last draw, used to route pointer
/// presses back to the controls that own them.
#[derive(Default)]
pub struct HitAreas {
  pub menu_btn: Option<Rect>,
  /// Parallel to `constants().icons`.
  pub icons: Vec<Rect>,
  /// Parallel to `constants().categories`.
  pub categories: Vec<Rect>,
  pub sidebar: Option<Rect>,
  /// Parallel to `constants().sidebar_links`.
  pub sidebar_links: Vec<Rect>,
  pub input: Option<Rect>,
  pub suggest: Option<Rect>,
  /// One rect per visible suggestion row.
  pub suggest_rows: Vec<Rect>,
  pub overlay: Option<Rect>,
  pub overlay_close: Option<Rect>,
}

// --- App state ---

pub struct App {
  pub input: String,
  pub cursor_position: usize,
  pub input_scroll: usize,
  pub mode: AppMode,
  pub theme_index: usize,
  pub page: Page,
  pub suggest: SuggestPanel,
  /// The singleton results surface: `Some` while open, dropped on close.
  pub overlay: Option<ResultsOverlay>,
  pub sidebar: Sidebar,
  pub categories: CategoryBar,
  pub list_state: ListState,
  /// Terminal width as of the last draw, for narrow-viewport behavior.
  pub viewport_cols: u16,
  pub hit: HitAreas,
  pub should_quit: bool,
}

impl App {
  pub fn new(theme_override: Option<&str>) -> Self {
    let config = Config::load();
    let theme_name = theme_override.map(str::to_string).or(config.theme_name);
    let theme_index =
      if let Some(ref name) = theme_name { THEMES.iter().position(|t| t.name == name).unwrap_or(0) } else { 0 };

    let c = constants();
    let mut list_state = ListState::default();
    list_state.select(Some(0));

    Self {
      input: String::new(),
      cursor_position: 0,
      input_scroll: 0,
      mode: AppMode::Browse,
      theme_index,
      page: Page::Home,
      suggest: SuggestPanel::new(catalog::records(), Duration::from_millis(c.debounce_ms), c.suggestion_cap),
      overlay: None,
      sidebar: Sidebar::new(config.sidebar_open.unwrap_or(false)),
      categories: CategoryBar::new(),
      list_state,
      viewport_cols: 0,
      hit: HitAreas::default(),
      should_quit: false,
    }
  }

  pub fn theme(&self) -> &'static Theme {
    &THEMES[self.theme_index]
  }

  pub fn next_theme(&mut self) {
    self.theme_index = (self.theme_index + 1) % THEMES.len();
    self.save_config();
  }

  pub fn save_config(&self) {
    let config = Config { theme_name: Some(self.theme().name.to_string()), sidebar_open: Some(self.sidebar.open) };
    config.save();
  }

  /// Whether the terminal is in narrow-viewport mode.
  pub fn narrow(&self) -> bool {
    self.viewport_cols <= constants().narrow_viewport_cols
  }

  // --- Search ---

  /// Drive the debounce timer; called once per event-loop iteration.
  pub fn tick(&mut self, now: Instant) {
    if self.suggest.poll(now, &self.input) {
      debug!(query = %self.input, rows = self.suggest.rows().len(), "suggestions evaluated");
    }
  }

  /// Note an input edit: schedules the (replacing) debounced evaluation.
  pub fn on_query_edit(&mut self, now: Instant) {
    self.suggest.on_edit(now);
  }

  /// Submit the current input. Blank input is a no-op.
  pub fn submit_query(&mut self) {
    let query = self.input.trim().to_string();
    if query.is_empty() {
      return;
    }
    self.open_overlay(&query);
  }

  /// Open (or replace in place) the results overlay for `query`.
  pub fn open_overlay(&mut self, query: &str) {
    let overlay = ResultsOverlay::open(catalog::records(), query);
    info!(query = %overlay.query, rows = overlay.rows.len(), "results overlay opened");
    self.overlay = Some(overlay);
    self.suggest.hide();
  }

  /// Close the overlay, removing the surface entirely.
  pub fn close_overlay(&mut self) {
    self.overlay = None;
  }

  /// Accept the highlighted suggestion: copy its title into the input and
  /// open the overlay for it.
  pub fn choose_selected_suggestion(&mut self) {
    if let Some(record) = self.suggest.selected_record() {
      self.set_input(record.title.clone());
      self.open_overlay(&record.title);
    }
  }

  /// Accept suggestion row `idx` directly (pointer activation).
  pub fn choose_suggestion(&mut self, idx: usize) {
    if let Some(record) = self.suggest.rows().get(idx).copied() {
      self.set_input(record.title.clone());
      self.open_overlay(&record.title);
    }
  }

  fn set_input(&mut self, value: String) {
    self.cursor_position = value.chars().count();
    self.input = value;
    self.input_scroll = 0;
  }

  // --- Navigation ---

  pub fn navigate(&mut self, page: Page) {
    info!(page = %page.label(), "navigate");
    self.page = page;
    self.list_state.select(Some(0));
  }

  /// Activate header icon `idx`. Icons without a target are a no-op.
  pub fn activate_icon(&mut self, idx: usize) {
    if let Some(page) = icons().get(idx).and_then(icon_destination) {
      self.navigate(page);
    }
  }

  /// Activate category tab `idx`: exclusive selection plus navigation.
  pub fn activate_category(&mut self, idx: usize) {
    let page = self.categories.activate(idx);
    self.navigate(page);
  }

  /// Activate the highlighted sidebar link: navigate, then close the sidebar.
  pub fn activate_sidebar_link(&mut self) {
    let link = self.sidebar.activate_selected();
    self.navigate(Page::Target(link.target.clone()));
    self.mode = AppMode::Browse;
  }

  pub fn toggle_sidebar(&mut self) {
    self.sidebar.toggle();
    self.mode = if self.sidebar.open { AppMode::Sidebar } else { AppMode::Browse };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn app() -> App {
    App::new(None)
  }

  // --- Overlay lifecycle ---

  #[test]
  fn reopening_overlay_replaces_content_in_place() {
    let mut a = app();
    a.open_overlay("gaming");
    assert_eq!(a.overlay.as_ref().unwrap().rows.len(), 2);
    a.open_overlay("lo-fi");
    // Exactly one surface, holding only the second query's results.
    let o = a.overlay.as_ref().unwrap();
    assert_eq!(o.query, "lo-fi");
    assert_eq!(o.rows.len(), 1);
    assert_eq!(o.rows[0].title, "Relaxing Lo-fi Beats");
  }

  #[test]
  fn closed_overlay_is_removed_entirely() {
    let mut a = app();
    a.open_overlay("gaming");
    a.close_overlay();
    assert!(a.overlay.is_none());
  }

  #[test]
  fn unmatched_submit_opens_no_results_surface() {
    let mut a = app();
    a.input = "zzz".to_string();
    a.submit_query();
    let o = a.overlay.as_ref().unwrap();
    assert!(o.is_empty());
    assert_eq!(o.query, "zzz");
  }

  #[test]
  fn blank_submit_is_a_noop() {
    let mut a = app();
    a.input = "   ".to_string();
    a.submit_query();
    assert!(a.overlay.is_none());
  }

  #[test]
  fn opening_overlay_hides_suggestions() {
    let mut a = app();
    a.suggest.evaluate("gaming");
    assert!(a.suggest.is_visible());
    a.open_overlay("gaming");
    assert!(!a.suggest.is_visible());
  }

  // --- Suggestion selection ---

  #[test]
  fn choosing_a_suggestion_fills_input_and_opens_overlay() {
    let mut a = app();
    a.suggest.evaluate("gaming");
    a.suggest.select_next();
    a.choose_selected_suggestion();
    assert_eq!(a.input, "Gaming Highlights: Best Plays");
    assert_eq!(a.cursor_position, a.input.chars().count());
    assert_eq!(a.overlay.as_ref().unwrap().query, "Gaming Highlights: Best Plays");
    assert!(!a.suggest.is_visible());
  }

  #[test]
  fn choosing_a_row_by_index_works_without_keyboard_focus() {
    let mut a = app();
    a.suggest.evaluate("gaming");
    a.choose_suggestion(1);
    assert_eq!(a.input, "How to Start Gaming on PC");
    assert!(a.overlay.is_some());
  }

  // --- Navigation ---

  #[test]
  fn icon_without_target_is_a_noop() {
    let mut a = app();
    let inert = icons().iter().position(|i| i.target.is_none()).unwrap();
    a.activate_icon(inert);
    assert_eq!(a.page, Page::Home);
  }

  #[test]
  fn icon_with_target_navigates() {
    let mut a = app();
    let live = icons().iter().position(|i| i.target.is_some()).unwrap();
    a.activate_icon(live);
    assert!(matches!(a.page, Page::Target(_)));
  }

  #[test]
  fn category_activation_navigates_to_convention_page() {
    let mut a = app();
    a.activate_category(2);
    assert_eq!(a.page.label(), format!("category-{}", a.categories.tabs()[2].slug.as_deref().unwrap_or("all")));
  }

  #[test]
  fn sidebar_link_navigates_and_closes() {
    let mut a = app();
    a.toggle_sidebar();
    assert_eq!(a.mode, AppMode::Sidebar);
    a.activate_sidebar_link();
    assert!(!a.sidebar.open);
    assert_eq!(a.mode, AppMode::Browse);
    assert_eq!(a.page, Page::Target("home".to_string()));
  }
}
