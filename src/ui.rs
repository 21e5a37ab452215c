use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Layout, Rect},
  style::{Modifier, Style, Stylize},
  text::{Line, Span},
  widgets::{Block, Clear, List, ListItem, Padding, Paragraph},
};

use crate::app::{App, AppMode};
use crate::catalog::{Record, records};
use crate::constants::constants;
use crate::nav::{Page, icons};
use crate::suggest::SuggestState;
use crate::text::{display_width, sanitize, truncate_str};
use crate::theme::Theme;

// --- UI Rendering ---

pub fn ui(frame: &mut Frame, app: &mut App) {
  let theme = app.theme();
  app.viewport_cols = frame.area().width;
  app.hit = Default::default();

  frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), frame.area());

  let [header_area, category_area, main_area, status_area, input_area, footer_area] = Layout::vertical([
    Constraint::Length(1),
    Constraint::Length(1),
    Constraint::Min(3),
    Constraint::Length(1),
    Constraint::Length(3),
    Constraint::Length(1),
  ])
  .areas(frame.area());

  render_header(frame, app, header_area);
  render_categories(frame, app, category_area);
  render_main(frame, app, main_area);
  render_status(frame, app, status_area);
  render_input(frame, app, input_area);
  render_footer(frame, app, footer_area);

  // Popups go last so they sit on top of everything else.
  render_suggestions(frame, app, input_area);
  render_overlay(frame, app);
}

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();

  // Menu toggle + brand on the left.
  app.hit.menu_btn = Some(Rect { width: 3, ..area });
  let left = Line::from(vec![
    Span::styled(" ☰ ", Style::default().fg(if app.sidebar.open { theme.accent } else { theme.muted })),
    Span::styled(" ▶ vidsurf ", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
  ]);
  frame.render_widget(left, area);

  // Icon controls, right-aligned.
  let mut x = area.x + area.width;
  for icon in icons().iter().rev() {
    let cell = format!(" {} ", icon.label);
    let w = display_width(&cell, cell.chars().count()) as u16;
    x = x.saturating_sub(w);
    let icon_area = Rect { x, width: w, ..area };
    let style = if icon.target.is_some() {
      Style::default().fg(theme.fg)
    } else {
      Style::default().fg(theme.muted)
    };
    frame.render_widget(Line::from(Span::styled(cell, style)), icon_area);
    app.hit.icons.push(icon_area);
  }
  // Rects were pushed right-to-left; restore icon order.
  app.hit.icons.reverse();
}

fn render_categories(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  let mut x = area.x + 1;
  for (i, cat) in app.categories.tabs().iter().enumerate() {
    let cell = format!(" {} ", cat.label);
    let w = cell.chars().count() as u16;
    if x + w > area.x + area.width {
      break;
    }
    let tab_area = Rect { x, width: w, ..area };
    let style = if i == app.categories.active {
      Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(theme.muted)
    };
    frame.render_widget(Line::from(Span::styled(cell, style)), tab_area);
    app.hit.categories.push(tab_area);
    x += w + 1;
  }
}

fn render_main(frame: &mut Frame, app: &mut App, area: Rect) {
  if app.sidebar.open {
    let [side_area, list_area] =
      Layout::horizontal([Constraint::Length(constants().sidebar_cols), Constraint::Min(10)]).areas(area);
    render_sidebar(frame, app, side_area);
    render_listing(frame, app, list_area);
  } else {
    render_listing(frame, app, area);
  }
}

fn render_sidebar(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  app.hit.sidebar = Some(area);

  let items: Vec<ListItem> = app
    .sidebar
    .links()
    .iter()
    .enumerate()
    .map(|(i, link)| {
      let focused = app.mode == AppMode::Sidebar && i == app.sidebar.selected;
      let style = if focused {
        Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(theme.fg)
      };
      ListItem::new(Line::from(Span::styled(format!(" {}", link.label), style)))
    })
    .collect();

  let block = Block::bordered()
    .title(" Menu ")
    .title_style(Style::default().fg(theme.accent))
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(if app.mode == AppMode::Sidebar { theme.accent } else { theme.border }));
  let inner = block.inner(area);
  frame.render_widget(List::new(items).block(block), area);

  for i in 0..app.sidebar.links().len() {
    let y = inner.y + i as u16;
    if y < inner.y + inner.height {
      app.hit.sidebar_links.push(Rect { y, height: 1, ..inner });
    }
  }
}

fn render_listing(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();

  if let Page::Target(ref target) = app.page {
    let text = vec![
      Line::from(""),
      Line::from(Span::styled(format!("You are on \"{}\".", sanitize(target)), Style::default().fg(theme.fg))),
      Line::from(""),
      Line::from(Span::styled("Nothing to see here yet.", Style::default().fg(theme.muted))),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
      Block::bordered()
        .title(format!(" {} ", app.page.label()))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(paragraph, area);
    return;
  }

  // Inner width: area minus 2 borders minus 2 chars for highlight symbol ("▶ ")
  let inner_w = area.width.saturating_sub(4) as usize;

  let items: Vec<ListItem> = records()
    .iter()
    .enumerate()
    .map(|(i, record)| {
      let is_selected = Some(i) == app.list_state.selected();
      let fg = if is_selected { theme.highlight_fg } else { theme.fg };
      let bg = if is_selected {
        theme.highlight_bg
      } else if i % 2 == 1 {
        theme.stripe_bg
      } else {
        theme.bg
      };
      ListItem::new(record_line(record, inner_w, fg, theme)).bg(bg)
    })
    .collect();

  let title = match app.page {
    Page::Home => " Browse ".to_string(),
    _ => format!(" {} ", app.page.label()),
  };

  let list = List::new(items)
    .block(
      Block::bordered()
        .title(title)
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme.border)),
    )
    .highlight_symbol("▶ ")
    .highlight_style(Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD));

  frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// One catalog row: title left, "channel • views • recency" right-aligned.
fn record_line(record: &Record, inner_w: usize, fg: ratatui::style::Color, theme: &Theme) -> Line<'static> {
  let right = format!("{} • {} • {}", sanitize(&record.channel), record.view_label, record.recency_label);
  let right_w = right.chars().count();
  let title_max = inner_w.saturating_sub(right_w + 2);
  let title = truncate_str(&sanitize(&record.title), title_max);
  let title_w = title.chars().count();
  let gap = inner_w.saturating_sub(title_w + right_w);
  Line::from(vec![
    Span::styled(title, Style::default().fg(fg)),
    Span::raw(" ".repeat(gap)),
    Span::styled(right, Style::default().fg(theme.muted)),
  ])
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let (text, style) = match &app.overlay {
    Some(o) if o.is_empty() => (format!(" ⌕ \"{}\" — no results", o.query), Style::default().fg(theme.muted)),
    Some(o) => (format!(" ⌕ \"{}\" — {} results", o.query, o.rows.len()), Style::default().fg(theme.status)),
    None if app.suggest.is_pending() => (" ⌕ typing…".to_string(), Style::default().fg(theme.muted)),
    None => (format!(" ⌂ {}", app.page.label()), Style::default().fg(theme.muted)),
  };
  frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  app.hit.input = Some(area);

  let border_color = if app.mode == AppMode::Search { theme.accent } else { theme.border };
  let input_block = Block::bordered()
    .title(" Search ")
    .title_style(Style::default().fg(border_color))
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(border_color))
    .padding(Padding::horizontal(1));

  let inner_w = area.width.saturating_sub(4) as usize;
  let cursor_col = display_width(&app.input, app.cursor_position);

  if cursor_col < app.input_scroll {
    app.input_scroll = cursor_col;
  } else if cursor_col >= app.input_scroll + inner_w {
    app.input_scroll = cursor_col.saturating_sub(inner_w) + 1;
  }

  let visible: String = app
    .input
    .chars()
    .scan(0usize, |col, c| {
      let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
      let start = *col;
      *col += w;
      Some((start, *col, c))
    })
    .skip_while(|(_, end, _)| *end <= app.input_scroll)
    .take_while(|(start, _, _)| *start < app.input_scroll + inner_w)
    .map(|(_, _, c)| c)
    .collect();

  let paragraph = Paragraph::new(visible).style(Style::default().fg(theme.fg)).block(input_block);
  frame.render_widget(paragraph, area);

  if app.mode == AppMode::Search && app.overlay.is_none() {
    let cursor_x = area.x + 2 + (cursor_col - app.input_scroll) as u16;
    frame.set_cursor_position((cursor_x, area.y + 1));
  }
}

fn render_suggestions(frame: &mut Frame, app: &mut App, input_area: Rect) {
  if app.overlay.is_some() {
    return;
  }
  let rows = match app.suggest.state() {
    SuggestState::Hidden => return,
    // Visible-but-empty: the panel occupies no space, mirroring an empty list.
    SuggestState::Visible(rows) if rows.is_empty() => return,
    SuggestState::Visible(rows) => rows.clone(),
  };

  let theme = app.theme();
  let height = rows.len() as u16 + 2;
  let popup = Rect {
    x: input_area.x,
    y: input_area.y.saturating_sub(height),
    width: input_area.width.min(64),
    height,
  };
  if popup.bottom() > frame.area().bottom() || popup.right() > frame.area().right() {
    return;
  }
  app.hit.suggest = Some(popup);

  frame.render_widget(Clear, popup);
  let block = Block::bordered()
    .title(" Suggestions ")
    .title_style(Style::default().fg(theme.accent))
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(theme.border))
    .style(Style::default().bg(theme.bg));
  let inner = block.inner(popup);
  frame.render_widget(&block, popup);

  let inner_w = inner.width as usize;
  for (i, record) in rows.iter().enumerate() {
    let row_area = Rect { y: inner.y + i as u16, height: 1, ..inner };
    let focused = app.suggest.selected == Some(i);
    let (fg, bg) = if focused { (theme.highlight_fg, theme.highlight_bg) } else { (theme.fg, theme.bg) };

    let channel = format!("  {}", sanitize(&record.channel));
    let title_max = inner_w.saturating_sub(channel.chars().count());
    let line = Line::from(vec![
      Span::styled(
        truncate_str(&sanitize(&record.title), title_max),
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
      ),
      Span::styled(channel, Style::default().fg(if focused { theme.highlight_fg } else { theme.muted })),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), row_area);
    app.hit.suggest_rows.push(row_area);
  }
}

fn render_overlay(frame: &mut Frame, app: &mut App) {
  let Some(overlay) = &app.overlay else { return };
  let (query, rows, scroll) = (overlay.query.clone(), overlay.rows.clone(), overlay.scroll);
  let theme = app.theme();
  let frame_area = frame.area();

  let width = ((frame_area.width as u32 * 9 / 10).clamp(20, 110) as u16).min(frame_area.width);
  let height = ((frame_area.height as u32 * 7 / 10) as u16).max(7).min(frame_area.height);
  let popup = Rect {
    x: frame_area.x + (frame_area.width.saturating_sub(width)) / 2,
    y: frame_area.y + (frame_area.height.saturating_sub(height)) / 2,
    width,
    height,
  };
  app.hit.overlay = Some(popup);

  frame.render_widget(Clear, popup);
  let title = format!(" Search results for \"{}\" ", truncate_str(&query, width.saturating_sub(24) as usize));
  let block = Block::bordered()
    .title(title)
    .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(theme.accent))
    .style(Style::default().bg(theme.bg))
    .padding(Padding::horizontal(1));
  let inner = block.inner(popup);
  frame.render_widget(block, popup);

  // Close control in the top-right corner of the border.
  let close_area = Rect { x: popup.x + popup.width.saturating_sub(6), y: popup.y, width: 5, height: 1 };
  let close = Line::from(Span::styled(" ✕ ", Style::default().fg(theme.error).add_modifier(Modifier::BOLD)));
  frame.render_widget(close, close_area);
  app.hit.overlay_close = Some(close_area);

  if rows.is_empty() {
    let text = vec![Line::from(""), Line::from(Span::styled("No results found.", Style::default().fg(theme.muted)))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
    return;
  }

  let inner_w = inner.width as usize;
  let lines: Vec<Line> = rows
    .iter()
    .skip(scroll)
    .take(inner.height as usize)
    .enumerate()
    .map(|(i, record)| {
      let line = record_line(record, inner_w, theme.fg, theme);
      if (scroll + i) % 2 == 1 { line.bg(theme.stripe_bg) } else { line }
    })
    .collect();
  frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let keys: Vec<(&str, &str)> = if app.overlay.is_some() {
    vec![("j/k", "Scroll"), ("x", "Close"), ("Esc", "Close")]
  } else {
    match app.mode {
      AppMode::Browse => {
        vec![("/", "Search"), ("←→", "Category"), ("Enter", "Open"), ("^b", "Sidebar"), ("^t", "Theme"), ("q", "Quit")]
      }
      AppMode::Search => vec![("Enter", "Search"), ("↑↓", "Suggest"), ("^b", "Sidebar"), ("Esc", "Back")],
      AppMode::Sidebar => vec![("j/k", "Navigate"), ("Enter", "Go"), ("Esc", "Close")],
    }
  };

  let spans: Vec<Span> = keys
    .iter()
    .enumerate()
    .flat_map(|(i, (key, action))| {
      let mut s = vec![
        Span::styled(format!(" {} ", key), Style::default().fg(theme.key_fg).bg(theme.key_bg)),
        Span::styled(format!(" {} ", action), Style::default().fg(theme.muted)),
      ];
      if i < keys.len() - 1 {
        s.push(Span::raw("  "));
      }
      s
    })
    .collect();

  frame.render_widget(Line::from(spans), area);

  let theme_label = format!("{} ", theme.name);
  let right = Line::from(Span::styled(&theme_label, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(theme_label.len() as u16), width: theme_label.len() as u16, ..area };
  frame.render_widget(right, right_area);
}
