//! Color themes, cycled with Ctrl+T.

use ratatui::style::Color;

pub struct Theme {
  pub name: &'static str,
  pub bg: Color,
  pub fg: Color,
  pub muted: Color,
  pub accent: Color,
  pub border: Color,
  pub highlight_fg: Color,
  pub highlight_bg: Color,
  pub stripe_bg: Color,
  pub status: Color,
  pub error: Color,
  pub key_fg: Color,
  pub key_bg: Color,
}

pub static THEMES: [Theme; 3] = [
  Theme {
    name: "sketchbook",
    bg: Color::Rgb(30, 30, 40),
    fg: Color::Rgb(220, 215, 225),
    muted: Color::Rgb(130, 125, 145),
    accent: Color::Rgb(255, 170, 190),
    border: Color::Rgb(75, 70, 95),
    highlight_fg: Color::Rgb(30, 30, 40),
    highlight_bg: Color::Rgb(255, 170, 190),
    stripe_bg: Color::Rgb(38, 38, 50),
    status: Color::Rgb(170, 220, 190),
    error: Color::Rgb(255, 140, 140),
    key_fg: Color::Rgb(30, 30, 40),
    key_bg: Color::Rgb(150, 180, 255),
  },
  Theme {
    name: "dusk",
    bg: Color::Rgb(24, 26, 33),
    fg: Color::Rgb(205, 210, 220),
    muted: Color::Rgb(110, 118, 135),
    accent: Color::Rgb(140, 190, 255),
    border: Color::Rgb(60, 66, 82),
    highlight_fg: Color::Rgb(24, 26, 33),
    highlight_bg: Color::Rgb(140, 190, 255),
    stripe_bg: Color::Rgb(31, 34, 43),
    status: Color::Rgb(150, 210, 180),
    error: Color::Rgb(240, 130, 130),
    key_fg: Color::Rgb(24, 26, 33),
    key_bg: Color::Rgb(230, 200, 140),
  },
  Theme {
    name: "paper",
    bg: Color::Rgb(246, 242, 233),
    fg: Color::Rgb(60, 56, 50),
    muted: Color::Rgb(150, 142, 130),
    accent: Color::Rgb(190, 90, 80),
    border: Color::Rgb(200, 192, 178),
    highlight_fg: Color::Rgb(246, 242, 233),
    highlight_bg: Color::Rgb(190, 90, 80),
    stripe_bg: Color::Rgb(238, 233, 222),
    status: Color::Rgb(95, 140, 100),
    error: Color::Rgb(180, 70, 60),
    key_fg: Color::Rgb(246, 242, 233),
    key_bg: Color::Rgb(120, 110, 95),
  },
];
