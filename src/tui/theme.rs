use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{OpeningStyle, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
    pub light_square: Color,
    pub dark_square: Color,
    pub white_piece: Color,
    pub black_piece: Color,
    /// Per-style colors for opening names and style labels
    pub style_colors: HashMap<OpeningStyle, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut style_colors = HashMap::new();
        style_colors.insert(OpeningStyle::Classical, Color::Rgb(0x44, 0x88, 0xFF));
        style_colors.insert(OpeningStyle::Positional, Color::Rgb(0x44, 0xDD, 0xFF));
        style_colors.insert(OpeningStyle::Aggressive, Color::Rgb(0xFF, 0x44, 0x44));
        style_colors.insert(OpeningStyle::Solid, Color::Rgb(0x44, 0xFF, 0x88));
        style_colors.insert(OpeningStyle::Flexible, Color::Rgb(0xCC, 0x66, 0xFF));

        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_border: Color::Rgb(0xFB, 0x41, 0x96),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x0C, 0x00, 0x1B),
            light_square: Color::Rgb(0x6E, 0x5A, 0x9E),
            dark_square: Color::Rgb(0x3A, 0x2A, 0x5E),
            white_piece: Color::Rgb(0xFF, 0xFF, 0xFF),
            black_piece: Color::Rgb(0x0C, 0x00, 0x1B),
            style_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the `[ui]` config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(slot = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "green" => theme.green = color,
                "selection_bg" => theme.selection_bg = color,
                "selection_border" => theme.selection_border = color,
                "search_match_bg" => theme.search_match_bg = color,
                "search_match_fg" => theme.search_match_fg = color,
                "light_square" => theme.light_square = color,
                "dark_square" => theme.dark_square = color,
                "white_piece" => theme.white_piece = color,
                "black_piece" => theme.black_piece = color,
                _ => tracing::warn!(slot = %key, "unknown theme slot"),
            }
        }

        for (style, value) in &ui.style_colors {
            if let Some(style) = OpeningStyle::from_name(style)
                && let Some(color) = parse_hex_color(value)
            {
                theme.style_colors.insert(style, color);
            }
        }

        theme
    }

    /// Get the color for an opening style, falling back to text color
    pub fn style_color(&self, style: OpeningStyle) -> Color {
        self.style_colors.get(&style).copied().unwrap_or(self.text)
    }
}
