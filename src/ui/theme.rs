use ratatui::style::Color;
use ratatui::widgets::BorderType;

use crate::config::ColorsConfig;
use crate::render::bar::Band;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Auto,
    Truecolor,
    Color256,
    Mono,
}

impl ColorSupport {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "truecolor" | "24bit" => ColorSupport::Truecolor,
            "256" | "256color" => ColorSupport::Color256,
            "mono" | "monochrome" => ColorSupport::Mono,
            _ => ColorSupport::Auto,
        }
    }
}

pub fn detect_color_support() -> ColorSupport {
    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorSupport::Truecolor;
    }
    ColorSupport::Color256
}

pub fn resolve_color_support(config: &str) -> ColorSupport {
    let parsed = ColorSupport::from_config_str(config);
    if parsed == ColorSupport::Auto {
        detect_color_support()
    } else {
        parsed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Rounded,
    Thin,
}

impl BorderStyle {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "thin" | "plain" => BorderStyle::Thin,
            _ => BorderStyle::Rounded,
        }
    }

    pub fn border_type(self) -> BorderType {
        match self {
            BorderStyle::Rounded => BorderType::Rounded,
            BorderStyle::Thin => BorderType::Plain,
        }
    }
}

/// Optional hex overrides for the three utilization bands.
#[derive(Debug, Clone, Default)]
pub struct BandOverrides {
    pub low: Option<String>,
    pub medium: Option<String>,
    pub high: Option<String>,
}

impl BandOverrides {
    pub fn from_config(colors: &ColorsConfig) -> Self {
        Self {
            low: colors.band_low.clone(),
            medium: colors.band_medium.clone(),
            high: colors.band_high.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub panel_border: Color,
    pub panel_title: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub chart_color: Color,
    pub band_low: Color,
    pub band_medium: Color,
    pub band_high: Color,
    pub statusbar_bg: Color,
    pub overlay_border: Color,
    pub accent: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
    pub surface_bg: Color,
}

impl Theme {
    pub fn from_config(theme_name: &str, bands: &BandOverrides, support: ColorSupport) -> Self {
        let mut theme = match theme_name.to_lowercase().as_str() {
            "light" => Self::light(),
            "mono" | "monochrome" => Self::mono(),
            _ => Self::dark(),
        };

        if support == ColorSupport::Mono {
            theme = Self::mono();
        } else {
            theme.apply_band_overrides(bands);
        }
        theme.apply_color_support(support);
        theme
    }

    pub fn next(&self, bands: &BandOverrides, support: ColorSupport) -> Self {
        let next_name = match self.name {
            "dark" => "light",
            "light" => "mono",
            _ => "dark",
        };
        Theme::from_config(next_name, bands, support)
    }

    pub fn band_color(&self, band: Band) -> Color {
        match band {
            Band::Low => self.band_low,
            Band::Medium => self.band_medium,
            Band::High => self.band_high,
        }
    }

    fn apply_band_overrides(&mut self, bands: &BandOverrides) {
        let parse = |s: &Option<String>| s.as_deref().and_then(parse_hex_color);
        if let Some(c) = parse(&bands.low) {
            self.band_low = c;
        }
        if let Some(c) = parse(&bands.medium) {
            self.band_medium = c;
        }
        if let Some(c) = parse(&bands.high) {
            self.band_high = c;
        }
    }

    fn apply_color_support(&mut self, support: ColorSupport) {
        let map = |c: Color| adapt_color(c, support);

        self.panel_border = map(self.panel_border);
        self.panel_title = map(self.panel_title);
        self.text_primary = map(self.text_primary);
        self.text_secondary = map(self.text_secondary);
        self.chart_color = map(self.chart_color);
        self.band_low = map(self.band_low);
        self.band_medium = map(self.band_medium);
        self.band_high = map(self.band_high);
        self.statusbar_bg = map(self.statusbar_bg);
        self.overlay_border = map(self.overlay_border);
        self.accent = map(self.accent);
        self.pill_key_bg = map(self.pill_key_bg);
        self.pill_key_fg = map(self.pill_key_fg);
        self.pill_desc_fg = map(self.pill_desc_fg);
        self.surface_bg = map(self.surface_bg);
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            panel_border: Color::DarkGray,
            panel_title: Color::Rgb(103, 232, 249),
            text_primary: Color::White,
            text_secondary: Color::Gray,
            chart_color: Color::Rgb(251, 146, 60),
            band_low: Color::Rgb(34, 197, 94),
            band_medium: Color::Rgb(234, 179, 8),
            band_high: Color::Rgb(239, 68, 68),
            statusbar_bg: Color::DarkGray,
            overlay_border: Color::DarkGray,
            accent: Color::Green,
            pill_key_bg: Color::Yellow,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            surface_bg: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            panel_border: Color::Gray,
            panel_title: Color::Blue,
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            chart_color: Color::Rgb(37, 99, 235),
            band_low: Color::Rgb(21, 128, 61),
            band_medium: Color::Rgb(180, 83, 9),
            band_high: Color::Rgb(185, 28, 28),
            statusbar_bg: Color::Gray,
            overlay_border: Color::Gray,
            accent: Color::Blue,
            pill_key_bg: Color::Blue,
            pill_key_fg: Color::White,
            pill_desc_fg: Color::Black,
            surface_bg: Color::White,
        }
    }

    pub fn mono() -> Self {
        Theme {
            name: "mono",
            panel_border: Color::Gray,
            panel_title: Color::White,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            chart_color: Color::White,
            band_low: Color::Gray,
            band_medium: Color::White,
            band_high: Color::White,
            statusbar_bg: Color::Black,
            overlay_border: Color::Gray,
            accent: Color::White,
            pill_key_bg: Color::White,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            surface_bg: Color::Black,
        }
    }
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(s.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(s.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(s.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn adapt_color(color: Color, support: ColorSupport) -> Color {
    match support {
        ColorSupport::Truecolor | ColorSupport::Auto => color,
        ColorSupport::Color256 => match color {
            Color::Rgb(r, g, b) => Color::Indexed(rgb_to_ansi256(r, g, b)),
            _ => color,
        },
        ColorSupport::Mono => match color {
            Color::Rgb(r, g, b) => {
                let luminance = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                if luminance > 128.0 {
                    Color::White
                } else {
                    Color::Black
                }
            }
            Color::White | Color::Black | Color::Gray | Color::DarkGray => color,
            _ => Color::White,
        },
    }
}

fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    let r = (r as f32 / 255.0 * 5.0).round() as u8;
    let g = (g as f32 / 255.0 * 5.0).round() as u8;
    let b = (b as f32 / 255.0 * 5.0).round() as u8;
    16 + 36 * r + 6 * g + b
}
