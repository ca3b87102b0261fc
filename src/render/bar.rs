use std::fmt;

pub const DEFAULT_BAR_LENGTH: usize = 10;
pub const FILLED_GLYPH: char = '\u{2588}';
pub const BLANK_GLYPH: char = ' ';

const ANSI_RESET: &str = "\x1b[0m";

/// Severity band of a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    /// `> 80` is high, `> 50` is medium, everything else low.
    pub fn classify(percentage: f64) -> Self {
        if percentage > 80.0 {
            Band::High
        } else if percentage > 50.0 {
            Band::Medium
        } else {
            Band::Low
        }
    }

    /// Bold red / yellow / green.
    pub fn ansi_prefix(self) -> &'static str {
        match self {
            Band::High => "\x1b[1;31m",
            Band::Medium => "\x1b[1;33m",
            Band::Low => "\x1b[1;32m",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::Low => "low",
            Band::Medium => "medium",
            Band::High => "high",
        }
    }
}

/// A utilization bar: how many of `length` cells are filled and in which band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub filled: usize,
    pub length: usize,
    pub band: Band,
}

impl Bar {
    pub fn new(percentage: f64, length: usize) -> Self {
        Bar {
            filled: filled_cells(percentage, length),
            length,
            band: Band::classify(percentage),
        }
    }

    pub fn blank(&self) -> usize {
        self.length - self.filled
    }

    /// Bar glyphs without any styling.
    pub fn plain(&self) -> String {
        let mut out = String::with_capacity(self.length * FILLED_GLYPH.len_utf8());
        out.extend(std::iter::repeat_n(FILLED_GLYPH, self.filled));
        out.extend(std::iter::repeat_n(BLANK_GLYPH, self.blank()));
        out
    }

    /// Bar glyphs wrapped in the band's terminal color, reset afterwards.
    pub fn ansi(&self) -> String {
        format!("{}{}{}", self.band.ansi_prefix(), self.plain(), ANSI_RESET)
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain())
    }
}

/// `floor(percentage / 100 * length)` clamped to `[0, length]`.
pub fn filled_cells(percentage: f64, length: usize) -> usize {
    let raw = (percentage / 100.0 * length as f64).floor();
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= length as f64 {
        length
    } else {
        raw as usize
    }
}
