//! Option value parsers: sizes, aspect ratios and the visibility toggle.
//!
//! All parsers are pure. Size and aspect parsing is strict: the whole
//! string must match, with no surrounding whitespace and no sign.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::error::EmbedError;

/// Label of the reveal control when `hide` is just `true`.
pub const DEFAULT_HIDE_LABEL: &str = "Display embedded video";

/// Unit of a [`Size`] magnitude.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Absolute CSS pixels (`px`).
    #[default]
    Pixels,
    /// Percentage of the containing block (`%`).
    Percent,
}

impl Unit {
    /// CSS suffix for this unit.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Percent => "%",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A parsed width or height.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Non-negative magnitude.
    pub magnitude: u32,
    /// Unit of `magnitude`.
    pub unit: Unit,
}

impl Size {
    /// Size in pixels.
    pub const fn pixels(magnitude: u32) -> Self {
        Self {
            magnitude,
            unit: Unit::Pixels,
        }
    }

    /// Size as a percentage.
    pub const fn percent(magnitude: u32) -> Self {
        Self {
            magnitude,
            unit: Unit::Percent,
        }
    }

    /// Whether this size is a percentage.
    pub const fn is_percent(&self) -> bool {
        matches!(self.unit, Unit::Percent)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

/// Width-to-height ratio of the embedded frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    /// Horizontal part. Always positive.
    pub width: u32,
    /// Vertical part. Always positive.
    pub height: u32,
}

impl AspectRatio {
    /// Widescreen 16:9, used when no aspect is given.
    pub const WIDESCREEN: Self = Self {
        width: 16,
        height: 9,
    };

    /// Create an aspect ratio. Returns `None` if either part is zero.
    pub const fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Self { width, height })
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Whether the frame is shown directly or collapsed behind a reveal control.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Always visible.
    #[default]
    Shown,
    /// Collapsed; a control with this label reveals it.
    Hidden {
        /// Text of the reveal control.
        label: String,
    },
}

impl Visibility {
    /// Hidden behind a control with the given label.
    pub fn hidden(label: impl Into<String>) -> Self {
        Self::Hidden {
            label: label.into(),
        }
    }

    /// Whether the frame starts collapsed.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden { .. })
    }

    /// Reveal control label, if hidden.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Shown => None,
            Self::Hidden { label } => Some(label),
        }
    }
}

/// Parse a width or height: `"560"`, `"560px"` or `"50%"`.
pub fn parse_size(raw: &str) -> Result<Size, EmbedError> {
    let (digits, unit) = if let Some(d) = raw.strip_suffix('%') {
        (d, Unit::Percent)
    } else if let Some(d) = raw.strip_suffix("px") {
        (d, Unit::Pixels)
    } else {
        (raw, Unit::Pixels)
    };
    let magnitude =
        parse_digits(digits).ok_or_else(|| EmbedError::InvalidSizeFormat(String::from(raw)))?;
    Ok(Size { magnitude, unit })
}

/// Parse an aspect ratio of the form `"16:9"`.
pub fn parse_aspect(raw: &str) -> Result<AspectRatio, EmbedError> {
    let invalid = || EmbedError::InvalidAspectFormat(String::from(raw));
    let (w, h) = raw.split_once(':').ok_or_else(invalid)?;
    let w = parse_digits(w).ok_or_else(invalid)?;
    let h = parse_digits(h).ok_or_else(invalid)?;
    AspectRatio::new(w, h).ok_or_else(invalid)
}

/// Interpret the `hide` option.
///
/// Absent or `false` shows the frame, `true` hides it behind the default
/// label, and any other text becomes part of the label.
pub fn parse_hide(raw: Option<&str>) -> Visibility {
    let Some(raw) = raw else {
        return Visibility::Shown;
    };
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("false") {
        Visibility::Shown
    } else if trimmed.eq_ignore_ascii_case("true") {
        Visibility::hidden(DEFAULT_HIDE_LABEL)
    } else {
        Visibility::hidden(format!("Display: {trimmed}"))
    }
}

/// One or more ASCII digits that fit in a `u32`.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
