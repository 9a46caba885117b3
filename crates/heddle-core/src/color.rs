//! Color handling for rendered charts.
//!
//! Charts use a deliberately small color model: every color is an opaque RGB
//! value written as six hexadecimal digits. Input strings may carry a leading
//! `#`; anything else is rejected so that a misconfigured background never
//! silently changes the rendered output. Connector wires draw their colors
//! from the fixed [`WIRE_PALETTE`].

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a color string is not six hexadecimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{value}`: expected six hex digits, with or without a leading `#`")]
pub struct ColorParseError {
    value: String,
}

impl ColorParseError {
    /// Returns the rejected input string.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An opaque RGB color.
///
/// Parsed from `RRGGBB` or `#RRGGBB` strings and displayed as `#RRGGBB`,
/// which is the form interpolated into SVG attributes.
///
/// # Examples
///
/// ```
/// use heddle_core::color::Rgb;
///
/// let teal: Rgb = "#40E0D0".parse().unwrap();
/// assert_eq!(teal.to_string(), "#40E0D0");
///
/// let same: Rgb = "40e0d0".parse().unwrap();
/// assert_eq!(teal, same);
///
/// assert!("turquoise".parse::<Rgb>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

/// Background color used when none is configured.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// The fixed palette that connector wires cycle through.
pub const WIRE_PALETTE: [Rgb; 8] = [
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0xFF, 0x00, 0x00), // red
    Rgb::new(0x00, 0xFF, 0x00), // green
    Rgb::new(0x00, 0x00, 0xFF), // blue
    Rgb::new(0xFF, 0xFF, 0x00), // yellow
    Rgb::new(0x80, 0x00, 0x80), // purple
    Rgb::new(0xFF, 0xA5, 0x00), // orange
    Rgb::new(0x40, 0xE0, 0xD0), // turquoise
];

/// Returns the palette entry for the `index`-th allocated wire, wrapping
/// around when the palette is exhausted.
pub fn wire_color(index: usize) -> Rgb {
    WIRE_PALETTE[index % WIRE_PALETTE.len()]
}

impl Rgb {
    /// Creates a color from its red, green, and blue components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the red component.
    pub fn r(self) -> u8 {
        self.r
    }

    /// Returns the green component.
    pub fn g(self) -> u8 {
        self.g
    }

    /// Returns the blue component.
    pub fn b(self) -> u8 {
        self.b
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError {
                value: s.to_string(),
            });
        }

        let component = |range| u8::from_str_radix(&digits[range], 16).expect("checked hex digits");
        Ok(Self {
            r: component(0..2),
            g: component(2..4),
            b: component(4..6),
        })
    }
}
