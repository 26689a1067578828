//! Named colors and the selectable palette.
//!
//! Also provides HSV helpers, which are more intuitive than raw RGB when
//! building evenly spaced palettes.

use crate::types::Color;
use heapless::Vec;
use palette::{FromColor, Hsv, Srgb};

/// Color shown whenever a palette index is missing or the palette is empty.
pub const FALLBACK_COLOR: Color = Color::new(255, 220, 0);

/// A palette entry: a display name and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// Label shown to the user when this entry is selected.
    pub name: &'static str,
    /// The color itself.
    pub color: Color,
}

impl NamedColor {
    /// Creates a new palette entry.
    #[inline]
    pub const fn new(name: &'static str, color: Color) -> Self {
        Self { name, color }
    }
}

/// Palette construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaletteError {
    /// Palette capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PaletteError::CapacityExceeded => write!(f, "palette capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PaletteError {}

/// An ordered list of named colors.
///
/// Names need not be unique. Lookups are always bounds-checked.
///
/// # Type Parameters
/// * `C` - Maximum number of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette<const C: usize> {
    entries: Vec<NamedColor, C>,
}

impl<const C: usize> Palette<C> {
    /// Creates an empty palette.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builds a palette from a slice of entries.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More entries than `C`
    pub fn from_slice(entries: &[NamedColor]) -> Result<Self, PaletteError> {
        let mut palette = Self::new();
        for entry in entries {
            palette.push(*entry)?;
        }
        Ok(palette)
    }

    /// The stock clock palette: yellow, red, green, blue, white.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `C` is smaller than 5
    pub fn default_clock() -> Result<Self, PaletteError> {
        Self::from_slice(&[
            NamedColor::new("YELLOW", crate::YELLOW),
            NamedColor::new("RED", crate::RED),
            NamedColor::new("GREEN", crate::GREEN),
            NamedColor::new("BLUE", crate::BLUE),
            NamedColor::new("WHITE", crate::WHITE),
        ])
    }

    /// Appends an entry.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The palette already holds `C` entries
    pub fn push(&mut self, entry: NamedColor) -> Result<(), PaletteError> {
        self.entries
            .push(entry)
            .map_err(|_| PaletteError::CapacityExceeded)
    }

    /// Returns the entry at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&NamedColor> {
        self.entries.get(index)
    }

    /// Returns the color at `index`, or [`FALLBACK_COLOR`] when out of range.
    #[inline]
    pub fn color_or_fallback(&self, index: usize) -> Color {
        self.get(index).map_or(FALLBACK_COLOR, |entry| entry.color)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedColor> {
        self.entries.iter()
    }
}

impl<const C: usize> Default for Palette<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
///
/// `hue` is in degrees and wraps at 360; `saturation` and `value` are 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let hsv = Hsv::new(hue, saturation, value);
    let rgb: Srgb<f32> = Srgb::from_color(hsv);
    rgb.into_format::<u8>()
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Color {
    hsv(hue, 1.0, 1.0)
}
