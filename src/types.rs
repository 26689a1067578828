//! Core value types shared by every component.

use palette::Srgb;

/// An 8-bit-per-channel RGB color.
///
/// Channels are plain `u8` values (0-255). Interpolated colors are truncated
/// toward zero when converted back from floating point.
pub type Color = Srgb<u8>;

/// A pixel position on the display.
///
/// The origin is the top-left corner, `x` grows to the right and `y` grows
/// downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Position {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}
