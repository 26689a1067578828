//! Border path geometry.
//!
//! A [`BorderPath`] holds two walks around the display edge. Both start next
//! to the bottom-center pixel and end at the top-center pixel, one going
//! counter-clockwise (left) and one clockwise (right).

use crate::types::Position;
use heapless::Vec;

/// Border path construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PathError {
    /// A path needs more positions than the chosen capacity.
    CapacityExceeded {
        /// Positions required by the geometry
        required: usize,
        /// Capacity of each path
        capacity: usize,
    },
}

impl core::fmt::Display for PathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PathError::CapacityExceeded { required, capacity } => {
                write!(
                    f,
                    "border path needs {} positions but capacity is {}",
                    required, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}

/// The two precomputed border walks for one display geometry.
///
/// Immutable once built. A zero width or height yields two empty paths;
/// widths and heights of one yield short paths that stay on the display.
///
/// # Type Parameters
/// * `P` - Maximum number of positions in each path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderPath<const P: usize> {
    width: u16,
    height: u16,
    left: Vec<Position, P>,
    right: Vec<Position, P>,
}

impl<const P: usize> BorderPath<P> {
    /// Generates both paths for a `width` x `height` display.
    ///
    /// # Errors
    /// * `CapacityExceeded` - A path is longer than `P`
    pub fn new(width: u16, height: u16) -> Result<Self, PathError> {
        let mut path = Self {
            width,
            height,
            left: Vec::new(),
            right: Vec::new(),
        };

        if width == 0 || height == 0 {
            return Ok(path);
        }

        let required = Self::left_len(width, height).max(Self::right_len(width, height));
        if required > P {
            return Err(PathError::CapacityExceeded {
                required,
                capacity: P,
            });
        }

        let center = width / 2;
        let bottom = height - 1;
        let right_edge = width - 1;

        // Counter-clockwise: bottom row leftward, left column upward, top row to center.
        let left = (0..center)
            .rev()
            .map(|x| Position::new(x, bottom))
            .chain((0..bottom).rev().map(|y| Position::new(0, y)))
            .chain((1..=center).map(|x| Position::new(x, 0)));
        for position in left {
            path.left
                .push(position)
                .map_err(|_| PathError::CapacityExceeded { required, capacity: P })?;
        }

        // Clockwise: bottom row rightward, right column upward, top row back to center.
        let right = (center + 1..width)
            .map(|x| Position::new(x, bottom))
            .chain((0..bottom).rev().map(|y| Position::new(right_edge, y)))
            .chain((center..right_edge).rev().map(|x| Position::new(x, 0)));
        for position in right {
            path.right
                .push(position)
                .map_err(|_| PathError::CapacityExceeded { required, capacity: P })?;
        }

        Ok(path)
    }

    fn left_len(width: u16, height: u16) -> usize {
        let center = usize::from(width / 2);
        center + usize::from(height - 1) + center
    }

    fn right_len(width: u16, height: u16) -> usize {
        let center = usize::from(width / 2);
        let width = usize::from(width);
        (width - center - 1) + usize::from(height - 1) + (width - 1 - center)
    }

    /// The pixel both snakes grow out of: `(width / 2, height - 1)`.
    ///
    /// `None` for a zero-sized display.
    pub fn start_point(&self) -> Option<Position> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(Position::new(self.width / 2, self.height - 1))
    }

    /// Counter-clockwise walk.
    #[inline]
    pub fn left(&self) -> &[Position] {
        &self.left
    }

    /// Clockwise walk.
    #[inline]
    pub fn right(&self) -> &[Position] {
        &self.right
    }

    /// Display width this path was generated for.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Display height this path was generated for.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_display_has_no_paths() {
        let path = BorderPath::<8>::new(0, 10).unwrap();
        assert!(path.left().is_empty());
        assert!(path.right().is_empty());
        assert_eq!(path.start_point(), None);

        let path = BorderPath::<8>::new(10, 0).unwrap();
        assert!(path.left().is_empty());
        assert_eq!(path.start_point(), None);
    }

    #[test]
    fn single_pixel_display_has_empty_paths() {
        let path = BorderPath::<8>::new(1, 1).unwrap();
        assert!(path.left().is_empty());
        assert!(path.right().is_empty());
        assert_eq!(path.start_point(), Some(Position::new(0, 0)));
    }

    #[test]
    fn lengths_match_generated_paths() {
        for (w, h) in [(1, 5), (2, 2), (3, 1), (7, 4), (64, 32)] {
            let path = BorderPath::<256>::new(w, h).unwrap();
            assert_eq!(path.left().len(), BorderPath::<256>::left_len(w, h));
            assert_eq!(path.right().len(), BorderPath::<256>::right_len(w, h));
        }
    }

    #[test]
    fn capacity_is_checked() {
        let result = BorderPath::<10>::new(64, 32);
        assert_eq!(
            result,
            Err(PathError::CapacityExceeded {
                required: 95,
                capacity: 10
            })
        );
    }
}
