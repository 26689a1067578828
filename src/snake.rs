//! Border snake renderer.
//!
//! Two highlights ("snakes") grow out of the bottom-center pixel and travel
//! along the [`BorderPath`] walks, meeting at the top-center. The head moves
//! linearly with time and overshoots the end of the path by the snake length,
//! so each snake shrinks out of view instead of stopping abruptly. Every
//! pixel of a frame shares one eased color from the renderer's own
//! [`ColorAnimator`].

use crate::animator::ColorAnimator;
use crate::border::{BorderPath, PathError};
use crate::time::{TimeInstant, TimeSource};
use crate::transition::linear_progress;
use crate::types::{Color, Position};

/// Fraction of the run during which the bottom-center anchor pixel is lit.
pub const ANCHOR_PULSE_FRACTION: f32 = 0.3;

/// Index of the snake head on a path of `path_len` positions.
///
/// `progress` is the linear run progress in `[0, 1)`. The head travels
/// `path_len + max_len` positions in total.
#[inline]
pub fn snake_head_index(progress: f32, path_len: usize, max_len: usize) -> usize {
    (progress * (path_len + max_len) as f32) as usize
}

/// Positions `path[head - i]` for `i` in `[0, max_len)` that fall on the path.
///
/// The indices are contiguous, so the window is returned as one sub-slice in
/// path order (tail first).
fn snake_window(path: &[Position], head: usize, max_len: usize) -> &[Position] {
    if max_len == 0 || path.is_empty() {
        return &[];
    }

    let low = head.saturating_sub(max_len - 1);
    let high = head.min(path.len() - 1);
    if low > high {
        return &[];
    }

    &path[low..=high]
}

/// One rendered snake frame.
///
/// Borrowed from the renderer's paths; cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakeFrame<'a> {
    color: Color,
    left: &'a [Position],
    right: &'a [Position],
    anchor: Option<Position>,
}

impl<'a> SnakeFrame<'a> {
    /// A frame with nothing to draw.
    pub fn empty(color: Color) -> Self {
        Self {
            color,
            left: &[],
            right: &[],
            anchor: None,
        }
    }

    /// The color shared by every position in this frame.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Left snake segment, in path order (tail first).
    #[inline]
    pub fn left(&self) -> &'a [Position] {
        self.left
    }

    /// Right snake segment, in path order (tail first).
    #[inline]
    pub fn right(&self) -> &'a [Position] {
        self.right
    }

    /// The bottom-center anchor, lit during the first part of the run.
    #[inline]
    pub fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    /// Number of positions to draw.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len() + usize::from(self.anchor.is_some())
    }

    /// Returns true if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positions to draw: left snake head first, then right snake head
    /// first, then the anchor.
    pub fn positions(self) -> impl Iterator<Item = Position> + 'a {
        let (left, right) = (self.left, self.right);
        left.iter()
            .rev()
            .chain(right.iter().rev())
            .copied()
            .chain(self.anchor)
    }

    /// Positions paired with the frame color.
    pub fn pixels(self) -> impl Iterator<Item = (Position, Color)> + 'a {
        let color = self.color;
        self.positions().map(move |position| (position, color))
    }
}

/// Animates two snakes along the display border during a color change.
///
/// Owns its own [`ColorAnimator`]; both are started together and stop at the
/// same deadline.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `P` - Maximum number of positions in each border path
pub struct BorderSnake<'t, I: TimeInstant, T: TimeSource<I>, const P: usize> {
    time_source: &'t T,
    animator: ColorAnimator<'t, I, T>,
    path: BorderPath<P>,
    max_length: usize,
    start_time: Option<I>,
    duration: Option<I::Duration>,
    running: bool,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const P: usize> BorderSnake<'t, I, T, P> {
    /// Creates an idle renderer for a `width` x `height` display.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The border does not fit in `P` positions
    pub fn new(
        time_source: &'t T,
        width: u16,
        height: u16,
        max_length: u16,
    ) -> Result<Self, PathError> {
        Ok(Self::from_path(
            time_source,
            BorderPath::new(width, height)?,
            max_length,
        ))
    }

    /// Creates an idle renderer over an already generated path.
    pub fn from_path(time_source: &'t T, path: BorderPath<P>, max_length: u16) -> Self {
        Self {
            time_source,
            animator: ColorAnimator::new(time_source),
            path,
            max_length: usize::from(max_length),
            start_time: None,
            duration: None,
            running: false,
        }
    }

    /// Starts a run blending from `from` to `to`.
    ///
    /// Replaces any run in flight.
    pub fn start(&mut self, from: Color, to: Color, duration: I::Duration) {
        self.animator.start(from, to, duration);
        self.start_time = Some(self.time_source.now());
        self.duration = Some(duration);
        self.running = true;
    }

    /// Computes the current frame.
    ///
    /// Empty when idle. The run stops by itself once the duration has elapsed.
    pub fn update(&mut self) -> SnakeFrame<'_> {
        let idle_color = self.animator.transition().to();
        if !self.running {
            return SnakeFrame::empty(idle_color);
        }

        let (Some(start_time), Some(duration)) = (self.start_time, self.duration) else {
            self.running = false;
            return SnakeFrame::empty(idle_color);
        };

        let elapsed = self.time_source.now().duration_since(start_time);
        let Some(progress) = linear_progress(elapsed, duration) else {
            self.running = false;
            return SnakeFrame::empty(idle_color);
        };

        let color = self.animator.update();

        let left = self.path.left();
        let right = self.path.right();
        let left_head = snake_head_index(progress, left.len(), self.max_length);
        let right_head = snake_head_index(progress, right.len(), self.max_length);

        SnakeFrame {
            color,
            left: snake_window(left, left_head, self.max_length),
            right: snake_window(right, right_head, self.max_length),
            anchor: if progress < ANCHOR_PULSE_FRACTION {
                self.path.start_point()
            } else {
                None
            },
        }
    }

    /// Returns true while a run is in flight.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Stops the run and its color animator.
    pub fn cancel(&mut self) {
        self.animator.cancel();
        self.running = false;
    }

    /// The internal color animator.
    #[inline]
    pub fn animator(&self) -> &ColorAnimator<'t, I, T> {
        &self.animator
    }

    /// The border geometry.
    #[inline]
    pub fn path(&self) -> &BorderPath<P> {
        &self.path
    }

    /// Maximum number of positions per snake.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}
