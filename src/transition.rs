use crate::time::TimeDuration;
use crate::types::Color;

/// A single color blend with a fixed duration.
///
/// The transition holds no clock. It is evaluated purely from the time
/// elapsed since it started, so the same elapsed value always yields the same
/// color regardless of how often or how irregularly it is sampled.
///
/// A zero duration is legal and means the transition is already complete.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<D: TimeDuration> {
    from: Color,
    to: Color,
    duration: D,
}

impl<D: TimeDuration> Transition<D> {
    /// Creates a new transition.
    #[inline]
    pub fn new(from: Color, to: Color, duration: D) -> Self {
        Self { from, to, duration }
    }

    /// A completed transition resting on `color`.
    #[inline]
    pub fn resting(color: Color) -> Self {
        Self::new(color, color, D::ZERO)
    }

    /// Linear progress in `[0, 1)` at `elapsed`, or `None` once complete.
    #[inline]
    pub fn progress_at(&self, elapsed: D) -> Option<f32> {
        linear_progress(elapsed, self.duration)
    }

    /// Returns true if the transition has finished at `elapsed`.
    #[inline]
    pub fn is_complete_at(&self, elapsed: D) -> bool {
        self.progress_at(elapsed).is_none()
    }

    /// Calculates the color at a given elapsed time since the transition started.
    ///
    /// Returns the target color exactly once `elapsed` reaches the duration.
    pub fn color_at(&self, elapsed: D) -> Color {
        match self.progress_at(elapsed) {
            Some(progress) => blend(self.from, self.to, ease_in_out_cubic(progress)),
            None => self.to,
        }
    }

    /// Starting color.
    #[inline]
    pub fn from(&self) -> Color {
        self.from
    }

    /// Target color.
    #[inline]
    pub fn to(&self) -> Color {
        self.to
    }

    /// Declared duration.
    #[inline]
    pub fn duration(&self) -> D {
        self.duration
    }
}

/// Linear progress of `elapsed` through `duration`, `None` once it is reached.
pub(crate) fn linear_progress<D: TimeDuration>(elapsed: D, duration: D) -> Option<f32> {
    let duration_millis = duration.as_millis();
    let elapsed_millis = elapsed.as_millis();
    if elapsed_millis >= duration_millis {
        return None;
    }

    Some(elapsed_millis as f32 / duration_millis as f32)
}

/// Cubic ease-in-out: slow start and end, fast middle.
///
/// Value and first derivative are continuous at `t = 0.5`.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Blends two colors channel by channel.
///
/// `factor` is clamped to `[0, 1]`. Each channel is truncated toward zero.
pub fn blend(from: Color, to: Color, factor: f32) -> Color {
    let t = factor.clamp(0.0, 1.0);
    Color::new(
        lerp_u8(from.red, to.red, t),
        lerp_u8(from.green, to.green, t),
        lerp_u8(from.blue, to.blue, t),
    )
}

#[inline]
fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let a = f32::from(a);
    (a + (f32::from(b) - a) * t) as u8
}
