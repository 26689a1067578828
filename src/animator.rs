//! Color transition animator.
//!
//! Provides [`ColorAnimator`], which owns one [`Transition`] at a time and
//! samples it against a [`TimeSource`].

use crate::BLACK;
use crate::time::{TimeInstant, TimeSource};
use crate::transition::Transition;
use crate::types::Color;

/// Blends a single color between two endpoints over time.
///
/// The animator is created once and reused across many `start`/`cancel`
/// calls. Starting a new transition always replaces the current one.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct ColorAnimator<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    transition: Transition<I::Duration>,
    start_time: Option<I>,
    running: bool,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> ColorAnimator<'t, I, T> {
    /// Creates an idle animator resting on black.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            transition: Transition::resting(BLACK),
            start_time: None,
            running: false,
        }
    }

    /// Starts a transition from `from` to `to` at the current time.
    ///
    /// Overwrites any transition in flight.
    pub fn start(&mut self, from: Color, to: Color, duration: I::Duration) {
        self.transition = Transition::new(from, to, duration);
        self.start_time = Some(self.time_source.now());
        self.running = true;
    }

    /// Samples the current color.
    ///
    /// When idle this is the last target color. Once the elapsed time reaches
    /// the duration the animator stops and returns the target exactly.
    pub fn update(&mut self) -> Color {
        if !self.running {
            return self.transition.to();
        }

        let Some(start_time) = self.start_time else {
            self.running = false;
            return self.transition.to();
        };

        let elapsed = self.time_source.now().duration_since(start_time);
        if self.transition.is_complete_at(elapsed) {
            self.running = false;
            return self.transition.to();
        }

        self.transition.color_at(elapsed)
    }

    /// Returns true while a transition is in flight.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Stops the transition immediately.
    ///
    /// The target is kept, so the next `update` returns the declared target
    /// rather than the last interpolated sample.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Returns the current (or last) transition.
    #[inline]
    pub fn transition(&self) -> &Transition<I::Duration> {
        &self.transition
    }

    /// Returns the elapsed time since the transition started, if one was ever started.
    pub fn elapsed_time(&self) -> Option<I::Duration> {
        self.start_time
            .map(|start| self.time_source.now().duration_since(start))
    }
}
