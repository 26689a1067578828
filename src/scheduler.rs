//! Transition scheduler.
//!
//! Provides [`TransitionScheduler`], which decides each frame whether the
//! display shows an overlay, a manual palette advance, an automatic palette
//! blend, or a flat palette color. Also defines [`DisplayMode`] and the
//! per-frame [`Frame`] output.

use crate::animator::ColorAnimator;
use crate::border::PathError;
use crate::colors::Palette;
use crate::config::DisplayConfig;
use crate::event::{DisplayEvent, EventOutcome, Selection};
use crate::snake::{BorderSnake, SnakeFrame};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::Color;

/// Which palette color the display follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode<I> {
    /// Always show this palette entry.
    Fixed(usize),
    /// Cycle through the palette on a timer.
    Auto {
        /// Entry currently shown
        current: usize,
        /// Entry the next blend heads for
        next: usize,
        /// When `next` becomes `current`
        next_change: I,
    },
}

/// Scheduler construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerError {
    /// The border path could not be generated.
    Path(PathError),
}

impl core::fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SchedulerError::Path(err) => write!(f, "border path error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SchedulerError {}

impl From<PathError> for SchedulerError {
    fn from(err: PathError) -> Self {
        SchedulerError::Path(err)
    }
}

/// What to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame<'a> {
    /// An informational overlay owns the display; draw no color or snake.
    Overlay,
    /// Draw content in `color`, plus the snake pixels (possibly none).
    Scene {
        /// Content color
        color: Color,
        /// Border snake pixels
        snake: SnakeFrame<'a>,
    },
}

impl<'a> Frame<'a> {
    /// Content color, `None` while an overlay is shown.
    pub fn color(&self) -> Option<Color> {
        match self {
            Frame::Overlay => None,
            Frame::Scene { color, .. } => Some(*color),
        }
    }

    /// Snake pixels, `None` while an overlay is shown.
    pub fn snake(&self) -> Option<SnakeFrame<'a>> {
        match self {
            Frame::Overlay => None,
            Frame::Scene { snake, .. } => Some(*snake),
        }
    }

    /// Returns true if an overlay owns the display.
    pub fn is_overlay(&self) -> bool {
        matches!(self, Frame::Overlay)
    }
}

/// Orchestrates palette cycling, manual advances and overlay precedence.
///
/// Owns one [`ColorAnimator`] for the content color and one [`BorderSnake`]
/// that runs alongside manual advances. Poll [`tick`](Self::tick) once per
/// frame from the main loop and feed input through
/// [`handle_event`](Self::handle_event).
///
/// Precedence, highest first:
/// 1. An open overlay window suppresses all color and snake output.
/// 2. A manual advance in flight is authoritative.
/// 3. Auto mode blends towards the next entry during the last
///    `transition_duration` before each change.
/// 4. Otherwise the selected palette color is shown flat.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `P` - Maximum number of positions in each border path
/// * `C` - Maximum number of palette entries
pub struct TransitionScheduler<'t, I: TimeInstant, T: TimeSource<I>, const P: usize, const C: usize>
{
    time_source: &'t T,
    config: DisplayConfig<I::Duration>,
    palette: Palette<C>,
    mode: DisplayMode<I>,
    animator: ColorAnimator<'t, I, T>,
    snake: BorderSnake<'t, I, T, P>,
    manual: bool,
    brightness: u8,
    overlay_until: Option<I>,
    /// Deadline whose leading blend has already been started
    blend_started_for: Option<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const P: usize, const C: usize>
    TransitionScheduler<'t, I, T, P, C>
{
    /// Creates a scheduler in auto mode, first change one interval from now.
    ///
    /// # Errors
    /// * `Path` - The display border does not fit in `P` positions
    pub fn new(
        time_source: &'t T,
        config: DisplayConfig<I::Duration>,
        palette: Palette<C>,
    ) -> Result<Self, SchedulerError> {
        let snake = BorderSnake::new(
            time_source,
            config.width(),
            config.height(),
            config.max_snake_length(),
        )?;

        let mut scheduler = Self {
            time_source,
            config,
            palette,
            mode: DisplayMode::Fixed(0),
            animator: ColorAnimator::new(time_source),
            snake,
            manual: false,
            brightness: config.brightness(),
            overlay_until: None,
            blend_started_for: None,
        };
        scheduler.mode = scheduler.auto_mode(time_source.now());
        Ok(scheduler)
    }

    /// Renders one frame at the time source's current time.
    ///
    /// Safe to call at any rate, including after long gaps; all progress is
    /// derived from absolute timestamps.
    pub fn tick(&mut self) -> Frame<'_> {
        let now = self.time_source.now();

        if self.overlay_active_at(now) {
            return Frame::Overlay;
        }

        if self.manual {
            let color = self.animator.update();
            self.manual = self.animator.is_animating();
            let snake = self.snake.update();
            return Frame::Scene { color, snake };
        }

        let color = self.scene_color(now);
        Frame::Scene {
            color,
            snake: SnakeFrame::empty(color),
        }
    }

    /// Dispatches an input event.
    pub fn handle_event(&mut self, event: DisplayEvent) -> EventOutcome {
        match event {
            DisplayEvent::PaletteAdvance => EventOutcome::Selected(self.advance_palette()),
            DisplayEvent::BrightnessStep => EventOutcome::Brightness(self.step_brightness()),
        }
    }

    /// Selects the next palette entry and starts a manual transition to it.
    ///
    /// Fixed entries advance in order; after the last one the display returns
    /// to auto mode, and auto mode advances to the first entry. The blend
    /// starts from whatever is currently displayed and replaces any
    /// transition in flight.
    pub fn advance_palette(&mut self) -> Selection {
        let from = self.displayed_color();
        let now = self.time_source.now();
        let len = self.palette.len();

        self.mode = match self.mode {
            DisplayMode::Fixed(index) if index + 1 < len => DisplayMode::Fixed(index + 1),
            DisplayMode::Fixed(_) => self.auto_mode(now),
            DisplayMode::Auto { .. } if len > 0 => DisplayMode::Fixed(0),
            DisplayMode::Auto { .. } => self.auto_mode(now),
        };

        let to = self.flat_color();
        let duration = self.config.advance_duration();
        self.animator.start(from, to, duration);
        self.snake.start(from, to, duration);
        self.manual = true;

        let selection = self.selection();
        #[cfg(feature = "defmt")]
        defmt::info!("palette advance: {}", selection);
        selection
    }

    /// Raises brightness by one step and returns the new percentage.
    pub fn step_brightness(&mut self) -> u8 {
        self.brightness = self.config.next_brightness(self.brightness);
        #[cfg(feature = "defmt")]
        defmt::info!("brightness: {}%", self.brightness);
        self.brightness
    }

    /// Shows a fixed palette entry without a transition.
    ///
    /// Cancels any transition in flight. Out-of-range indices display the
    /// fallback color.
    pub fn set_fixed(&mut self, index: usize) {
        self.stop_transitions();
        self.mode = DisplayMode::Fixed(index);
    }

    /// Switches to auto mode without a transition, first change one interval
    /// from now.
    pub fn set_auto(&mut self) {
        self.stop_transitions();
        self.mode = self.auto_mode(self.time_source.now());
    }

    /// Opens an overlay window for `duration`, replacing any open one.
    pub fn show_overlay(&mut self, duration: I::Duration) {
        let now = self.time_source.now();
        self.overlay_until = Some(now.checked_add(duration).unwrap_or(now));
    }

    /// Closes the overlay window.
    pub fn hide_overlay(&mut self) {
        self.overlay_until = None;
    }

    /// Returns true while the overlay window is open.
    pub fn is_overlay_active(&self) -> bool {
        self.overlay_until
            .is_some_and(|until| self.time_source.now() < until)
    }

    /// The color currently on display.
    ///
    /// Interpolated if a transition is in flight, otherwise the flat color of
    /// the current selection.
    pub fn displayed_color(&mut self) -> Color {
        if self.animator.is_animating() {
            self.animator.update()
        } else {
            self.flat_color()
        }
    }

    /// Returns the current selection.
    pub fn selection(&self) -> Selection {
        match self.mode {
            DisplayMode::Fixed(index) => Selection::Fixed {
                index,
                name: self.palette.get(index).map(|entry| entry.name),
            },
            DisplayMode::Auto { .. } => Selection::Auto,
        }
    }

    /// Returns the current display mode.
    pub fn mode(&self) -> DisplayMode<I> {
        self.mode
    }

    /// Returns the current brightness, in percent.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Returns true while a manual advance is in flight.
    pub fn is_manual_active(&self) -> bool {
        self.manual
    }

    /// Returns the palette.
    pub fn palette(&self) -> &Palette<C> {
        &self.palette
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DisplayConfig<I::Duration> {
        &self.config
    }

    /// Returns the content color animator.
    pub fn animator(&self) -> &ColorAnimator<'t, I, T> {
        &self.animator
    }

    /// Returns the border snake renderer.
    pub fn snake(&self) -> &BorderSnake<'t, I, T, P> {
        &self.snake
    }

    fn overlay_active_at(&mut self, now: I) -> bool {
        match self.overlay_until {
            Some(until) if now < until => true,
            Some(_) => {
                self.overlay_until = None;
                false
            }
            None => false,
        }
    }

    /// Content color when no manual advance is in flight.
    fn scene_color(&mut self, now: I) -> Color {
        let len = self.palette.len();
        let DisplayMode::Auto {
            current,
            next,
            next_change,
        } = self.mode
        else {
            return self.flat_color();
        };

        if len < 2 {
            return self.flat_color();
        }

        if now >= next_change {
            self.animator.cancel();
            self.blend_started_for = None;
            let next_change = now
                .checked_add(self.config.interval())
                .unwrap_or(now);
            self.mode = DisplayMode::Auto {
                current: next,
                next: (next + 1) % len,
                next_change,
            };
            #[cfg(feature = "defmt")]
            defmt::debug!("auto cycle: now showing entry {}", next);
            return self.palette.color_or_fallback(next);
        }

        let remaining = next_change.duration_since(now);
        if remaining.as_millis() <= self.config.transition_duration().as_millis() {
            // Started once per deadline; a finished blend holds its target until commit.
            if self.blend_started_for != Some(next_change) {
                #[cfg(feature = "defmt")]
                defmt::debug!("auto cycle: blending entry {} -> {}", current, next);
                self.animator.start(
                    self.palette.color_or_fallback(current),
                    self.palette.color_or_fallback(next),
                    self.config.transition_duration(),
                );
                self.blend_started_for = Some(next_change);
            }
            return self.animator.update();
        }

        self.palette.color_or_fallback(current)
    }

    /// Flat color of the current selection.
    fn flat_color(&self) -> Color {
        match self.mode {
            DisplayMode::Fixed(index) => self.palette.color_or_fallback(index),
            DisplayMode::Auto { current, .. } => self.palette.color_or_fallback(current),
        }
    }

    fn auto_mode(&self, now: I) -> DisplayMode<I> {
        let len = self.palette.len().max(1);
        DisplayMode::Auto {
            current: 0,
            next: 1 % len,
            next_change: now.checked_add(self.config.interval()).unwrap_or(now),
        }
    }

    fn stop_transitions(&mut self) {
        self.animator.cancel();
        self.snake.cancel();
        self.manual = false;
    }
}
