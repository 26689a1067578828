//! Discrete input events for the scheduler.
//!
//! Button handling and debouncing live outside this crate; the caller turns
//! its input into [`DisplayEvent`]s and hands them to
//! [`TransitionScheduler::handle_event`](crate::TransitionScheduler::handle_event)
//! from the main loop.

/// Events consumed synchronously by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayEvent {
    /// Select the next palette entry (or auto cycling after the last one).
    PaletteAdvance,
    /// Raise brightness by one step, wrapping to the minimum.
    BrightnessStep,
}

/// The palette selection after an advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selection {
    /// A fixed palette entry.
    Fixed {
        /// Palette index
        index: usize,
        /// Entry name, `None` if the index is not in the palette
        name: Option<&'static str>,
    },
    /// Automatic palette cycling.
    Auto,
}

/// What changed in response to an event.
///
/// Useful for showing a short notice (color name, brightness percentage).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventOutcome {
    /// The palette selection changed.
    Selected(Selection),
    /// The brightness changed to this percentage.
    Brightness(u8),
}
