#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorAnimator`**: Blends between two colors over a duration with a cubic ease-in-out curve
//! - **`Transition`**: Pure description of one blend, evaluated from elapsed time
//! - **`BorderPath`**: Two precomputed border walks from bottom-center to top-center
//! - **`BorderSnake`**: Traveling two-sided highlight along the border, colored by its own animator
//! - **`TransitionScheduler`**: Picks between auto palette cycling, manual advances and overlays
//! - **`DisplayConfig`**: Validated geometry, timing and brightness settings
//! - **`Palette`**: Ordered list of named colors
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Progress is always derived from `now - start`, never accumulated, so every
//! component may be polled at irregular intervals (or not at all for a while)
//! without drifting.

pub mod animator;
pub mod border;
pub mod colors;
pub mod config;
pub mod event;
pub mod scheduler;
pub mod snake;
pub mod time;
pub mod transition;
pub mod types;

pub use animator::ColorAnimator;
pub use border::{BorderPath, PathError};
pub use colors::{FALLBACK_COLOR, NamedColor, Palette, PaletteError};
pub use config::{ConfigError, DisplayConfig, DisplayConfigBuilder};
pub use event::{DisplayEvent, EventOutcome, Selection};
pub use scheduler::{DisplayMode, Frame, SchedulerError, TransitionScheduler};
pub use snake::{ANCHOR_PULSE_FRACTION, BorderSnake, SnakeFrame, snake_head_index};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use transition::{Transition, blend, ease_in_out_cubic};
pub use types::{Color, Position};

#[cfg(feature = "std")]
pub use time::StdTimeSource;

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 220, 0);
