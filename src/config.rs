//! Display configuration.
//!
//! [`DisplayConfig`] collects the geometry, timing and brightness settings
//! consumed by the scheduler. Build one with [`DisplayConfig::builder`]; the
//! builder validates the combination before handing it out.

use crate::time::TimeDuration;

/// Default display width in pixels.
pub const DEFAULT_WIDTH: u16 = 64;
/// Default display height in pixels.
pub const DEFAULT_HEIGHT: u16 = 32;
/// Default period between automatic palette changes (two hours).
pub const DEFAULT_INTERVAL_MS: u64 = 120 * 60 * 1000;
/// Default length of an automatic palette blend.
pub const DEFAULT_TRANSITION_MS: u64 = 30 * 1000;
/// Default length of a manual palette advance (color blend and snake run).
pub const DEFAULT_ADVANCE_MS: u64 = 1000;
/// Default maximum length of each border snake.
pub const DEFAULT_MAX_SNAKE_LENGTH: u16 = 16;
/// Default brightness, in percent.
pub const DEFAULT_BRIGHTNESS: u8 = 50;
/// Lowest brightness reachable by stepping, in percent.
pub const DEFAULT_BRIGHTNESS_MIN: u8 = 20;
/// Highest brightness reachable by stepping, in percent.
pub const DEFAULT_BRIGHTNESS_MAX: u8 = 100;
/// Brightness increment per step, in percent.
pub const DEFAULT_BRIGHTNESS_STEP: u8 = 10;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Minimum brightness is above maximum brightness.
    BrightnessRangeInverted,

    /// Maximum brightness is above 100 percent.
    BrightnessAboveFull,

    /// Brightness step is zero.
    ZeroBrightnessStep,

    /// Initial brightness lies outside the min/max range.
    BrightnessOutOfRange,

    /// The automatic blend is longer than the cycling interval.
    TransitionLongerThanInterval,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::BrightnessRangeInverted => {
                write!(f, "minimum brightness must not exceed maximum brightness")
            }
            ConfigError::BrightnessAboveFull => {
                write!(f, "maximum brightness must not exceed 100 percent")
            }
            ConfigError::ZeroBrightnessStep => {
                write!(f, "brightness step must be non-zero")
            }
            ConfigError::BrightnessOutOfRange => {
                write!(f, "initial brightness must lie within the min/max range")
            }
            ConfigError::TransitionLongerThanInterval => {
                write!(f, "transition duration must not exceed the cycling interval")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Validated scheduler configuration.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayConfig<D: TimeDuration> {
    width: u16,
    height: u16,
    interval: D,
    transition_duration: D,
    advance_duration: D,
    max_snake_length: u16,
    brightness: u8,
    brightness_min: u8,
    brightness_max: u8,
    brightness_step: u8,
}

impl<D: TimeDuration> DisplayConfig<D> {
    /// Creates a new configuration builder with default values.
    pub fn builder() -> DisplayConfigBuilder<D> {
        DisplayConfigBuilder::new()
    }

    /// Display width in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Display height in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Period between automatic palette changes.
    pub fn interval(&self) -> D {
        self.interval
    }

    /// Length of an automatic palette blend.
    pub fn transition_duration(&self) -> D {
        self.transition_duration
    }

    /// Length of a manual palette advance.
    pub fn advance_duration(&self) -> D {
        self.advance_duration
    }

    /// Maximum length of each border snake.
    pub fn max_snake_length(&self) -> u16 {
        self.max_snake_length
    }

    /// Initial brightness, in percent.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Lowest brightness reachable by stepping.
    pub fn brightness_min(&self) -> u8 {
        self.brightness_min
    }

    /// Highest brightness reachable by stepping.
    pub fn brightness_max(&self) -> u8 {
        self.brightness_max
    }

    /// Brightness increment per step.
    pub fn brightness_step(&self) -> u8 {
        self.brightness_step
    }

    /// Brightness after one step up from `current`, wrapping to the minimum
    /// once the maximum is exceeded.
    pub fn next_brightness(&self, current: u8) -> u8 {
        let next = current.saturating_add(self.brightness_step);
        if next > self.brightness_max {
            self.brightness_min
        } else {
            next
        }
    }
}

impl<D: TimeDuration> Default for DisplayConfig<D> {
    fn default() -> Self {
        DisplayConfigBuilder::new().into_config()
    }
}

/// Builder for constructing a validated [`DisplayConfig`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfigBuilder<D: TimeDuration> {
    config: DisplayConfig<D>,
}

impl<D: TimeDuration> DisplayConfigBuilder<D> {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: DisplayConfig {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
                interval: D::from_millis(DEFAULT_INTERVAL_MS),
                transition_duration: D::from_millis(DEFAULT_TRANSITION_MS),
                advance_duration: D::from_millis(DEFAULT_ADVANCE_MS),
                max_snake_length: DEFAULT_MAX_SNAKE_LENGTH,
                brightness: DEFAULT_BRIGHTNESS,
                brightness_min: DEFAULT_BRIGHTNESS_MIN,
                brightness_max: DEFAULT_BRIGHTNESS_MAX,
                brightness_step: DEFAULT_BRIGHTNESS_STEP,
            },
        }
    }

    /// Sets the display geometry.
    pub fn geometry(mut self, width: u16, height: u16) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Sets the period between automatic palette changes.
    pub fn interval(mut self, interval: D) -> Self {
        self.config.interval = interval;
        self
    }

    /// Sets the length of an automatic palette blend.
    pub fn transition_duration(mut self, duration: D) -> Self {
        self.config.transition_duration = duration;
        self
    }

    /// Sets the length of a manual palette advance.
    pub fn advance_duration(mut self, duration: D) -> Self {
        self.config.advance_duration = duration;
        self
    }

    /// Sets the maximum length of each border snake. Zero disables the snakes.
    pub fn max_snake_length(mut self, length: u16) -> Self {
        self.config.max_snake_length = length;
        self
    }

    /// Sets the initial brightness, in percent.
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.config.brightness = brightness;
        self
    }

    /// Sets the brightness stepping range and increment, in percent.
    pub fn brightness_steps(mut self, min: u8, max: u8, step: u8) -> Self {
        self.config.brightness_min = min;
        self.config.brightness_max = max;
        self.config.brightness_step = step;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `BrightnessRangeInverted` - Minimum above maximum
    /// * `BrightnessAboveFull` - Maximum above 100
    /// * `ZeroBrightnessStep` - Step of zero
    /// * `BrightnessOutOfRange` - Initial brightness outside the range
    /// * `TransitionLongerThanInterval` - Automatic blend longer than the interval
    pub fn build(self) -> Result<DisplayConfig<D>, ConfigError> {
        let config = self.config;

        if config.brightness_min > config.brightness_max {
            return Err(ConfigError::BrightnessRangeInverted);
        }
        if config.brightness_max > 100 {
            return Err(ConfigError::BrightnessAboveFull);
        }
        if config.brightness_step == 0 {
            return Err(ConfigError::ZeroBrightnessStep);
        }
        if !(config.brightness_min..=config.brightness_max).contains(&config.brightness) {
            return Err(ConfigError::BrightnessOutOfRange);
        }
        if config.transition_duration.as_millis() > config.interval.as_millis() {
            return Err(ConfigError::TransitionLongerThanInterval);
        }

        Ok(config)
    }

    fn into_config(self) -> DisplayConfig<D> {
        self.config
    }
}

impl<D: TimeDuration> Default for DisplayConfigBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn defaults_match_clock_firmware() {
        let config = DisplayConfig::<Duration>::builder().build().unwrap();
        assert_eq!(config.width(), 64);
        assert_eq!(config.height(), 32);
        assert_eq!(config.interval(), Duration::from_secs(7200));
        assert_eq!(config.transition_duration(), Duration::from_secs(30));
        assert_eq!(config.max_snake_length(), 16);
        assert_eq!(config.brightness(), 50);
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn brightness_steps_wrap_to_minimum() {
        let config = DisplayConfig::<Duration>::default();
        assert_eq!(config.next_brightness(50), 60);
        assert_eq!(config.next_brightness(90), 100);
        assert_eq!(config.next_brightness(100), 20);
    }

    #[test]
    fn build_rejects_invalid_brightness() {
        let inverted = DisplayConfig::<Duration>::builder()
            .brightness_steps(80, 40, 10)
            .build();
        assert_eq!(inverted, Err(ConfigError::BrightnessRangeInverted));

        let zero_step = DisplayConfig::<Duration>::builder()
            .brightness_steps(20, 100, 0)
            .build();
        assert_eq!(zero_step, Err(ConfigError::ZeroBrightnessStep));

        let outside = DisplayConfig::<Duration>::builder().brightness(5).build();
        assert_eq!(outside, Err(ConfigError::BrightnessOutOfRange));
    }

    #[test]
    fn build_rejects_transition_longer_than_interval() {
        let result = DisplayConfig::<Duration>::builder()
            .interval(Duration::from_millis(500))
            .transition_duration(Duration::from_millis(1000))
            .build();
        assert_eq!(result, Err(ConfigError::TransitionLongerThanInterval));
    }
}
