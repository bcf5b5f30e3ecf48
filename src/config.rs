use crate::settings::Settings;
use crate::viz::Rotation;
use std::time::Duration;

/// Pause between frames when nothing else is configured
pub const DEFAULT_DELAY_MS: u64 = 30;

/// Resolved options for the donut animation
#[derive(Clone, Debug, PartialEq)]
pub struct DonutConfig {
    pub delay: Duration,
    pub frames: Option<u64>,
    pub print: bool,
    pub start: Rotation,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            frames: None,
            print: false,
            start: Rotation::default(),
        }
    }
}

/// Options given on the command line; `None` defers to the settings file
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub delay_ms: Option<u64>,
    pub frames: Option<u64>,
    pub print: bool,
    pub start: Rotation,
}

impl DonutConfig {
    /// Merge command line, settings file and built-in defaults, in that order
    pub fn resolve(overrides: &Overrides, settings: &Settings) -> Self {
        let delay_ms = overrides
            .delay_ms
            .or(settings.donut.delay_ms)
            .unwrap_or(DEFAULT_DELAY_MS);

        let frames = overrides
            .frames
            .or(settings.donut.frames)
            .filter(|&n| n > 0);

        Self {
            delay: Duration::from_millis(delay_ms),
            frames,
            print: overrides.print,
            start: overrides.start,
        }
    }
}
