//! Periodic waveform engine.
//!
//! A [`WaveConfig`] describes one oscillation cycle: an upward segment shaped by one curve, a
//! downward segment shaped by another, and optional holds at the crest and the trough. Animations
//! hold a single config and sample it once per character per frame through [`WaveConfig::evaluate`]
//! and [`WaveConfig::passed_extrema`].

mod config;
mod curve;
mod evaluate;
mod extrema;
mod period;
mod phase;
mod timeline;

pub use config::{WaveConfig, WaveDefinition, WaveOverrides, WaveShape};
pub use curve::{Curve, CurveDefinition, Easing, Keyframe, WrapMode};
pub use evaluate::{Direction, WaveSample};
pub use extrema::{Crossing, PulseExtrema};
pub use period::Periods;
pub use phase::offset_phase;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Errors that can occur when building or loading a wave.
#[derive(thiserror::Error, Debug)]
pub enum WaveError {
    #[error("invalid wave configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to parse wave definition: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How crest and trough waits are measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WaitMode {
    /// Waits are real seconds, stretched by the velocity factor like the periods.
    #[default]
    Realtime,

    /// Waits are used verbatim, in the same scaled units as the phase.
    Scaled,
}
