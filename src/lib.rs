//! # textwave
//!
//! A periodic waveform engine for animating text one character at a time.
//!
//! A [`WaveConfig`] is built once, validated, and then sampled by any number of characters per
//! frame. Each character feeds the global animation time and its own offset (index, word, line or
//! column, see [`animations::OffsetProvider`]) and gets back a value and the direction the wave is
//! travelling in. [`WaveConfig::passed_extrema`] tells whether a crest or trough was crossed since
//! the previous frame, for one-shot effects.
//!
//! ```
//! use textwave::{Crossing, Direction, WaveConfig};
//!
//! let wave = WaveConfig::from_yaml("upward_curve: linear\ndownward_curve: linear")?;
//! let sample = wave.evaluate(0.5, 0.0);
//! assert_eq!(sample.direction, Direction::Up);
//! assert_eq!(wave.passed_extrema(1.0, 0.1, 0.0), Crossing::Crest);
//! # Ok::<(), textwave::WaveError>(())
//! ```

pub mod animations;
pub mod wave;

pub use wave::{Crossing, Direction, PulseExtrema, WaitMode, WaveConfig, WaveError, WaveOverrides, WaveSample};
