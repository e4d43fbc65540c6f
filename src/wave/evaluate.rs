use super::{
    WaitMode, WaveConfig, WrapMode,
    phase::raw_phase,
    timeline::SegmentKind,
};
use strum::Display;

/// Which way the wave is travelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Trough to crest.
    Up,

    /// Crest to trough.
    Down,
}

impl Direction {
    pub fn signum(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// The state of a wave at a point in time for a single element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSample {
    pub value: f32,
    pub direction: Direction,
}

impl WaveConfig {
    /// Sample the wave at `time` for an element at `offset`, with realtime waits.
    pub fn evaluate(&self, time: f32, offset: f32) -> WaveSample {
        self.evaluate_with(time, offset, WaitMode::Realtime)
    }

    /// Sample the wave at `time` for an element at `offset`.
    ///
    /// The rise samples the upward curve over `[0, 1]`, the fall samples the downward curve over
    /// `[1, 2]` ping-ponged, so it's traversed backwards. Holds keep the value the preceding
    /// segment ended at.
    ///
    /// Negative phases, from negative times or a negative uniformity, wrap around into the cycle
    /// rather than mirroring, so the wave keeps its direction of travel on both sides of zero.
    pub fn evaluate_with(&self, time: f32, offset: f32, wait: WaitMode) -> WaveSample {
        let timeline = self.timeline(wait);
        let position = timeline.reduce(raw_phase(self.periods(), time, offset, self.uniformity()));
        let (value, direction) = match timeline.locate(position) {
            (SegmentKind::Rise, progress) => {
                (self.upward_curve().evaluate(WrapMode::PingPong, progress), Direction::Up)
            }
            (SegmentKind::HoldCrest, _) => (self.upward_curve().evaluate(WrapMode::PingPong, 1.0), Direction::Up),
            (SegmentKind::Fall, progress) => {
                (self.downward_curve().evaluate(WrapMode::PingPong, 1.0 + progress), Direction::Down)
            }
            (SegmentKind::HoldTrough, _) => (self.downward_curve().evaluate(WrapMode::PingPong, 2.0), Direction::Down),
        };
        WaveSample { value: value * self.amplitude(), direction }
    }
}
