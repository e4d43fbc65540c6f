use super::{WaitMode, WaveConfig, phase::raw_phase};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Where an extremum is reported when the wave holds at it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PulseExtrema {
    /// When the hold starts.
    #[default]
    Early,

    /// When the hold ends.
    Late,

    /// Both when the hold starts and when it ends.
    Both,
}

/// An extremum passed during a time window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Crossing {
    None,
    Crest,
    Trough,
}

impl Crossing {
    pub fn signum(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Crest => 1,
            Self::Trough => -1,
        }
    }
}

impl From<Crossing> for i32 {
    fn from(crossing: Crossing) -> Self {
        crossing.signum()
    }
}

impl WaveConfig {
    /// Find whether a crest or trough was passed in `(time - delta_time, time]`, with realtime
    /// waits and extrema reported at the start of holds.
    pub fn passed_extrema(&self, time: f32, delta_time: f32, offset: f32) -> Crossing {
        self.passed_extrema_with(time, delta_time, offset, WaitMode::Realtime, PulseExtrema::Early)
    }

    /// Find whether a crest or trough was passed in `(time - delta_time, time]`.
    ///
    /// Both edges of the window are turned into phases the same way, so consecutive frames where
    /// one starts exactly where the previous one ended never report the same extremum twice.
    ///
    /// When more than one extremum falls in the window, which always happens once it spans a full
    /// interval, the most recent one is reported: the one that matches the state the wave is in
    /// at `time`.
    pub fn passed_extrema_with(
        &self,
        time: f32,
        delta_time: f32,
        offset: f32,
        wait: WaitMode,
        extrema: PulseExtrema,
    ) -> Crossing {
        let window = delta_time * self.periods().velocity();
        if window.is_nan() || window <= 0.0 {
            return Crossing::None;
        }
        let timeline = self.timeline(wait);
        let interval = timeline.interval();
        let current = raw_phase(self.periods(), time, offset, self.uniformity());
        let previous = raw_phase(self.periods(), time - delta_time, offset, self.uniformity());
        timeline
            .events(extrema)
            .filter_map(|event| {
                // cycles completed since the event, at each edge of the window
                let passed = ((current - event.position) / interval).floor();
                let before = ((previous - event.position) / interval).floor();
                (passed > before).then_some((event.position + passed * interval, event.crossing))
            })
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, crossing)| crossing)
            .unwrap_or(Crossing::None)
    }
}
