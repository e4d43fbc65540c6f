use super::WaveError;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use strum::{Display, EnumIter, EnumString};

/// How a curve treats inputs outside of its key domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WrapMode {
    /// Clamp to the first/last key.
    Once,

    /// Start over from the first key.
    Loop,

    /// Bounce back and forth between the first and last key.
    PingPong,
}

impl WrapMode {
    /// Map `t` into `[start, end]`.
    pub fn wrap(self, t: f32, start: f32, end: f32) -> f32 {
        let length = end - start;
        if length <= 0.0 {
            return start;
        }
        match self {
            Self::Once => t.clamp(start, end),
            Self::Loop => start + (t - start).rem_euclid(length),
            Self::PingPong => {
                let position = (t - start).rem_euclid(length * 2.0);
                if position <= length { start + position } else { start + length * 2.0 - position }
            }
        }
    }
}

/// Analytic easing functions over `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseInSine => 1.0 - (t * PI / 2.0).cos(),
            Self::EaseOutSine => (t * PI / 2.0).sin(),
            Self::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::EaseInQuad => t * t,
            Self::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A single curve sample point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum CurveKind {
    Easing(Easing),
    Keyframes(Vec<Keyframe>),
}

/// An interpolation function used to shape one half of a wave.
///
/// Keyframed curves always hold at least one key, sorted by time.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    kind: CurveKind,
}

impl Curve {
    pub fn easing(easing: Easing) -> Self {
        Self { kind: CurveKind::Easing(easing) }
    }

    pub fn linear() -> Self {
        Self::easing(Easing::Linear)
    }

    /// Build a piecewise linear curve out of a set of keys.
    pub fn keyframes<I>(keys: I) -> Result<Self, WaveError>
    where
        I: IntoIterator<Item = Keyframe>,
    {
        let mut keys: Vec<_> = keys.into_iter().collect();
        if keys.is_empty() {
            return Err(WaveError::InvalidConfiguration("curve must have at least one keyframe".into()));
        }
        if let Some(key) = keys.iter().find(|k| !k.time.is_finite() || !k.value.is_finite()) {
            return Err(WaveError::InvalidConfiguration(format!(
                "curve keyframe ({}, {}) is not finite",
                key.time, key.value
            )));
        }
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Ok(Self { kind: CurveKind::Keyframes(keys) })
    }

    /// The input range the curve is defined over.
    pub fn domain(&self) -> (f32, f32) {
        match &self.kind {
            CurveKind::Easing(_) => (0.0, 1.0),
            CurveKind::Keyframes(keys) => (keys[0].time, keys[keys.len() - 1].time),
        }
    }

    /// The lowest and highest value this curve can produce.
    pub fn value_bounds(&self) -> (f32, f32) {
        match &self.kind {
            CurveKind::Easing(_) => (0.0, 1.0),
            CurveKind::Keyframes(keys) => keys
                .iter()
                .fold((f32::INFINITY, f32::NEG_INFINITY), |(low, high), k| (low.min(k.value), high.max(k.value))),
        }
    }

    /// Evaluate the curve at a normalized `t`.
    ///
    /// `t` is wrapped into `[0, 1]` and then stretched over the curve's key domain.
    pub fn evaluate(&self, wrap: WrapMode, t: f32) -> f32 {
        let t = wrap.wrap(t, 0.0, 1.0);
        match &self.kind {
            CurveKind::Easing(easing) => easing.apply(t),
            CurveKind::Keyframes(keys) => {
                let (start, end) = self.domain();
                interpolate(keys, start + t * (end - start))
            }
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::easing(Easing::EaseInOutSine)
    }
}

impl From<Easing> for Curve {
    fn from(easing: Easing) -> Self {
        Self::easing(easing)
    }
}

fn interpolate(keys: &[Keyframe], t: f32) -> f32 {
    let next = keys.partition_point(|k| k.time <= t);
    if next == 0 {
        return keys[0].value;
    }
    if next == keys.len() {
        return keys[keys.len() - 1].value;
    }
    let (a, b) = (keys[next - 1], keys[next]);
    let span = b.time - a.time;
    if span <= 0.0 {
        return b.value;
    }
    a.value + (b.value - a.value) * (t - a.time) / span
}

/// The serialized form of a curve: either a preset name or a list of `[time, value]` pairs.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CurveDefinition {
    Easing(Easing),
    Keyframes(Vec<[f32; 2]>),
}

impl Default for CurveDefinition {
    fn default() -> Self {
        Self::Easing(Easing::EaseInOutSine)
    }
}

impl TryFrom<CurveDefinition> for Curve {
    type Error = WaveError;

    fn try_from(definition: CurveDefinition) -> Result<Self, Self::Error> {
        match definition {
            CurveDefinition::Easing(easing) => Ok(Self::easing(easing)),
            CurveDefinition::Keyframes(keys) => Self::keyframes(keys.into_iter().map(|[t, v]| Keyframe::new(t, v))),
        }
    }
}

impl From<&Curve> for CurveDefinition {
    fn from(curve: &Curve) -> Self {
        match &curve.kind {
            CurveKind::Easing(easing) => Self::Easing(*easing),
            CurveKind::Keyframes(keys) => Self::Keyframes(keys.iter().map(|k| [k.time, k.value]).collect()),
        }
    }
}
