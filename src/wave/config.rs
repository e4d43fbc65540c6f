use super::{
    Curve, CurveDefinition, Periods, WaitMode, WaveError,
    timeline::Timeline,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use strum::{Display, EnumIter};
use tracing::{debug, warn};

/// The way a wave is interpreted, picked by which of its waits are set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum WaveShape {
    /// Rise then fall, no holds.
    Wave,

    /// Rise, fall, then hold at the trough.
    Pulse,

    /// Fall, rise, then hold at the crest.
    InvertedPulse,

    /// Rise, hold at the crest, fall, hold at the trough.
    OneDirectionalPulse,
}

impl WaveShape {
    pub fn from_waits(crest_wait: f32, trough_wait: f32) -> Self {
        match (crest_wait > 0.0, trough_wait > 0.0) {
            (false, false) => Self::Wave,
            (false, true) => Self::Pulse,
            (true, false) => Self::InvertedPulse,
            (true, true) => Self::OneDirectionalPulse,
        }
    }
}

/// A validated wave.
///
/// Values are immutable: every `with_*` method validates its input and returns a new config, so
/// derived state can never be observed out of sync with the fields it comes from.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    periods: Periods,
    amplitude: f32,
    upward_curve: Curve,
    downward_curve: Curve,
    crest_wait: f32,
    trough_wait: f32,
    uniformity: f32,
}

impl WaveConfig {
    /// Parse a wave out of a YAML definition.
    pub fn from_yaml(contents: &str) -> Result<Self, WaveError> {
        let definition: WaveDefinition = serde_yaml::from_str(contents)?;
        Self::try_from(definition)
    }

    /// Load a wave definition file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WaveError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Produce a new config with the given overrides applied on top of this one.
    pub fn with_overrides(&self, overrides: &WaveOverrides) -> Result<Self, WaveError> {
        let mut definition = self.to_definition();
        overrides.apply(&mut definition);
        let config = Self::try_from(definition)?;
        debug!(shape = %config.shape(), "applied wave overrides");
        Ok(config)
    }

    pub fn with_up_period(&self, up_period: f32) -> Result<Self, WaveError> {
        Ok(Self { periods: self.periods.with_up_period(up_period)?, ..self.clone() })
    }

    pub fn with_down_period(&self, down_period: f32) -> Result<Self, WaveError> {
        Ok(Self { periods: self.periods.with_down_period(down_period)?, ..self.clone() })
    }

    pub fn with_velocity(&self, velocity: f32) -> Result<Self, WaveError> {
        Ok(Self { periods: self.periods.with_velocity(velocity)?, ..self.clone() })
    }

    pub fn with_amplitude(&self, amplitude: f32) -> Result<Self, WaveError> {
        Ok(Self { amplitude: finite("amplitude", amplitude)?, ..self.clone() })
    }

    pub fn with_uniformity(&self, uniformity: f32) -> Result<Self, WaveError> {
        Ok(Self { uniformity: finite("uniformity", uniformity)?, ..self.clone() })
    }

    pub fn with_crest_wait(&self, crest_wait: f32) -> Result<Self, WaveError> {
        Ok(Self { crest_wait: normalize_wait("crest", crest_wait)?, ..self.clone() })
    }

    pub fn with_trough_wait(&self, trough_wait: f32) -> Result<Self, WaveError> {
        Ok(Self { trough_wait: normalize_wait("trough", trough_wait)?, ..self.clone() })
    }

    pub fn with_upward_curve(&self, curve: Curve) -> Self {
        Self { upward_curve: curve, ..self.clone() }
    }

    pub fn with_downward_curve(&self, curve: Curve) -> Self {
        Self { downward_curve: curve, ..self.clone() }
    }

    pub fn periods(&self) -> &Periods {
        &self.periods
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn upward_curve(&self) -> &Curve {
        &self.upward_curve
    }

    pub fn downward_curve(&self) -> &Curve {
        &self.downward_curve
    }

    pub fn crest_wait(&self) -> f32 {
        self.crest_wait
    }

    pub fn trough_wait(&self) -> f32 {
        self.trough_wait
    }

    pub fn uniformity(&self) -> f32 {
        self.uniformity
    }

    pub fn shape(&self) -> WaveShape {
        WaveShape::from_waits(self.crest_wait, self.trough_wait)
    }

    /// The length of one full cycle including waits, in phase units.
    pub fn interval(&self, wait: WaitMode) -> f32 {
        self.timeline(wait).interval()
    }

    pub(crate) fn timeline(&self, wait: WaitMode) -> Timeline {
        let scale = match wait {
            WaitMode::Realtime => self.periods.dilation(),
            WaitMode::Scaled => 1.0,
        };
        Timeline::new(self.shape(), &self.periods, self.crest_wait * scale, self.trough_wait * scale)
    }

    /// The serializable form of this config.
    pub fn to_definition(&self) -> WaveDefinition {
        WaveDefinition {
            up_period: self.periods.up_period(),
            down_period: self.periods.down_period(),
            velocity: self.periods.velocity(),
            amplitude: self.amplitude,
            upward_curve: CurveDefinition::from(&self.upward_curve),
            downward_curve: CurveDefinition::from(&self.downward_curve),
            crest_wait: self.crest_wait,
            trough_wait: self.trough_wait,
            uniformity: self.uniformity,
        }
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            periods: Periods::default(),
            amplitude: 1.0,
            upward_curve: Curve::default(),
            downward_curve: Curve::default(),
            crest_wait: 0.0,
            trough_wait: 0.0,
            uniformity: 1.0,
        }
    }
}

impl TryFrom<WaveDefinition> for WaveConfig {
    type Error = WaveError;

    fn try_from(definition: WaveDefinition) -> Result<Self, Self::Error> {
        definition.validate_and_normalize()
    }
}

/// The serialized form of a wave.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaveDefinition {
    pub up_period: f32,
    pub down_period: f32,
    pub velocity: f32,
    pub amplitude: f32,
    pub upward_curve: CurveDefinition,
    pub downward_curve: CurveDefinition,
    pub crest_wait: f32,
    pub trough_wait: f32,
    pub uniformity: f32,
}

impl WaveDefinition {
    /// Validate every field and build a config out of it.
    ///
    /// Negative waits are clamped to zero with a warning. Anything else that's out of range is
    /// rejected.
    pub fn validate_and_normalize(self) -> Result<WaveConfig, WaveError> {
        let config = WaveConfig {
            periods: Periods::new(self.up_period, self.down_period, self.velocity)?,
            amplitude: finite("amplitude", self.amplitude)?,
            upward_curve: Curve::try_from(self.upward_curve)?,
            downward_curve: Curve::try_from(self.downward_curve)?,
            crest_wait: normalize_wait("crest", self.crest_wait)?,
            trough_wait: normalize_wait("trough", self.trough_wait)?,
            uniformity: finite("uniformity", self.uniformity)?,
        };
        debug!(
            shape = %config.shape(),
            period = config.periods.period(),
            effective_period = config.periods.effective_period(),
            "built wave configuration"
        );
        Ok(config)
    }
}

impl Default for WaveDefinition {
    fn default() -> Self {
        WaveConfig::default().to_definition()
    }
}

/// A partial set of wave fields to be layered on top of an existing config.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WaveOverrides {
    pub up_period: Option<f32>,
    pub down_period: Option<f32>,
    pub velocity: Option<f32>,
    pub amplitude: Option<f32>,
    pub upward_curve: Option<CurveDefinition>,
    pub downward_curve: Option<CurveDefinition>,
    pub crest_wait: Option<f32>,
    pub trough_wait: Option<f32>,
    pub uniformity: Option<f32>,
}

impl WaveOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    fn apply(&self, definition: &mut WaveDefinition) {
        fn merge<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
        merge(&mut definition.up_period, &self.up_period);
        merge(&mut definition.down_period, &self.down_period);
        merge(&mut definition.velocity, &self.velocity);
        merge(&mut definition.amplitude, &self.amplitude);
        merge(&mut definition.upward_curve, &self.upward_curve);
        merge(&mut definition.downward_curve, &self.downward_curve);
        merge(&mut definition.crest_wait, &self.crest_wait);
        merge(&mut definition.trough_wait, &self.trough_wait);
        merge(&mut definition.uniformity, &self.uniformity);
    }
}

fn finite(name: &str, value: f32) -> Result<f32, WaveError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WaveError::InvalidConfiguration(format!("{name} must be a finite number (got {value})")))
    }
}

fn normalize_wait(name: &str, value: f32) -> Result<f32, WaveError> {
    let value = finite(name, value)?;
    if value < 0.0 {
        warn!("{name} wait {value} is negative, using 0 instead");
        return Ok(0.0);
    }
    Ok(value)
}
