use super::WaveError;

/// Period bookkeeping for a wave.
///
/// The up period, down period and velocity are canonical; everything else is derived from them
/// every time one of them changes. Velocity acts as a time dilation factor: effective periods are
/// the raw periods multiplied by it, unless it's zero, in which case they're left unscaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Periods {
    up: f32,
    down: f32,
    velocity: f32,
    period: f32,
    frequency: f32,
    wavelength: f32,
    effective_up: f32,
    effective_down: f32,
    effective: f32,
}

impl Periods {
    pub fn new(up: f32, down: f32, velocity: f32) -> Result<Self, WaveError> {
        validate_period("up", up)?;
        validate_period("down", down)?;
        if up + down <= 0.0 {
            return Err(WaveError::InvalidConfiguration(format!(
                "up and down periods must add up to more than zero (got {up} + {down})"
            )));
        }
        if !velocity.is_finite() || velocity < 0.0 {
            return Err(WaveError::InvalidConfiguration(format!(
                "velocity must be a non negative number (got {velocity})"
            )));
        }
        let periods = Self::derive(up, down, velocity);
        if !periods.effective.is_finite() || periods.effective <= 0.0 {
            return Err(WaveError::InvalidConfiguration(format!(
                "effective period {} out of range (up {up}, down {down}, velocity {velocity})",
                periods.effective
            )));
        }
        Ok(periods)
    }

    fn derive(up: f32, down: f32, velocity: f32) -> Self {
        let period = up + down;
        let frequency = 1.0 / period;
        Self {
            up,
            down,
            velocity,
            period,
            frequency,
            wavelength: velocity / frequency,
            effective_up: dilate(up, velocity),
            effective_down: dilate(down, velocity),
            effective: dilate(period, velocity),
        }
    }

    pub fn with_up_period(&self, up: f32) -> Result<Self, WaveError> {
        Self::new(up, self.down, self.velocity)
    }

    pub fn with_down_period(&self, down: f32) -> Result<Self, WaveError> {
        Self::new(self.up, down, self.velocity)
    }

    pub fn with_velocity(&self, velocity: f32) -> Result<Self, WaveError> {
        Self::new(self.up, self.down, velocity)
    }

    pub fn up_period(&self) -> f32 {
        self.up
    }

    pub fn down_period(&self) -> f32 {
        self.down
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Raw trough to trough time.
    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn wavelength(&self) -> f32 {
        self.wavelength
    }

    pub fn effective_up_period(&self) -> f32 {
        self.effective_up
    }

    pub fn effective_down_period(&self) -> f32 {
        self.effective_down
    }

    pub fn effective_period(&self) -> f32 {
        self.effective
    }

    /// The factor waits and periods are stretched by.
    pub(crate) fn dilation(&self) -> f32 {
        dilate(1.0, self.velocity)
    }
}

impl Default for Periods {
    fn default() -> Self {
        Self::derive(1.0, 1.0, 1.0)
    }
}

fn dilate(value: f32, velocity: f32) -> f32 {
    if velocity == 0.0 { value } else { value * velocity }
}

fn validate_period(name: &str, value: f32) -> Result<(), WaveError> {
    if !value.is_finite() || value < 0.0 {
        return Err(WaveError::InvalidConfiguration(format!(
            "{name} period must be a non negative number (got {value})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn derived_values() {
        let periods = Periods::new(1.0, 3.0, 2.0).expect("valid periods");
        assert_eq!(periods.period(), 4.0);
        assert_eq!(periods.frequency(), 0.25);
        assert_eq!(periods.wavelength(), 8.0);
        assert_eq!(periods.effective_up_period(), 2.0);
        assert_eq!(periods.effective_down_period(), 6.0);
        assert_eq!(periods.effective_period(), 8.0);
    }

    #[test]
    fn zero_velocity_disables_scaling() {
        let periods = Periods::new(1.0, 1.0, 0.0).expect("valid periods");
        assert_eq!(periods.effective_period(), 2.0);
        assert_eq!(periods.effective_up_period(), 1.0);
        assert_eq!(periods.wavelength(), 0.0);
        assert_eq!(periods.dilation(), 1.0);
    }

    #[test]
    fn velocity_change_refreshes_effective_periods() {
        let periods = Periods::new(1.0, 2.0, 1.0).expect("valid periods");
        let faster = periods.with_velocity(3.0).expect("valid velocity");
        assert_eq!(faster.period(), 3.0);
        assert_eq!(faster.effective_up_period(), 3.0);
        assert_eq!(faster.effective_down_period(), 6.0);
        assert_eq!(faster.wavelength(), 9.0);
        // the original is untouched
        assert_eq!(periods.effective_period(), 3.0);
    }

    #[test]
    fn zero_length_half_is_allowed() {
        let periods = Periods::new(0.0, 1.0, 1.0).expect("valid periods");
        assert_eq!(periods.effective_up_period(), 0.0);
        assert_eq!(periods.period(), 1.0);
    }

    #[rstest]
    #[case::negative_up(-1.0, 1.0, 1.0)]
    #[case::negative_down(1.0, -0.5, 1.0)]
    #[case::zero_sum(0.0, 0.0, 1.0)]
    #[case::negative_velocity(1.0, 1.0, -1.0)]
    #[case::nan_up(f32::NAN, 1.0, 1.0)]
    #[case::effective_underflow(1e-30, 1e-30, 1e-30)]
    #[case::effective_overflow(3e38, 3e38, 1.0)]
    fn invalid_periods(#[case] up: f32, #[case] down: f32, #[case] velocity: f32) {
        let result = Periods::new(up, down, velocity);
        assert!(matches!(result, Err(WaveError::InvalidConfiguration(_))));
    }

    #[test]
    fn setter_rejects_collapsing_period() {
        let periods = Periods::new(0.0, 1.0, 1.0).expect("valid periods");
        assert!(periods.with_down_period(0.0).is_err());
    }
}
