use super::Periods;

/// The phase contribution of a per element offset.
///
/// `uniformity` of 0 puts every element in lock-step, 1 applies the offset at full scale. A wave
/// with no wavelength (zero velocity) has no spatial extent, so offsets have no effect on it.
pub fn offset_phase(offset: f32, wavelength: f32, uniformity: f32) -> f32 {
    if wavelength == 0.0 {
        return 0.0;
    }
    (offset / wavelength) * uniformity
}

/// The raw position of an element within the wave, in effective period units.
pub(crate) fn raw_phase(periods: &Periods, time: f32, offset: f32, uniformity: f32) -> f32 {
    time * periods.velocity() + offset_phase(offset, periods.wavelength(), uniformity)
}
