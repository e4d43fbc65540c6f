use super::common::{Animation, AnimationContext, CharAnimationResult, hsl_to_rgb};
use super::offset::OffsetProvider;
use crate::wave::WaveConfig;

/// Rainbow animation - Hue sweeps back and forth across the spectrum following the wave
pub struct Rainbow {
    pub wave: WaveConfig,
    pub offsets: OffsetProvider,
}

impl Animation for Rainbow {
    fn render_char(&self, ctx: &AnimationContext) -> CharAnimationResult {
        let value = self.wave.evaluate(ctx.time, self.offsets.offset(ctx)).value;
        CharAnimationResult::with_color(hsl_to_rgb(value * 360.0, 100.0, 50.0))
    }
}
