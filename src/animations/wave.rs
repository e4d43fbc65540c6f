use super::common::{Animation, AnimationContext, CharAnimationResult, hsl_to_rgb};
use super::offset::OffsetProvider;
use crate::wave::WaveConfig;

/// Wave animation - Characters bob up and down as the wave travels through them
pub struct Wave {
    pub wave: WaveConfig,
    pub offsets: OffsetProvider,
}

impl Animation for Wave {
    fn render_char(&self, ctx: &AnimationContext) -> CharAnimationResult {
        let sample = self.wave.evaluate(ctx.time, self.offsets.offset(ctx));
        let base = 200.0; // blue-ish base
        let hue = base + 60.0 * sample.value;
        CharAnimationResult::with_offset(hsl_to_rgb(hue, 100.0, 50.0), -sample.value)
    }
}
