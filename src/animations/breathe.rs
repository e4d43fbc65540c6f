use super::common::{Animation, AnimationContext, CharAnimationResult, hsl_to_rgb};
use super::offset::OffsetProvider;
use crate::wave::WaveConfig;

/// Breathe animation - Characters swell and fade with the wave
pub struct Breathe {
    pub wave: WaveConfig,
    pub offsets: OffsetProvider,
}

impl Animation for Breathe {
    fn render_char(&self, ctx: &AnimationContext) -> CharAnimationResult {
        let value = self.wave.evaluate(ctx.time, self.offsets.offset(ctx)).value;
        let hue = (ctx.char_index as f32 / ctx.total_chars.max(1) as f32) * 360.0;
        let saturation = 65.0; // Calming, not too vibrant
        let lightness = 35.0 + 20.0 * value;
        let scale = 1.0 + 0.25 * value;
        let opacity = 0.5 + 0.5 * value;
        CharAnimationResult::with_scale(hsl_to_rgb(hue, saturation, lightness), scale, opacity)
    }
}
