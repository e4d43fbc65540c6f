use super::common::{Animation, AnimationContext, CharAnimationResult, hsl_to_rgb};
use super::offset::OffsetProvider;
use crate::wave::{Crossing, PulseExtrema, WaitMode, WaveConfig};

/// Flash animation - Characters light up on the frame the wave peaks and dim when it bottoms out
pub struct Flash {
    pub wave: WaveConfig,
    pub offsets: OffsetProvider,
    pub extrema: PulseExtrema,
}

impl Animation for Flash {
    fn render_char(&self, ctx: &AnimationContext) -> CharAnimationResult {
        let offset = self.offsets.offset(ctx);
        let crossing =
            self.wave.passed_extrema_with(ctx.time, ctx.delta_time, offset, WaitMode::Realtime, self.extrema);
        let color = match crossing {
            Crossing::Crest => hsl_to_rgb(50.0, 100.0, 90.0),
            Crossing::Trough => hsl_to_rgb(230.0, 60.0, 20.0),
            Crossing::None => hsl_to_rgb(40.0, 20.0, 60.0),
        };
        CharAnimationResult::with_color(color)
    }
}
