//! Per-character animations driven by a [`WaveConfig`].
//!
//! Every style holds one wave shared by all characters and samples it once per character per
//! frame, using an [`OffsetProvider`] to spread the wave across the text.

mod common;
mod offset;

// Individual animation modules
mod breathe;
mod flash;
mod rainbow;
mod wave;

pub use common::{
    Animation, AnimationContext, CharAnimationResult, CharPosition, Color, TextLayout, hsl_to_rgb,
};
pub use offset::OffsetProvider;

use crate::wave::{PulseExtrema, WaveConfig};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The available animation styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AnimationStyle {
    #[default]
    Wave,
    Breathe,
    Flash,
    Rainbow,
}

/// Get the animation implementation for a given style
pub fn get_animation(style: AnimationStyle, wave: WaveConfig, offsets: OffsetProvider) -> Box<dyn Animation> {
    match style {
        AnimationStyle::Wave => Box::new(wave::Wave { wave, offsets }),
        AnimationStyle::Breathe => Box::new(breathe::Breathe { wave, offsets }),
        AnimationStyle::Flash => Box::new(flash::Flash { wave, offsets, extrema: PulseExtrema::Both }),
        AnimationStyle::Rainbow => Box::new(rainbow::Rainbow { wave, offsets }),
    }
}

/// Render every visible character in `layout` at a point in time.
pub fn render_frame(
    animation: &dyn Animation,
    layout: &TextLayout,
    time: f32,
    delta_time: f32,
) -> Vec<(CharPosition, CharAnimationResult)> {
    let results = layout.contexts(time, delta_time).map(|ctx| animation.render_char(&ctx));
    layout.positions().iter().copied().zip(results).collect()
}
