use super::common::AnimationContext;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Picks the value that spreads a wave across characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OffsetProvider {
    /// Position among the visible characters.
    #[default]
    Index,

    /// Index of the word the character belongs to.
    Word,

    /// Row the character is on.
    Line,

    /// Display column the character starts at.
    Column,
}

impl OffsetProvider {
    pub fn offset(self, ctx: &AnimationContext) -> f32 {
        let offset = match self {
            Self::Index => ctx.char_index,
            Self::Word => ctx.word_index,
            Self::Line => ctx.row_index,
            Self::Column => ctx.column,
        };
        offset as f32
    }
}
