use unicode_width::UnicodeWidthChar;

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Animation context passed to all animation renderers
#[derive(Debug, Clone)]
pub struct AnimationContext {
    /// Seconds since the animation started
    pub time: f32,
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Character index within non-whitespace characters
    pub char_index: usize,
    /// Total non-whitespace characters in the text
    pub total_chars: usize,
    /// Current row index
    pub row_index: usize,
    /// Total rows in the text
    pub total_rows: usize,
    /// Display column the character starts at
    pub column: usize,
    /// Word index within the whole text
    pub word_index: usize,
    /// The character being rendered
    pub ch: char,
}

/// Result from rendering a single character with animation
#[derive(Debug, Clone, PartialEq)]
pub struct CharAnimationResult {
    /// Foreground color
    pub color: Color,
    /// Vertical displacement, in rows
    pub offset_y: f32,
    /// Glyph scale, 1 being untouched
    pub scale: f32,
    /// Opacity in `[0, 1]`
    pub opacity: f32,
}

impl CharAnimationResult {
    /// Create a simple result with just a foreground color
    pub fn with_color(color: Color) -> Self {
        Self { color, offset_y: 0.0, scale: 1.0, opacity: 1.0 }
    }

    /// Create a result that displaces the character vertically
    pub fn with_offset(color: Color, offset_y: f32) -> Self {
        Self { offset_y, ..Self::with_color(color) }
    }

    /// Create a result that scales and fades the character
    pub fn with_scale(color: Color, scale: f32, opacity: f32) -> Self {
        Self { scale, opacity: opacity.clamp(0.0, 1.0), ..Self::with_color(color) }
    }
}

/// Trait for animation styles
pub trait Animation {
    /// Render a single character with the animation style
    fn render_char(&self, ctx: &AnimationContext) -> CharAnimationResult;
}

/// Where a character sits within a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharPosition {
    pub ch: char,
    pub char_index: usize,
    pub row_index: usize,
    pub column: usize,
    pub word_index: usize,
}

/// The characters in a text, laid out in rows.
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    positions: Vec<CharPosition>,
    total_chars: usize,
    total_rows: usize,
}

impl TextLayout {
    pub fn new(text: &str) -> Self {
        let mut positions = Vec::new();
        let mut char_index = 0;
        let mut word_index = 0;
        let mut in_word = false;
        let mut total_rows = 0;
        for (row_index, line) in text.lines().enumerate() {
            total_rows = row_index + 1;
            let mut column = 0;
            for ch in line.chars() {
                if ch.is_whitespace() {
                    if in_word {
                        word_index += 1;
                        in_word = false;
                    }
                } else {
                    in_word = true;
                    positions.push(CharPosition { ch, char_index, row_index, column, word_index });
                    char_index += 1;
                }
                column += ch.width().unwrap_or(0);
            }
            if in_word {
                word_index += 1;
                in_word = false;
            }
        }
        Self { positions, total_chars: char_index, total_rows }
    }

    /// The visible characters, in reading order.
    pub fn positions(&self) -> &[CharPosition] {
        &self.positions
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Build the context for every visible character at a point in time.
    pub fn contexts(&self, time: f32, delta_time: f32) -> impl Iterator<Item = AnimationContext> + '_ {
        self.positions.iter().map(move |position| AnimationContext {
            time,
            delta_time,
            char_index: position.char_index,
            total_chars: self.total_chars,
            row_index: position.row_index,
            total_rows: self.total_rows,
            column: position.column,
            word_index: position.word_index,
            ch: position.ch,
        })
    }
}

/// Convert HSL to RGB color
/// H: hue (0-360), S: saturation (0-100), L: lightness (0-100)
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color::new(((r + m) * 255.0) as u8, ((g + m) * 255.0) as u8, ((b + m) * 255.0) as u8)
}
