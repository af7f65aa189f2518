/// The three font families a label can be set in. Each maps onto a pair of
/// built-in metric tables (regular and bold); callers that need a specific
/// typeface can bind a parsed [`Font`](crate::Font) to a family in a
/// [`FontStore`](crate::FontStore).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Mono,
}

/// Horizontal placement of text within its box: the header within the canvas,
/// and each item within its column.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Formatting preferences for a label. These are inputs, never computed:
/// defaulting is the caller's concern.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Style {
    pub family: FontFamily,
    pub align: TextAlign,
}

impl Style {
    pub fn new(family: FontFamily, align: TextAlign) -> Style {
        Style { family, align }
    }
}
