use crate::units::Pt;

/// A positioned drawing operation in canvas coordinates (top-left origin, y
/// growing downward, points). The layout engine emits an ordered list of
/// these and nothing else; a serializer consumes them one-to-one.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// A single run of text. `y` is the baseline; `bold` selects the heavy
    /// cut of whatever family the label is set in.
    Text {
        text: String,
        x: Pt,
        y: Pt,
        size: Pt,
        bold: bool,
    },
    /// A stroked line, used for the header separator.
    Line {
        x0: Pt,
        y0: Pt,
        x1: Pt,
        y1: Pt,
        thickness: Pt,
    },
    /// Placement of the label's raster image. Pure geometry: the pixel data
    /// rides along separately and is never resampled.
    Image {
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
    },
}

/// The sole output of [`layout`](crate::layout): consumed once by a
/// serializer and discarded.
pub type LayoutResult = Vec<DrawPrimitive>;
