use crate::units::*;

/// A rectangle in canvas coordinates, specified by two opposite corners.
///
/// Canvas coordinates put the origin at the top-left of the label with y
/// growing downward, so `(x1, y1)` is the top-left corner and `(x2, y2)` the
/// bottom-right. The PDF encoder flips to bottom-up coordinates when it
/// serializes; nothing else in the crate needs to care.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}
