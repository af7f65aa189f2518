use crate::units::Pt;

/// Margins between the canvas edge and the content box. The layout engine
/// uses a uniform [`EDGE_MARGIN`](super::EDGE_MARGIN) by default; the type
/// exists so the content box derivation reads the same with asymmetric stock
/// (e.g. labels with a punched hole along one edge).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}
