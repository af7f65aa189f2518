//! Pre-defined label sizes for common thermal and sheet label stock.
//!
//! The print path selects from a small fixed catalog of physical sizes; these
//! constants are that catalog, converted once from inches to points. All sizes
//! are provided in the orientation they are usually loaded in; use
//! [`LabelOrientation`] to flip one around.
//!
//! # Example
//!
//! ```
//! use label_gen::labelsize::{ADDRESS, SHIPPING, LabelOrientation};
//! use label_gen::CanvasSpec;
//!
//! let canvas: CanvasSpec = ADDRESS.into();
//! let tall_shipping = SHIPPING.portrait();
//! ```

use crate::units::*;

/// Label dimensions as (width, height) in points.
pub type LabelSize = (Pt, Pt);

/// 2.25" x 1.25": the common direct-thermal address/barcode label.
pub const ADDRESS: LabelSize = (Pt(2.25 * 72.0), Pt(1.25 * 72.0));
/// 0.75" x 2": small return-address stock.
pub const RETURN: LabelSize = (Pt(2.0 * 72.0), Pt(0.75 * 72.0));
/// 4" x 6": the standard shipping label.
pub const SHIPPING: LabelSize = (Pt(4.0 * 72.0), Pt(6.0 * 72.0));
/// 4" x 3": name badges and large inventory tags.
pub const NAME_BADGE: LabelSize = (Pt(4.0 * 72.0), Pt(3.0 * 72.0));
/// 2" x 2": square QR/product stock.
pub const SQUARE: LabelSize = (Pt(2.0 * 72.0), Pt(2.0 * 72.0));

/// Convert label sizes between portrait and landscape orientations.
pub trait LabelOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl LabelOrientation for LabelSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> Self {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}
