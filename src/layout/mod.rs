//! The label layout engine.
//!
//! [`layout`] turns a header, a list of items, and an optional raster image
//! into an ordered list of positioned [`DrawPrimitive`](crate::DrawPrimitive)
//! values that fit a fixed canvas. The pipeline runs top-down:
//!
//! 1. [`fit_header`] shrinks the header until it fits the content width.
//! 2. [`allocate`] partitions the canvas height into header,
//!    separator, item-list, and image zones.
//! 3. [`fit_items`] searches (font size × column count) for the largest
//!    legible setting of the item list.
//! 4. The assembler walks items into column-major cells and emits the final
//!    primitives.
//!
//! The whole thing is a pure function of its inputs: no I/O, no caches, no
//! shared mutable state. A layout either fits or degrades: undersized
//! canvases get the floor font size and lose trailing items, they never turn
//! into errors. A label must always print something.
//!
//! # Example
//!
//! ```
//! use label_gen::{layout, CanvasSpec, FontStore, LabelContent, Style};
//! use label_gen::labelsize::ADDRESS;
//!
//! let fonts = FontStore::new();
//! let content = LabelContent::new(
//!     "Kitchen Items",
//!     vec!["Plate".into(), "Cup".into(), "Fork".into()],
//! );
//! let primitives = layout(&ADDRESS.into(), &content, &Style::default(), &fonts).unwrap();
//! assert!(!primitives.is_empty());
//! ```

use crate::units::Pt;

mod assemble;
mod budget;
mod fit;
mod margins;

pub use assemble::*;
pub use budget::*;
pub use fit::*;
pub use margins::*;

/// Largest header size tried by [`fit_header`].
pub const HEADER_MAX_SIZE: u16 = 24;
/// Smallest header size; overflow below this is accepted silently.
pub const HEADER_MIN_SIZE: u16 = 8;
/// Largest item size tried by [`fit_items`].
pub const ITEM_MAX_SIZE: u16 = 14;
/// Floor item size; the degenerate fallback when nothing fits.
pub const ITEM_MIN_SIZE: u16 = 6;
/// Label-sized canvases rarely benefit from more columns than this.
pub const MAX_COLUMNS: u32 = 3;

/// Uniform margin between canvas edge and content.
pub const EDGE_MARGIN: Pt = Pt(4.0);
/// Space between the header's line box and the separator zone.
pub const HEADER_GAP: Pt = Pt(4.0);
pub const RULE_TOP_GAP: Pt = Pt(2.0);
pub const RULE_THICKNESS: Pt = Pt(0.5);
pub const RULE_BOTTOM_GAP: Pt = Pt(4.0);
/// Extra vertical space between item rows, on top of the line height.
pub const ITEM_SPACING: Pt = Pt(1.5);
pub const COLUMN_GAP: Pt = Pt(6.0);
/// Padding on all sides of the image zone.
pub const IMAGE_PADDING: Pt = Pt(4.0);
/// The image may claim at most this fraction of the canvas height.
pub const MAX_IMAGE_HEIGHT_FRACTION: f32 = 0.3;
