mod content;
pub use content::*;

mod draw;
pub use draw::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Standard label stock dimensions, in points
pub mod labelsize;
pub use labelsize::LabelOrientation;

/// The layout engine: fit search, vertical budgeting, and assembly
pub mod layout;
pub use layout::layout;

mod metrics;
pub use metrics::*;

mod pdf;
pub use pdf::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod style;
pub use style::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
