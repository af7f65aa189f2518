use crate::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LabelError {
    /// The requested canvas has a non-positive width or height. This is the
    /// one caller error that fails fast; everything else degrades gracefully.
    #[error("invalid canvas dimensions: {width}pt x {height}pt")]
    InvalidCanvas { width: Pt, height: Pt },

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),
}
