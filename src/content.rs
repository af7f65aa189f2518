use crate::{LabelError, Pt};

/// The physical canvas a label is laid out on, in points. Both dimensions must
/// be strictly positive; [`layout`](crate::layout) checks this before doing
/// any work.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSpec {
    pub width: Pt,
    pub height: Pt,
}

impl CanvasSpec {
    /// Create a canvas, validating its dimensions.
    pub fn new<D: Into<Pt>>(width: D, height: D) -> Result<CanvasSpec, LabelError> {
        let canvas = CanvasSpec {
            width: width.into(),
            height: height.into(),
        };
        canvas.validate()?;
        Ok(canvas)
    }

    pub(crate) fn validate(&self) -> Result<(), LabelError> {
        if self.width.0 <= 0.0 || self.height.0 <= 0.0 {
            return Err(LabelError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl From<crate::labelsize::LabelSize> for CanvasSpec {
    fn from((width, height): crate::labelsize::LabelSize) -> CanvasSpec {
        // catalog sizes are positive by construction
        CanvasSpec { width, height }
    }
}

/// The raster formats the label pipeline accepts. Anything else is treated as
/// "no image" rather than an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
}

/// A decoded-enough raster image: pixel dimensions are known, the compressed
/// bytes are carried through untouched. The layout engine only ever computes a
/// geometric scale for it; re-encoding and pixel resampling never happen here.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width_px: u32,
    pub height_px: u32,
    pub format: RasterFormat,
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Probe raw image bytes, returning `None` when they are not a decodable
    /// PNG or JPEG. Callers feed the `None` straight into
    /// [`LabelContent::image`]: an unusable image degrades to a label without
    /// one.
    pub fn probe(data: Vec<u8>) -> Option<RasterImage> {
        let format = match image::guess_format(&data) {
            Ok(image::ImageFormat::Png) => RasterFormat::Png,
            Ok(image::ImageFormat::Jpeg) => RasterFormat::Jpeg,
            Ok(other) => {
                log::warn!("unsupported image format {other:?}, dropping image");
                return None;
            }
            Err(err) => {
                log::warn!("unrecognizable image data ({err}), dropping image");
                return None;
            }
        };

        match image::load_from_memory(&data) {
            Ok(decoded) => Some(RasterImage {
                width_px: decoded.width(),
                height_px: decoded.height(),
                format,
                data,
            }),
            Err(err) => {
                log::warn!("undecodable {format:?} image ({err}), dropping image");
                None
            }
        }
    }
}

/// Everything that goes on a label. The header and items arrive as opaque,
/// already-finalized strings (the summarization service owns their wording).
/// An empty header contributes no height and emits no primitives; `items` may
/// be empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LabelContent {
    pub header: String,
    pub items: Vec<String>,
    pub image: Option<RasterImage>,
}

impl LabelContent {
    pub fn new<S: ToString>(header: S, items: Vec<String>) -> LabelContent {
        LabelContent {
            header: header.to_string(),
            items,
            image: None,
        }
    }

    pub fn with_image(mut self, image: Option<RasterImage>) -> LabelContent {
        self.image = image;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_rejects_non_positive_dimensions() {
        assert!(matches!(
            CanvasSpec::new(Pt(0.0), Pt(100.0)),
            Err(LabelError::InvalidCanvas { .. })
        ));
        assert!(matches!(
            CanvasSpec::new(Pt(100.0), Pt(-1.0)),
            Err(LabelError::InvalidCanvas { .. })
        ));
        assert!(CanvasSpec::new(Pt(162.0), Pt(90.0)).is_ok());
    }

    #[test]
    fn probe_accepts_png_and_reports_dimensions() {
        let mut bytes: Vec<u8> = Vec::new();
        let img = image::DynamicImage::new_rgb8(3, 2);
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageOutputFormat::Png,
        )
        .unwrap();

        let raster = RasterImage::probe(bytes).expect("png probes fine");
        assert_eq!(raster.format, RasterFormat::Png);
        assert_eq!((raster.width_px, raster.height_px), (3, 2));
    }

    #[test]
    fn probe_treats_garbage_as_no_image() {
        assert!(RasterImage::probe(b"not an image at all".to_vec()).is_none());
    }

    #[test]
    fn probe_rejects_unsupported_formats() {
        // a valid BMP header is recognizable but outside the accepted set
        let mut bytes: Vec<u8> = Vec::new();
        let img = image::DynamicImage::new_rgb8(1, 1);
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageOutputFormat::Bmp,
        )
        .unwrap();
        assert!(RasterImage::probe(bytes).is_none());
    }
}
