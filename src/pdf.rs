//! Mechanical serialization of a laid-out label into a single-page PDF.
//!
//! The layout engine emits abstract [DrawPrimitive] values; this module
//! consumes them one-to-one and nothing more. Text is set in the base-14
//! printer fonts: Helvetica, Times, and Courier map exactly onto the three
//! label families, so no font ever needs embedding. The optional raster
//! image is embedded as an image XObject: JPEGs ride through untouched
//! behind a DCT filter, PNGs are decoded to RGB and deflated (with an alpha
//! soft mask when they carry one).

use crate::refs::{ObjectReferences, RefType};
use crate::{
    CanvasSpec, DrawPrimitive, FontFamily, Info, LabelError, RasterFormat, RasterImage, Style,
};
use image::GenericImageView;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf, Rect};
use std::io::Write;

/// A print-ready label document: one page, one laid-out primitive list, and
/// optionally the raster image those primitives place. Everything is
/// rendered in memory with a call to [LabelPdf::write]; label documents are
/// a few kilobytes, so that is never a concern.
pub struct LabelPdf<'a> {
    pub canvas: CanvasSpec,
    pub style: Style,
    pub primitives: &'a [DrawPrimitive],
    /// Pixel data for the layout's `Image` primitive, if there is one.
    pub image: Option<&'a RasterImage>,
    pub info: Option<Info>,
}

impl LabelPdf<'_> {
    /// Serialize the document and write the bytes out.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), LabelError> {
        self.canvas.validate()?;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        write_fonts(&mut refs, self.style.family, &mut writer);
        if let Some(image) = self.image {
            write_image(&mut refs, image, &mut writer)?;
        }

        let page_id = refs.gen(RefType::Page);
        let content_id = refs.gen(RefType::Content);

        let mut page = writer.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, self.canvas.width.0, self.canvas.height.0));
        page.parent(page_tree_id);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F0"), refs.get(RefType::Font(0)).unwrap());
        fonts.pair(Name(b"F1"), refs.get(RefType::Font(1)).unwrap());
        fonts.finish();
        if self.image.is_some() {
            let mut xobjects = resources.x_objects();
            xobjects.pair(Name(b"I0"), refs.get(RefType::Image).unwrap());
            xobjects.finish();
        }
        resources.finish();
        page.finish();

        writer.pages(page_tree_id).count(1).kids([page_id]);

        let contents = render_contents(&self.canvas, self.primitives)?;
        writer.stream(content_id, contents.as_slice());

        writer.catalog(catalog_id).pages(page_tree_id);

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

/// The base-14 font names backing a label family, regular and bold.
fn base_font_names(family: FontFamily) -> [&'static [u8]; 2] {
    match family {
        FontFamily::Sans => [b"Helvetica", b"Helvetica-Bold"],
        FontFamily::Serif => [b"Times-Roman", b"Times-Bold"],
        FontFamily::Mono => [b"Courier", b"Courier-Bold"],
    }
}

fn write_fonts(refs: &mut ObjectReferences, family: FontFamily, writer: &mut Pdf) {
    for (index, name) in base_font_names(family).into_iter().enumerate() {
        let id = refs.gen(RefType::Font(index));
        writer
            .type1_font(id)
            .base_font(Name(name))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

fn write_image(
    refs: &mut ObjectReferences,
    image: &RasterImage,
    writer: &mut Pdf,
) -> Result<(), LabelError> {
    let id = refs.gen(RefType::Image);
    let decoded = image::load_from_memory(&image.data)?;

    // an RGB JPEG can be embedded as-is behind a DCT filter; everything else
    // gets re-packed as deflated RGB samples
    if image.format == RasterFormat::Jpeg && decoded.color() == image::ColorType::Rgb8 {
        let mut xobject = writer.image_xobject(id, image.data.as_slice());
        xobject.filter(Filter::DctDecode);
        xobject.width(image.width_px as i32);
        xobject.height(image.height_px as i32);
        xobject.color_space().device_rgb();
        xobject.bits_per_component(8);
        return Ok(());
    }

    let level = CompressionLevel::DefaultLevel as u8;
    let mask = decoded.color().has_alpha().then(|| {
        let alphas: Vec<u8> = decoded.pixels().map(|p| (p.2).0[3]).collect();
        compress_to_vec_zlib(&alphas, level)
    });
    let samples = compress_to_vec_zlib(decoded.to_rgb8().as_raw(), level);

    let mask_id = mask.as_ref().map(|_| refs.gen(RefType::ImageMask));

    let mut xobject = writer.image_xobject(id, samples.as_slice());
    xobject.filter(Filter::FlateDecode);
    xobject.width(image.width_px as i32);
    xobject.height(image.height_px as i32);
    xobject.color_space().device_rgb();
    xobject.bits_per_component(8);
    if let Some(mask_id) = mask_id {
        xobject.s_mask(mask_id);
    }
    xobject.finish();

    if let (Some(mask), Some(mask_id)) = (mask, mask_id) {
        let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
        s_mask.filter(Filter::FlateDecode);
        s_mask.width(image.width_px as i32);
        s_mask.height(image.height_px as i32);
        s_mask.color_space().device_gray();
        s_mask.bits_per_component(8);
    }

    Ok(())
}

/// Render the primitive list to PDF content-stream operators. Layout
/// coordinates are top-down; PDF's are bottom-up, so y flips against the
/// canvas height here and nowhere else.
#[allow(clippy::write_with_newline)]
fn render_contents(
    canvas: &CanvasSpec,
    primitives: &[DrawPrimitive],
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    let canvas_height = canvas.height.0;

    for primitive in primitives {
        match primitive {
            DrawPrimitive::Text {
                text,
                x,
                y,
                size,
                bold,
            } => {
                write!(&mut content, "BT\n")?;
                write!(
                    &mut content,
                    "/F{} {} Tf\n",
                    if *bold { 1 } else { 0 },
                    size.0
                )?;
                write!(&mut content, "{} {} Td\n", x.0, canvas_height - y.0)?;
                content.push(b'(');
                content.extend(win_ansi(text));
                write!(&mut content, ") Tj\nET\n")?;
            }
            DrawPrimitive::Line {
                x0,
                y0,
                x1,
                y1,
                thickness,
            } => {
                write!(&mut content, "q\n{} w\n", thickness.0)?;
                write!(&mut content, "{} {} m\n", x0.0, canvas_height - y0.0)?;
                write!(&mut content, "{} {} l\nS\nQ\n", x1.0, canvas_height - y1.0)?;
            }
            DrawPrimitive::Image {
                x,
                y,
                width,
                height,
            } => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    width.0,
                    height.0,
                    x.0,
                    canvas_height - y.0 - height.0
                )?;
                write!(&mut content, "/I0 Do\nQ\n")?;
            }
        }
    }

    Ok(content)
}

/// Encode a string for a WinAnsi literal string: ASCII and Latin-1 pass
/// through (with delimiters escaped), everything else becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let byte = match ch {
            '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => ch as u32 as u8,
            _ => b'?',
        };
        if matches!(byte, b'(' | b')' | b'\\') {
            bytes.push(b'\\');
        }
        bytes.push(byte);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layout, FontStore, LabelContent, Pt};

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn writes_a_pdf_with_base_fonts() {
        let canvas = CanvasSpec::new(Pt(162.0), Pt(90.0)).unwrap();
        let content = LabelContent::new("Pantry", vec!["Rice".into(), "Beans".into()]);
        let style = Style::default();
        let primitives = layout(&canvas, &content, &style, &FontStore::new()).unwrap();

        let mut info = Info::new();
        info.title("Pantry");

        let mut bytes: Vec<u8> = Vec::new();
        LabelPdf {
            canvas,
            style,
            primitives: &primitives,
            image: None,
            info: Some(info),
        }
        .write(&mut bytes)
        .unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"Helvetica-Bold"));
        assert!(contains(&bytes, b"Pantry"));
    }

    #[test]
    fn embeds_a_png_image_xobject() {
        let mut png: Vec<u8> = Vec::new();
        image::DynamicImage::new_rgb8(8, 8)
            .write_to(
                &mut std::io::Cursor::new(&mut png),
                image::ImageOutputFormat::Png,
            )
            .unwrap();
        let raster = RasterImage::probe(png).unwrap();

        let canvas = CanvasSpec::new(Pt(288.0), Pt(432.0)).unwrap();
        let content = LabelContent::new("Box", vec!["Tape".into()])
            .with_image(Some(raster.clone()));
        let style = Style::default();
        let primitives = layout(&canvas, &content, &style, &FontStore::new()).unwrap();

        let mut bytes: Vec<u8> = Vec::new();
        LabelPdf {
            canvas,
            style,
            primitives: &primitives,
            image: Some(&raster),
            info: None,
        }
        .write(&mut bytes)
        .unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"/I0 Do"));
    }

    #[test]
    fn win_ansi_escapes_delimiters() {
        assert_eq!(win_ansi("a(b)c\\"), b"a\\(b\\)c\\\\".to_vec());
        assert_eq!(win_ansi("naïve — label"), b"na\xEFve ? label".to_vec());
    }
}
