use crate::{FontMetrics, LabelError, Pt};
use owned_ttf_parser::{AsFaceRef, OwnedFace};

/// A parsed TTF/OTF font face, used as a glyph-accurate metrics source for
/// layout. Binding one to a family in a [`FontStore`](crate::FontStore)
/// replaces the built-in advance tables for that family.
///
/// Note that the face is only ever *measured* here: the PDF encoder renders
/// with the matching base-14 printer font, so measured and printed text agree
/// only as closely as the face matches that font. For shrink-to-fit label
/// layout this tolerance is by far good enough.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, returning an error if the font could not
    /// be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LabelError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / Pt(self.face.as_face_ref().units_per_em() as f32)
    }

    /// The distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// The distance from the baseline to the bottom of the font at the given
    /// size. Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Extra space between lines at the given size
    pub fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().line_gap() as f32
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// The horizontal advance of a single character, falling back through
    /// U+FFFD and then `?` for characters the face has no glyph for.
    fn advance(&self, ch: char, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let gid = face
            .glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'));
        match gid {
            Some(gid) => self.scaling(size) * face.glyph_hor_advance(gid).unwrap_or_default() as f32,
            // no usable glyph at all: approximate with half an em
            None => size * 0.5,
        }
    }
}

impl FontMetrics for Font {
    fn width_of(&self, text: &str, size: Pt) -> Pt {
        text.chars().map(|ch| self.advance(ch, size)).sum()
    }

    /// How much to vertically offset a second row of text below a first row.
    fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    fn ascent(&self, size: Pt) -> Pt {
        Font::ascent(self, size)
    }
}
