//! Text measurement for layout.
//!
//! Every fitting stage measures text through the [FontMetrics] trait. The
//! contract is small but strict: width and line height must increase strictly
//! with the font size, because the shrink-to-fit searches rely on it. Two
//! implementations are provided: [`Font`](crate::Font) measures a parsed face
//! glyph-by-glyph, and [BuiltinFont] looks advances up in calibrated tables
//! for the three built-in families. Either is well within the accuracy a
//! label needs.

use crate::{Font, FontFamily, Pt};
use id_arena::{Arena, Id};
use std::collections::HashMap;

/// Measurement capability used by the header fitter, the fit search, and the
/// assembler. Implementations must be strictly monotonic in `size` and must
/// measure *something* reasonable for every input character.
pub trait FontMetrics {
    /// The horizontal advance of `text` set at `size`.
    fn width_of(&self, text: &str, size: Pt) -> Pt;
    /// How much to vertically offset a second row of text below a first row.
    fn line_height(&self, size: Pt) -> Pt;
    /// The distance from the baseline up to the top of the font.
    fn ascent(&self, size: Pt) -> Pt;
}

/// Advance-width tables for a built-in family, in 1/1000 em units covering
/// printable ASCII (0x20..=0x7E). Characters outside that range fall back to
/// the family's average advance. Vertical metrics are in the same units.
pub struct BuiltinFont {
    pub name: &'static str,
    widths: &'static [u16; 95],
    ascent: i16,
    descent: i16,
    fallback: u16,
}

impl FontMetrics for BuiltinFont {
    fn width_of(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| {
                let code = ch as usize;
                if (0x20..=0x7E).contains(&code) {
                    self.widths[code - 0x20] as u32
                } else {
                    self.fallback as u32
                }
            })
            .sum();
        size * (units as f32 / 1000.0)
    }

    fn line_height(&self, size: Pt) -> Pt {
        size * ((self.ascent - self.descent) as f32 / 1000.0)
    }

    fn ascent(&self, size: Pt) -> Pt {
        size * (self.ascent as f32 / 1000.0)
    }
}

pub static SANS: BuiltinFont = BuiltinFont {
    name: "Helvetica",
    widths: &SANS_WIDTHS,
    ascent: 718,
    descent: -207,
    fallback: 556,
};

pub static SANS_BOLD: BuiltinFont = BuiltinFont {
    name: "Helvetica-Bold",
    widths: &SANS_BOLD_WIDTHS,
    ascent: 718,
    descent: -207,
    fallback: 584,
};

pub static SERIF: BuiltinFont = BuiltinFont {
    name: "Times-Roman",
    widths: &SERIF_WIDTHS,
    ascent: 683,
    descent: -217,
    fallback: 500,
};

pub static SERIF_BOLD: BuiltinFont = BuiltinFont {
    name: "Times-Bold",
    widths: &SERIF_BOLD_WIDTHS,
    ascent: 683,
    descent: -217,
    fallback: 521,
};

pub static MONO: BuiltinFont = BuiltinFont {
    name: "Courier",
    widths: &MONO_WIDTHS,
    ascent: 629,
    descent: -157,
    fallback: 600,
};

pub static MONO_BOLD: BuiltinFont = BuiltinFont {
    name: "Courier-Bold",
    widths: &MONO_WIDTHS,
    ascent: 629,
    descent: -157,
    fallback: 600,
};

#[rustfmt::skip]
static SANS_WIDTHS: [u16; 95] = [
    // 0x20 space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0x30 digits, : ; < = > ?
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // 0x40 @ A-O
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 0x50 P-Z [ \ ] ^ _
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // 0x60 ` a-o
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 0x70 p-z { | } ~
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
static SANS_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
static SERIF_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
static SERIF_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

static MONO_WIDTHS: [u16; 95] = [600; 95];

/// Resolves a `(family, bold)` pair to a metrics source. Defaults to the
/// built-in tables; a parsed [Font] can be bound over any slot, after which
/// that family measures with real glyph advances. The store is read-only
/// during layout, so sharing one across concurrent layout calls is fine.
#[derive(Default)]
pub struct FontStore {
    faces: Arena<Font>,
    bindings: HashMap<(FontFamily, bool), Id<Font>>,
}

impl FontStore {
    pub fn new() -> FontStore {
        FontStore::default()
    }

    /// Bind a parsed face to a family/weight slot, replacing the built-in
    /// table for it. Returns the face's id within the store.
    pub fn bind(&mut self, family: FontFamily, bold: bool, font: Font) -> Id<Font> {
        let id = self.faces.alloc(font);
        self.bindings.insert((family, bold), id);
        id
    }

    /// The metrics source for a family/weight: the bound face if there is
    /// one, the built-in table otherwise.
    pub fn metrics(&self, family: FontFamily, bold: bool) -> &dyn FontMetrics {
        match self.bindings.get(&(family, bold)) {
            Some(&id) => &self.faces[id],
            None => Self::builtin(family, bold),
        }
    }

    pub fn builtin(family: FontFamily, bold: bool) -> &'static BuiltinFont {
        match (family, bold) {
            (FontFamily::Sans, false) => &SANS,
            (FontFamily::Sans, true) => &SANS_BOLD,
            (FontFamily::Serif, false) => &SERIF,
            (FontFamily::Serif, true) => &SERIF_BOLD,
            (FontFamily::Mono, false) => &MONO,
            (FontFamily::Mono, true) => &MONO_BOLD,
        }
    }
}
