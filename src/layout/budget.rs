use super::*;
use crate::{FontMetrics, RasterImage, Rect};

/// The computed placement of the label's image, padding excluded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageZone {
    pub x: Pt,
    pub y: Pt,
    pub width: Pt,
    pub height: Pt,
}

/// The vertical partition of the content box, top to bottom: header zone,
/// separator zone, item-list zone, image zone. Produced by [`allocate`]
/// before the item fit search runs, because the item budget depends on what
/// the header and image claim.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Zones {
    /// Baseline of the header run; `None` when the header is empty.
    pub header_baseline: Option<Pt>,
    /// Vertical center of the separator stroke; `None` when the header is
    /// empty (no header, nothing to separate).
    pub rule_y: Option<Pt>,
    /// Where the item-list zone begins.
    pub items_top: Pt,
    /// Where the item-list zone ends. May sit above `items_top` on a
    /// crowded canvas; the item budget clamps to zero, not an error.
    pub items_bottom: Pt,
    pub image: Option<ImageZone>,
}

impl Zones {
    /// The height available to the item list.
    pub fn item_budget(&self) -> Pt {
        (self.items_bottom - self.items_top).max_zero()
    }
}

/// Scale the image to fit the horizontal budget and the height cap, never
/// upscaling. Returns the placed (width, height) in points; this is a
/// geometric transform only, pixels are untouched.
pub fn scale_image(image: &RasterImage, width_budget: Pt, canvas_height: Pt) -> (Pt, Pt) {
    let scale = (width_budget.0 / image.width_px as f32)
        .min(canvas_height.0 * MAX_IMAGE_HEIGHT_FRACTION / image.height_px as f32)
        .min(1.0);
    (
        Pt(image.width_px as f32 * scale),
        Pt(image.height_px as f32 * scale),
    )
}

/// Partition the content box's height. Subtracts, in fixed order from the
/// top: the header line box, [`HEADER_GAP`], the separator and its gaps;
/// then reserves the image zone (scaled image plus [`IMAGE_PADDING`] on all
/// sides) against the bottom edge. Whatever remains belongs to the items.
pub fn allocate(
    content_box: Rect,
    canvas_height: Pt,
    header: Option<(&dyn FontMetrics, Pt)>,
    image: Option<&RasterImage>,
) -> Zones {
    let mut y = content_box.y1;

    let (header_baseline, rule_y) = match header {
        Some((metrics, size)) => {
            let baseline = y + metrics.ascent(size);
            y += metrics.line_height(size) + HEADER_GAP;
            let rule = y + RULE_TOP_GAP + RULE_THICKNESS / 2.0;
            y += RULE_TOP_GAP + RULE_THICKNESS + RULE_BOTTOM_GAP;
            (Some(baseline), Some(rule))
        }
        None => (None, None),
    };

    let (items_bottom, image_zone) = match image {
        Some(image) => {
            let (width, height) = scale_image(image, content_box.width(), canvas_height);
            let image_y = content_box.y2 - IMAGE_PADDING - height;
            let image_x = content_box.x1 + (content_box.width() - width) / 2.0;
            (
                image_y - IMAGE_PADDING,
                Some(ImageZone {
                    x: image_x,
                    y: image_y,
                    width,
                    height,
                }),
            )
        }
        None => (content_box.y2, None),
    };

    Zones {
        header_baseline,
        rule_y,
        items_top: y,
        items_bottom,
        image: image_zone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FontFamily, FontStore, RasterFormat};

    fn raster(width_px: u32, height_px: u32) -> RasterImage {
        RasterImage {
            width_px,
            height_px,
            format: RasterFormat::Png,
            data: Vec::new(),
        }
    }

    fn content_box() -> Rect {
        // a 288x432 canvas with 4pt margins
        Rect {
            x1: Pt(4.0),
            y1: Pt(4.0),
            x2: Pt(284.0),
            y2: Pt(428.0),
        }
    }

    #[test]
    fn image_scales_to_height_cap() {
        // 640x480 on a 4"x6" canvas: the 30% height cap (129.6 / 480 = 0.27)
        // binds before the width does
        let (width, height) = scale_image(&raster(640, 480), Pt(280.0), Pt(432.0));
        assert!((width.0 - 172.8).abs() < 1e-3);
        assert!((height.0 - 129.6).abs() < 1e-3);
    }

    #[test]
    fn image_never_upscales() {
        let (width, height) = scale_image(&raster(40, 30), Pt(280.0), Pt(432.0));
        assert_eq!((width, height), (Pt(40.0), Pt(30.0)));
    }

    #[test]
    fn zones_stack_in_fixed_order() {
        let metrics = FontStore::builtin(FontFamily::Sans, true);
        let zones = allocate(
            content_box(),
            Pt(432.0),
            Some((metrics, Pt(20.0))),
            Some(&raster(640, 480)),
        );

        // header line box is 18.5pt tall at 20pt; baseline sits an ascent
        // (14.36) below the top margin
        let baseline = zones.header_baseline.unwrap();
        assert!((baseline.0 - (4.0 + 14.36)).abs() < 1e-3);

        // items start below header box + 4pt gap + 2pt + 0.5pt + 4pt
        assert!((zones.items_top.0 - (4.0 + 18.5 + 4.0 + 2.0 + 0.5 + 4.0)).abs() < 1e-3);

        // rule sits centered in the separator zone, above items_top
        let rule = zones.rule_y.unwrap();
        assert!(rule > baseline && rule < zones.items_top);

        // the image claims its scaled height plus padding off the bottom
        let image = zones.image.unwrap();
        assert!((image.y.0 - (428.0 - 4.0 - 129.6)).abs() < 1e-3);
        assert!((zones.items_bottom.0 - (image.y.0 - 4.0)).abs() < 1e-3);

        // image is horizontally centered in the content box
        assert!((image.x.0 - (4.0 + (280.0 - 172.8) / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn empty_header_claims_no_space() {
        let zones = allocate(content_box(), Pt(432.0), None, None);
        assert_eq!(zones.header_baseline, None);
        assert_eq!(zones.rule_y, None);
        assert_eq!(zones.items_top, Pt(4.0));
        assert_eq!(zones.items_bottom, Pt(428.0));
    }

    #[test]
    fn crowded_canvas_clamps_item_budget_to_zero() {
        let metrics = FontStore::builtin(FontFamily::Sans, true);
        // 30pt tall content box, 24pt header: the fixed zones overrun it
        let tiny = Rect {
            x1: Pt(4.0),
            y1: Pt(4.0),
            x2: Pt(158.0),
            y2: Pt(26.0),
        };
        let zones = allocate(tiny, Pt(30.0), Some((metrics, Pt(24.0))), None);
        assert!(zones.items_top > zones.items_bottom);
        assert_eq!(zones.item_budget(), Pt(0.0));
    }
}
