use super::*;
use crate::{
    CanvasSpec, DrawPrimitive, FontMetrics, FontStore, LabelContent, LabelError, LayoutResult,
    Rect, Style, TextAlign,
};

/// Tolerance for floating-point accumulation in the running Y cursor.
const Y_EPSILON: f32 = 0.01;

/// Lay out a label: header, separator, multi-column item list, optional
/// image, in canvas coordinates.
///
/// This is a pure function: identical inputs produce an identical primitive
/// list. The only reportable error is a non-positive canvas; everything else
/// degrades. An empty header emits no primitives at all; the separator
/// exists to divide the header from the items, so it is omitted along with
/// it. Items that cannot fit even at the floor font size are dropped from
/// the tail of the list rather than shrunk further or elided; the cut
/// happens at the bottom of each column.
pub fn layout(
    canvas: &CanvasSpec,
    content: &LabelContent,
    style: &Style,
    fonts: &FontStore,
) -> Result<LayoutResult, LabelError> {
    canvas.validate()?;

    let margins = Margins::all(EDGE_MARGIN);
    let content_box = Rect {
        x1: margins.left,
        y1: margins.top,
        x2: canvas.width - margins.right,
        y2: canvas.height - margins.bottom,
    };

    let bold = fonts.metrics(style.family, true);
    let regular = fonts.metrics(style.family, false);

    let header_size = (!content.header.is_empty())
        .then(|| fit_header(&content.header, bold, content_box.width()));
    let zones = allocate(
        content_box,
        canvas.height,
        header_size.map(|size| (bold, size)),
        content.image.as_ref(),
    );

    let mut primitives: LayoutResult = Vec::new();

    if let (Some(size), Some(baseline), Some(rule_y)) =
        (header_size, zones.header_baseline, zones.rule_y)
    {
        let width = bold.width_of(&content.header, size);
        primitives.push(DrawPrimitive::Text {
            text: content.header.clone(),
            x: aligned_x(style.align, content_box.x1, content_box.width(), width),
            y: baseline,
            size,
            bold: true,
        });
        primitives.push(DrawPrimitive::Line {
            x0: content_box.x1,
            y0: rule_y,
            x1: content_box.x2,
            y1: rule_y,
            thickness: RULE_THICKNESS,
        });
    }

    if !content.items.is_empty() {
        let fit = fit_items(
            &content.items,
            regular,
            content_box.width(),
            zones.item_budget(),
        );
        place_items(
            &mut primitives,
            &content.items,
            style.align,
            regular,
            fit,
            &zones,
            content_box,
        );
    }

    if let Some(zone) = zones.image {
        primitives.push(DrawPrimitive::Image {
            x: zone.x,
            y: zone.y,
            width: zone.width,
            height: zone.height,
        });
    }

    Ok(primitives)
}

/// Walk items into column-major cells: column 0 fills top to bottom, then
/// column 1, and so on. A guard re-checks the Y cursor against the zone
/// bottom for every row: the fit search already guaranteed a fit for
/// non-degenerate inputs, but the degenerate floor result overruns on
/// purpose and float accumulation is not worth trusting either way.
#[allow(clippy::too_many_arguments)]
fn place_items(
    primitives: &mut LayoutResult,
    items: &[String],
    align: TextAlign,
    metrics: &dyn FontMetrics,
    fit: FitResult,
    zones: &Zones,
    content_box: Rect,
) {
    let columns = fit.columns;
    let rows = rows_per_column(items.len(), columns);
    let column_width =
        (content_box.width() - COLUMN_GAP * (columns - 1) as f32) / columns as f32;
    let line_height = metrics.line_height(fit.font_size);
    let row_height = line_height + ITEM_SPACING;
    let ascent = metrics.ascent(fit.font_size);

    let mut dropped = 0usize;
    for (index, item) in items.iter().enumerate() {
        let column = index / rows;
        let row = index % rows;

        let top = zones.items_top + row_height * row as f32;
        if (top + line_height).0 > zones.items_bottom.0 + Y_EPSILON {
            dropped += 1;
            continue;
        }

        let cell_x = content_box.x1 + (column_width + COLUMN_GAP) * column as f32;
        let width = metrics.width_of(item, fit.font_size);
        primitives.push(DrawPrimitive::Text {
            text: item.clone(),
            x: aligned_x(align, cell_x, column_width, width),
            y: top + ascent,
            size: fit.font_size,
            bold: false,
        });
    }

    if dropped > 0 {
        log::warn!(
            "label too small for its item list: dropped {dropped} of {} item(s)",
            items.len()
        );
    }
}

/// Horizontal placement of a text run inside its box. Slack is clamped at
/// zero so an overwide run stays pinned to the left edge instead of escaping
/// the canvas on centered or right-aligned labels.
fn aligned_x(align: TextAlign, box_x: Pt, box_width: Pt, text_width: Pt) -> Pt {
    let slack = (box_width - text_width).max_zero();
    match align {
        TextAlign::Left => box_x,
        TextAlign::Center => box_x + slack / 2.0,
        TextAlign::Right => box_x + slack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labelsize;
    use crate::{FontFamily, RasterFormat, RasterImage};

    fn kitchen_content() -> LabelContent {
        LabelContent::new(
            "Kitchen Items",
            vec![
                "Plate".to_string(),
                "Cup".to_string(),
                "Fork".to_string(),
                "Spoon".to_string(),
                "Bowl".to_string(),
                "Knife".to_string(),
            ],
        )
    }

    fn assert_within_canvas(primitives: &LayoutResult, canvas: &CanvasSpec) {
        let (w, h) = (canvas.width.0, canvas.height.0);
        let inside = |x: Pt, y: Pt| {
            assert!(
                (0.0..=w).contains(&x.0) && (0.0..=h).contains(&y.0),
                "({x}, {y}) escapes {w}x{h} canvas"
            );
        };
        for primitive in primitives {
            match primitive {
                DrawPrimitive::Text { x, y, .. } => inside(*x, *y),
                DrawPrimitive::Line { x0, y0, x1, y1, .. } => {
                    inside(*x0, *y0);
                    inside(*x1, *y1);
                }
                DrawPrimitive::Image {
                    x,
                    y,
                    width,
                    height,
                } => {
                    inside(*x, *y);
                    inside(*x + *width, *y + *height);
                }
            }
        }
    }

    #[test]
    fn invalid_canvas_fails_fast() {
        let canvas = CanvasSpec {
            width: Pt(0.0),
            height: Pt(90.0),
        };
        let result = layout(
            &canvas,
            &kitchen_content(),
            &Style::default(),
            &FontStore::new(),
        );
        assert!(matches!(result, Err(LabelError::InvalidCanvas { .. })));
    }

    #[test]
    fn kitchen_label_on_address_stock() {
        let canvas: CanvasSpec = labelsize::ADDRESS.into();
        let primitives = layout(
            &canvas,
            &kitchen_content(),
            &Style::default(),
            &FontStore::new(),
        )
        .unwrap();

        let headers: Vec<_> = primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Text { bold: true, .. }))
            .collect();
        assert_eq!(headers.len(), 1);
        if let DrawPrimitive::Text { size, .. } = headers[0] {
            assert!(*size <= Pt(24.0));
        }

        let lines = primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Line { .. }))
            .count();
        assert_eq!(lines, 1);

        let items = primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Text { bold: false, .. }))
            .count();
        assert_eq!(items, 6);

        assert_within_canvas(&primitives, &canvas);
    }

    #[test]
    fn empty_label_emits_no_primitives() {
        let canvas: CanvasSpec = labelsize::SHIPPING.into();
        let primitives = layout(
            &canvas,
            &LabelContent::default(),
            &Style::default(),
            &FontStore::new(),
        )
        .unwrap();
        assert!(primitives.is_empty());
    }

    #[test]
    fn empty_items_emit_header_and_separator_only() {
        let canvas: CanvasSpec = labelsize::ADDRESS.into();
        let content = LabelContent::new("Pantry", Vec::new());
        let primitives = layout(&canvas, &content, &Style::default(), &FontStore::new()).unwrap();
        assert_eq!(primitives.len(), 2);
        assert!(matches!(&primitives[0], DrawPrimitive::Text { bold: true, .. }));
        assert!(matches!(&primitives[1], DrawPrimitive::Line { .. }));
    }

    #[test]
    fn layout_is_idempotent() {
        let canvas: CanvasSpec = labelsize::ADDRESS.into();
        let style = Style::new(FontFamily::Serif, TextAlign::Center);
        let fonts = FontStore::new();
        let first = layout(&canvas, &kitchen_content(), &style, &fonts).unwrap();
        let second = layout(&canvas, &kitchen_content(), &style, &fonts).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn taller_canvas_never_shrinks_items() {
        let fonts = FontStore::new();
        let content = LabelContent::new(
            "Inventory",
            (1..=15).map(|i| format!("Item {i:02}")).collect(),
        );
        let mut previous = Pt(0.0);
        for height in (60..=400).step_by(20) {
            let canvas = CanvasSpec::new(Pt(162.0), Pt(height as f32)).unwrap();
            let primitives = layout(&canvas, &content, &Style::default(), &fonts).unwrap();
            let item_size = primitives
                .iter()
                .find_map(|p| match p {
                    DrawPrimitive::Text {
                        bold: false, size, ..
                    } => Some(*size),
                    _ => None,
                })
                .unwrap_or(previous);
            assert!(item_size >= previous);
            previous = item_size;
        }
    }

    #[test]
    fn image_is_placed_and_bounded() {
        let canvas: CanvasSpec = labelsize::SHIPPING.into();
        let image = RasterImage {
            width_px: 640,
            height_px: 480,
            format: RasterFormat::Jpeg,
            data: Vec::new(),
        };
        let content = kitchen_content().with_image(Some(image));
        let primitives = layout(&canvas, &content, &Style::default(), &FontStore::new()).unwrap();

        let images: Vec<_> = primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Image { .. }))
            .collect();
        assert_eq!(images.len(), 1);
        assert_within_canvas(&primitives, &canvas);
    }

    #[test]
    fn undersized_canvas_drops_items_without_erroring() {
        let canvas = CanvasSpec::new(Pt(72.0), Pt(30.0)).unwrap();
        let content = LabelContent::new(
            "Overflowing",
            (1..=30).map(|i| format!("Item {i:02}")).collect(),
        );
        let primitives = layout(&canvas, &content, &Style::default(), &FontStore::new()).unwrap();
        let items = primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Text { bold: false, .. }))
            .count();
        assert!(items < 30);
        assert_within_canvas(&primitives, &canvas);
    }

    #[test]
    fn alignment_moves_runs_without_escaping_cells() {
        let canvas: CanvasSpec = labelsize::ADDRESS.into();
        let fonts = FontStore::new();
        let left = layout(
            &canvas,
            &kitchen_content(),
            &Style::new(FontFamily::Sans, TextAlign::Left),
            &fonts,
        )
        .unwrap();
        let right = layout(
            &canvas,
            &kitchen_content(),
            &Style::new(FontFamily::Sans, TextAlign::Right),
            &fonts,
        )
        .unwrap();

        let first_x = |primitives: &LayoutResult| match &primitives[0] {
            DrawPrimitive::Text { x, .. } => *x,
            _ => unreachable!(),
        };
        assert!(first_x(&right) > first_x(&left));
        assert_within_canvas(&right, &canvas);
    }
}
