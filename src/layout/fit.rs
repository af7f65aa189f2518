use super::*;
use crate::FontMetrics;

/// The winning (font size, column count) pair from [`fit_items`]. Always
/// satisfies `columns >= 1` and `ITEM_MIN_SIZE <= font_size <= ITEM_MAX_SIZE`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitResult {
    pub font_size: Pt,
    pub columns: u32,
}

/// Find the largest header size, between [`HEADER_MAX_SIZE`] and
/// [`HEADER_MIN_SIZE`] in 1pt steps, at which the header fits `max_width` on
/// a single line. A header that still overflows at the floor size keeps the
/// floor size; rendering clips, layout never fails.
pub fn fit_header(header: &str, metrics: &dyn FontMetrics, max_width: Pt) -> Pt {
    let mut size = HEADER_MAX_SIZE;
    while size > HEADER_MIN_SIZE && metrics.width_of(header, Pt(size as f32)) > max_width {
        size -= 1;
    }
    if metrics.width_of(header, Pt(size as f32)) > max_width {
        log::debug!("header overflows {max_width} wide canvas even at {size}pt");
    }
    Pt(size as f32)
}

/// Search the discrete (font size × column count) space for the item list.
///
/// Font size is the primary objective (legibility), scanned from
/// [`ITEM_MAX_SIZE`] down; column count is only a tie-break at a given size,
/// scanned from [`MAX_COLUMNS`] down because more columns means less height.
/// The first combination where every item fits its column horizontally and
/// the whole list fits `height_budget` vertically wins.
///
/// The scan is deliberately brute force: the two-dimensional tie-break rule
/// does not give the monotonicity a binary search would need across both
/// axes, and the space is tiny (≤ 9 sizes × 3 column counts).
///
/// An empty item list fits trivially at the maximum size; if nothing fits at
/// all the result degrades to the floor size in a single column and the
/// assembler drops whatever will not go.
pub fn fit_items(
    items: &[String],
    metrics: &dyn FontMetrics,
    width_budget: Pt,
    height_budget: Pt,
) -> FitResult {
    if items.is_empty() {
        return FitResult {
            font_size: Pt(ITEM_MAX_SIZE as f32),
            columns: 1,
        };
    }

    for size in (ITEM_MIN_SIZE..=ITEM_MAX_SIZE).rev() {
        let size = Pt(size as f32);
        let row_height = metrics.line_height(size) + ITEM_SPACING;

        for columns in (1..=MAX_COLUMNS).rev() {
            let column_width =
                (width_budget - COLUMN_GAP * (columns - 1) as f32) / columns as f32;
            if column_width.0 <= 0.0 {
                continue;
            }

            let rows = rows_per_column(items.len(), columns);
            let required_height = row_height * rows as f32;
            if required_height > height_budget {
                continue;
            }

            let widths_fit = items
                .iter()
                .all(|item| metrics.width_of(item, size) <= column_width);
            if widths_fit {
                log::debug!(
                    "fit {} items at {size} in {columns} column(s) ({rows} rows)",
                    items.len()
                );
                return FitResult {
                    font_size: size,
                    columns,
                };
            }
        }
    }

    log::debug!(
        "no (size, columns) pair fits {} items in {width_budget} x {height_budget}, degrading",
        items.len()
    );
    FitResult {
        font_size: Pt(ITEM_MIN_SIZE as f32),
        columns: 1,
    }
}

/// Items are distributed column-major: `ceil(n / columns)` per column, so the
/// first columns fill completely and the last may run short.
pub fn rows_per_column(item_count: usize, columns: u32) -> usize {
    let columns = columns as usize;
    (item_count + columns - 1) / columns
}
