//! Squarified treemap layout.
//!
//! Partitions a viewport into one rectangle per weighted item, sized
//! proportionally to the item's weight. Rows are grown greedily and a row is
//! finalized as soon as adding the next item would make its worst cell
//! aspect ratio strictly worse, which keeps cells close to square.
//!
//! The engine is generic over a weight accessor so the same layout serves
//! market-cap-weighted index heatmaps and position-value-weighted portfolio
//! heatmaps.

use crate::geometry::{Rect, Size};

/// Upper bound on items per row.
///
/// Bounds the re-scan cost on large item sets; not required for correctness
/// but it affects which row groupings are produced, so it is part of the
/// layout's observable behavior.
pub const MAX_ROW_ITEMS: usize = 8;

/// One laid-out tile: a reference to the originating item plus its rectangle
/// within the viewport.
///
/// Cells are ordered by placement (largest weights first), not input order.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a, T> {
    /// The item this cell was laid out for.
    pub item: &'a T,
    /// The cell's rectangle, in viewport coordinates.
    pub rect: Rect,
}

/// Item paired with its sanitized weight for the duration of one layout call.
#[derive(Clone, Copy)]
struct Entry<'a, T> {
    item: &'a T,
    weight: f32,
}

/// Compute a squarified treemap layout.
///
/// Each returned cell's area is proportional to its item's weight as given
/// by `weight`, and the cells exactly tile the `width` x `height` viewport
/// (up to floating-point rounding). Equal-weight items keep their relative
/// input order, so repeated calls with identical input are identical.
///
/// The function is total:
/// - a non-positive or non-finite viewport yields an empty layout;
/// - negative or non-finite weights are clamped to zero;
/// - empty input, or input whose weights sum to zero, yields an empty layout.
///
/// Zero-weight items that share a layout with positive-weight items receive
/// zero-area cells and never influence row selection.
#[must_use]
pub fn layout<'a, T, W>(items: &'a [T], weight: W, width: f32, height: f32) -> Vec<Cell<'a, T>>
where
    W: Fn(&T) -> f32,
{
    if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
        return Vec::new();
    }

    let mut entries: Vec<Entry<'a, T>> = items
        .iter()
        .map(|item| Entry {
            item,
            weight: sanitize_weight(weight(item)),
        })
        .collect();

    // Largest first; the sort is stable so equal weights keep input order.
    entries.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));

    let total: f32 = entries.iter().map(|e| e.weight).sum();
    if entries.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let mut cells = Vec::with_capacity(entries.len());
    let mut current_x = 0.0f32;
    let mut current_y = 0.0f32;
    let mut remaining_width = width;
    let mut remaining_height = height;
    let mut horizontal = width >= height;

    let mut i = 0;
    while i < entries.len() {
        let remaining: f32 = entries[i..].iter().map(|e| e.weight).sum();
        if remaining <= 0.0 {
            // Only zero-weight items left: collapsed cells at the cursor.
            for entry in &entries[i..] {
                cells.push(Cell {
                    item: entry.item,
                    rect: Rect::new(current_x, current_y, 0.0, 0.0),
                });
            }
            break;
        }

        // Grow the row while the worst aspect ratio does not get strictly
        // worse. Equal-or-better always accepts, biasing toward fewer rows.
        let row_end = entries.len().min(i + MAX_ROW_ITEMS);
        let mut count = 1;
        let mut row_sum = entries[i].weight;
        let mut best_worst = worst_aspect(
            &entries[i..=i],
            row_sum,
            remaining,
            remaining_width,
            remaining_height,
            horizontal,
        );
        while i + count < row_end {
            let candidate_sum = row_sum + entries[i + count].weight;
            let worst = worst_aspect(
                &entries[i..=i + count],
                candidate_sum,
                remaining,
                remaining_width,
                remaining_height,
                horizontal,
            );
            if worst > best_worst {
                break;
            }
            best_worst = worst;
            row_sum = candidate_sum;
            count += 1;
        }

        // Lay out the finalized row with a running offset along the row axis.
        let row_fraction = row_sum / remaining;
        let row_size = if horizontal {
            remaining_height * row_fraction
        } else {
            remaining_width * row_fraction
        };

        let mut offset = 0.0f32;
        for entry in &entries[i..i + count] {
            let cell_fraction = if row_sum > 0.0 {
                entry.weight / row_sum
            } else {
                0.0
            };
            let cell_size = if horizontal {
                remaining_width * cell_fraction
            } else {
                remaining_height * cell_fraction
            };

            let rect = if horizontal {
                Rect::new(current_x + offset, current_y, cell_size, row_size)
            } else {
                Rect::new(current_x, current_y + offset, row_size, cell_size)
            };
            cells.push(Cell {
                item: entry.item,
                rect,
            });
            offset += cell_size;
        }

        // A horizontal row consumes height, a vertical column consumes width.
        if horizontal {
            current_y += row_size;
            remaining_height -= row_size;
        } else {
            current_x += row_size;
            remaining_width -= row_size;
        }
        horizontal = remaining_width >= remaining_height;
        i += count;
    }

    cells
}

/// Clamp a caller-supplied weight into the engine's domain.
///
/// Negative weights are a caller contract violation; the documented policy
/// is to clamp to zero so the layout stays total. Non-finite weights clamp
/// too, which keeps NaN out of the sort comparator.
fn sanitize_weight(w: f32) -> f32 {
    if w.is_finite() && w > 0.0 {
        w
    } else {
        0.0
    }
}

/// Worst cell aspect ratio the row would have if finalized now.
///
/// Zero-weight members collapse to zero-area cells, so they are excluded
/// from the comparison rather than reported as infinitely bad.
fn worst_aspect<T>(
    row: &[Entry<'_, T>],
    row_sum: f32,
    remaining: f32,
    remaining_width: f32,
    remaining_height: f32,
    horizontal: bool,
) -> f32 {
    if row_sum <= 0.0 {
        return 1.0;
    }

    let row_fraction = row_sum / remaining;
    let row_size = if horizontal {
        remaining_height * row_fraction
    } else {
        remaining_width * row_fraction
    };

    let mut worst = 0.0f32;
    for entry in row {
        if entry.weight <= 0.0 {
            continue;
        }
        let cell_fraction = entry.weight / row_sum;
        let cell_size = if horizontal {
            remaining_width * cell_fraction
        } else {
            remaining_height * cell_fraction
        };
        if row_size <= 0.0 || cell_size <= 0.0 {
            continue;
        }
        worst = worst.max(Size::new(cell_size, row_size).squareness());
    }
    worst
}
