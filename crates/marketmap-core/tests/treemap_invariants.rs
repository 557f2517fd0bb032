//! Property tests for the treemap layout engine.
//!
//! The invariants: every input item gets exactly one cell, the cells tile the
//! viewport with no gaps or overlaps, areas track weights, and identical
//! input produces identical output.

use marketmap_core::{layout, Rect};
use proptest::prelude::*;

/// Relative tolerance for area comparisons. f32 accumulation over a few
/// hundred cells stays well inside this at pixel-scale viewports.
const AREA_TOL: f32 = 1e-3;

fn item_strategy() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(0.0f32..10_000.0, 1..120)
}

fn overlap_area(a: &Rect, b: &Rect) -> f32 {
    a.intersection(b).map_or(0.0, |r| r.area())
}

proptest! {
    #[test]
    fn prop_count_preservation(weights in item_strategy(),
                               width in 50.0f32..2000.0,
                               height in 50.0f32..2000.0) {
        let items: Vec<(usize, f32)> = weights.iter().copied().enumerate().collect();
        let total: f32 = weights.iter().sum();
        let cells = layout(&items, |i| i.1, width, height);
        if total > 0.0 {
            prop_assert_eq!(cells.len(), items.len());
        } else {
            prop_assert!(cells.is_empty());
        }
    }

    #[test]
    fn prop_tiling_completeness(weights in item_strategy(),
                                width in 50.0f32..2000.0,
                                height in 50.0f32..2000.0) {
        let items: Vec<(usize, f32)> = weights.iter().copied().enumerate().collect();
        let total: f32 = weights.iter().sum();
        prop_assume!(total > 0.0);

        let cells = layout(&items, |i| i.1, width, height);
        let covered: f32 = cells.iter().map(|c| c.rect.area()).sum();
        let viewport = width * height;
        prop_assert!(
            (covered - viewport).abs() / viewport < AREA_TOL,
            "covered {} of {}", covered, viewport
        );
    }

    #[test]
    fn prop_no_overlap(weights in prop::collection::vec(0.1f32..10_000.0, 1..60),
                       width in 50.0f32..2000.0,
                       height in 50.0f32..2000.0) {
        let items: Vec<(usize, f32)> = weights.iter().copied().enumerate().collect();
        let cells = layout(&items, |i| i.1, width, height);
        let viewport = width * height;
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                // Allow float-rounding slivers but nothing visible.
                let overlap = overlap_area(&a.rect, &b.rect);
                prop_assert!(
                    overlap / viewport < AREA_TOL,
                    "cells {} and {} overlap by {}", a.item.0, b.item.0, overlap
                );
            }
        }
    }

    #[test]
    fn prop_area_proportional_to_weight(weights in prop::collection::vec(1.0f32..10_000.0, 1..60),
                                        width in 100.0f32..2000.0,
                                        height in 100.0f32..2000.0) {
        let items: Vec<(usize, f32)> = weights.iter().copied().enumerate().collect();
        let total: f32 = weights.iter().sum();
        let viewport = width * height;
        let cells = layout(&items, |i| i.1, width, height);

        for cell in &cells {
            let expected = viewport * (cell.item.1 / total);
            let got = cell.rect.area();
            prop_assert!(
                (got - expected).abs() <= expected * 1e-2 + viewport * AREA_TOL,
                "item {} area {} expected {}", cell.item.0, got, expected
            );
        }
    }

    #[test]
    fn prop_cells_stay_in_viewport(weights in item_strategy(),
                                   width in 50.0f32..2000.0,
                                   height in 50.0f32..2000.0) {
        let items: Vec<(usize, f32)> = weights.iter().copied().enumerate().collect();
        let cells = layout(&items, |i| i.1, width, height);
        let slack_x = width * 1e-3;
        let slack_y = height * 1e-3;
        for cell in &cells {
            prop_assert!(cell.rect.x >= -slack_x);
            prop_assert!(cell.rect.y >= -slack_y);
            prop_assert!(cell.rect.right() <= width + slack_x);
            prop_assert!(cell.rect.bottom() <= height + slack_y);
            prop_assert!(cell.rect.width >= 0.0);
            prop_assert!(cell.rect.height >= 0.0);
        }
    }

    #[test]
    fn prop_determinism(weights in item_strategy(),
                        width in 50.0f32..2000.0,
                        height in 50.0f32..2000.0) {
        let items: Vec<(usize, f32)> = weights.iter().copied().enumerate().collect();
        let a = layout(&items, |i| i.1, width, height);
        let b = layout(&items, |i| i.1, width, height);
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert_eq!(x.item.0, y.item.0);
            prop_assert_eq!(x.rect, y.rect);
        }
    }

    #[test]
    fn prop_zero_weight_cells_are_degenerate(weights in prop::collection::vec(1.0f32..100.0, 1..20),
                                             zeros in 1usize..5,
                                             width in 50.0f32..1000.0,
                                             height in 50.0f32..1000.0) {
        let mut items: Vec<(usize, f32)> = weights.iter().copied().enumerate().collect();
        for z in 0..zeros {
            items.push((1000 + z, 0.0));
        }
        let cells = layout(&items, |i| i.1, width, height);
        prop_assert_eq!(cells.len(), items.len());
        for cell in cells.iter().filter(|c| c.item.1 == 0.0) {
            prop_assert_eq!(cell.rect.area(), 0.0);
        }
    }
}

#[test]
fn single_item_fills_viewport() {
    let items = [("X", 1.0f32)];
    let cells = layout(&items, |i| i.1, 100.0, 50.0);
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].rect, Rect::new(0.0, 0.0, 100.0, 50.0));
}

#[test]
fn empty_input_yields_no_cells() {
    let items: [(&str, f32); 0] = [];
    assert!(layout(&items, |i| i.1, 100.0, 50.0).is_empty());
}

#[test]
fn four_items_tile_400x300() {
    let items = [("A", 60.0f32), ("B", 25.0), ("C", 10.0), ("D", 5.0)];
    let cells = layout(&items, |i| i.1, 400.0, 300.0);
    assert_eq!(cells.len(), 4);

    for (key, share) in [("A", 0.60f32), ("B", 0.25), ("C", 0.10), ("D", 0.05)] {
        let cell = cells.iter().find(|c| c.item.0 == key).unwrap();
        let expected = 120_000.0 * share;
        assert!(
            (cell.rect.area() - expected).abs() < expected * 1e-3,
            "{key} area {} expected {expected}",
            cell.rect.area()
        );
    }

    // Full tiling with zero overlap.
    let covered: f32 = cells.iter().map(|c| c.rect.area()).sum();
    assert!((covered - 120_000.0).abs() < 1.0);
    for (i, a) in cells.iter().enumerate() {
        for b in &cells[i + 1..] {
            assert!(overlap_area(&a.rect, &b.rect) < 1.0);
        }
    }
}

#[test]
fn stability_under_tie_across_layouts() {
    // Two equal-weight items must keep their relative order between calls,
    // otherwise a UI consumer would flicker.
    let items = [("AAA", 10.0f32), ("BBB", 10.0), ("CCC", 20.0)];
    let first = layout(&items, |i| i.1, 300.0, 200.0);
    let second = layout(&items, |i| i.1, 300.0, 200.0);

    fn order_of<'a>(cells: &[marketmap_core::Cell<'_, (&'a str, f32)>]) -> Vec<&'a str> {
        cells.iter().map(|c| c.item.0).collect()
    }
    assert_eq!(order_of(&first), vec!["CCC", "AAA", "BBB"]);
    assert_eq!(order_of(&first), order_of(&second));
}
