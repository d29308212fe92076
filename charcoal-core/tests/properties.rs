//! Property tests for the core editing laws: undo is an inverse of
//! paint, fill changes exactly the connected region, and resize
//! preserves the overlap.

use std::collections::{HashSet, VecDeque};

use charcoal_core::{fill, line, painter, Canvas, Cell, History, PaletteColor};
use proptest::prelude::*;

fn arb_color() -> impl Strategy<Value = PaletteColor> {
    (1u8..=7).prop_map(|i| PaletteColor::from_index(i).unwrap())
}

fn arb_cell() -> impl Strategy<Value = Cell> {
    (proptest::char::range('!', '~'), arb_color()).prop_map(|(glyph, color)| Cell::new(glyph, color))
}

proptest! {
    /// Painting n cells and undoing n times restores the blank canvas,
    /// regardless of where the paints landed or how they overlapped.
    #[test]
    fn undo_reverses_any_paint_sequence(
        edits in proptest::collection::vec(((0usize..8, 0usize..8), arb_cell()), 0..40)
    ) {
        let mut canvas = Canvas::new(8, 8);
        let mut history = History::new();

        for ((x, y), cell) in &edits {
            painter::paint(&mut canvas, &mut history, *x, *y, *cell).unwrap();
        }
        for _ in 0..edits.len() {
            prop_assert!(history.undo(&mut canvas));
        }
        prop_assert!(!history.undo(&mut canvas));
        prop_assert_eq!(&canvas, &Canvas::new(8, 8));
    }

    /// Redo after undo reproduces the exact painted state.
    #[test]
    fn redo_reverses_undo(
        edits in proptest::collection::vec(((0usize..6, 0usize..6), arb_cell()), 1..20)
    ) {
        let mut canvas = Canvas::new(6, 6);
        let mut history = History::new();

        for ((x, y), cell) in &edits {
            painter::paint(&mut canvas, &mut history, *x, *y, *cell).unwrap();
        }
        let painted = canvas.clone();

        for _ in 0..edits.len() {
            history.undo(&mut canvas);
        }
        for _ in 0..edits.len() {
            prop_assert!(history.redo(&mut canvas));
        }
        prop_assert_eq!(&canvas, &painted);
    }

    /// Fill changes exactly the 4-connected region of cells equal to
    /// the starting cell, as computed by an independent reference
    /// traversal, and nothing else.
    #[test]
    fn fill_changes_exactly_the_connected_region(
        walls in proptest::collection::hash_set((0usize..7, 0usize..7), 0..25),
        start in (0usize..7, 0usize..7),
    ) {
        let mut canvas = Canvas::new(7, 7);
        let mut history = History::new();
        let wall = Cell::new('X', PaletteColor::Blue);
        for &(x, y) in &walls {
            canvas.set(x, y, wall).unwrap();
        }
        let before = canvas.clone();
        let target = canvas.get(start.0, start.1).unwrap();
        let expected = reference_region(&canvas, start, target);

        let ink = Cell::new('#', PaletteColor::Red);
        fill::flood_fill(&mut canvas, &mut history, start.0, start.1, ink).unwrap();

        for y in 0..7 {
            for x in 0..7 {
                if expected.contains(&(x, y)) {
                    prop_assert_eq!(canvas.get(x, y).unwrap(), ink);
                } else {
                    prop_assert_eq!(canvas.get(x, y).unwrap(), before.get(x, y).unwrap());
                }
            }
        }
    }

    /// Resize preserves every cell in the overlap of old and new
    /// bounds and defaults the rest.
    #[test]
    fn resize_preserves_the_overlap(
        cells in proptest::collection::vec(((0usize..10, 0usize..10), arb_cell()), 0..30),
        new_dims in (1usize..14, 1usize..14),
    ) {
        let mut canvas = Canvas::new(10, 10);
        for ((x, y), cell) in &cells {
            canvas.set(*x, *y, *cell).unwrap();
        }
        let before = canvas.clone();
        let (new_width, new_height) = new_dims;

        canvas.resize(new_width, new_height);

        for y in 0..new_height {
            for x in 0..new_width {
                let expected = if x < 10 && y < 10 {
                    before.get(x, y).unwrap()
                } else {
                    Cell::default()
                };
                prop_assert_eq!(canvas.get(x, y).unwrap(), expected);
            }
        }
    }

    /// A line always paints both endpoints and never leaves the
    /// bounding box of its endpoints.
    #[test]
    fn line_paints_endpoints_within_bounding_box(
        a in (0usize..12, 0usize..12),
        b in (0usize..12, 0usize..12),
    ) {
        let mut canvas = Canvas::new(12, 12);
        let mut history = History::new();
        let ink = Cell::new('*', PaletteColor::Green);

        line::draw_line(&mut canvas, &mut history, a.0, a.1, b.0, b.1, ink).unwrap();

        prop_assert_eq!(canvas.get(a.0, a.1).unwrap(), ink);
        prop_assert_eq!(canvas.get(b.0, b.1).unwrap(), ink);

        let (min_x, max_x) = (a.0.min(b.0), a.0.max(b.0));
        let (min_y, max_y) = (a.1.min(b.1), a.1.max(b.1));
        for y in 0..12 {
            for x in 0..12 {
                if canvas.get(x, y).unwrap() == ink {
                    prop_assert!(x >= min_x && x <= max_x);
                    prop_assert!(y >= min_y && y <= max_y);
                }
            }
        }
    }
}

/// Reference 4-connected region computation, independent of the fill
/// implementation under test.
fn reference_region(
    canvas: &Canvas,
    start: (usize, usize),
    target: Cell,
) -> HashSet<(usize, usize)> {
    let mut region = HashSet::new();
    let mut queue = VecDeque::from([start]);
    while let Some((x, y)) = queue.pop_front() {
        if region.contains(&(x, y)) {
            continue;
        }
        match canvas.get(x, y) {
            Ok(cell) if cell == target => {}
            _ => continue,
        }
        region.insert((x, y));
        queue.push_back((x + 1, y));
        queue.push_back((x, y + 1));
        if x > 0 {
            queue.push_back((x - 1, y));
        }
        if y > 0 {
            queue.push_back((x, y - 1));
        }
    }
    region
}
