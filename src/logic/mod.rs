use crate::{data::Dimensions, model::Cell};

/// Value stored in a cell once a mine has been placed on it.
pub const MINE_SENTINEL: i32 = -999;

/// Most mines a cell can have around it.
pub const MAX_ADJACENT: i32 = 8;

const MINE_MARKER: char = '*';

/// Column indices of every mine marker in one row of a field.
pub fn mine_locations(row: &str) -> Vec<usize> {
    row.chars()
        .enumerate()
        .filter(|(_, c)| *c == MINE_MARKER)
        .map(|(i, _)| i)
        .collect()
}

/// Per-cell adjacent-mine counts for one field, built up one mine at a time.
///
/// Cells are stored row-major. A cell holds either [`MINE_SENTINEL`] or the number of
/// mines among its up to eight neighbours. Any negative value reads as a mine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborAccumulator {
    dimensions: Dimensions,
    cells: Vec<i32>,
}

impl NeighborAccumulator {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![0; dimensions.area()],
        }
    }

    /// Wraps existing row-major values, or `None` if their count doesn't match the area
    /// or a value is neither a mine (negative) nor a count in `0..=8`.
    pub fn from_values(dimensions: Dimensions, cells: Vec<i32>) -> Option<Self> {
        let valid = cells.iter().all(|value| *value <= MAX_ADJACENT);
        if valid && cells.len() == dimensions.area() {
            Some(Self { dimensions, cells })
        } else {
            None
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn index(&self, row: usize, col: usize) -> usize {
        col + row * self.dimensions.cols
    }

    pub fn value(&self, row: usize, col: usize) -> Option<i32> {
        if !self.dimensions.contains(row, col) {
            return None;
        }
        self.cells.get(self.index(row, col)).copied()
    }

    pub fn is_mine(&self, row: usize, col: usize) -> bool {
        self.value(row, col).is_some_and(|value| value < 0)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.value(row, col).and_then(|value| {
            if value < 0 {
                Some(Cell::Mine)
            } else {
                u8::try_from(value)
                    .ok()
                    .map(|adjacent| Cell::Count { adjacent })
            }
        })
    }

    /// Cells of one row, left to right. Empty if the row doesn't exist.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let cols = if row < self.dimensions.rows {
            self.dimensions.cols
        } else {
            0
        };
        (0..cols).filter_map(move |col| self.cell(row, col))
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|value| **value < 0).count()
    }

    /// Marks `(row, col)` as a mine and bumps the count of every neighbour that isn't one.
    ///
    /// Placing a mine where one already sits changes nothing, so the final grid doesn't
    /// depend on the order mines are placed in.
    ///
    /// # Panics
    /// Panics if `(row, col)` lies outside the field.
    pub fn place_mine(&mut self, row: usize, col: usize) {
        let Dimensions { rows, cols } = self.dimensions;
        assert!(
            self.dimensions.contains(row, col),
            "index out of bounds: ({row}, {col}) in a {rows}x{cols} field"
        );

        let index = self.index(row, col);
        if self.cells[index] < 0 {
            return;
        }

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let new_row = row as isize + dy;
                let new_col = col as isize + dx;

                if new_row >= 0
                    && new_row < rows as isize
                    && new_col >= 0
                    && new_col < cols as isize
                {
                    let adj_index = self.index(new_row as usize, new_col as usize);
                    // a neighbouring mine keeps its sentinel
                    if self.cells[adj_index] >= 0 {
                        self.cells[adj_index] += 1;
                    }
                }
            }
        }

        self.cells[index] = MINE_SENTINEL;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    const M: i32 = MINE_SENTINEL;

    fn grid(rows: usize, cols: usize, values: Vec<i32>) -> NeighborAccumulator {
        NeighborAccumulator::from_values(Dimensions::new(rows, cols), values).unwrap()
    }

    // ── Mine locations ──────────────────────────────────────────

    #[test]
    fn no_mines_in_row() {
        assert!(mine_locations(".....").is_empty());
        assert!(mine_locations("").is_empty());
    }

    #[test]
    fn single_mine() {
        assert_eq!(mine_locations("*"), vec![0]);
    }

    #[test]
    fn consecutive_mines_are_each_reported() {
        assert_eq!(mine_locations("**"), vec![0, 1]);
        assert_eq!(mine_locations(".***."), vec![1, 2, 3]);
    }

    #[test]
    fn mixed_row() {
        assert_eq!(mine_locations(".*.*..*"), vec![1, 3, 6]);
    }

    // ── Placing mines ───────────────────────────────────────────

    #[test]
    fn mine_in_the_middle() {
        let mut acc = NeighborAccumulator::new(Dimensions::new(3, 3));
        acc.place_mine(1, 1);
        assert_eq!(acc, grid(3, 3, vec![1, 1, 1, 1, M, 1, 1, 1, 1]));
    }

    #[test]
    fn mine_in_a_corner() {
        let mut acc = NeighborAccumulator::new(Dimensions::new(3, 3));
        acc.place_mine(0, 0);
        assert_eq!(acc, grid(3, 3, vec![M, 1, 0, 1, 1, 0, 0, 0, 0]));
    }

    #[test]
    fn mine_on_the_right_edge() {
        let mut acc = NeighborAccumulator::new(Dimensions::new(3, 3));
        acc.place_mine(1, 2);
        assert_eq!(acc, grid(3, 3, vec![0, 1, 1, 0, 1, M, 0, 1, 1]));
    }

    #[test]
    fn mine_on_the_bottom_edge() {
        let mut acc = NeighborAccumulator::new(Dimensions::new(3, 3));
        acc.place_mine(2, 1);
        assert_eq!(acc, grid(3, 3, vec![0, 0, 0, 1, 1, 1, 1, M, 1]));
    }

    #[test]
    fn mine_next_to_an_existing_mine() {
        #[rustfmt::skip]
        let mut acc = grid(5, 5, vec![
            0, 0, 0, 0, 0,
            1, 1, 1, 0, 0,
            1, M, 1, 0, 0,
            1, 1, 1, 0, 0,
            0, 0, 0, 0, 0,
        ]);
        acc.place_mine(3, 3);
        #[rustfmt::skip]
        let expected = grid(5, 5, vec![
            0, 0, 0, 0, 0,
            1, 1, 1, 0, 0,
            1, M, 2, 1, 1,
            1, 1, 2, M, 1,
            0, 0, 1, 1, 1,
        ]);
        assert_eq!(acc, expected);
    }

    #[test]
    fn adjacent_mines_keep_their_sentinel() {
        let mut acc = NeighborAccumulator::new(Dimensions::new(1, 3));
        acc.place_mine(0, 0);
        acc.place_mine(0, 1);
        acc.place_mine(0, 2);
        assert_eq!(acc.value(0, 0), Some(MINE_SENTINEL));
        assert_eq!(acc.value(0, 1), Some(MINE_SENTINEL));
        assert_eq!(acc.value(0, 2), Some(MINE_SENTINEL));
        assert_eq!(acc.mine_count(), 3);
    }

    #[test]
    fn placing_the_same_mine_twice_is_a_no_op() {
        let mut once = NeighborAccumulator::new(Dimensions::new(3, 3));
        once.place_mine(1, 1);
        let mut twice = once.clone();
        twice.place_mine(1, 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn single_cell_field() {
        let mut acc = NeighborAccumulator::new(Dimensions::new(1, 1));
        acc.place_mine(0, 0);
        assert_eq!(acc.cell(0, 0), Some(Cell::Mine));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn placing_outside_the_field_panics() {
        let mut acc = NeighborAccumulator::new(Dimensions::new(2, 2));
        acc.place_mine(2, 0);
    }

    #[test]
    fn values_must_be_mines_or_counts() {
        let dims = Dimensions::new(1, 1);
        assert!(NeighborAccumulator::from_values(dims, vec![9]).is_none());
        assert!(NeighborAccumulator::from_values(dims, vec![300]).is_none());
        assert!(NeighborAccumulator::from_values(dims, vec![8]).is_some());
        assert!(NeighborAccumulator::from_values(dims, vec![-400]).is_some());
        assert!(NeighborAccumulator::from_values(dims, vec![0, 0]).is_none());
    }

    #[test]
    fn reads_outside_the_field_are_none() {
        let acc = NeighborAccumulator::new(Dimensions::new(2, 3));
        assert_eq!(acc.value(0, 3), None);
        assert_eq!(acc.cell(2, 0), None);
        assert_eq!(acc.row_cells(5).count(), 0);
        assert_eq!(acc.row_cells(1).count(), 3);
    }

    // ── Properties ──────────────────────────────────────────────

    fn brute_force_count(
        dims: Dimensions,
        mines: &HashSet<(usize, usize)>,
        r: usize,
        c: usize,
    ) -> i32 {
        let mut count = 0;
        for nr in r.saturating_sub(1)..=(r + 1).min(dims.rows - 1) {
            for nc in c.saturating_sub(1)..=(c + 1).min(dims.cols - 1) {
                if (nr, nc) != (r, c) && mines.contains(&(nr, nc)) {
                    count += 1;
                }
            }
        }
        count
    }

    fn arb_placements() -> impl Strategy<Value = (Dimensions, Vec<(usize, usize)>)> {
        (1usize..9, 1usize..9).prop_flat_map(|(rows, cols)| {
            (
                Just(Dimensions::new(rows, cols)),
                prop::collection::vec((0..rows, 0..cols), 0..30),
            )
        })
    }

    proptest! {
        #[test]
        fn locations_are_increasing_and_complete(row in "[.*]{0,40}") {
            let found = mine_locations(&row);
            prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(found.len(), row.matches('*').count());
            let bytes = row.as_bytes();
            for i in found {
                prop_assert_eq!(bytes[i], b'*');
            }
        }

        #[test]
        fn placement_order_does_not_matter(
            (dims, placements, shuffled) in arb_placements().prop_flat_map(|(dims, placements)| {
                let shuffled = Just(placements.clone()).prop_shuffle();
                (Just(dims), Just(placements), shuffled)
            })
        ) {
            let mut forward = NeighborAccumulator::new(dims);
            for &(r, c) in &placements {
                forward.place_mine(r, c);
            }
            let mut other = NeighborAccumulator::new(dims);
            for &(r, c) in &shuffled {
                other.place_mine(r, c);
            }
            prop_assert_eq!(forward, other);
        }

        #[test]
        fn counts_match_a_brute_force_scan((dims, placements) in arb_placements()) {
            let mut acc = NeighborAccumulator::new(dims);
            for &(r, c) in &placements {
                acc.place_mine(r, c);
            }
            let mines: HashSet<_> = placements.into_iter().collect();
            prop_assert_eq!(acc.mine_count(), mines.len());

            for r in 0..dims.rows {
                for c in 0..dims.cols {
                    let value = acc.value(r, c).unwrap();
                    if mines.contains(&(r, c)) {
                        prop_assert_eq!(value, MINE_SENTINEL);
                    } else {
                        prop_assert!((0..=8).contains(&value));
                        prop_assert_eq!(value, brute_force_count(dims, &mines, r, c));
                    }
                }
            }
        }
    }
}
