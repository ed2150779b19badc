//! Grid data model: block matrix, gravity, combo detection.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Smallest playable grid in either axis.
pub const MIN_DIM: usize = 3;

/// A run must span at least this many blocks to count as a combo.
pub const COMBO_LEN: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid too small: {width}x{height} (minimum {MIN_DIM}x{MIN_DIM})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("cell ({x}, {y}) out of bounds")]
    OutOfBounds { x: usize, y: usize },
}

/// One coloured cell at a fixed position. Equality is structural:
/// position and colour both have to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub x: usize,
    pub y: usize,
    pub color: u8,
}

impl Block {
    pub fn pos(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}

/// Axis a combo lies on, derived from its member positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Irregular,
}

/// A non-empty ordered group of same-coloured blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combo {
    blocks: Vec<Block>,
    color: u8,
}

impl Combo {
    /// Build from bare positions and a single non-zero colour.
    pub fn from_positions(positions: impl IntoIterator<Item = (usize, usize)>, color: u8) -> Self {
        let blocks: Vec<Block> = positions
            .into_iter()
            .map(|(x, y)| Block { x, y, color })
            .collect();
        debug_assert!(!blocks.is_empty() && color != 0);
        Self { blocks, color }
    }

    /// Build from existing blocks; the colour is taken from the first
    /// block and the rest are assumed consistent.
    #[allow(dead_code)]
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        debug_assert!(!blocks.is_empty());
        let color = blocks[0].color;
        Self { blocks, color }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[allow(dead_code)]
    pub fn color(&self) -> u8 {
        self.color
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn first(&self) -> Block {
        self.blocks[0]
    }

    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.blocks.iter().map(Block::pos)
    }

    /// Number of blocks (position and colour) shared with another combo.
    pub fn shared_blocks(&self, other: &Combo) -> usize {
        self.blocks
            .iter()
            .filter(|b| other.blocks.contains(b))
            .count()
    }

    pub fn orientation(&self) -> Orientation {
        let first = self.blocks[0];
        if self.blocks.iter().all(|b| b.y == first.y) {
            Orientation::Horizontal
        } else if self.blocks.iter().all(|b| b.x == first.x) {
            Orientation::Vertical
        } else {
            Orientation::Irregular
        }
    }
}

/// Rectangular playfield of symbol codes, column-major. `0` is empty,
/// `1..nb_symbols-1` are block colours. y = 0 is the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    /// Number of distinct codes, the empty code included.
    pub nb_symbols: u8,
    cells: Vec<u8>,
}

impl Grid {
    /// Generate a fresh grid. Each column is filled bottom-up to a random
    /// height (the top row always stays empty) with colours that never
    /// form a combo.
    pub fn new(
        width: usize,
        height: usize,
        nb_symbols: u8,
        rng: &mut ChaCha8Rng,
    ) -> Result<Self, GridError> {
        if width < MIN_DIM || height < MIN_DIM {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let mut grid = Self {
            width,
            height,
            nb_symbols,
            cells: vec![0; width * height],
        };
        grid.generate(rng);
        Ok(grid)
    }

    /// Wrap caller-supplied column data (`data[x][y]`, y = 0 on top).
    pub fn from_data(data: &[Vec<u8>], nb_symbols: u8) -> Result<Self, GridError> {
        let width = data.len();
        let height = data.first().map_or(0, Vec::len);
        if width < MIN_DIM || height < MIN_DIM {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let mut cells = Vec::with_capacity(width * height);
        for column in data {
            debug_assert_eq!(column.len(), height);
            cells.extend_from_slice(column);
        }
        Ok(Self {
            width,
            height,
            nb_symbols,
            cells,
        })
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> u8 {
        self.cells[x * self.height + y]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, val: u8) {
        self.cells[x * self.height + y] = val;
    }

    /// Bounds-checked cell accessor for external readers.
    pub fn cell(&self, x: usize, y: usize) -> Result<u8, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(self.at(x, y))
    }

    /// Empty a cell (combo resolution).
    pub fn clear_cell(&mut self, x: usize, y: usize) {
        debug_assert!(x < self.width && y < self.height);
        self.set(x, y, 0);
    }

    fn generate(&mut self, rng: &mut ChaCha8Rng) {
        for x in 0..self.width {
            let top = rng.random_range(0..self.height) + 1;
            for y in (top..self.height).rev() {
                let block = self.gen_block(x, y, rng);
                self.set(x, y, block);
            }
        }
    }

    /// Pick a random colour for `(x, y)` that does not complete a 3-run
    /// with the two cells below or the two cells to the left. Later cells
    /// only ever reference already-filled neighbours, so this local check
    /// keeps the whole grid combo-free.
    fn gen_block(&self, x: usize, y: usize, rng: &mut ChaCha8Rng) -> u8 {
        loop {
            let color = rng.random_range(1..self.nb_symbols);
            let vertical = y + 2 < self.height
                && self.at(x, y + 1) == color
                && self.at(x, y + 2) == color;
            let horizontal =
                x >= 2 && self.at(x - 1, y) == color && self.at(x - 2, y) == color;
            if !vertical && !horizontal {
                return color;
            }
        }
    }

    /// Exchange `(x, y)` and `(x+1, y)`. Pure data mutation; the caller
    /// guarantees `x + 1 < width`.
    pub fn swap(&mut self, x: usize, y: usize) {
        debug_assert!(x + 1 < self.width && y < self.height);
        let left = self.at(x, y);
        let right = self.at(x + 1, y);
        self.set(x, y, right);
        self.set(x + 1, y, left);
    }

    /// An empty cell with at least one non-empty cell strictly above it.
    pub fn is_hole(&self, x: usize, y: usize) -> bool {
        self.at(x, y) == 0 && (0..y).any(|j| self.at(x, j) != 0)
    }

    /// Shift everything above `(x, y)` down one row and empty the top.
    pub fn fall_step_pos(&mut self, x: usize, y: usize) {
        for j in (0..y).rev() {
            let above = self.at(x, j);
            self.set(x, j + 1, above);
        }
        self.set(x, 0, 0);
    }

    fn columns(&self, focus: Option<&[usize]>) -> Vec<usize> {
        match focus {
            Some(cols) => cols.to_vec(),
            None => (0..self.width).collect(),
        }
    }

    /// One gravity step: drop the lowest hole of every targeted column.
    /// Returns true while some targeted column still needs another step.
    /// Driver API for untimed settling; the game itself steps columns
    /// through `fall_step_pos`.
    #[allow(dead_code)]
    pub fn fall_step(&mut self, focus: Option<&[usize]>) -> bool {
        let mut more = false;
        for x in self.columns(focus) {
            for y in (0..self.height).rev() {
                if self.is_hole(x, y) {
                    self.fall_step_pos(x, y);
                    if (0..y).any(|j| self.at(x, j) != 0) {
                        more = true;
                    }
                    break;
                }
            }
        }
        more
    }

    /// Apply gravity until no targeted column has a hole left.
    #[allow(dead_code)]
    pub fn fall_instant(&mut self, focus: Option<&[usize]>) {
        for x in self.columns(focus) {
            for y in (0..self.height).rev() {
                while self.is_hole(x, y) {
                    self.fall_step_pos(x, y);
                }
            }
        }
    }

    /// The lowest empty cell of each targeted column, reported only when
    /// it is a hole. All cells below it are filled, so it is the one
    /// eligible to receive a drop on the next step.
    pub fn lower_holes(&self, focus: Option<&[usize]>) -> Vec<(usize, usize)> {
        let mut holes = Vec::new();
        for x in self.columns(focus) {
            for y in (0..self.height).rev() {
                if self.at(x, y) == 0 {
                    if self.is_hole(x, y) {
                        holes.push((x, y));
                    }
                    break;
                }
            }
        }
        holes
    }

    /// Maximal non-zero runs of length >= COMBO_LEN in a value sequence,
    /// as (start index, length, colour).
    fn scan_runs(values: impl Iterator<Item = u8>) -> Vec<(usize, usize, u8)> {
        let mut runs = Vec::new();
        let mut start = 0;
        let mut current = 0u8;
        let mut len = 0;
        for (i, val) in values.enumerate() {
            if val == current {
                len += 1;
                continue;
            }
            if current != 0 && len >= COMBO_LEN {
                runs.push((start, len, current));
            }
            start = i;
            current = val;
            len = 1;
        }
        if current != 0 && len >= COMBO_LEN {
            runs.push((start, len, current));
        }
        runs
    }

    /// Combos in one row.
    pub fn combos_line(&self, y: usize) -> Vec<Combo> {
        Self::scan_runs((0..self.width).map(|x| self.at(x, y)))
            .into_iter()
            .map(|(start, len, color)| {
                Combo::from_positions((start..start + len).map(|x| (x, y)), color)
            })
            .collect()
    }

    /// Combos in one column.
    pub fn combos_column(&self, x: usize) -> Vec<Combo> {
        Self::scan_runs((0..self.height).map(|y| self.at(x, y)))
            .into_iter()
            .map(|(start, len, color)| {
                Combo::from_positions((start..start + len).map(|y| (x, y)), color)
            })
            .collect()
    }

    /// Whole-grid scan: every maximal run of length >= 3, columns first,
    /// then lines. A cell may belong to one combo per axis. The running
    /// game only ever needs the local scans.
    #[allow(dead_code)]
    pub fn combos_all(&self) -> Vec<Combo> {
        let mut combos = Vec::new();
        for x in 0..self.width {
            combos.extend(self.combos_column(x));
        }
        for y in 0..self.height {
            combos.extend(self.combos_line(y));
        }
        combos
    }

    /// The maximal same-colour run through `(x, y)` along its row, if it
    /// qualifies as a combo. O(run length).
    pub fn combo_horizontal_around(&self, x: usize, y: usize) -> Option<Combo> {
        let color = self.at(x, y);
        if color == 0 {
            return None;
        }
        let mut lo = x;
        while lo > 0 && self.at(lo - 1, y) == color {
            lo -= 1;
        }
        let mut hi = x;
        while hi + 1 < self.width && self.at(hi + 1, y) == color {
            hi += 1;
        }
        (hi - lo + 1 >= COMBO_LEN)
            .then(|| Combo::from_positions((lo..=hi).map(|i| (i, y)), color))
    }

    /// The maximal same-colour run through `(x, y)` along its column, if
    /// it qualifies as a combo.
    pub fn combo_vertical_around(&self, x: usize, y: usize) -> Option<Combo> {
        let color = self.at(x, y);
        if color == 0 {
            return None;
        }
        let mut lo = y;
        while lo > 0 && self.at(x, lo - 1) == color {
            lo -= 1;
        }
        let mut hi = y;
        while hi + 1 < self.height && self.at(x, hi + 1) == color {
            hi += 1;
        }
        (hi - lo + 1 >= COMBO_LEN)
            .then(|| Combo::from_positions((lo..=hi).map(|j| (x, j)), color))
    }

    /// Contiguous non-empty run (any colours) through `(x, y)` in its
    /// column. Empty range when the cell itself is empty.
    pub fn block_range_vertical_around(&self, x: usize, y: usize) -> std::ops::Range<usize> {
        if self.at(x, y) == 0 {
            return 0..0;
        }
        let mut lo = y;
        while lo > 0 && self.at(x, lo - 1) != 0 {
            lo -= 1;
        }
        let mut hi = y;
        while hi + 1 < self.height && self.at(x, hi + 1) != 0 {
            hi += 1;
        }
        lo..hi + 1
    }

    /// A swap only changes `(x, y)` and `(x+1, y)`, so four local scans
    /// suffice. The second horizontal scan is skipped when both cells
    /// hold the same colour (it would find the same run twice).
    pub fn combos_after_swap(&self, x: usize, y: usize) -> Vec<Combo> {
        let mut candidates = vec![
            self.combo_horizontal_around(x, y),
            self.combo_vertical_around(x, y),
            self.combo_vertical_around(x + 1, y),
        ];
        if self.at(x + 1, y) != self.at(x, y) {
            candidates.push(self.combo_horizontal_around(x + 1, y));
        }
        candidates.into_iter().flatten().collect()
    }

    /// After a column settles only the moved cells can have formed new
    /// combos: scan vertically through the landing cell and horizontally
    /// through every row of the block run above it.
    pub fn combos_after_fall(&self, former_hole: (usize, usize)) -> Vec<Combo> {
        let (x, y) = former_hole;
        let mut combos: Vec<Combo> = self.combo_vertical_around(x, y).into_iter().collect();
        for j in self.block_range_vertical_around(x, y) {
            combos.extend(self.combo_horizontal_around(x, j));
        }
        combos
    }

    /// Uniformly random non-empty cell, by counting then indexing.
    pub fn random_block(&self, rng: &mut ChaCha8Rng) -> Option<(usize, usize)> {
        let total = self.cells.iter().filter(|&&c| c != 0).count();
        if total == 0 {
            return None;
        }
        let chosen = rng.random_range(0..total);
        let mut current = 0;
        for x in 0..self.width {
            for y in 0..self.height {
                if self.at(x, y) != 0 {
                    if current == chosen {
                        return Some((x, y));
                    }
                    current += 1;
                }
            }
        }
        unreachable!("chosen index within counted blocks")
    }

    /// A horizontally valid swap position derived from a random block:
    /// edge columns swap inward, inner columns pick a side at random.
    pub fn random_swap(&self, rng: &mut ChaCha8Rng) -> Option<(usize, usize)> {
        let (x, y) = self.random_block(rng)?;
        if x == 0 {
            Some((x, y))
        } else if x == self.width - 1 {
            Some((x - 1, y))
        } else {
            Some((x - rng.random_range(0..2usize), y))
        }
    }

    /// Total non-empty cells. Used by tests and the HUD.
    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// Row-major literals read like the screen; convert to columns.
    fn grid_from_rows(rows: &[&[u8]], nb_symbols: u8) -> Grid {
        let width = rows[0].len();
        let data: Vec<Vec<u8>> = (0..width)
            .map(|x| rows.iter().map(|row| row[x]).collect())
            .collect();
        Grid::from_data(&data, nb_symbols).unwrap()
    }

    #[test]
    fn rejects_small_dimensions() {
        let err = Grid::new(2, 10, 5, &mut rng(0)).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDimensions {
                width: 2,
                height: 10
            }
        );
        assert!(Grid::new(10, 2, 5, &mut rng(0)).is_err());
        assert!(Grid::from_data(&[vec![0; 3], vec![0; 3]], 5).is_err());
    }

    #[test]
    fn cell_accessor_bounds() {
        let grid = Grid::new(5, 5, 5, &mut rng(1)).unwrap();
        assert!(grid.cell(4, 4).is_ok());
        assert_eq!(
            grid.cell(5, 0).unwrap_err(),
            GridError::OutOfBounds { x: 5, y: 0 }
        );
    }

    #[test]
    fn fresh_grids_have_no_combos() {
        for seed in 0..16 {
            let grid = Grid::new(15, 20, 5, &mut rng(seed)).unwrap();
            assert!(
                grid.combos_all().is_empty(),
                "seed {seed} spawned a combo"
            );
            // Top row stays empty so falls always have headroom.
            for x in 0..grid.width {
                assert_eq!(grid.cell(x, 0).unwrap(), 0);
            }
        }
    }

    #[test]
    fn swap_is_an_involution() {
        let mut grid = Grid::new(8, 8, 5, &mut rng(3)).unwrap();
        let original = grid.clone();
        for y in 0..grid.height {
            for x in 0..grid.width - 1 {
                grid.swap(x, y);
                grid.swap(x, y);
            }
        }
        assert_eq!(grid, original);
    }

    #[test]
    fn fall_instant_is_idempotent() {
        let mut grid = grid_from_rows(
            &[
                &[0, 2, 0, 0],
                &[1, 0, 0, 3],
                &[0, 0, 2, 0],
                &[2, 1, 0, 1],
            ],
            5,
        );
        grid.fall_instant(None);
        let settled = grid.clone();
        grid.fall_instant(None);
        assert_eq!(grid, settled);
        assert!(grid.lower_holes(None).is_empty());
    }

    #[test]
    fn fall_step_count_matches_holes() {
        // Column 0 holds one block over two holes: exactly two steps.
        let mut grid = grid_from_rows(
            &[
                &[1, 0, 0],
                &[0, 0, 0],
                &[0, 0, 0],
            ],
            5,
        );
        assert!(grid.fall_step(Some(&[0])));
        assert!(!grid.fall_step(Some(&[0])));
        assert_eq!(grid.cell(0, 2).unwrap(), 1);
        assert!(grid.lower_holes(Some(&[0])).is_empty());
        // Settled: a further step reports nothing to do.
        assert!(!grid.fall_step(Some(&[0])));
    }

    #[test]
    fn lower_holes_reports_lowest_empty_only() {
        // Column 0: hole under the stack. Column 1: empty cell with
        // nothing above it is not a hole. Column 2: full.
        let grid = grid_from_rows(
            &[
                &[1, 0, 1],
                &[0, 0, 2],
                &[2, 0, 3],
                &[0, 0, 1],
            ],
            5,
        );
        assert_eq!(grid.lower_holes(None), vec![(0, 3)]);
        assert_eq!(grid.lower_holes(Some(&[1])), vec![]);
    }

    #[test]
    fn local_scans_agree_with_whole_grid() {
        let grid = grid_from_rows(
            &[
                &[4, 0, 2, 0, 0],
                &[5, 0, 3, 2, 2],
                &[6, 0, 3, 1, 1],
                &[3, 0, 3, 1, 1],
            ],
            7,
        );
        let all = grid.combos_all();
        // Vertical 3-run of colour 3 in column 2.
        let vertical = grid.combo_vertical_around(2, 2).unwrap();
        assert_eq!(vertical.color(), 3);
        assert_eq!(
            vertical.positions().collect::<Vec<_>>(),
            vec![(2, 1), (2, 2), (2, 3)]
        );
        assert!(all.contains(&vertical));
        // Every combo the whole-grid scan finds is reproduced locally.
        for combo in &all {
            let Block { x, y, .. } = combo.first();
            let local = match combo.orientation() {
                Orientation::Horizontal => grid.combo_horizontal_around(x, y),
                Orientation::Vertical => grid.combo_vertical_around(x, y),
                Orientation::Irregular => None,
            };
            assert_eq!(local.as_ref(), Some(combo));
        }
    }

    #[test]
    fn combo_around_empty_cell_is_none() {
        let grid = grid_from_rows(
            &[
                &[0, 0, 0],
                &[1, 1, 1],
                &[2, 2, 2],
            ],
            5,
        );
        assert!(grid.combo_horizontal_around(1, 0).is_none());
        assert!(grid.combo_vertical_around(1, 0).is_none());
        assert!(grid.combo_horizontal_around(0, 1).is_some());
    }

    #[test]
    fn combos_after_swap_scans_both_cells() {
        // Swapping pulls a 2 into column 0, completing a vertical run
        // through the left cell.
        let mut grid = grid_from_rows(
            &[
                &[0, 0, 0, 0],
                &[3, 2, 1, 1],
                &[2, 4, 3, 4],
                &[2, 1, 4, 3],
            ],
            5,
        );
        grid.swap(0, 1);
        let combos = grid.combos_after_swap(0, 1);
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].color(), 2);
        assert_eq!(combos[0].orientation(), Orientation::Vertical);

        // The right cell's own row run is found even though the left
        // cell is not part of it.
        let mut grid2 = grid_from_rows(
            &[
                &[0, 0, 0, 0],
                &[2, 3, 2, 2],
                &[1, 4, 1, 4],
                &[4, 1, 4, 1],
            ],
            5,
        );
        grid2.swap(0, 1);
        let combos = grid2.combos_after_swap(0, 1);
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].color(), 2);
        assert_eq!(combos[0].orientation(), Orientation::Horizontal);
        assert_eq!(
            combos[0].positions().collect::<Vec<_>>(),
            vec![(1, 1), (2, 1), (3, 1)]
        );
    }

    #[test]
    fn combos_after_fall_covers_moved_cells() {
        let grid = grid_from_rows(
            &[
                &[0, 0, 0],
                &[2, 0, 0],
                &[1, 1, 1],
            ],
            5,
        );
        // Column 0 just settled at (0, 2): the horizontal run through the
        // landing cell must be reported.
        let combos = grid.combos_after_fall((0, 2));
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].color(), 1);
    }

    // Scenario from the original test suite: 6-wide grid, settle, swap at
    // (2, 1), settle column 2, then a whole-grid scan must find combos
    // whose clearing strictly reduces the block count.
    #[test]
    fn swap_and_fall_scenario() {
        let mut grid = grid_from_rows(
            &[
                &[3, 4, 2, 2, 3, 4],
                &[3, 0, 1, 4, 0, 3],
                &[3, 2, 0, 2, 0, 3],
                &[1, 1, 0, 2, 4, 3],
            ],
            5,
        );
        grid.fall_instant(None);
        grid.swap(2, 1);
        grid.fall_instant(Some(&[2]));

        let combos = grid.combos_all();
        assert!(!combos.is_empty());
        let before = grid.block_count();
        let positions: std::collections::HashSet<(usize, usize)> =
            combos.iter().flat_map(Combo::positions).collect();
        for &(x, y) in &positions {
            grid.clear_cell(x, y);
        }
        assert!(grid.block_count() < before);
        assert_eq!(grid.block_count(), before - positions.len());
    }

    #[test]
    fn random_block_and_swap_stay_in_bounds() {
        let mut r = rng(7);
        let grid = Grid::new(6, 6, 5, &mut r).unwrap();
        for _ in 0..64 {
            let (x, y) = grid.random_block(&mut r).unwrap();
            assert_ne!(grid.cell(x, y).unwrap(), 0);
            let (sx, sy) = grid.random_swap(&mut r).unwrap();
            assert!(sx + 1 < grid.width);
            assert!(sy < grid.height);
        }
        let empty = Grid::from_data(&[vec![0; 3], vec![0; 3], vec![0; 3]], 5).unwrap();
        assert!(empty.random_block(&mut r).is_none());
    }

    #[test]
    fn combo_orientation_and_equality() {
        let horizontal = Combo::from_positions([(0, 1), (1, 1), (2, 1)], 2);
        assert_eq!(horizontal.orientation(), Orientation::Horizontal);
        let vertical = Combo::from_positions([(4, 0), (4, 1), (4, 2)], 3);
        assert_eq!(vertical.orientation(), Orientation::Vertical);
        let irregular = Combo::from_blocks(vec![
            Block { x: 0, y: 0, color: 1 },
            Block { x: 1, y: 1, color: 1 },
            Block { x: 2, y: 0, color: 1 },
        ]);
        assert_eq!(irregular.orientation(), Orientation::Irregular);
        assert_eq!(irregular.color(), 1);

        let same = Combo::from_positions([(0, 1), (1, 1), (2, 1)], 2);
        assert_eq!(horizontal, same);
        let other_color = Combo::from_positions([(0, 1), (1, 1), (2, 1)], 3);
        assert_ne!(horizontal, other_color);
        assert_eq!(horizontal.shared_blocks(&same), 3);
        assert_eq!(horizontal.shared_blocks(&other_color), 0);
    }
}
