use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::*;

/// Mine-placement strategy. Swapping the implementation is the seam for
/// deterministic tests and for replaying a known layout.
pub trait MineSeeder {
    fn place_mines(&mut self, config: BoardConfig, first_click: Coord2) -> Result<Array2<bool>>;
}

/// Uniform rejection-sampling placement that keeps the 3x3 block around the
/// first click free of mines.
///
/// The exclusion is a coordinate-value filter applied per axis (row within
/// one of the click row, col within one of the click col), not a neighbor
/// computation; near an edge the block simply clips to the board.
#[derive(Clone, Debug)]
pub struct RandomMineSeeder<R = SmallRng> {
    rng: R,
}

impl RandomMineSeeder<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomMineSeeder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

fn in_safe_zone((center_row, center_col): Coord2, (row, col): Coord2) -> bool {
    let row_near = (i32::from(row) - i32::from(center_row)).abs() <= 1;
    let col_near = (i32::from(col) - i32::from(center_col)).abs() <= 1;
    row_near && col_near
}

fn safe_zone_cells((rows, cols): Coord2, (center_row, center_col): Coord2) -> CellCount {
    let rows_covered = (0..rows)
        .filter(|&row| (i32::from(row) - i32::from(center_row)).abs() <= 1)
        .count() as CellCount;
    let cols_covered = (0..cols)
        .filter(|&col| (i32::from(col) - i32::from(center_col)).abs() <= 1)
        .count() as CellCount;
    rows_covered * cols_covered
}

impl<R: Rng> MineSeeder for RandomMineSeeder<R> {
    fn place_mines(&mut self, config: BoardConfig, first_click: Coord2) -> Result<Array2<bool>> {
        let (rows, cols) = config.size;

        // Rejection sampling never terminates when the exclusion block
        // leaves fewer free cells than mines, so refuse up front.
        let eligible = config.total_cells() - safe_zone_cells(config.size, first_click);
        if config.mines > eligible {
            return Err(BoardError::TooManyMines);
        }

        let mut mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut remaining = config.mines;
        while remaining > 0 {
            let coords = (
                self.rng.random_range(0..rows),
                self.rng.random_range(0..cols),
            );
            if mask[coords.to_nd_index()] || in_safe_zone(first_click, coords) {
                continue;
            }
            mask[coords.to_nd_index()] = true;
            remaining -= 1;
        }

        // double check mine count
        let placed = mask.iter().filter(|&&is_mine| is_mine).count();
        if placed != config.mines as usize {
            log::warn!(
                "Seeded mine count mismatch, actual: {}, requested: {}",
                placed,
                config.mines
            );
        }
        Ok(mask)
    }
}
