use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Game-state engine for a single Minesweeper session.
///
/// A board starts fully hidden and mine-free; `seed_mines` runs exactly once,
/// on the player's first reveal action, and fixes the mine layout and the
/// per-cell adjacency counts for the rest of the session. Afterwards only
/// `is_revealed`, the flags, and the `exploded`/`won` latches mutate.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    grid: Array2<Cell>,
    seeded: bool,
    exploded: bool,
    won: bool,
}

impl Board {
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = BoardConfig::new((rows, cols), mines)?;
        Ok(Self {
            config,
            grid: Array2::default(config.size.to_nd_index()),
            seeded: false,
            exploded: false,
            won: false,
        })
    }

    pub fn rows(&self) -> Coord {
        self.config.size.0
    }

    pub fn cols(&self) -> Coord {
        self.config.size.1
    }

    pub fn num_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn is_exploded(&self) -> bool {
        self.exploded
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Read-only view of the grid for rendering layers.
    ///
    /// Note that a struck mine is never marked revealed; renderers display it
    /// off `is_exploded`.
    pub fn grid(&self) -> &Array2<Cell> {
        &self.grid
    }

    pub fn cell_at(&self, row: Coord, col: Coord) -> Result<Cell> {
        let coords = self.validate_coords((row, col))?;
        Ok(self.grid[coords.to_nd_index()])
    }

    /// Places mines and computes every non-mine cell's `mines_touching`.
    ///
    /// `(row, col)` is the player's first reveal action; the seeder keeps
    /// mines out of the 3x3 value-filtered block around it. Fails with
    /// `AlreadySeeded` on a second call rather than re-randomizing a
    /// partially revealed board.
    pub fn seed_mines(
        &mut self,
        seeder: &mut impl MineSeeder,
        row: Coord,
        col: Coord,
    ) -> Result<()> {
        let coords = self.validate_coords((row, col))?;
        if self.seeded {
            return Err(BoardError::AlreadySeeded);
        }

        let mask = seeder.place_mines(self.config, coords)?;
        for (idx, &is_mine) in mask.indexed_iter() {
            self.grid[idx].is_mine = is_mine;
        }

        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let idx = (row, col).to_nd_index();
                if self.grid[idx].is_mine {
                    continue;
                }
                self.grid[idx].mines_touching = Some(self.adjacent_mines((row, col)));
            }
        }

        self.seeded = true;
        Ok(())
    }

    /// Reveals a cell, cascading across the contiguous zero region when the
    /// cell touches no mines.
    ///
    /// Revealing a mine latches `exploded`; the struck cell itself stays
    /// unrevealed. Revealing an already-revealed cell is a no-op.
    pub fn reveal_cell(&mut self, row: Coord, col: Coord) -> Result<RevealOutcome> {
        let coords = self.validate_coords((row, col))?;
        if !self.seeded {
            return Err(BoardError::NotSeeded);
        }

        let cell = self.grid[coords.to_nd_index()];
        if cell.is_mine {
            self.exploded = true;
            return Ok(RevealOutcome::Exploded);
        }
        if cell.is_revealed {
            return Ok(RevealOutcome::NoChange);
        }

        // Iterative flood fill. The already-revealed guard on pop makes
        // revisits no-ops, so each cell is expanded at most once and the
        // whole call is bounded by the grid size.
        let mut to_visit = Vec::from([coords]);
        while let Some(visit_coords) = to_visit.pop() {
            let idx = visit_coords.to_nd_index();
            if self.grid[idx].is_revealed {
                continue;
            }
            self.grid[idx].is_revealed = true;

            if self.grid[idx].is_zero() {
                // Neighbors of a zero cell are never mines.
                to_visit.extend(
                    self.grid
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| !self.grid[pos.to_nd_index()].is_revealed),
                );
            }
        }

        Ok(RevealOutcome::Revealed)
    }

    /// Count of mine-bearing neighbors of a cell. Pure query.
    pub fn count_adjacent_mines(&self, row: Coord, col: Coord) -> Result<u8> {
        let coords = self.validate_coords((row, col))?;
        Ok(self.adjacent_mines(coords))
    }

    /// Count-only win check, as the classic rule states it: the game is won
    /// once the number of unrevealed cells equals the number of mines.
    ///
    /// Mines are never marked revealed by this engine, so the unrevealed set
    /// always contains every mine and the count comparison is equivalent to
    /// the strict `is_cleared` check. Both are exposed; `check_if_won` is
    /// the one that latches `won`.
    pub fn check_if_won(&mut self) -> bool {
        let unrevealed = self.grid.iter().filter(|cell| !cell.is_revealed).count();
        if unrevealed == self.config.mines as usize {
            self.won = true;
        }
        self.won
    }

    /// Strict win predicate: every non-mine cell is revealed. Does not latch.
    pub fn is_cleared(&self) -> bool {
        self.grid
            .iter()
            .all(|cell| cell.is_mine || cell.is_revealed)
    }

    /// Cycles the player marker on a cell. Storage only: flags never gate
    /// reveals or the win check.
    pub fn toggle_flag(&mut self, row: Coord, col: Coord) -> Result<Flag> {
        let coords = self.validate_coords((row, col))?;
        let cell = &mut self.grid[coords.to_nd_index()];
        cell.flag = cell.flag.cycled();
        Ok(cell.flag)
    }

    /// Fully independent copy of the session state, for speculative
    /// exploration. `Cell` is plain data, so cloning the array shares
    /// nothing with the original.
    pub fn make_copy(&self) -> Self {
        Self {
            config: self.config,
            grid: self.grid.clone(),
            seeded: self.seeded,
            exploded: self.exploded,
            won: self.won,
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.config.size;
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds)
        }
    }

    fn adjacent_mines(&self, coords: Coord2) -> u8 {
        self.grid
            .iter_neighbors(coords)
            .filter(|&pos| self.grid[pos.to_nd_index()].is_mine)
            .count()
            .try_into()
            .unwrap()
    }
}
