//! Board model
//!
//! A rows × cols grid of cells, each holding an atom count and an owner.
//! Capacity is derived from position: corners hold 1, edges 2, interior 3.
//! A cell explodes once its count exceeds its capacity.

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// A single board cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Number of atoms in the cell
    pub count: u32,
    /// Owning player index (None when empty)
    pub owner: Option<usize>,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        count: 0,
        owner: None,
    };

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Orthogonal neighbor offsets, in emission order: up, down, left, right
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The game grid (row-major storage)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Callers validate dimensions (see `Settings::validate`).
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::EMPTY; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell at (row, col), if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.in_bounds(row, col) {
            Some(&self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if self.in_bounds(row, col) {
            let idx = self.index(row, col);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Maximum atoms a cell holds before exploding
    pub fn capacity(&self, row: usize, col: usize) -> u32 {
        let on_row_edge = row == 0 || row + 1 == self.rows;
        let on_col_edge = col == 0 || col + 1 == self.cols;
        match (on_row_edge, on_col_edge) {
            (true, true) => 1,
            (true, false) | (false, true) => 2,
            (false, false) => 3,
        }
    }

    /// Place one atom for `player`. Refused if out of bounds or owned by someone else.
    pub fn place(&mut self, row: usize, col: usize, player: usize) -> Result<(), MoveError> {
        let cell = self
            .get_mut(row, col)
            .ok_or(MoveError::OutOfBounds { row, col })?;
        match cell.owner {
            Some(owner) if owner != player => Err(MoveError::Occupied { row, col, owner }),
            _ => {
                cell.count += 1;
                cell.owner = Some(player);
                Ok(())
            }
        }
    }

    /// Add one atom and take ownership regardless of the previous owner
    /// (particle arrival). Out-of-bounds targets are ignored.
    pub fn deposit(&mut self, row: usize, col: usize, owner: usize) {
        if let Some(cell) = self.get_mut(row, col) {
            cell.count += 1;
            cell.owner = Some(owner);
        }
    }

    /// True when the cell holds more atoms than its capacity
    pub fn is_overflowed(&self, row: usize, col: usize) -> bool {
        self.get(row, col)
            .is_some_and(|cell| cell.count > self.capacity(row, col))
    }

    /// True when one more atom would make the cell explode
    pub fn is_critical(&self, row: usize, col: usize) -> bool {
        self.get(row, col)
            .is_some_and(|cell| cell.count > 0 && cell.count == self.capacity(row, col))
    }

    /// Reset a cell to empty
    pub fn clear(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.get_mut(row, col) {
            *cell = Cell::EMPTY;
        }
    }

    /// In-bounds orthogonal neighbors in emission order (up, down, left, right)
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.in_bounds(r, c).then_some((r, c))
        })
    }

    /// Iterate all cells as ((row, col), cell) in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / self.cols, i % self.cols), cell))
    }

    /// Atoms on the board per player
    pub fn orb_totals(&self, num_players: usize) -> Vec<u32> {
        let mut totals = vec![0; num_players];
        for cell in &self.cells {
            if let Some(owner) = cell.owner {
                if let Some(total) = totals.get_mut(owner) {
                    *total += cell.count;
                }
            }
        }
        totals
    }

    /// Total atoms on the board
    pub fn total_atoms(&self) -> u32 {
        self.cells.iter().map(|c| c.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }
}
