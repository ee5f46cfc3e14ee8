//! Pixel layout of the board
//!
//! Particles travel in pixel space between cell centers, so the simulation
//! needs the cell size. Pixel → cell lookup is a front-end helper.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Square-cell layout anchored at the origin (top-left)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub cell_size: f32,
}

impl Layout {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Center of a cell in pixels (x from column, y from row)
    #[inline]
    pub fn center(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            col as f32 * self.cell_size + self.cell_size / 2.0,
            row as f32 * self.cell_size + self.cell_size / 2.0,
        )
    }

    /// Cell under a pixel position, or None if outside a rows × cols board
    pub fn cell_at(&self, pos: Vec2, rows: usize, cols: usize) -> Option<(usize, usize)> {
        if pos.x < 0.0 || pos.y < 0.0 || !pos.is_finite() {
            return None;
        }
        let col = (pos.x / self.cell_size).floor() as usize;
        let row = (pos.y / self.cell_size).floor() as usize;
        (row < rows && col < cols).then_some((row, col))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(crate::consts::CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let layout = Layout::new(100.0);
        assert_eq!(layout.center(0, 0), Vec2::new(50.0, 50.0));
        assert_eq!(layout.center(2, 1), Vec2::new(150.0, 250.0));
    }

    #[test]
    fn test_cell_at() {
        let layout = Layout::new(100.0);
        assert_eq!(layout.cell_at(Vec2::new(150.0, 250.0), 10, 6), Some((2, 1)));
        assert_eq!(layout.cell_at(Vec2::new(599.0, 999.0), 10, 6), Some((9, 5)));
        // Below the grid (the original window is taller than the board)
        assert_eq!(layout.cell_at(Vec2::new(10.0, 1000.0), 10, 6), None);
        assert_eq!(layout.cell_at(Vec2::new(-1.0, 10.0), 10, 6), None);
    }
}
