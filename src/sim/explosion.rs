//! Explosion engine
//!
//! An overflowing cell empties itself and throws one atom at each in-bounds
//! orthogonal neighbor. Neighbors are not touched here; they receive their
//! atom when the particle lands, which is where further explosions start.

use super::board::Board;
use super::layout::Layout;
use super::particle::ParticleSystem;

/// Explode the cell at (row, col). Returns the number of particles spawned.
///
/// Does nothing (returns 0) if the cell is not overflowing.
pub fn explode(
    board: &mut Board,
    particles: &mut ParticleSystem,
    layout: &Layout,
    row: usize,
    col: usize,
) -> usize {
    if !board.is_overflowed(row, col) {
        return 0;
    }
    let Some(owner) = board.get(row, col).and_then(|cell| cell.owner) else {
        // An overflowing cell always has an owner; clear the stray atoms anyway
        board.clear(row, col);
        return 0;
    };
    board.clear(row, col);

    let from = layout.center(row, col);
    let targets: Vec<_> = board.neighbors(row, col).collect();
    for &(r, c) in &targets {
        particles.spawn(from, layout.center(r, c), owner, r, c);
    }

    log::debug!(
        "cell ({row}, {col}) exploded for player {owner}, {} atoms in flight",
        targets.len()
    );
    targets.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::board::Cell;

    fn overfill(board: &mut Board, row: usize, col: usize, player: usize) {
        while !board.is_overflowed(row, col) {
            board.place(row, col, player).unwrap();
        }
    }

    #[test]
    fn test_explode_resets_cell_and_spawns_per_neighbor() {
        let layout = Layout::default();
        for &((row, col), expected) in &[((0, 0), 2), ((0, 2), 3), ((2, 2), 4), ((4, 4), 2)] {
            let mut board = Board::new(5, 5);
            let mut particles = ParticleSystem::default();
            overfill(&mut board, row, col, 1);

            let spawned = explode(&mut board, &mut particles, &layout, row, col);
            assert_eq!(spawned, expected, "cell ({row}, {col})");
            assert_eq!(particles.len(), expected);
            assert_eq!(board.get(row, col), Some(&Cell::EMPTY));
            assert!(particles.particles().iter().all(|p| p.owner == 1));
        }
    }

    #[test]
    fn test_explode_targets_neighbors() {
        let layout = Layout::default();
        let mut board = Board::new(3, 3);
        let mut particles = ParticleSystem::default();
        overfill(&mut board, 1, 1, 0);

        explode(&mut board, &mut particles, &layout, 1, 1);
        let dests: Vec<_> = particles
            .particles()
            .iter()
            .map(|p| (p.dest_row, p.dest_col))
            .collect();
        assert_eq!(dests, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
        for p in particles.particles() {
            assert_eq!(p.pos, layout.center(1, 1));
            assert_eq!(p.target, layout.center(p.dest_row, p.dest_col));
        }
    }

    #[test]
    fn test_explode_ignores_stable_cell() {
        let layout = Layout::default();
        let mut board = Board::new(3, 3);
        let mut particles = ParticleSystem::default();
        board.place(1, 1, 0).unwrap();

        assert_eq!(explode(&mut board, &mut particles, &layout, 1, 1), 0);
        assert!(particles.is_empty());
        assert_eq!(board.get(1, 1).map(|c| c.count), Some(1));
    }
}
