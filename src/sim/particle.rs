//! Traveling atoms
//!
//! When a cell explodes, each atom flies to a neighbor as a particle. The
//! neighbor only receives the atom on arrival, so chains cascade visibly over
//! several ticks instead of resolving in one step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::explosion::explode;
use super::layout::Layout;

/// An atom in flight between two cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Creation-ordered id (arrivals are applied in this order)
    pub id: u32,
    pub pos: Vec2,
    pub target: Vec2,
    /// Player that owns the atom; the destination is captured for this player
    pub owner: usize,
    pub dest_row: usize,
    pub dest_col: usize,
}

impl Particle {
    /// Move toward the target. Returns true on arrival (remaining distance < speed),
    /// in which case the particle does not move.
    pub fn step(&mut self, speed: f32) -> bool {
        let delta = self.target - self.pos;
        let dist = delta.length();
        if dist < speed {
            return true;
        }
        self.pos += delta / dist * speed;
        false
    }
}

/// Outcome of one particle update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticleUpdate {
    /// Atoms delivered this tick
    pub arrivals: u32,
    /// Cells that exploded this tick, in processing order
    pub explosions: Vec<(usize, usize)>,
}

impl ParticleUpdate {
    #[inline]
    pub fn exploded(&self) -> bool {
        !self.explosions.is_empty()
    }
}

/// Live particle collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    /// Pixels per tick
    speed: f32,
    next_id: u32,
}

impl ParticleSystem {
    pub fn new(speed: f32) -> Self {
        Self {
            particles: Vec::new(),
            speed,
            next_id: 1,
        }
    }

    /// Launch an atom from `from` toward cell (row, col) whose center is `to`
    pub fn spawn(&mut self, from: Vec2, to: Vec2, owner: usize, row: usize, col: usize) {
        let id = self.next_id;
        self.next_id += 1;
        self.particles.push(Particle {
            id,
            pos: from,
            target: to,
            owner,
            dest_row: row,
            dest_col: col,
        });
    }

    /// Live particles in creation order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Drop every live particle
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Advance every live particle one step and remove those that arrived.
    /// Arrived particles are returned in creation order.
    fn advance(&mut self) -> Vec<Particle> {
        let speed = self.speed;
        let mut arrived = Vec::new();
        self.particles.retain_mut(|p| {
            if p.step(speed) {
                arrived.push(p.clone());
                false
            } else {
                true
            }
        });
        arrived
    }

    /// One simulation tick: move particles, deliver arrivals to the board and
    /// explode any destination that overflows. Particles spawned by those
    /// explosions start moving on the next tick.
    pub fn update(&mut self, board: &mut Board, layout: &Layout) -> ParticleUpdate {
        let mut report = ParticleUpdate::default();
        for p in self.advance() {
            board.deposit(p.dest_row, p.dest_col, p.owner);
            report.arrivals += 1;
            log::trace!(
                "atom {} for player {} landed on ({}, {})",
                p.id,
                p.owner,
                p.dest_row,
                p.dest_col
            );

            if board.is_overflowed(p.dest_row, p.dest_col) {
                explode(board, self, layout, p.dest_row, p.dest_col);
                report.explosions.push((p.dest_row, p.dest_col));
            }
        }
        report
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(crate::consts::PARTICLE_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_reaches_target() {
        let mut p = Particle {
            id: 1,
            pos: Vec2::new(50.0, 50.0),
            target: Vec2::new(150.0, 50.0),
            owner: 0,
            dest_row: 0,
            dest_col: 1,
        };
        let mut steps = 0;
        while !p.step(15.0) {
            steps += 1;
            assert!(steps < 100);
        }
        // 6 moves of 15 leave 10 px, which counts as arrived
        assert_eq!(steps, 6);
        assert!((p.pos.x - 140.0).abs() < 0.001);
    }

    #[test]
    fn test_update_delivers_and_captures() {
        let layout = Layout::new(100.0);
        let mut board = Board::new(3, 3);
        board.place(1, 1, 1).unwrap();
        let mut system = ParticleSystem::new(1000.0);
        system.spawn(layout.center(0, 1), layout.center(1, 1), 0, 1, 1);

        let report = system.update(&mut board, &layout);
        assert_eq!(report.arrivals, 1);
        assert!(!report.exploded());
        assert!(system.is_empty());
        let cell = board.get(1, 1).copied().unwrap();
        assert_eq!(cell.count, 2);
        assert_eq!(cell.owner, Some(0));
    }

    #[test]
    fn test_same_tick_arrivals_last_owner_wins() {
        let layout = Layout::new(100.0);
        let mut board = Board::new(3, 3);
        let mut system = ParticleSystem::new(1000.0);
        system.spawn(layout.center(0, 1), layout.center(1, 1), 0, 1, 1);
        system.spawn(layout.center(1, 0), layout.center(1, 1), 1, 1, 1);

        system.update(&mut board, &layout);
        let cell = board.get(1, 1).copied().unwrap();
        assert_eq!(cell.count, 2);
        assert_eq!(cell.owner, Some(1));
    }

    #[test]
    fn test_arrival_overflow_spawns_next_wave() {
        let layout = Layout::new(100.0);
        let mut board = Board::new(3, 3);
        board.place(0, 0, 0).unwrap();
        let mut system = ParticleSystem::new(1000.0);
        system.spawn(layout.center(0, 1), layout.center(0, 0), 0, 0, 0);

        let report = system.update(&mut board, &layout);
        assert_eq!(report.explosions, vec![(0, 0)]);
        assert_eq!(board.get(0, 0), Some(&crate::sim::Cell::EMPTY));
        // New particles wait for the next tick
        assert_eq!(system.len(), 2);
        assert!(system.particles().iter().all(|p| p.pos == layout.center(0, 0)));
    }
}
