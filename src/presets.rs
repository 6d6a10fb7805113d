//! Ready-made worlds: rope, cloth, and a braced box.

use crate::float::Float;
use crate::particle::{Particle, ParticleId};
use crate::stick::Stick;
use crate::vec::Vec2;
use crate::world::World;
use alloc::vec::Vec;

/// Layout of a cloth sheet.
#[derive(Clone, Debug)]
pub struct ClothConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    pub spacing: F,
    /// Pin every `pin_every`-th particle of the top row (0 = pin nothing).
    pub pin_every: usize,
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        ClothConfig { cols: 12, rows: 10, spacing: F::from_f32(25.0), pin_every: 3 }
    }
}

/// A rope of `segments` sticks from `start` to `end`, pinned at `start`.
pub fn rope<F: Float>(start: Vec2<F>, end: Vec2<F>, segments: usize) -> World<F> {
    let segments = segments.max(1);
    let mut particles = Vec::with_capacity(segments + 1);
    let mut sticks = Vec::with_capacity(segments);

    let count = F::from_f32(segments as f32);
    for i in 0..=segments {
        let pos = start.lerp(end, F::from_f32(i as f32) / count);
        particles.push(if i == 0 { Particle::pinned(pos) } else { Particle::new(pos) });
    }
    for i in 0..segments {
        sticks.push(Stick::between(ParticleId::new(i), ParticleId::new(i + 1), &particles));
    }

    World::from_parts(particles, sticks)
}

/// A cloth sheet whose top-left corner is `origin`.
///
/// Particle at (col, row) has index `row * cols + col`. Sticks are the
/// horizontal neighbours row by row, then the vertical neighbours.
pub fn cloth<F: Float>(origin: Vec2<F>, config: &ClothConfig<F>) -> World<F> {
    let cols = config.cols.max(1);
    let rows = config.rows.max(1);
    let mut particles = Vec::with_capacity(cols * rows);
    let mut sticks = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let pos = Vec2::new(
                origin.x + F::from_f32(col as f32) * config.spacing,
                origin.y + F::from_f32(row as f32) * config.spacing,
            );
            let pin = row == 0 && config.pin_every > 0 && col % config.pin_every == 0;
            particles.push(if pin { Particle::pinned(pos) } else { Particle::new(pos) });
        }
    }

    let id = |col: usize, row: usize| ParticleId::new(row * cols + col);

    for row in 0..rows {
        for col in 0..(cols - 1) {
            sticks.push(Stick::new(id(col, row), id(col + 1, row), config.spacing));
        }
    }
    for row in 0..(rows - 1) {
        for col in 0..cols {
            sticks.push(Stick::new(id(col, row), id(col, row + 1), config.spacing));
        }
    }

    World::from_parts(particles, sticks)
}

/// A free square of side `size` at `origin`, braced by one diagonal, with a
/// sideways kick so it tumbles when dropped.
pub fn square<F: Float>(origin: Vec2<F>, size: F, kick: F) -> World<F> {
    let corners = [
        origin,
        Vec2::new(origin.x + size, origin.y),
        Vec2::new(origin.x + size, origin.y + size),
        Vec2::new(origin.x, origin.y + size),
    ];
    let mut particles: Vec<Particle<F>> = corners.iter().map(|&c| Particle::new(c)).collect();
    particles[0].prev_pos.x = particles[0].prev_pos.x - kick;

    let mut sticks = Vec::with_capacity(5);
    for i in 0..4 {
        sticks.push(Stick::between(ParticleId::new(i), ParticleId::new((i + 1) % 4), &particles));
    }
    sticks.push(Stick::between(ParticleId::new(0), ParticleId::new(2), &particles));

    World::from_parts(particles, sticks)
}
