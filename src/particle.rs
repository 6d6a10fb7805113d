//! Verlet particles with implicit velocity.

use crate::float::Float;
use crate::interaction::Pointer;
use crate::vec::Vec2;

/// Stable handle of a particle inside a [`World`](crate::World) arena.
///
/// Handles are plain indices. They stay valid for the lifetime of the world
/// that issued them and mean nothing once that world is replaced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(usize);

impl ParticleId {
    pub const fn new(index: usize) -> Self { ParticleId(index) }

    pub const fn index(self) -> usize { self.0 }
}

impl From<usize> for ParticleId {
    fn from(index: usize) -> Self { ParticleId(index) }
}

/// A point mass whose velocity is `pos - prev_pos`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    /// A free particle at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos: pos, pinned: false }
    }

    /// A free particle whose previous position encodes an initial velocity.
    pub fn with_prev(pos: Vec2<F>, prev_pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos, pinned: false }
    }

    pub fn pinned(pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos: pos, pinned: true }
    }

    /// One Verlet step: damp the implied velocity by `friction`, then add
    /// `gravity` along +y. Pinned particles are left untouched.
    pub fn integrate(&mut self, gravity: F, friction: F) {
        if self.pinned {
            return;
        }
        let velocity = self.velocity().scale(friction);
        let mut next = self.pos + velocity;
        next.y = next.y + gravity;
        self.prev_pos = self.pos;
        self.pos = next;
    }

    /// Displacement over the last step.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Fix the particle in place, discarding any velocity.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Overwrite the particle from a pointer sample. Always unpins.
    pub fn grab(&mut self, pointer: Pointer<F>) {
        self.pos = pointer.pos;
        self.prev_pos = pointer.prev.unwrap_or(pointer.pos);
        self.pinned = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrate_applies_friction_and_gravity() {
        let mut p = Particle::with_prev(Vec2::new(10.0f32, 10.0), Vec2::new(5.0, 5.0));
        p.integrate(0.5, 0.5);
        assert_eq!(p.pos, Vec2::new(12.5, 13.0));
        assert_eq!(p.prev_pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn pin_discards_velocity() {
        let mut p = Particle::with_prev(Vec2::new(3.0f64, 3.0), Vec2::new(0.0, 0.0));
        p.pin();
        assert!(p.pinned);
        assert_eq!(p.velocity(), Vec2::zero());
    }

    #[test]
    fn grab_with_previous_sample_keeps_motion() {
        let mut p = Particle::pinned(Vec2::new(0.0f32, 0.0));
        p.grab(Pointer::with_prev(Vec2::new(4.0, 4.0), Vec2::new(2.0, 3.0)));
        assert!(!p.pinned);
        assert_eq!(p.velocity(), Vec2::new(2.0, 1.0));
    }
}
