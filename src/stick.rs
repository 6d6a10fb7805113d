//! Distance constraints between two particles.

use crate::float::Float;
use crate::particle::{Particle, ParticleId};

/// A rest-length constraint between two particles.
///
/// Endpoint order only decides which side receives `-offset` and which
/// `+offset`; it has no effect on the result for free endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Stick<F: Float> {
    a: ParticleId,
    b: ParticleId,
    rest_length: F,
}

impl<F: Float> Stick<F> {
    pub fn new(a: ParticleId, b: ParticleId, rest_length: F) -> Self {
        Stick { a, b, rest_length }
    }

    /// A stick whose rest length is the current distance between its endpoints.
    ///
    /// Panics if either id is out of range for `particles`; use
    /// [`World::add_stick`](crate::World::add_stick) for a checked version.
    pub fn between(a: ParticleId, b: ParticleId, particles: &[Particle<F>]) -> Self {
        let rest_length = particles[a.index()].pos.distance(particles[b.index()].pos);
        Stick { a, b, rest_length }
    }

    pub fn a(&self) -> ParticleId { self.a }
    pub fn b(&self) -> ParticleId { self.b }
    pub fn endpoints(&self) -> (ParticleId, ParticleId) { (self.a, self.b) }
    pub fn rest_length(&self) -> F { self.rest_length }

    /// Signed deviation from rest length (positive when stretched).
    pub fn strain(&self, particles: &[Particle<F>]) -> F {
        particles[self.a.index()].pos.distance(particles[self.b.index()].pos) - self.rest_length
    }

    /// Move both endpoints toward the rest length in a single correction.
    ///
    /// Free endpoints split the correction evenly. A pinned endpoint does not
    /// move and its free partner takes the whole correction. Returns `false`
    /// when the endpoints coincided and the degenerate epsilon was used.
    pub fn relax(&self, particles: &mut [Particle<F>]) -> bool {
        let a = &particles[self.a.index()];
        let b = &particles[self.b.index()];

        let weight_a = if a.pinned { F::zero() } else { F::one() };
        let weight_b = if b.pinned { F::zero() } else { F::one() };
        let weight_total = weight_a + weight_b;
        if weight_total == F::zero() {
            return true; // both pinned
        }

        let delta = b.pos - a.pos;
        let mut distance = delta.length();
        let degenerate = distance == F::zero();
        if degenerate {
            distance = F::degenerate_epsilon();
        }

        let difference = self.rest_length - distance;
        let correction = delta.scale(difference / distance);

        if weight_a != F::zero() {
            particles[self.a.index()].pos -= correction.scale(weight_a / weight_total);
        }
        if weight_b != F::zero() {
            particles[self.b.index()].pos += correction.scale(weight_b / weight_total);
        }
        !degenerate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    fn pair(a: Particle<f32>, b: Particle<f32>) -> [Particle<f32>; 2] {
        [a, b]
    }

    #[test]
    fn stretched_stick_pulls_both_ends_equally() {
        let mut ps = pair(
            Particle::new(Vec2::new(0.0, 0.0)),
            Particle::new(Vec2::new(20.0, 0.0)),
        );
        let stick = Stick::new(ParticleId::new(0), ParticleId::new(1), 10.0);
        stick.relax(&mut ps);
        assert!((ps[0].pos.x - 5.0).abs() < 1e-5, "a moved to {}", ps[0].pos.x);
        assert!((ps[1].pos.x - 15.0).abs() < 1e-5, "b moved to {}", ps[1].pos.x);
    }

    #[test]
    fn coincident_endpoints_do_not_produce_nan() {
        let mut ps = pair(
            Particle::new(Vec2::new(7.0, 7.0)),
            Particle::new(Vec2::new(7.0, 7.0)),
        );
        let stick = Stick::new(ParticleId::new(0), ParticleId::new(1), 10.0);
        assert!(!stick.relax(&mut ps));
        assert!(ps[0].pos.x.is_finite() && ps[0].pos.y.is_finite());
        assert!(ps[1].pos.x.is_finite() && ps[1].pos.y.is_finite());
    }

    #[test]
    fn both_pinned_is_a_no_op() {
        let mut ps = pair(
            Particle::pinned(Vec2::new(0.0, 0.0)),
            Particle::pinned(Vec2::new(30.0, 0.0)),
        );
        let before = ps.clone();
        Stick::new(ParticleId::new(0), ParticleId::new(1), 10.0).relax(&mut ps);
        assert_eq!(ps, before);
    }

    #[test]
    fn between_measures_current_distance() {
        let ps = pair(
            Particle::new(Vec2::new(0.0, 0.0)),
            Particle::new(Vec2::new(3.0, 4.0)),
        );
        let stick = Stick::between(ParticleId::new(0), ParticleId::new(1), &ps);
        assert!((stick.rest_length() - 5.0).abs() < 1e-6);
        assert!(stick.strain(&ps).abs() < 1e-6);
    }
}
