//! Particle arena and ordered stick list.

use crate::bounds::{Boundary, Edge};
use crate::error::SimError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::{Particle, ParticleId};
use crate::stick::Stick;
use crate::vec::Vec2;
use alloc::vec::Vec;

/// Everything a frame operates on: particles in a dense arena addressed by
/// [`ParticleId`], plus sticks whose order sets the relaxation sequence.
///
/// Every stick is checked against the arena when it is added, so the frame
/// stages can index particles directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World<F: Float> {
    particles: Vec<Particle<F>>,
    sticks: Vec<Stick<F>>,
}

impl<F: Float> World<F> {
    pub fn empty() -> Self {
        World { particles: Vec::new(), sticks: Vec::new() }
    }

    /// Build a world from a ready-made particle set and stick list.
    ///
    /// Fails if any stick endpoint is outside the particle set, or if a rest
    /// length is negative or not finite.
    pub fn new(particles: Vec<Particle<F>>, sticks: Vec<Stick<F>>) -> Result<Self, SimError> {
        let count = particles.len();
        for (i, stick) in sticks.iter().enumerate() {
            for id in [stick.a(), stick.b()] {
                if id.index() >= count {
                    log::warn!("rejecting world: stick {} references particle {}", i, id.index());
                    return Err(SimError::ParticleOutOfBounds { index: id.index(), count });
                }
            }
            check_rest_length(stick.rest_length(), i)?;
        }
        log::debug!("world built: {} particles, {} sticks", count, sticks.len());
        Ok(World { particles, sticks })
    }

    /// For builders whose topology is correct by construction.
    pub(crate) fn from_parts(particles: Vec<Particle<F>>, sticks: Vec<Stick<F>>) -> Self {
        debug_assert!(sticks
            .iter()
            .all(|s| s.a().index() < particles.len() && s.b().index() < particles.len()));
        World { particles, sticks }
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> ParticleId {
        let id = ParticleId::new(self.particles.len());
        self.particles.push(particle);
        id
    }

    /// Join two particles with a stick at their current distance.
    /// Returns the stick's position in the relaxation order.
    pub fn add_stick(&mut self, a: ParticleId, b: ParticleId) -> Result<usize, SimError> {
        self.check_id(a)?;
        self.check_id(b)?;
        self.sticks.push(Stick::between(a, b, &self.particles));
        Ok(self.sticks.len() - 1)
    }

    /// Join two particles with a stick of an explicit rest length.
    pub fn add_stick_with_length(
        &mut self,
        a: ParticleId,
        b: ParticleId,
        rest_length: F,
    ) -> Result<usize, SimError> {
        self.check_id(a)?;
        self.check_id(b)?;
        check_rest_length(rest_length, self.sticks.len())?;
        self.sticks.push(Stick::new(a, b, rest_length));
        Ok(self.sticks.len() - 1)
    }

    fn check_id(&self, id: ParticleId) -> Result<(), SimError> {
        if id.index() < self.particles.len() {
            Ok(())
        } else {
            Err(SimError::ParticleOutOfBounds { index: id.index(), count: self.particles.len() })
        }
    }

    /// Integrator stage: one Verlet step for every free particle.
    pub fn integrate(&mut self, gravity: F, friction: F) {
        for p in self.particles.iter_mut() {
            p.integrate(gravity, friction);
        }
    }

    /// Constraint stage: one sweep over the sticks in stored order. Each stick
    /// writes back before the next one reads, so shared endpoints see earlier
    /// corrections within the same sweep.
    pub fn relax<O: StepObserver>(&mut self, observer: &mut O) {
        for (i, stick) in self.sticks.iter().enumerate() {
            if !stick.relax(&mut self.particles) {
                observer.on_degenerate_stick(i);
            }
        }
    }

    /// Boundary stage: bounce free particles back inside the rectangle.
    /// Returns the number of particles that hit a wall.
    pub fn apply_bounds<O: StepObserver>(
        &mut self,
        boundary: &Boundary<F>,
        observer: &mut O,
    ) -> usize {
        let mut hits = 0;
        for (i, p) in self.particles.iter_mut().enumerate() {
            let contact = boundary.resolve(p);
            if contact.is_empty() {
                continue;
            }
            for edge in contact.edges() {
                observer.on_bounce(ParticleId::new(i), edge);
            }
            hits += 1;
        }
        hits
    }

    /// Every wall each particle is currently past, one entry per edge.
    pub fn edge_violations<'a>(
        &'a self,
        boundary: &'a Boundary<F>,
    ) -> impl Iterator<Item = (ParticleId, Edge)> + 'a {
        self.particles.iter().enumerate().flat_map(move |(i, p)| {
            boundary.violated_edges(p).edges().map(move |e| (ParticleId::new(i), e))
        })
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }

    /// Mutable access for direct edits between frames. The arena itself
    /// cannot grow or shrink through this slice, so stick ids stay valid.
    pub fn particles_mut(&mut self) -> &mut [Particle<F>] { &mut self.particles }

    pub fn sticks(&self) -> &[Stick<F>] { &self.sticks }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle<F>> {
        self.particles.get(id.index())
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle<F>> {
        self.particles.get_mut(id.index())
    }

    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn stick_count(&self) -> usize { self.sticks.len() }

    pub fn positions(&self) -> Vec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Endpoint positions of every stick, in relaxation order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.sticks
            .iter()
            .map(|s| (self.particles[s.a().index()].pos, self.particles[s.b().index()].pos))
    }

    /// Largest absolute deviation from rest length over all sticks.
    pub fn max_strain(&self) -> F {
        self.sticks
            .iter()
            .map(|s| s.strain(&self.particles).abs())
            .fold(F::zero(), |acc, s| if s > acc { s } else { acc })
    }
}

fn check_rest_length<F: Float>(rest_length: F, stick: usize) -> Result<(), SimError> {
    if rest_length.is_finite() && rest_length >= F::zero() {
        Ok(())
    } else {
        Err(SimError::InvalidRestLength { stick })
    }
}
