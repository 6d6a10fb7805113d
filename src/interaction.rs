//! Pointer-driven particle dragging.

use crate::float::Float;
use crate::particle::{Particle, ParticleId};
use crate::vec::Vec2;

/// A pointer sample. Kept separate from [`Particle`]; it becomes a particle
/// update only through [`Particle::grab`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer<F: Float> {
    pub pos: Vec2<F>,
    /// Where the pointer was on the previous sample, if a throw velocity is
    /// wanted. `None` yields zero velocity.
    pub prev: Option<Vec2<F>>,
}

impl<F: Float> Pointer<F> {
    pub fn at(pos: Vec2<F>) -> Self {
        Pointer { pos, prev: None }
    }

    pub fn with_prev(pos: Vec2<F>, prev: Vec2<F>) -> Self {
        Pointer { pos, prev: Some(prev) }
    }
}

/// Input events delivered by an external dispatcher.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent<F: Float> {
    Pressed(Vec2<F>),
    Moved(Vec2<F>),
    Released,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ParticleId),
}

/// Two-state drag machine: `Idle` and `Dragging(id)`.
#[derive(Clone, Debug)]
pub struct DragController<F: Float> {
    state: DragState,
    tolerance: F,
}

impl<F: Float> DragController<F> {
    pub fn new(tolerance: F) -> Self {
        DragController { state: DragState::Idle, tolerance }
    }

    pub fn state(&self) -> DragState { self.state }

    pub fn dragging(&self) -> Option<ParticleId> {
        match self.state {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }

    pub fn tolerance(&self) -> F { self.tolerance }

    /// Select the first particle, in arena order, inside the tolerance box
    /// around `at`. This is the first hit, not the nearest one.
    pub fn press(&mut self, particles: &[Particle<F>], at: Vec2<F>) -> Option<ParticleId> {
        let hit = pick(particles, at, self.tolerance);
        self.state = match hit {
            Some(id) => {
                log::trace!("drag start on particle {}", id.index());
                DragState::Dragging(id)
            }
            None => DragState::Idle,
        };
        hit
    }

    /// Move the dragged particle to the pointer with zero implied velocity,
    /// unpinning it. Returns the id that was moved.
    pub fn move_to(&mut self, particles: &mut [Particle<F>], at: Vec2<F>) -> Option<ParticleId> {
        let id = self.dragging()?;
        let particle = particles.get_mut(id.index())?;
        particle.grab(Pointer::at(at));
        Some(id)
    }

    pub fn release(&mut self) {
        if let DragState::Dragging(id) = self.state {
            log::trace!("drag end on particle {}", id.index());
        }
        self.state = DragState::Idle;
    }
}

/// First particle whose position lies inside the tolerance box around `at`.
pub fn pick<F: Float>(particles: &[Particle<F>], at: Vec2<F>, tolerance: F) -> Option<ParticleId> {
    particles
        .iter()
        .position(|p| p.pos.within_box(at, tolerance))
        .map(ParticleId::new)
}
