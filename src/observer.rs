//! Step observer trait for monitoring the frame pipeline.

use crate::bounds::Edge;
use crate::particle::ParticleId;

/// Hooks called by [`Simulation::step`](crate::Simulation::step) as each stage
/// finishes. All methods default to no-ops.
pub trait StepObserver {
    /// Called after every particle has been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each sweep over the stick list.
    fn on_relax_pass(&mut self, _pass: usize) {}

    /// Called when a stick had coincident endpoints and fell back to epsilon.
    fn on_degenerate_stick(&mut self, _stick: usize) {}

    /// Called for every wall a particle is bounced off, up to two per particle.
    fn on_bounce(&mut self, _particle: ParticleId, _edge: Edge) {}

    /// Called when the frame is fully complete.
    fn on_step_complete(&mut self) {}
}

/// Observer that ignores everything.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
