//! The per-frame pipeline and the context object that owns a running world.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::float::Float;
use crate::interaction::{pick, DragController, DragState, PointerEvent};
use crate::observer::StepObserver;
use crate::particle::ParticleId;
use crate::vec::Vec2;
use crate::world::World;

/// A running simulation: the current world, its constants, and the drag
/// state. All stages and pointer handlers go through `&mut self`, so pointer
/// edits always land between frames.
pub struct Simulation<F: Float> {
    world: World<F>,
    config: SimConfig<F>,
    drag: DragController<F>,
}

impl<F: Float> Simulation<F> {
    pub fn new(world: World<F>, config: SimConfig<F>) -> Result<Self, SimError> {
        if let Err(e) = config.validate() {
            log::warn!("rejecting simulation config: {}", e);
            return Err(e);
        }
        let drag = DragController::new(config.drag_tolerance);
        Ok(Simulation { world, config, drag })
    }

    /// Advance one frame: integrate, relax sticks, then resolve walls.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        self.world.integrate(self.config.gravity, self.config.friction);
        observer.on_integrate();

        for pass in 0..self.config.relaxation_passes {
            self.world.relax(observer);
            observer.on_relax_pass(pass);
        }

        let boundary = self.config.boundary();
        self.world.apply_bounds(&boundary, observer);

        observer.on_step_complete();
    }

    /// Swap in a new world. The old particles and sticks are dropped, and any
    /// drag in progress is cancelled since its id belonged to the old arena.
    pub fn replace_world(&mut self, world: World<F>) -> World<F> {
        log::debug!(
            "replacing world: {} particles, {} sticks",
            world.particle_count(),
            world.stick_count()
        );
        self.drag.release();
        core::mem::replace(&mut self.world, world)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent<F>) {
        match event {
            PointerEvent::Pressed(at) => {
                self.pointer_pressed(at);
            }
            PointerEvent::Moved(at) => {
                self.pointer_moved(at);
            }
            PointerEvent::Released => self.pointer_released(),
        }
    }

    pub fn pointer_pressed(&mut self, at: Vec2<F>) -> Option<ParticleId> {
        self.drag.press(self.world.particles(), at)
    }

    pub fn pointer_moved(&mut self, at: Vec2<F>) -> Option<ParticleId> {
        self.drag.move_to(self.world.particles_mut(), at)
    }

    pub fn pointer_released(&mut self) {
        self.drag.release();
    }

    /// Flip the pin flag of the first particle under `at`. Returns the
    /// particle and its new pinned state.
    pub fn toggle_pin_at(&mut self, at: Vec2<F>) -> Option<(ParticleId, bool)> {
        let id = pick(self.world.particles(), at, self.config.drag_tolerance)?;
        let particle = self.world.particle_mut(id)?;
        if particle.pinned {
            particle.unpin();
        } else {
            particle.pin();
        }
        log::trace!("particle {} pinned = {}", id.index(), particle.pinned);
        Some((id, particle.pinned))
    }

    pub fn world(&self) -> &World<F> { &self.world }
    pub fn config(&self) -> &SimConfig<F> { &self.config }
    pub fn drag_state(&self) -> DragState { self.drag.state() }
    pub fn dragging(&self) -> Option<ParticleId> { self.drag.dragging() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;
    use crate::particle::Particle;

    struct Recorder {
        integrates: usize,
        passes: usize,
        completes: usize,
    }

    impl StepObserver for Recorder {
        fn on_integrate(&mut self) { self.integrates += 1; }
        fn on_relax_pass(&mut self, _pass: usize) { self.passes += 1; }
        fn on_step_complete(&mut self) { self.completes += 1; }
    }

    #[test]
    fn observer_sees_each_stage() {
        let config = SimConfig::<f32>::new().with_relaxation_passes(3);
        let mut sim = Simulation::new(World::empty(), config).unwrap();
        let mut rec = Recorder { integrates: 0, passes: 0, completes: 0 };
        sim.step(&mut rec);
        sim.step(&mut rec);
        assert_eq!(rec.integrates, 2);
        assert_eq!(rec.passes, 6);
        assert_eq!(rec.completes, 2);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SimConfig::<f32>::new().with_friction(2.0);
        assert!(matches!(
            Simulation::new(World::empty(), config),
            Err(SimError::InvalidFriction)
        ));
    }

    #[test]
    fn replace_world_cancels_drag() {
        let mut world = World::empty();
        world.add_particle(Particle::new(Vec2::new(50.0f32, 50.0)));
        let mut sim = Simulation::new(world, SimConfig::new()).unwrap();
        assert!(sim.pointer_pressed(Vec2::new(52.0, 48.0)).is_some());

        sim.replace_world(World::empty());
        assert_eq!(sim.drag_state(), DragState::Idle);
        assert_eq!(sim.pointer_moved(Vec2::new(10.0, 10.0)), None);
        sim.step(&mut NoOpStepObserver);
    }

    #[test]
    fn toggle_pin_round_trip() {
        let mut world = World::empty();
        world.add_particle(Particle::with_prev(Vec2::new(50.0f32, 50.0), Vec2::new(45.0, 45.0)));
        let mut sim = Simulation::new(world, SimConfig::new()).unwrap();
        let (id, pinned) = sim.toggle_pin_at(Vec2::new(50.0, 50.0)).unwrap();
        assert!(pinned);
        assert_eq!(sim.world().particle(id).unwrap().prev_pos, Vec2::new(50.0, 50.0));
        assert_eq!(sim.toggle_pin_at(Vec2::new(50.0, 50.0)), Some((id, false)));
        assert_eq!(sim.toggle_pin_at(Vec2::new(400.0, 400.0)), None);
    }
}
