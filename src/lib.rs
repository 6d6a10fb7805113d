//! Verlet particles joined by sticks inside a walled 2D world.
//!
//! `stickworld` runs the physics core of a rope/cloth toy: particles that
//! carry their velocity implicitly as `pos - prev_pos`, rest-length sticks
//! relaxed in a fixed order, and a rectangle of walls that bounce particles
//! back with some energy loss. Particles can be pinned, and a pointer can
//! grab and drag any particle.
//!
//! # Frame pipeline
//!
//! [`Simulation::step`] runs three stages in order:
//!
//! 1. **Integrate**: `pos' = pos + (pos - prev_pos) * friction + (0, gravity)`
//! 2. **Relax**: each stick, in stored order, pulls its endpoints toward the
//!    rest length (one sweep by default, see
//!    [`SimConfig::relaxation_passes`])
//! 3. **Bounds**: particles past a wall are mirrored (or clamped) back in,
//!    each axis on its own
//!
//! Pointer events ([`Simulation::handle_pointer`]) take `&mut` access and so
//! always land between frames.
//!
//! ```
//! use stickworld::{presets, SimConfig, Simulation, NoOpStepObserver, Vec2};
//!
//! let world = presets::rope(Vec2::new(100.0f32, 50.0), Vec2::new(300.0, 50.0), 8);
//! let mut sim = Simulation::new(world, SimConfig::default()).unwrap();
//! for _ in 0..60 {
//!     sim.step(&mut NoOpStepObserver);
//! }
//! assert!(sim.world().particles()[8].pos.y > 50.0);
//! ```
//!
//! The crate is `no_std` (with `alloc`) and logs through the `log` facade.

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod stick;
pub mod bounds;
pub mod world;
pub mod interaction;
pub mod solver;
pub mod scenario;
pub mod presets;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::{Particle, ParticleId};
pub use stick::Stick;
pub use bounds::{BounceMode, Boundary, Contact, Edge};
pub use world::World;
pub use interaction::{DragController, DragState, Pointer, PointerEvent};
pub use solver::Simulation;
pub use scenario::{PointDef, Scenario, StickDef};
pub use presets::ClothConfig;
pub use config::SimConfig;
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::SimError;
