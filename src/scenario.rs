//! Data description of a world, with points referenced by name.
//!
//! External loaders fill in a [`Scenario`] (directly, or through serde with
//! the `serde` feature) and call [`Scenario::build`]. Names are resolved to
//! arena indices once, here; the running world only ever sees
//! [`ParticleId`]s.

use crate::error::SimError;
use crate::float::Float;
use crate::particle::{Particle, ParticleId};
use crate::vec::Vec2;
use crate::world::World;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// A named particle. `oldx`/`oldy` default to `x`/`y` (at rest).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointDef<F: Float> {
    pub name: String,
    pub x: F,
    pub y: F,
    #[cfg_attr(feature = "serde", serde(default))]
    pub oldx: Option<F>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub oldy: Option<F>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pinned: bool,
}

/// A stick between two named points. Without `length` the rest length is
/// the distance between the points as declared.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickDef<F: Float> {
    pub a: String,
    pub b: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub length: Option<F>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario<F: Float> {
    pub name: String,
    pub points: Vec<PointDef<F>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sticks: Vec<StickDef<F>>,
}

impl<F: Float> Scenario<F> {
    pub fn new(name: impl Into<String>) -> Self {
        Scenario { name: name.into(), points: Vec::new(), sticks: Vec::new() }
    }

    pub fn point(mut self, name: impl Into<String>, x: F, y: F) -> Self {
        self.points.push(PointDef {
            name: name.into(),
            x,
            y,
            oldx: None,
            oldy: None,
            pinned: false,
        });
        self
    }

    pub fn pinned_point(mut self, name: impl Into<String>, x: F, y: F) -> Self {
        self.points.push(PointDef {
            name: name.into(),
            x,
            y,
            oldx: None,
            oldy: None,
            pinned: true,
        });
        self
    }

    /// A point with an initial velocity encoded by its previous position.
    pub fn moving_point(mut self, name: impl Into<String>, x: F, y: F, oldx: F, oldy: F) -> Self {
        self.points.push(PointDef {
            name: name.into(),
            x,
            y,
            oldx: Some(oldx),
            oldy: Some(oldy),
            pinned: false,
        });
        self
    }

    pub fn stick(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.sticks.push(StickDef { a: a.into(), b: b.into(), length: None });
        self
    }

    pub fn stick_with_length(
        mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        length: F,
    ) -> Self {
        self.sticks.push(StickDef { a: a.into(), b: b.into(), length: Some(length) });
        self
    }

    /// Resolve names and produce a validated world. Points keep their
    /// declaration order in the arena; sticks keep theirs in the relaxation
    /// order.
    pub fn build(&self) -> Result<World<F>, SimError> {
        let mut ids: BTreeMap<&str, ParticleId> = BTreeMap::new();
        let mut world = World::empty();

        for point in &self.points {
            if ids.contains_key(point.name.as_str()) {
                log::warn!("scenario '{}': duplicate point '{}'", self.name, point.name);
                return Err(SimError::DuplicatePoint { name: point.name.clone() });
            }
            let pos = Vec2::new(point.x, point.y);
            let prev = Vec2::new(point.oldx.unwrap_or(point.x), point.oldy.unwrap_or(point.y));
            let particle = if point.pinned {
                Particle::pinned(pos)
            } else {
                Particle::with_prev(pos, prev)
            };
            ids.insert(point.name.as_str(), world.add_particle(particle));
        }

        let lookup = |name: &String| {
            ids.get(name.as_str()).copied().ok_or_else(|| {
                log::warn!("scenario '{}': unknown point '{}'", self.name, name);
                SimError::UnknownPoint { name: name.clone() }
            })
        };

        for stick in &self.sticks {
            let a = lookup(&stick.a)?;
            let b = lookup(&stick.b)?;
            match stick.length {
                Some(length) => world.add_stick_with_length(a, b, length)?,
                None => world.add_stick(a, b)?,
            };
        }

        log::debug!(
            "scenario '{}' loaded: {} particles, {} sticks",
            self.name,
            world.particle_count(),
            world.stick_count()
        );
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Scenario<f32> {
        Scenario::new("triangle")
            .pinned_point("top", 100.0, 100.0)
            .point("left", 50.0, 200.0)
            .moving_point("right", 150.0, 200.0, 145.0, 200.0)
            .stick("top", "left")
            .stick("left", "right")
            .stick_with_length("right", "top", 80.0)
    }

    #[test]
    fn builds_in_declaration_order() {
        let world = triangle().build().unwrap();
        assert_eq!(world.particle_count(), 3);
        assert_eq!(world.stick_count(), 3);
        assert!(world.particles()[0].pinned);
        assert_eq!(world.particles()[2].velocity(), Vec2::new(5.0, 0.0));
        assert!((world.sticks()[1].rest_length() - 100.0).abs() < 1e-4);
        assert_eq!(world.sticks()[2].rest_length(), 80.0);
        assert_eq!(world.sticks()[2].endpoints(), (ParticleId::new(2), ParticleId::new(0)));
    }

    #[test]
    fn unknown_point_fails_fast() {
        let err = triangle().stick("left", "nowhere").build().unwrap_err();
        assert_eq!(err, SimError::UnknownPoint { name: String::from("nowhere") });
    }

    #[test]
    fn duplicate_point_is_rejected() {
        let err = triangle().point("left", 0.0, 0.0).build().unwrap_err();
        assert_eq!(err, SimError::DuplicatePoint { name: String::from("left") });
    }

    #[test]
    fn pinned_point_ignores_old_position() {
        let mut scenario = Scenario::<f64>::new("pin").pinned_point("p", 1.0, 1.0);
        scenario.points[0].oldx = Some(0.0);
        let world = scenario.build().unwrap();
        assert_eq!(world.particles()[0].prev_pos, Vec2::new(1.0, 1.0));
    }
}
