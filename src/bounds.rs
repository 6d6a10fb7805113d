//! Collision response against the four edges of the world rectangle.

use crate::float::Float;
use crate::particle::Particle;

/// How a particle that crossed a wall is put back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BounceMode {
    /// Reflect the last step's segment across the wall. The normal component
    /// is inverted and damped, the tangential component is kept.
    #[default]
    Mirror,
    /// Snap the offending coordinate onto the wall and aim the previous
    /// position so the next step travels back inward.
    Clamp,
}

/// The wall a particle was bounced off.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    /// `y > height`
    Floor,
    /// `y < 0`
    Ceiling,
    /// `x < 0`
    Left,
    /// `x > width`
    Right,
}

impl Edge {
    /// Whether `coord` (on this edge's axis) lies beyond a wall at `wall`.
    fn is_past<F: Float>(self, coord: F, wall: F) -> bool {
        match self {
            Edge::Floor | Edge::Right => coord > wall,
            Edge::Ceiling | Edge::Left => coord < wall,
        }
    }
}

/// Walls a particle was bounced off in one call, at most one per axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    /// [`Edge::Floor`] or [`Edge::Ceiling`].
    pub vertical: Option<Edge>,
    /// [`Edge::Left`] or [`Edge::Right`].
    pub horizontal: Option<Edge>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }

    /// Vertical edge first, then horizontal.
    pub fn edges(self) -> impl Iterator<Item = Edge> {
        self.vertical.into_iter().chain(self.horizontal)
    }
}

/// The rectangle `[0, width] x [0, height]` with its restitution settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Boundary<F: Float> {
    pub width: F,
    pub height: F,
    /// Fraction of normal velocity kept after a bounce.
    pub bounce: F,
    pub mode: BounceMode,
}

impl<F: Float> Boundary<F> {
    pub fn new(width: F, height: F, bounce: F, mode: BounceMode) -> Self {
        Boundary { width, height, bounce, mode }
    }

    /// Violated walls, checked per axis: floor before ceiling, left before
    /// right.
    pub fn violated_edges(&self, particle: &Particle<F>) -> Contact {
        let pos = particle.pos;
        let vertical = if pos.y > self.height {
            Some(Edge::Floor)
        } else if pos.y < F::zero() {
            Some(Edge::Ceiling)
        } else {
            None
        };
        let horizontal = if pos.x < F::zero() {
            Some(Edge::Left)
        } else if pos.x > self.width {
            Some(Edge::Right)
        } else {
            None
        };
        Contact { vertical, horizontal }
    }

    /// Resolve wall crossings on both axes. Pinned particles are skipped.
    pub fn resolve(&self, particle: &mut Particle<F>) -> Contact {
        if particle.pinned {
            return Contact::default();
        }
        let contact = self.violated_edges(particle);
        for edge in contact.edges() {
            self.bounce_off(edge, particle);
        }
        contact
    }

    fn bounce_off(&self, edge: Edge, particle: &mut Particle<F>) {
        let (wall, pos, prev) = match edge {
            Edge::Floor => (self.height, &mut particle.pos.y, &mut particle.prev_pos.y),
            Edge::Ceiling => (F::zero(), &mut particle.pos.y, &mut particle.prev_pos.y),
            Edge::Left => (F::zero(), &mut particle.pos.x, &mut particle.prev_pos.x),
            Edge::Right => (self.width, &mut particle.pos.x, &mut particle.prev_pos.x),
        };
        let velocity = *pos - *prev;
        // Mirroring needs the last step to have crossed the wall. A particle
        // that was already outside (dropped there by a drag) gets clamped.
        let mirror = self.mode == BounceMode::Mirror && !edge.is_past(*prev, wall);
        if mirror {
            *prev = F::two() * wall - *prev;
            *pos = *prev - velocity * self.bounce;
            // A shallow crossing with bounce < 1 can mirror to a point
            // still past the wall. Slide the pair back, keeping velocity.
            if edge.is_past(*pos, wall) {
                *prev = *prev + (wall - *pos);
                *pos = wall;
            }
        } else {
            *pos = wall;
            *prev = wall + velocity * self.bounce;
        }
    }
}
