//! Simulation constants.

use crate::bounds::{BounceMode, Boundary};
use crate::error::SimError;
use crate::float::Float;

/// World size, forces, restitution and drag settings.
///
/// # Builder Pattern
/// ```
/// use stickworld::config::SimConfig;
/// use stickworld::bounds::BounceMode;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_size(800.0, 600.0)
///     .with_gravity(0.3)
///     .with_bounce_mode(BounceMode::Clamp)
///     .with_relaxation_passes(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig<F: Float> {
    /// World width; the right wall sits at `x = width`. Default: 500.
    pub width: F,
    /// World height; the floor sits at `y = height`. Default: 500.
    pub height: F,
    /// Added to `y` once per step. Default: 0.5.
    pub gravity: F,
    /// Velocity kept per step, in [0, 1]. Default: 0.995.
    pub friction: F,
    /// Normal velocity kept after hitting a wall, in [0, 1]. Default: 0.9.
    pub bounce: F,
    /// Half-size of the pick box around a press. Default: 10.
    pub drag_tolerance: F,
    /// Default: [`BounceMode::Mirror`].
    pub bounce_mode: BounceMode,
    /// Stick sweeps per frame. Default: 1.
    pub relaxation_passes: usize,
}

impl<F: Float> SimConfig<F> {
    pub fn new() -> Self {
        SimConfig {
            width: F::from_f32(500.0),
            height: F::from_f32(500.0),
            gravity: F::from_f32(0.5),
            friction: F::from_f32(0.995),
            bounce: F::from_f32(0.9),
            drag_tolerance: F::from_f32(10.0),
            bounce_mode: BounceMode::Mirror,
            relaxation_passes: 1,
        }
    }

    pub fn with_size(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_drag_tolerance(mut self, tolerance: F) -> Self {
        self.drag_tolerance = tolerance;
        self
    }

    pub fn with_bounce_mode(mut self, mode: BounceMode) -> Self {
        self.bounce_mode = mode;
        self
    }

    /// Set the number of stick sweeps per frame (at least 1).
    pub fn with_relaxation_passes(mut self, passes: usize) -> Self {
        self.relaxation_passes = passes.max(1);
        self
    }

    /// The wall rectangle described by this config.
    pub fn boundary(&self) -> Boundary<F> {
        Boundary::new(self.width, self.height, self.bounce, self.bounce_mode)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), SimError> {
        let unit = |v: F| v.is_finite() && v >= F::zero() && v <= F::one();

        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= F::zero()
            || self.height <= F::zero()
        {
            return Err(SimError::InvalidWorldSize);
        }
        if !self.gravity.is_finite() {
            return Err(SimError::InvalidGravity);
        }
        if !unit(self.friction) {
            return Err(SimError::InvalidFriction);
        }
        if !unit(self.bounce) {
            return Err(SimError::InvalidBounce);
        }
        if !self.drag_tolerance.is_finite() || self.drag_tolerance < F::zero() {
            return Err(SimError::InvalidTolerance);
        }
        if self.relaxation_passes == 0 {
            return Err(SimError::InvalidRelaxationPasses);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
