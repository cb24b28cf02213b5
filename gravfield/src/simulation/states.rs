//! Core state types for the point-mass engine
//!
//! - `Body`: initial conditions handed to the field at construction
//! - `Point`: a simulated mass with its phase-space state and trail
//! - `Source`: a copied `(mass, position)` pair read by acceleration laws
//!
//! Points are owned by the `Field`; outside code only gets shared references
//! or copies.

use super::trajectory::TrajectoryBuffer;
use super::vector::{NVec3, NVec6, PhaseVector, ZERO};

/// Initial conditions of one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub mass: f64,       // mass
    pub position: NVec3, // initial position
    pub velocity: NVec3, // initial velocity
}

impl Body {
    pub fn new(mass: f64, position: NVec3, velocity: NVec3) -> Self {
        Self { mass, position, velocity }
    }

    /// Body resting at the origin
    pub fn at_rest(mass: f64) -> Self {
        Self::new(mass, ZERO, ZERO)
    }
}

/// Mass and position of a point at the start of a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Source {
    pub mass: f64,
    pub position: NVec3,
}

/// A simulated point mass
#[derive(Debug, Clone)]
pub struct Point {
    mass: f64,                    // fixed at construction
    state: NVec6,                 // position (upper) and velocity (lower)
    trajectory: TrajectoryBuffer, // recent positions, oldest first
}

impl Point {
    pub(crate) fn new(body: &Body, trajectory: TrajectoryBuffer) -> Self {
        Self {
            mass: body.mass,
            state: NVec6::from_halves(&body.position, &body.velocity),
            trajectory,
        }
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn state(&self) -> &NVec6 {
        &self.state
    }

    #[inline]
    pub fn position(&self) -> NVec3 {
        self.state.upper()
    }

    #[inline]
    pub fn velocity(&self) -> NVec3 {
        self.state.lower()
    }

    #[inline]
    pub fn trajectory(&self) -> &TrajectoryBuffer {
        &self.trajectory
    }

    /// Linear momentum m·v
    pub fn momentum(&self) -> NVec3 {
        self.mass * self.velocity()
    }

    /// Kinetic energy ½·m·|v|²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity().norm_squared()
    }

    pub fn source(&self) -> Source {
        Source {
            mass: self.mass,
            position: self.position(),
        }
    }

    pub(crate) fn set_state(&mut self, state: NVec6) {
        self.state = state;
    }

    pub(crate) fn record_position(&mut self) {
        let position = self.position();
        self.trajectory.push(position);
    }
}
