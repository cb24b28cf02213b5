//! The field: every point plus the law and scheme that move them
//!
//! `Field::update` advances all points by one fixed step `dt`. The update is
//! simultaneous: every acceleration evaluation sees one consistent snapshot of
//! all positions (the pre-step state, or a stage where every point has been
//! moved together), and new states are written back only once the whole step
//! is done. Processing order therefore never changes the result.

use log::debug;

use crate::error::ConfigError;
use super::forces::{AccelerationLaw, NewtonianGravity};
use super::integrator::Integrator;
use super::states::{Body, Point, Source};
use super::trajectory::TrajectoryBuffer;
use super::vector::{NVec3, NVec6};

/// When trajectories receive a new sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailSampling {
    /// Every `update()` pushes the new positions
    #[default]
    EveryStep,
    /// Only `record_trajectories()` pushes, typically once per rendered frame
    EveryFrame,
}

/// Optional knobs of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOptions {
    pub integrator: Integrator,  // per-point scheme
    pub trail_capacity: usize,   // samples kept per trajectory
    pub sampling: TrailSampling, // when trajectories are fed
    pub prefill_trails: bool,    // start trails full of the initial position
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            integrator: Integrator::default(),
            trail_capacity: 1024,
            sampling: TrailSampling::default(),
            prefill_trails: false,
        }
    }
}

pub struct Field<L = NewtonianGravity> {
    points: Vec<Point>, // stable order, index i matches render object i
    law: L,
    dt: f64,
    integrator: Integrator,
    sampling: TrailSampling,
    steps: u64, // completed updates

    // scratch buffers reused by every update
    masses: Vec<f64>,     // fixed, point order
    sources: Vec<Source>, // stage snapshot handed to the law
}

impl Field<NewtonianGravity> {
    /// Gravitational field with default options
    pub fn new(bodies: &[Body], g: f64, dt: f64) -> Result<Self, ConfigError> {
        Self::gravity(bodies, g, dt, FieldOptions::default())
    }

    /// Gravitational field with explicit options
    pub fn gravity(bodies: &[Body], g: f64, dt: f64, options: FieldOptions) -> Result<Self, ConfigError> {
        if !g.is_finite() {
            return Err(ConfigError::InvalidGravity(g));
        }
        Self::with_options(bodies, NewtonianGravity::new(g), dt, options)
    }

    /// Total gravitational potential energy of the current state
    pub fn potential_energy(&self) -> f64 {
        self.law.potential_energy(&self.sources())
    }

    /// Kinetic plus potential energy
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}

impl<L: AccelerationLaw> Field<L> {
    /// Field driven by an arbitrary acceleration law
    pub fn with_options(bodies: &[Body], law: L, dt: f64, options: FieldOptions) -> Result<Self, ConfigError> {
        validate(bodies, dt, &options)?;

        let points: Vec<Point> = bodies
            .iter()
            .map(|b| {
                let trail = if options.prefill_trails {
                    TrajectoryBuffer::filled(options.trail_capacity, b.position)
                } else {
                    TrajectoryBuffer::new(options.trail_capacity)
                };
                Point::new(b, trail)
            })
            .collect();

        let n = points.len();
        let masses = points.iter().map(Point::mass).collect();
        debug!(
            "field: {} points, dt = {:e}, integrator = {}, trail capacity = {}",
            n,
            dt,
            options.integrator.name(),
            options.trail_capacity
        );

        Ok(Self {
            points,
            law,
            dt,
            integrator: options.integrator,
            sampling: options.sampling,
            steps: 0,
            masses,
            sources: Vec::with_capacity(n),
        })
    }

    /// Advance every point by exactly `dt`
    pub fn update(&mut self) {
        // Snapshot of every state before anything moves
        let states: Vec<NVec6> = self.points.iter().map(|p| *p.state()).collect();

        let law = &self.law;
        let masses = &self.masses;
        let sources = &mut self.sources;

        // Accelerations of all points for one consistent set of positions.
        // A point's own source sits at distance zero and contributes nothing.
        let accel = |positions: &[NVec3]| -> Vec<NVec3> {
            sources.clear();
            sources.extend(
                masses
                    .iter()
                    .zip(positions)
                    .map(|(&mass, &position)| Source { mass, position }),
            );
            positions.iter().map(|x| law.acceleration(x, &sources[..])).collect()
        };

        let next = self.integrator.step_system(&states, accel, self.dt);

        // Write back only after all points were integrated
        let every_step = self.sampling == TrailSampling::EveryStep;
        for (point, state) in self.points.iter_mut().zip(next) {
            point.set_state(state);
            if every_step {
                point.record_position();
            }
        }

        self.steps += 1;
    }

    /// Run `n` updates back to back
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.update();
        }
    }

    /// Push the current position of every point into its trajectory
    pub fn record_trajectories(&mut self) {
        for point in &mut self.points {
            point.record_position();
        }
    }

    // ----- read access -----

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: construction rejects empty body lists
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn law(&self) -> &L {
        &self.law
    }

    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    pub fn sampling(&self) -> TrailSampling {
        self.sampling
    }

    /// Number of completed updates
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time since construction
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.dt
    }

    /// Current positions, in point order
    pub fn positions(&self) -> Vec<NVec3> {
        self.points.iter().map(Point::position).collect()
    }

    /// Current `(mass, position)` of every point
    pub fn sources(&self) -> Vec<Source> {
        self.points.iter().map(Point::source).collect()
    }

    // ----- diagnostics -----

    pub fn total_mass(&self) -> f64 {
        self.points.iter().map(Point::mass).sum()
    }

    /// Σ mᵢ·vᵢ
    pub fn total_momentum(&self) -> NVec3 {
        self.points.iter().fold(NVec3::zeros(), |acc, p| acc + p.momentum())
    }

    /// Σ mᵢ·xᵢ / Σ mᵢ
    pub fn center_of_mass(&self) -> NVec3 {
        let weighted = self
            .points
            .iter()
            .fold(NVec3::zeros(), |acc, p| acc + p.mass() * p.position());
        weighted / self.total_mass()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.points.iter().map(Point::kinetic_energy).sum()
    }
}

fn validate(bodies: &[Body], dt: f64, options: &FieldOptions) -> Result<(), ConfigError> {
    if bodies.is_empty() {
        return Err(ConfigError::NoBodies);
    }
    if !(dt.is_finite() && dt > 0.0) {
        return Err(ConfigError::InvalidStep(dt));
    }
    if options.trail_capacity == 0 {
        return Err(ConfigError::InvalidTrailCapacity);
    }
    for (index, b) in bodies.iter().enumerate() {
        if !(b.mass.is_finite() && b.mass > 0.0) {
            return Err(ConfigError::InvalidMass { index, mass: b.mass });
        }
        let finite = b.position.iter().chain(b.velocity.iter()).all(|c| c.is_finite());
        if !finite {
            return Err(ConfigError::NonFiniteBody { index });
        }
    }
    Ok(())
}
