//! Fixed-step gravitational simulation of a handful of point masses.
//!
//! A [`Field`] owns the points and advances them one step at a time; a
//! [`Driver`] runs oversampled bursts of steps per rendered frame and copies
//! positions and trails out for an external renderer.

pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::vector::{dist, NVec3, NVec6, PhaseVector, EX, EY, EZ, ZERO};
pub use simulation::trajectory::TrajectoryBuffer;
pub use simulation::states::{Body, Point, Source};
pub use simulation::forces::{AccelSet, AccelerationLaw, NewtonianGravity};
pub use simulation::integrator::Integrator;
pub use simulation::field::{Field, FieldOptions, TrailSampling};
pub use simulation::engine::{Driver, FrameSnapshot, SECS_PER_DAY};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig, TrailSamplingConfig};

pub use error::ConfigError;

pub use benchmark::benchmark::{bench_integrators, BenchRow};
