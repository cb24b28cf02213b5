//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator and trajectory options
//! - [`ParametersConfig`] – physical constant and frame timing
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "symplectic_euler"  # "euler", "verlet" or "rk4"
//!   trail_sampling: "every_frame"   # or "every_step"
//!   trail_capacity: 4096
//!   prefill_trails: true
//!
//! parameters:
//!   G: 6.67408e-11          # gravitational constant
//!   speed: 2.628e6          # simulated seconds per real second
//!   framerate: 60.0         # rendered frames per real second
//!   samples_per_frame: 8192 # field updates per frame
//!
//! bodies:
//!   - m: 1.9891e30          # x and v default to the origin / rest
//!   - m: 5.9736e24
//!     x: [1.47098074e11, 0.0, 0.0]
//!     v: [0.0, 3.0287e4, 0.0]
//! ```
//!
//! The fixed step is `speed / framerate / samples_per_frame` simulated seconds.
//! Everything is validated when the scenario is built, see
//! [`crate::simulation::scenario::Scenario`].

use std::io::Read;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::field::TrailSampling;
use crate::simulation::integrator::Integrator;
use crate::simulation::states::Body;
use crate::simulation::vector::{NVec3, ZERO};

/// Which integrator the field uses
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // explicit Euler, first order, drifts outward on orbits
    Euler,

    #[default]
    #[serde(rename = "symplectic_euler")] // kick-drift Euler, first order, bounded energy error
    SymplecticEuler,

    #[serde(rename = "verlet")] // velocity Verlet, second order
    Verlet,

    #[serde(rename = "rk4")] // classical Runge–Kutta, fourth order, not symplectic
    Rk4,
}

impl From<IntegratorConfig> for Integrator {
    fn from(cfg: IntegratorConfig) -> Self {
        match cfg {
            IntegratorConfig::Euler => Integrator::Euler,
            IntegratorConfig::SymplecticEuler => Integrator::SymplecticEuler,
            IntegratorConfig::Verlet => Integrator::Verlet,
            IntegratorConfig::Rk4 => Integrator::Rk4,
        }
    }
}

/// When trajectory samples are taken
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailSamplingConfig {
    #[serde(rename = "every_step")]
    EveryStep,

    #[default]
    #[serde(rename = "every_frame")]
    EveryFrame,
}

impl From<TrailSamplingConfig> for TrailSampling {
    fn from(cfg: TrailSamplingConfig) -> Self {
        match cfg {
            TrailSamplingConfig::EveryStep => TrailSampling::EveryStep,
            TrailSamplingConfig::EveryFrame => TrailSampling::EveryFrame,
        }
    }
}

fn default_trail_capacity() -> usize {
    4096
}

/// Engine-level options
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig, // scheme advancing every point
    #[serde(default)]
    pub trail_sampling: TrailSamplingConfig, // per update or per rendered frame
    #[serde(default = "default_trail_capacity")]
    pub trail_capacity: usize, // samples kept per body
    #[serde(default)]
    pub prefill_trails: bool, // start each trail full of the initial position
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::default(),
            trail_sampling: TrailSamplingConfig::default(),
            trail_capacity: default_trail_capacity(),
            prefill_trails: false,
        }
    }
}

/// Physical constant and frame timing
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub speed: f64,             // simulated seconds per real second
    pub framerate: f64,         // rendered frames per real second
    pub samples_per_frame: u32, // oversampling ratio
}

impl ParametersConfig {
    /// Simulated seconds covered by one rendered frame
    pub fn frame_span(&self) -> f64 {
        self.speed / self.framerate
    }

    /// Fixed integration step in simulated seconds
    pub fn dt(&self) -> f64 {
        self.frame_span() / f64::from(self.samples_per_frame)
    }
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub m: f64, // mass
    #[serde(default)]
    pub x: Option<Vec<f64>>, // initial position, origin if absent
    #[serde(default)]
    pub v: Option<Vec<f64>>, // initial velocity, rest if absent
}

impl BodyConfig {
    /// Runtime body, checking that vectors have three components
    pub fn to_body(&self, index: usize) -> Result<Body, ConfigError> {
        Ok(Body::new(
            self.m,
            vec3(index, "x", self.x.as_deref())?,
            vec3(index, "v", self.v.as_deref())?,
        ))
    }
}

fn vec3(index: usize, field: &'static str, comps: Option<&[f64]>) -> Result<NVec3, ConfigError> {
    match comps {
        None => Ok(ZERO),
        Some([x, y, z]) => Ok(NVec3::new(*x, *y, *z)),
        Some(other) => Err(ConfigError::BadDimension {
            index,
            field,
            len: other.len(),
        }),
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // engine options
    pub parameters: ParametersConfig, // constants and timing
    pub bodies: Vec<BodyConfig>, // initial state of the system
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}
