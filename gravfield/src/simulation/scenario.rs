//! Build a ready-to-run simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`: a frame
//! `Driver` owning a gravitational `Field` with the bodies at t = 0, plus the
//! constants the host needs to present the run.

use log::debug;

use crate::configuration::config::ScenarioConfig;
use crate::error::ConfigError;
use super::engine::Driver;
use super::field::{Field, FieldOptions};
use super::states::Body;

/// Fully initialised simulation
pub struct Scenario {
    pub driver: Driver,
    pub g: f64,          // gravitational constant
    pub framerate: f64,  // rendered frames per real second
    pub frame_span: f64, // simulated seconds per frame
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| bc.to_body(i))
            .collect::<Result<Vec<Body>, _>>()?;

        let p = &cfg.parameters;
        let e = &cfg.engine;
        let options = FieldOptions {
            integrator: e.integrator.into(),
            trail_capacity: e.trail_capacity,
            sampling: e.trail_sampling.into(),
            prefill_trails: e.prefill_trails,
        };

        let frame_span = p.frame_span();
        if !(frame_span.is_finite() && frame_span > 0.0) {
            return Err(ConfigError::InvalidFrameSpan(frame_span));
        }

        let field = Field::gravity(&bodies, p.g, p.dt(), options)?;
        let driver = Driver::with_substeps(field, p.samples_per_frame as usize);

        debug!(
            "scenario: {} bodies, G = {:e}, {} frames/s",
            bodies.len(),
            p.g,
            p.framerate
        );

        Ok(Self {
            driver,
            g: p.g,
            framerate: p.framerate,
            frame_span,
        })
    }
}
