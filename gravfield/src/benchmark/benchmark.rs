//! Substep throughput measurements
//!
//! Times `Field::update` for every integrator on a small deterministic
//! system, to see how many substeps per frame a host can afford.

use std::time::Instant;

use crate::error::ConfigError;
use crate::simulation::field::{Field, FieldOptions};
use crate::simulation::integrator::Integrator;
use crate::simulation::states::Body;
use crate::simulation::vector::NVec3;

/// Timing of one integrator
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRow {
    pub bodies: usize,
    pub integrator: Integrator,
    pub steps: usize,
    pub ns_per_step: f64,
}

impl BenchRow {
    /// Steps per 60 Hz frame this timing leaves room for
    pub fn steps_per_frame_at_60hz(&self) -> f64 {
        (1.0e9 / 60.0) / self.ns_per_step
    }
}

/// Deterministic bodies on a loose ring, no rand needed
fn make_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec3::new(
                (i_f * 0.37).sin() * 5.0 + i_f,
                (i_f * 0.13).cos() * 5.0,
                (i_f * 0.07).sin() * 5.0,
            );
            let v = NVec3::new(-x.y, x.x, 0.0) * 0.01;
            Body::new(1.0 + i_f, x, v)
        })
        .collect()
}

/// Time `steps` updates for each integrator and each body count in `ns`
pub fn bench_integrators(ns: &[usize], steps: usize) -> Result<Vec<BenchRow>, ConfigError> {
    let mut rows = Vec::new();

    for &n in ns {
        let bodies = make_bodies(n.max(1));

        for integrator in Integrator::ALL {
            let options = FieldOptions {
                integrator,
                ..FieldOptions::default()
            };
            let mut field = Field::gravity(&bodies, 0.1, 1.0e-3, options)?;

            // Warm up
            field.update();

            let t0 = Instant::now();
            field.advance(steps);
            let elapsed = t0.elapsed().as_secs_f64();

            rows.push(BenchRow {
                bodies: bodies.len(),
                integrator,
                steps,
                ns_per_step: elapsed * 1.0e9 / steps.max(1) as f64,
            });
        }
    }

    Ok(rows)
}
