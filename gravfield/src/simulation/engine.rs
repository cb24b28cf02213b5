//! Frame driver
//!
//! The host asks for one frame at a time. Each frame is a synchronous burst
//! of `substeps_per_frame` field updates followed by a copy of everything a
//! renderer needs. Nothing suspends inside a burst, and the renderer only ever
//! receives copies.

use log::{debug, trace};

use crate::error::ConfigError;
use super::field::{Field, TrailSampling};
use super::forces::{AccelerationLaw, NewtonianGravity};
use super::vector::NVec3;

pub const SECS_PER_DAY: f64 = 86_400.0;

/// Render data copied out of the field after a frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,                     // frames completed so far
    pub time: f64,                      // simulated seconds
    pub positions: Vec<NVec3>,          // one per point, field order
    pub trajectories: Vec<Vec<NVec3>>,  // one per point, oldest sample first
}

pub struct Driver<L = NewtonianGravity> {
    field: Field<L>,
    substeps: usize, // field updates per frame
    frames: u64,     // monotonic frame counter
}

impl<L: AccelerationLaw> Driver<L> {
    /// Driver covering `frame_span` simulated seconds per frame
    ///
    /// Substeps per frame is `ceil(frame_span / dt)`, ignoring rounding noise
    /// when the ratio is an integer up to floating point error.
    pub fn new(field: Field<L>, frame_span: f64) -> Result<Self, ConfigError> {
        if !(frame_span.is_finite() && frame_span > 0.0) {
            return Err(ConfigError::InvalidFrameSpan(frame_span));
        }
        let ratio = frame_span / field.dt();
        let nearest = ratio.round();
        let substeps = if (ratio - nearest).abs() <= 1e-9 * nearest.max(1.0) {
            nearest
        } else {
            ratio.ceil()
        };
        Ok(Self::with_substeps(field, substeps as usize))
    }

    /// Driver running exactly `substeps` updates per frame (at least one)
    pub fn with_substeps(field: Field<L>, substeps: usize) -> Self {
        let substeps = substeps.max(1);
        debug!(
            "driver: {} substeps per frame, {:e} s simulated per frame",
            substeps,
            substeps as f64 * field.dt()
        );
        Self {
            field,
            substeps,
            frames: 0,
        }
    }

    /// Run one full burst without copying render data
    pub fn step_frame(&mut self) {
        self.field.advance(self.substeps);
        if self.field.sampling() == TrailSampling::EveryFrame {
            self.field.record_trajectories();
        }
        self.frames += 1;
        trace!("frame {} done at t = {:e} s", self.frames, self.field.elapsed());
    }

    /// Run one full burst and copy out positions and trajectories
    pub fn advance_frame(&mut self) -> FrameSnapshot {
        self.step_frame();
        self.snapshot()
    }

    /// Run `frames` frames, handing each snapshot to `on_frame`
    pub fn run<F>(&mut self, frames: u64, mut on_frame: F)
    where
        F: FnMut(&FrameSnapshot),
    {
        for _ in 0..frames {
            let snap = self.advance_frame();
            on_frame(&snap);
        }
    }

    /// Copy of the current render data
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frames,
            time: self.field.elapsed(),
            positions: self.field.positions(),
            trajectories: self
                .field
                .points()
                .iter()
                .map(|p| p.trajectory().to_vec())
                .collect(),
        }
    }

    pub fn field(&self) -> &Field<L> {
        &self.field
    }

    pub fn into_field(self) -> Field<L> {
        self.field
    }

    pub fn substeps_per_frame(&self) -> usize {
        self.substeps
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Simulated seconds since start
    pub fn elapsed(&self) -> f64 {
        self.field.elapsed()
    }

    pub fn elapsed_days(&self) -> f64 {
        self.field.elapsed() / SECS_PER_DAY
    }
}
