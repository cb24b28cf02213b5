//! Vector primitives for the point-mass engine
//!
//! - `NVec3`: 3d position / velocity / acceleration
//! - `NVec6`: phase-space state, position in the upper half and velocity
//!   (transiently acceleration) in the lower half
//!
//! Both are plain nalgebra value types: arithmetic returns new values and
//! never mutates the operands.

use nalgebra::{Vector3, Vector6};

pub type NVec3 = Vector3<f64>;
pub type NVec6 = Vector6<f64>;

/// Unit vector along x
pub const EX: NVec3 = NVec3::new(1.0, 0.0, 0.0);
/// Unit vector along y
pub const EY: NVec3 = NVec3::new(0.0, 1.0, 0.0);
/// Unit vector along z
pub const EZ: NVec3 = NVec3::new(0.0, 0.0, 1.0);
/// Origin
pub const ZERO: NVec3 = NVec3::new(0.0, 0.0, 0.0);

/// Euclidean distance |a - b|
#[inline]
pub fn dist(a: &NVec3, b: &NVec3) -> f64 {
    (a - b).norm()
}

/// Split access to the two 3d halves of a 6d state vector
pub trait PhaseVector {
    /// Build a state from its position (upper) and velocity (lower) halves
    fn from_halves(upper: &NVec3, lower: &NVec3) -> Self;
    fn upper(&self) -> NVec3;
    fn lower(&self) -> NVec3;
    fn set_upper(&mut self, upper: &NVec3);
    fn set_lower(&mut self, lower: &NVec3);
}

impl PhaseVector for NVec6 {
    fn from_halves(upper: &NVec3, lower: &NVec3) -> Self {
        NVec6::new(upper.x, upper.y, upper.z, lower.x, lower.y, lower.z)
    }

    #[inline]
    fn upper(&self) -> NVec3 {
        self.fixed_rows::<3>(0).into_owned()
    }

    #[inline]
    fn lower(&self) -> NVec3 {
        self.fixed_rows::<3>(3).into_owned()
    }

    fn set_upper(&mut self, upper: &NVec3) {
        self.fixed_rows_mut::<3>(0).copy_from(upper);
    }

    fn set_lower(&mut self, lower: &NVec3) {
        self.fixed_rows_mut::<3>(3).copy_from(lower);
    }
}
