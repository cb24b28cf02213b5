//! Acceleration laws for the point-mass engine
//!
//! A law maps a target position and an immutable snapshot of source masses to
//! the net acceleration at that position. Laws never see or mutate `Point`s,
//! only the copied `Source` values, so every point of a step can be evaluated
//! against the same snapshot in any order.

use super::states::Source;
use super::vector::{dist, NVec3};

/// Net acceleration at `position` caused by `sources`
pub trait AccelerationLaw: Send + Sync {
    fn acceleration(&self, position: &NVec3, sources: &[Source]) -> NVec3;
}

/// Any `Fn(&NVec3, &[Source]) -> NVec3` closure is a law
impl<F> AccelerationLaw for F
where
    F: Fn(&NVec3, &[Source]) -> NVec3 + Send + Sync,
{
    fn acceleration(&self, position: &NVec3, sources: &[Source]) -> NVec3 {
        self(position, sources)
    }
}

/// Newtonian point-mass gravity without softening
///
/// a(p) = Σ G·mᵢ·(pᵢ − p) / |pᵢ − p|³
///
/// A source sitting exactly on `p` has its cubed distance taken as +∞, so it
/// contributes nothing. This keeps a point from pulling on itself and turns
/// coincident distinct points into a zero term instead of a division by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Total pairwise potential energy −Σ_{i<j} G·mᵢ·mⱼ / rᵢⱼ
    ///
    /// Coincident pairs are skipped, same as in `acceleration`.
    pub fn potential_energy(&self, sources: &[Source]) -> f64 {
        let mut pe = 0.0;
        for (i, si) in sources.iter().enumerate() {
            for sj in &sources[i + 1..] {
                let r = dist(&si.position, &sj.position);
                if r > 0.0 {
                    pe -= self.g * si.mass * sj.mass / r;
                }
            }
        }
        pe
    }
}

impl AccelerationLaw for NewtonianGravity {
    fn acceleration(&self, position: &NVec3, sources: &[Source]) -> NVec3 {
        sources.iter().fold(NVec3::zeros(), |acc, s| {
            let mut dist3 = dist(&s.position, position).powi(3);
            if dist3 == 0.0 {
                dist3 = f64::INFINITY;
            }
            let k = self.g * s.mass / dist3;
            acc + (s.position - position) * k
        })
    }
}

/// Collection of acceleration laws (gravity, drag, etc.)
/// Contributions of every term are summed into one acceleration
#[derive(Default)]
pub struct AccelSet {
    terms: Vec<Box<dyn AccelerationLaw>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl AccelerationLaw + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl AccelerationLaw for AccelSet {
    fn acceleration(&self, position: &NVec3, sources: &[Source]) -> NVec3 {
        self.terms
            .iter()
            .fold(NVec3::zeros(), |acc, term| acc + term.acceleration(position, sources))
    }
}
