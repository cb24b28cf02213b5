//! Fixed-step integrators for a single point
//!
//! Every scheme advances the 6d states `(x, v)` of a whole system by `dt`.
//! Multi-stage schemes (Verlet, RK4) move all points to a stage before the
//! accelerations of that stage are evaluated, so the coupling between points
//! keeps the scheme's full order.
//!
//! All schemes are deterministic, fixed-step and total over finite inputs.
//! Stability is the caller's business (pick `dt` small enough).

use super::vector::{NVec3, NVec6, PhaseVector};

/// Integration scheme used to advance each point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Integrator {
    /// Explicit Euler: x += dt·v, v += dt·a(x)
    Euler,
    /// Semi-implicit (symplectic) Euler: kick then drift
    #[default]
    SymplecticEuler,
    /// Velocity Verlet: half kick, drift, half kick
    Verlet,
    /// Classical 4th order Runge-Kutta on the 6d state
    Rk4,
}

impl Integrator {
    pub const ALL: [Integrator; 4] = [
        Integrator::Euler,
        Integrator::SymplecticEuler,
        Integrator::Verlet,
        Integrator::Rk4,
    ];

    /// Global order of accuracy of the scheme
    pub fn order(&self) -> u32 {
        match self {
            Integrator::Euler | Integrator::SymplecticEuler => 1,
            Integrator::Verlet => 2,
            Integrator::Rk4 => 4,
        }
    }

    /// Number of acceleration evaluations per step
    pub fn evaluations(&self) -> u32 {
        match self {
            Integrator::Euler | Integrator::SymplecticEuler => 1,
            Integrator::Verlet => 2,
            Integrator::Rk4 => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Integrator::Euler => "euler",
            Integrator::SymplecticEuler => "symplectic_euler",
            Integrator::Verlet => "verlet",
            Integrator::Rk4 => "rk4",
        }
    }

    /// Advance a single `state` by one step of size `dt` under `accel`
    pub fn step<A>(&self, state: &NVec6, accel: A, dt: f64) -> NVec6
    where
        A: Fn(&NVec3) -> NVec3,
    {
        let single = |xs: &[NVec3]| -> Vec<NVec3> { xs.iter().map(|x| accel(x)).collect() };
        let next = self.step_system(std::slice::from_ref(state), single, dt);
        next[0]
    }

    /// Advance every state of a system by one step of size `dt`
    ///
    /// `accel` maps the positions of all points at one stage to their
    /// accelerations, in the same order. Each stage moves every point before
    /// the next acceleration evaluation, so all points always see a
    /// consistent set of positions.
    pub fn step_system<A>(&self, states: &[NVec6], mut accel: A, dt: f64) -> Vec<NVec6>
    where
        A: FnMut(&[NVec3]) -> Vec<NVec3>,
    {
        let xs: Vec<NVec3> = states.iter().map(|s| s.upper()).collect(); // positions x_n
        let vs: Vec<NVec3> = states.iter().map(|s| s.lower()).collect(); // velocities v_n

        match self {
            Integrator::Euler => {
                let a = accel(&xs);
                (0..states.len())
                    .map(|i| NVec6::from_halves(&(xs[i] + dt * vs[i]), &(vs[i] + dt * a[i])))
                    .collect()
            }
            Integrator::SymplecticEuler => {
                let a = accel(&xs);
                (0..states.len())
                    .map(|i| {
                        // Kick: v_n+1 = v_n + dt a(x_n)
                        let v1 = vs[i] + dt * a[i];
                        // Drift: x_n+1 = x_n + dt v_n+1
                        NVec6::from_halves(&(xs[i] + dt * v1), &v1)
                    })
                    .collect()
            }
            Integrator::Verlet => {
                let half_dt = 0.5 * dt;
                let a_old = accel(&xs);

                // Kick: v_n+1/2 = v_n + (dt/2) a(x_n)
                let v_half: Vec<NVec3> = vs.iter().zip(&a_old).map(|(v, a)| v + half_dt * a).collect();

                // Drift every point before looking at forces again: x_n+1 = x_n + dt v_n+1/2
                let x_new: Vec<NVec3> = xs.iter().zip(&v_half).map(|(x, v)| x + dt * v).collect();

                // a_n+1 from the drifted positions of all points
                let a_new = accel(&x_new);

                // Second kick: v_n+1 = v_n+1/2 + (dt/2) a(x_n+1)
                (0..states.len())
                    .map(|i| NVec6::from_halves(&x_new[i], &(v_half[i] + half_dt * a_new[i])))
                    .collect()
            }
            Integrator::Rk4 => {
                // d/dt (x, v) = (v, a(x)); the lower half carries the acceleration
                let mut deriv = |ss: &[NVec6]| -> Vec<NVec6> {
                    let positions: Vec<NVec3> = ss.iter().map(|s| s.upper()).collect();
                    let a = accel(&positions);
                    ss.iter().zip(&a).map(|(s, a)| NVec6::from_halves(&s.lower(), a)).collect()
                };
                let offset = |k: &[NVec6], h: f64| -> Vec<NVec6> {
                    states.iter().zip(k).map(|(s, k)| s + h * k).collect()
                };
                let half_dt = 0.5 * dt;

                let k1 = deriv(states);
                let k2 = deriv(&offset(&k1, half_dt));
                let k3 = deriv(&offset(&k2, half_dt));
                let k4 = deriv(&offset(&k3, dt));

                (0..states.len())
                    .map(|i| states[i] + (dt / 6.0) * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]))
                    .collect()
            }
        }
    }
}
