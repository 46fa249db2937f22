// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Runge-Kutta 4th order (RK4) integration of gravitational motion
//!
//! Advances the coupled system `dp/dt = v`, `dv/dt = acc(p)` with the
//! classical tableau:
//!
//! ```text
//! v1 = v;               a1 = acc(p)
//! v2 = v + 0.5*dt*a1;   a2 = acc(p + 0.5*dt*v1)
//! v3 = v + 0.5*dt*a2;   a3 = acc(p + 0.5*dt*v2)
//! v4 = v + dt*a3;       a4 = acc(p + dt*v3)
//!
//! p' = p + dt/6 * (v1 + 2*v2 + 2*v3 + v4)
//! v' = v + dt/6 * (a1 + 2*a2 + 2*a3 + a4)
//! ```
//!
//! # Frozen sources
//!
//! Within one body's sub-steps, `acc` evaluates every other body at its
//! pre-step position; the sources do not advance along trial trajectories
//! of their own. A whole-set step therefore treats the rest of the system
//! as stationary sources for each body in turn. This is the standard
//! approximation for per-body, per-frame updates; it trades some accuracy
//! against a fully coupled whole-system RK4 and is kept deliberately.
//!
//! # References
//!
//! - Press, W. H., Teukolsky, S. A., Vetterling, W. T., & Flannery, B. P.
//!   (2007). Numerical Recipes (3rd ed.). Section 17.1.
//! - Kutta, W. (1901). Beitrag zur näherungsweisen Integration totaler
//!   Differentialgleichungen. Zeitschrift für Mathematik und Physik, 46.

use crate::gravity::{self, SIM_G};
use crate::math::Vec3;
use crate::set::BodySet;
use super::Integrator;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Advance one `(position, velocity)` pair by a single RK4 step
///
/// `acc` yields the instantaneous acceleration field at an arbitrary trial
/// position. The function is pure and usable on its own for any
/// position-dependent field, not just gravity.
///
/// # Examples
///
/// ```
/// use nbody_core::{rk4_step, Vec3};
///
/// // Uniform field: reproduces p + v*dt + 0.5*a*dt² exactly.
/// let a = Vec3::new(0.0, 0.0, -10.0);
/// let (p, v) = rk4_step(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 0.5, |_| a);
/// assert!((p.z - (-1.25)).abs() < 1e-12);
/// assert!((v.z - (-5.0)).abs() < 1e-12);
/// ```
pub fn rk4_step(p: Vec3, v: Vec3, dt: f64, acc: impl Fn(Vec3) -> Vec3) -> (Vec3, Vec3) {
    let dt_2 = 0.5 * dt;
    let dt_6 = dt / 6.0;

    let v1 = v;
    let a1 = acc(p);
    let v2 = v + dt_2 * a1;
    let a2 = acc(p + dt_2 * v1);
    let v3 = v + dt_2 * a2;
    let a3 = acc(p + dt_2 * v2);
    let v4 = v + dt * a3;
    let a4 = acc(p + dt * v3);

    let p_new = p + (v1 + 2.0 * v2 + 2.0 * v3 + v4) * dt_6;
    let v_new = v + (a1 + 2.0 * a2 + 2.0 * a3 + a4) * dt_6;
    (p_new, v_new)
}

/// Pre-step state of one body, immutable for the duration of a step
#[derive(Clone, Copy)]
struct Snapshot {
    position: Vec3,
    velocity: Vec3,
    mass: f64,
}

/// RK4 integrator for an N-body gravitational system
///
/// Holds the gravitational constant and nothing else: each
/// [`step`](Integrator::step) is a pure function of the body set's current
/// state and `dt`, written back in place.
///
/// Every body is advanced from the same pre-step snapshot and all writes
/// are deferred to a commit pass, so the order bodies were pushed in does
/// not affect the result, and body updates within a step cannot observe
/// each other.
///
/// # Examples
///
/// ```
/// use nbody_core::{Body, BodySet, Integrator, Rk4Integrator, Vec3};
///
/// let mut set = BodySet::new();
/// set.push(Body::new(Vec3::ZERO, 25.0));
/// set.push(
///     Body::builder()
///         .position(Vec3::new(1500.0, 0.0, 0.0))
///         .velocity(Vec3::new(0.0, 1000.0, 0.0))
///         .mass(0.125)
///         .build(),
/// );
///
/// let integrator = Rk4Integrator::with_simulation_g();
/// let advanced = integrator.step(&mut set, 0.01).unwrap();
/// assert_eq!(advanced, 2);
/// ```
pub struct Rk4Integrator {
    g: f64,
}

impl Rk4Integrator {
    /// Create an integrator with the given gravitational constant
    ///
    /// # Panics
    ///
    /// Panics if `g` is negative or not finite.
    pub fn new(g: f64) -> Self {
        assert!(
            g >= 0.0 && g.is_finite(),
            "Gravitational constant must be non-negative and finite"
        );
        Rk4Integrator { g }
    }

    /// Create an integrator with the simulation-scale constant [`SIM_G`]
    pub fn with_simulation_g() -> Self {
        Rk4Integrator::new(SIM_G)
    }

    /// Get the gravitational constant
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Gravitational acceleration at `p` from every snapshot entry but `skip`
    fn field_at(&self, snapshot: &[Snapshot], skip: usize, p: Vec3) -> Vec3 {
        let mut total = Vec3::ZERO;
        for (j, source) in snapshot.iter().enumerate() {
            if j == skip {
                continue;
            }
            total += gravity::acceleration(p, source.position, source.mass, self.g);
        }
        total
    }

    /// Run RK4 for body `i` against the frozen snapshot
    fn advance_one(&self, snapshot: &[Snapshot], i: usize, dt: f64) -> (Vec3, Vec3) {
        let body = snapshot[i];
        rk4_step(body.position, body.velocity, dt, |p| {
            self.field_at(snapshot, i, p)
        })
    }

    /// Compute new states for every body from the shared snapshot
    ///
    /// Reads only the immutable snapshot and produces one result slot per
    /// body, so the outer loop parallelizes without locks.
    fn advance_all(&self, snapshot: &[Snapshot], dt: f64) -> Vec<(Vec3, Vec3)> {
        #[cfg(feature = "parallel")]
        {
            (0..snapshot.len())
                .into_par_iter()
                .map(|i| self.advance_one(snapshot, i, dt))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            (0..snapshot.len())
                .map(|i| self.advance_one(snapshot, i, dt))
                .collect()
        }
    }
}

impl Integrator for Rk4Integrator {
    fn name(&self) -> &str {
        "Runge-Kutta 4"
    }

    fn step(&self, set: &mut BodySet, dt: f64) -> Result<usize, String> {
        self.validate_dt(dt)?;

        // Fail fast before any mutation: one NaN body would otherwise
        // contaminate the whole set on the next step.
        for (i, body) in set.iter().enumerate() {
            if !body.is_valid() {
                return Err(format!(
                    "Body {} has non-finite position or velocity",
                    i
                ));
            }
        }

        if set.is_empty() {
            return Ok(0);
        }

        let snapshot: Vec<Snapshot> = set
            .iter()
            .map(|b| Snapshot {
                position: b.position(),
                velocity: b.velocity(),
                mass: b.mass(),
            })
            .collect();

        let results = self.advance_all(&snapshot, dt);

        // Commit pass: no body observed any of these writes while results
        // were being computed.
        for (body, (position, velocity)) in set.iter_mut().zip(results) {
            body.set_position(position);
            body.set_velocity(velocity);
        }

        Ok(snapshot.len())
    }
}
