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
//! Numerical integration of body motion
//!
//! An [`Integrator`] advances every body's position and velocity by one
//! step of a caller-supplied time delta. The crate ships a single scheme,
//! classical 4th-order Runge-Kutta ([`Rk4Integrator`]): explicit,
//! fourth-order accurate (local error O(dt⁵), global O(dt⁴)), four
//! acceleration evaluations per body per step, not symplectic, so energy
//! may drift over very long runs.
//!
//! # Timestep
//!
//! `dt` is chosen by the host each call, commonly a fixed simulation step
//! or the display frame time multiplied by a speed factor. There is no
//! error estimation or adaptive stepping. `dt == 0` is a legal identity
//! step; negative or non-finite `dt` is rejected.

use crate::body::Body;
use crate::set::BodySet;

mod rk4;

pub use rk4::{rk4_step, Rk4Integrator};

/// Kinetic energy of a single body
///
/// KE = 0.5 * m * v²
pub fn kinetic_energy(body: &Body) -> f64 {
    0.5 * body.mass() * body.velocity().magnitude_squared()
}

/// Total kinetic energy of a body set
pub fn total_kinetic_energy(set: &BodySet) -> f64 {
    set.iter().map(kinetic_energy).sum()
}

/// Trait for integration schemes that advance a body set in place
///
/// One `step` call is one bounded, synchronous computation: it reads the
/// set's pre-step state, computes every body's new state from that same
/// snapshot, and writes all results back. A step either fully replaces
/// every body's position and velocity or, on error, none of them.
pub trait Integrator: Send + Sync {
    /// Get the name of this integration scheme
    fn name(&self) -> &str;

    /// Validate a caller-supplied time delta
    ///
    /// Finite and non-negative deltas are accepted; zero is an identity
    /// step. Returns a descriptive error otherwise.
    fn validate_dt(&self, dt: f64) -> Result<(), String> {
        if !dt.is_finite() {
            return Err(format!("Invalid time delta: {}. Must be finite.", dt));
        }
        if dt < 0.0 {
            return Err(format!(
                "Invalid time delta: {}. Must be non-negative.",
                dt
            ));
        }
        Ok(())
    }

    /// Advance every body in the set by one step of `dt`
    ///
    /// Mutates each body's position and velocity in place. Returns the
    /// number of bodies advanced (zero for an empty set). Fails fast,
    /// mutating nothing, if `dt` is invalid or any body carries non-finite
    /// position or velocity.
    fn step(&self, set: &mut BodySet, dt: f64) -> Result<usize, String>;
}
