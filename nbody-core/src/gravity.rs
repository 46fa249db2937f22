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
//! Gravitational acceleration law
//!
//! Newton's law of universal gravitation, expressed as the acceleration a
//! point source induces at an observer position:
//!
//! **a = G * m * r̂ / r²**
//!
//! where `r` is the displacement from observer to source and `m` is the
//! source mass. The observer's own mass cancels out of F = ma and does not
//! appear.
//!
//! # Coincident points
//!
//! When observer and source coincide (`r² == 0`) the contribution is the
//! exact zero vector. This is a singularity guard, not a physical limit:
//! the inverse-square law diverges as r approaches 0, and the zero branch
//! keeps the integrator well-defined when two bodies occupy the same point.
//! No softening radius is substituted.
//!
//! # The gravitational constant
//!
//! `G` is explicit configuration, threaded through every call rather than
//! stored globally, so test suites and hosts can run different scales side
//! by side. [`SIM_G`] is the crate's named default: a simulation-scale
//! value tuned so that visually meaningful orbits occur at the position,
//! velocity, and mass magnitudes the host works in. It is not the SI value.

use crate::body::Body;
use crate::math::Vec3;
use crate::set::BodySet;

/// Simulation-scale gravitational constant
///
/// Tuned for scenes measured in thousands of world units, masses in the
/// tens, and velocities in the hundreds to thousands of units per second.
/// Pass a different value to [`Rk4Integrator::new`](crate::Rk4Integrator::new)
/// for other scales (including the SI value for metric scenes).
pub const SIM_G: f64 = 6_674_384.0;

/// Acceleration induced at `observer` by a point source
///
/// Pure function of its arguments; usable independently of any body set.
/// Returns `Vec3::ZERO` when the two positions coincide exactly.
///
/// # Examples
///
/// ```
/// use nbody_core::{gravity, Vec3};
///
/// let a = gravity::acceleration(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 2.0, 1.0);
/// // Magnitude G*m/r² = 1*2/100, pointing toward the source.
/// assert!((a.x - 0.02).abs() < 1e-15);
/// assert_eq!(a.y, 0.0);
/// ```
pub fn acceleration(observer: Vec3, source: Vec3, source_mass: f64, g: f64) -> Vec3 {
    let r = source - observer;
    let r2 = r.dot(r);
    if r2 == 0.0 {
        return Vec3::ZERO;
    }
    // G*m*r̂/r² = G*m*r/r³, with r³ written as r2*sqrt(r2)
    r * (g * source_mass / (r2 * r2.sqrt()))
}

/// Total gravitational acceleration felt by body `index` of a set
///
/// Vector sum of [`acceleration`] over every other body, evaluated at the
/// bodies' current positions. A body never contributes to its own
/// acceleration.
pub fn acceleration_on(set: &BodySet, index: usize, g: f64) -> Vec3 {
    let bodies = set.as_slice();
    let observer = bodies[index].position();
    let mut total = Vec3::ZERO;
    for (j, other) in bodies.iter().enumerate() {
        if j == index {
            continue;
        }
        total += acceleration(observer, other.position(), other.mass(), g);
    }
    total
}

/// Gravitational potential energy of a pair of bodies
///
/// `U = -G * m₁ * m₂ / r`. A coincident pair contributes zero, mirroring
/// the zero-force branch of [`acceleration`].
pub fn pair_potential_energy(a: &Body, b: &Body, g: f64) -> f64 {
    let r = (b.position() - a.position()).magnitude();
    if r == 0.0 {
        return 0.0;
    }
    -g * a.mass() * b.mass() / r
}

/// Total gravitational potential energy of a body set
///
/// Pairwise sum over unordered pairs. Used together with
/// [`total_kinetic_energy`](crate::integration::total_kinetic_energy) to
/// track energy drift across steps.
pub fn total_potential_energy(set: &BodySet, g: f64) -> f64 {
    let bodies = set.as_slice();
    let mut total = 0.0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            total += pair_potential_energy(&bodies[i], &bodies[j], g);
        }
    }
    total
}
