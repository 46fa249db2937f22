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
//! Per-body simulation state
//!
//! A [`Body`] holds the kinematic and mass state the integrator reads and
//! writes: position, velocity, and mass. It also carries orientation and
//! angular-rate fields that exist purely for the host's display transform;
//! the integrator never touches them.
//!
//! Bodies are constructed through [`BodyBuilder`], which enumerates every
//! recognized field with a fixed default, so a scene setup only names the
//! fields it cares about:
//!
//! ```
//! use nbody_core::{Body, Vec3};
//!
//! let planet = Body::builder()
//!     .position(Vec3::new(1500.0, 0.0, 0.0))
//!     .velocity(Vec3::new(0.0, 1000.0, 0.0))
//!     .mass(0.125)
//!     .build();
//! assert_eq!(planet.mass(), 0.125);
//! ```

use crate::math::Vec3;

/// A point mass participating in the simulation
///
/// Position and velocity are mutated exclusively by the integrator's step
/// (or by the host between steps); mass is fixed for the lifetime of a
/// simulation run. Changing mass mid-run has undefined coupling with
/// in-flight integration, so no setter is offered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    rotation: Vec3,
    angular_velocity: Vec3,
    angular_acceleration: Vec3,
    mass: f64,
}

impl Body {
    /// Create a body at the given position with the given mass, at rest
    ///
    /// All other fields default to zero. Use [`Body::builder`] to set
    /// velocity or display fields.
    ///
    /// # Panics
    ///
    /// Panics if the mass is not strictly positive and finite.
    pub fn new(position: Vec3, mass: f64) -> Self {
        Body::builder().position(position).mass(mass).build()
    }

    /// Start building a body with all fields at their defaults
    pub fn builder() -> BodyBuilder {
        BodyBuilder::default()
    }

    /// Get the world-space position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the world-space position
    ///
    /// No validation is performed; the integrator re-checks finiteness at
    /// the start of every step.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Get the velocity
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Set the velocity
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Get the mass
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Get the display acceleration
    ///
    /// Informational only; the integrator derives accelerations from the
    /// gravity law each step and does not read or write this field.
    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Set the display acceleration
    pub fn set_acceleration(&mut self, acceleration: Vec3) {
        self.acceleration = acceleration;
    }

    /// Get the display orientation (Euler angles, host convention)
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Set the display orientation
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// Get the display angular velocity
    pub fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    /// Set the display angular velocity
    pub fn set_angular_velocity(&mut self, angular_velocity: Vec3) {
        self.angular_velocity = angular_velocity;
    }

    /// Get the display angular acceleration
    pub fn angular_acceleration(&self) -> Vec3 {
        self.angular_acceleration
    }

    /// Set the display angular acceleration
    pub fn set_angular_acceleration(&mut self, angular_acceleration: Vec3) {
        self.angular_acceleration = angular_acceleration;
    }

    /// Check that position and velocity are finite
    ///
    /// Setters are unvalidated, so a host can feed NaN into a body; the
    /// integrator uses this check to fail fast before NaN contaminates the
    /// rest of the set.
    pub fn is_valid(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Configuration structure for constructing a [`Body`]
///
/// Every recognized field has a fixed default: zero vectors for the
/// kinematic and display fields, `1.0` for mass.
#[derive(Debug, Clone, Copy)]
pub struct BodyBuilder {
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    rotation: Vec3,
    angular_velocity: Vec3,
    angular_acceleration: Vec3,
    mass: f64,
}

impl Default for BodyBuilder {
    fn default() -> Self {
        BodyBuilder {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            rotation: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            angular_acceleration: Vec3::ZERO,
            mass: 1.0,
        }
    }
}

impl BodyBuilder {
    /// Set the initial position
    pub fn position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the initial velocity
    pub fn velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the initial display acceleration
    pub fn acceleration(mut self, acceleration: Vec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Set the initial display orientation
    pub fn rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the initial display angular velocity
    pub fn angular_velocity(mut self, angular_velocity: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Set the initial display angular acceleration
    pub fn angular_acceleration(mut self, angular_acceleration: Vec3) -> Self {
        self.angular_acceleration = angular_acceleration;
        self
    }

    /// Set the mass
    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Build the body
    ///
    /// # Panics
    ///
    /// Panics if the mass is not strictly positive and finite, or if any
    /// kinematic field is non-finite. These are configuration errors with
    /// no defined physical meaning. For fallible construction, use
    /// [`BodyBuilder::try_build`].
    pub fn build(self) -> Body {
        assert!(
            self.mass > 0.0 && self.mass.is_finite(),
            "Mass must be positive and finite"
        );
        assert!(
            self.position.is_finite() && self.velocity.is_finite(),
            "Initial position and velocity must be finite"
        );
        Body {
            position: self.position,
            velocity: self.velocity,
            acceleration: self.acceleration,
            rotation: self.rotation,
            angular_velocity: self.angular_velocity,
            angular_acceleration: self.angular_acceleration,
            mass: self.mass,
        }
    }

    /// Try to build the body, returning `None` on invalid configuration
    pub fn try_build(self) -> Option<Body> {
        if self.mass > 0.0
            && self.mass.is_finite()
            && self.position.is_finite()
            && self.velocity.is_finite()
        {
            Some(self.build())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let body = Body::builder().build();
        assert_eq!(body.position(), Vec3::ZERO);
        assert_eq!(body.velocity(), Vec3::ZERO);
        assert_eq!(body.rotation(), Vec3::ZERO);
        assert_eq!(body.angular_velocity(), Vec3::ZERO);
        assert_eq!(body.mass(), 1.0);
    }

    #[test]
    fn test_builder_sets_fields() {
        let body = Body::builder()
            .position(Vec3::new(1.0, 2.0, 3.0))
            .velocity(Vec3::new(4.0, 5.0, 6.0))
            .rotation(Vec3::new(0.0, 90.0, 0.0))
            .mass(25.0)
            .build();

        assert_eq!(body.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(body.velocity(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(body.rotation(), Vec3::new(0.0, 90.0, 0.0));
        assert_eq!(body.mass(), 25.0);
    }

    #[test]
    fn test_accessors_mutate_state() {
        let mut body = Body::new(Vec3::ZERO, 1.0);
        body.set_position(Vec3::new(10.0, 0.0, 0.0));
        body.set_velocity(Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(body.position(), Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(body.velocity(), Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "Mass must be positive and finite")]
    fn test_zero_mass_panics() {
        Body::builder().mass(0.0).build();
    }

    #[test]
    #[should_panic(expected = "Mass must be positive and finite")]
    fn test_negative_mass_panics() {
        Body::builder().mass(-1.0).build();
    }

    #[test]
    #[should_panic(expected = "Mass must be positive and finite")]
    fn test_nan_mass_panics() {
        Body::builder().mass(f64::NAN).build();
    }

    #[test]
    fn test_try_build() {
        assert!(Body::builder().mass(1.0).try_build().is_some());
        assert!(Body::builder().mass(0.0).try_build().is_none());
        assert!(Body::builder().mass(f64::INFINITY).try_build().is_none());
        assert!(Body::builder()
            .position(Vec3::new(f64::NAN, 0.0, 0.0))
            .try_build()
            .is_none());
    }

    #[test]
    fn test_is_valid_detects_nan() {
        let mut body = Body::new(Vec3::ZERO, 1.0);
        assert!(body.is_valid());
        body.set_velocity(Vec3::new(f64::NAN, 0.0, 0.0));
        assert!(!body.is_valid());
    }

    #[test]
    fn test_display_fields_are_independent() {
        // The integrator contract leaves these untouched; at minimum they
        // must round-trip through their accessors.
        let mut body = Body::new(Vec3::ZERO, 1.0);
        body.set_angular_velocity(Vec3::new(0.0, 0.0, 5.0));
        body.set_angular_acceleration(Vec3::new(0.0, 0.0, -1.0));
        body.set_acceleration(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(body.angular_velocity(), Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(body.angular_acceleration(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(body.acceleration(), Vec3::new(1.0, 0.0, 0.0));
    }
}
