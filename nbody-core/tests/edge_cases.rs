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
//! Edge case tests for the step contract
//!
//! Boundary conditions and degenerate inputs: empty sets, zero and invalid
//! time deltas, coincident bodies, and non-finite state.

use nbody_core::{Body, BodySet, Integrator, Rk4Integrator, Vec3};

fn two_body_set() -> BodySet {
    let mut set = BodySet::new();
    set.push(Body::new(Vec3::ZERO, 25.0));
    set.push(
        Body::builder()
            .position(Vec3::new(1500.0, 0.0, 0.0))
            .velocity(Vec3::new(0.0, 1000.0, 0.0))
            .mass(0.125)
            .build(),
    );
    set
}

#[test]
fn test_empty_set_is_a_noop() {
    let mut set = BodySet::new();
    let integrator = Rk4Integrator::with_simulation_g();
    assert_eq!(integrator.step(&mut set, 0.01), Ok(0));
}

#[test]
fn test_zero_dt_is_identity() {
    let mut set = two_body_set();
    let before: Vec<Body> = set.iter().copied().collect();

    let integrator = Rk4Integrator::with_simulation_g();
    let count = integrator.step(&mut set, 0.0).unwrap();
    assert_eq!(count, 2);

    for (body, original) in set.iter().zip(&before) {
        assert_eq!(body.position(), original.position());
        assert_eq!(body.velocity(), original.velocity());
    }
}

#[test]
fn test_negative_dt_is_rejected() {
    let mut set = two_body_set();
    let integrator = Rk4Integrator::with_simulation_g();
    let result = integrator.step(&mut set, -0.01);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("non-negative"));
}

#[test]
fn test_nan_dt_is_rejected() {
    let mut set = two_body_set();
    let integrator = Rk4Integrator::with_simulation_g();
    let result = integrator.step(&mut set, f64::NAN);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("finite"));
}

#[test]
fn test_infinite_dt_is_rejected() {
    let mut set = two_body_set();
    let integrator = Rk4Integrator::with_simulation_g();
    assert!(integrator.step(&mut set, f64::INFINITY).is_err());
}

#[test]
fn test_non_finite_body_state_fails_fast() {
    let mut set = two_body_set();
    set.as_mut_slice()[1].set_position(Vec3::new(f64::NAN, 0.0, 0.0));

    let integrator = Rk4Integrator::with_simulation_g();
    let result = integrator.step(&mut set, 0.01);
    assert!(result.is_err());
    assert!(
        result.unwrap_err().contains("Body 1"),
        "Error should name the offending body"
    );
}

#[test]
fn test_failed_step_mutates_nothing() {
    let mut set = two_body_set();
    set.as_mut_slice()[1].set_velocity(Vec3::new(0.0, f64::INFINITY, 0.0));
    let before: Vec<Body> = set.iter().copied().collect();

    let integrator = Rk4Integrator::with_simulation_g();
    assert!(integrator.step(&mut set, 0.01).is_err());

    // The healthy body must not have been half-updated.
    for (body, original) in set.iter().zip(&before) {
        assert_eq!(body.position(), original.position());
        assert_eq!(body.velocity(), original.velocity());
    }
}

#[test]
fn test_coincident_bodies_produce_no_nan() {
    let mut set = BodySet::new();
    set.push(Body::new(Vec3::new(5.0, 5.0, 5.0), 10.0));
    set.push(Body::new(Vec3::new(5.0, 5.0, 5.0), 10.0));

    let integrator = Rk4Integrator::with_simulation_g();

    // Both at rest and coincident: zero mutual force, so a step leaves
    // them exactly in place rather than dividing by zero.
    integrator.step(&mut set, 0.01).unwrap();
    for body in set.iter() {
        assert!(body.is_valid());
        assert_eq!(body.position(), Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(body.velocity(), Vec3::ZERO);
    }
}

#[test]
fn test_single_body_set_has_no_gravity() {
    let mut set = BodySet::new();
    set.push(
        Body::builder()
            .position(Vec3::new(1.0, 2.0, 3.0))
            .velocity(Vec3::new(-1.0, 0.0, 0.5))
            .mass(1e6)
            .build(),
    );

    let integrator = Rk4Integrator::with_simulation_g();
    for _ in 0..100 {
        integrator.step(&mut set, 0.1).unwrap();
    }

    // Velocity is untouched no matter how massive the lone body is.
    assert_eq!(set.as_slice()[0].velocity(), Vec3::new(-1.0, 0.0, 0.5));
}

#[test]
fn test_display_fields_survive_stepping() {
    let mut set = BodySet::new();
    set.push(
        Body::builder()
            .rotation(Vec3::new(0.0, 90.0, 0.0))
            .angular_velocity(Vec3::new(0.0, 0.0, 3.0))
            .mass(25.0)
            .build(),
    );
    set.push(
        Body::builder()
            .position(Vec3::new(1500.0, 0.0, 0.0))
            .mass(0.125)
            .build(),
    );

    let integrator = Rk4Integrator::with_simulation_g();
    integrator.step(&mut set, 0.01).unwrap();

    let body = set.as_slice()[0];
    assert_eq!(body.rotation(), Vec3::new(0.0, 90.0, 0.0));
    assert_eq!(body.angular_velocity(), Vec3::new(0.0, 0.0, 3.0));
}
