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
//! # N-Body Core
//!
//! The physics core of a 3D gravitational N-body simulation: per-body
//! kinematic and mass state, Newton's pairwise gravitational acceleration
//! law, and an RK4 step that advances every body's position and velocity
//! in place.
//!
//! Everything around this core — windowing, cameras, input, on-screen
//! text, model loading — is a host concern. The contract with the host is
//! a single in-process call: once per frame, the host invokes
//! [`Integrator::step`] with its chosen time delta and reads back the
//! updated positions for display.
//!
//! ## Features
//!
//! - **Explicit state**: bodies built through a configuration builder with
//!   fixed defaults, no hidden globals (the gravitational constant is
//!   integrator configuration)
//! - **Order-independent stepping**: every body is advanced from the same
//!   pre-step snapshot, with writes deferred to a commit pass
//! - **Fail-fast validation**: non-finite state or time deltas abort a
//!   step before any mutation instead of spreading NaN
//! - **Parallelization**: optional Rayon execution of the O(n²) outer
//!   loop via the `parallel` feature (on by default)
//!
//! ## Example
//!
//! ```rust
//! use nbody_core::{Body, BodySet, Integrator, Rk4Integrator, Vec3};
//!
//! let mut set = BodySet::new();
//! set.push(Body::new(Vec3::ZERO, 1500.0));
//! set.push(
//!     Body::builder()
//!         .position(Vec3::new(4000.0, 0.0, 0.0))
//!         .velocity(Vec3::new(0.0, 1500.0, 0.0))
//!         .mass(10.0)
//!         .build(),
//! );
//!
//! let integrator = Rk4Integrator::with_simulation_g();
//! for _frame in 0..60 {
//!     integrator.step(&mut set, 0.01).unwrap();
//! }
//! ```

#![warn(missing_docs)]

/// 3D vector math
pub mod math;

/// Per-body simulation state
pub mod body;

/// Ordered body collection
pub mod set;

/// Gravitational acceleration law
pub mod gravity;

/// Numerical integration
pub mod integration;

pub use body::{Body, BodyBuilder};
pub use gravity::{acceleration, SIM_G};
pub use integration::{rk4_step, Integrator, Rk4Integrator};
pub use math::Vec3;
pub use set::{BodyId, BodySet};
