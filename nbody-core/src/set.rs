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
//! Body collection
//!
//! [`BodySet`] is the ordered arena the integrator steps over. Each entry
//! is a distinct body (no aliasing is possible since the set owns its
//! bodies), and push order is stable, so "every other body" enumeration is
//! well-defined within a step. The pairwise loops in the integrator operate
//! over indices into this arena and skip `i == j` explicitly.
//!
//! The core offers no removal: which bodies participate, and when one
//! leaves the scene, is the host's decision, made between steps by building
//! a new set.

use crate::body::Body;
use std::fmt;

/// Typed index of a body within a [`BodySet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(usize);

impl BodyId {
    /// Get the raw index value
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({})", self.0)
    }
}

/// Ordered, identity-distinct collection of bodies
///
/// # Examples
///
/// ```
/// use nbody_core::{Body, BodySet, Vec3};
///
/// let mut set = BodySet::new();
/// let sun = set.push(Body::new(Vec3::ZERO, 1500.0));
/// let earth = set.push(Body::new(Vec3::new(4000.0, 0.0, 0.0), 10.0));
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get(sun).unwrap().mass(), 1500.0);
/// assert_ne!(sun, earth);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BodySet {
    bodies: Vec<Body>,
}

impl BodySet {
    /// Create an empty set
    pub fn new() -> Self {
        BodySet { bodies: Vec::new() }
    }

    /// Create an empty set with reserved capacity
    pub fn with_capacity(capacity: usize) -> Self {
        BodySet {
            bodies: Vec::with_capacity(capacity),
        }
    }

    /// Add a body to the set, returning its handle
    pub fn push(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Get a reference to a body
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    /// Get a mutable reference to a body
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    /// Number of bodies in the set
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Check whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over the bodies in push order
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Iterate mutably over the bodies in push order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// View the bodies as a slice
    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    /// View the bodies as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

impl FromIterator<Body> for BodySet {
    fn from_iter<T: IntoIterator<Item = Body>>(iter: T) -> Self {
        BodySet {
            bodies: iter.into_iter().collect(),
        }
    }
}
