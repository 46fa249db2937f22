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
//! Two-body orbit example
//!
//! Plays the role of the host render loop: builds a scene at the
//! simulation's native scales, calls `step` once per simulated frame with
//! a fixed time delta, and reads positions back as a renderer would. Also
//! tracks total energy so drift is visible.
//!
//! ```bash
//! cargo run --example orbit --release
//! ```

use nbody_core::{gravity, integration, Body, BodySet, Integrator, Rk4Integrator, Vec3, SIM_G};

fn main() {
    // A heavy "sun" and a light "earth" on a roughly circular orbit.
    let mut set = BodySet::new();
    let sun = set.push(
        Body::builder()
            .rotation(Vec3::new(0.0, 90.0, 0.0))
            .mass(1500.0)
            .build(),
    );
    let earth = set.push(
        Body::builder()
            .position(Vec3::new(4000.0, 0.0, 0.0))
            .velocity(Vec3::new(0.0, 1500.0, 0.0))
            .rotation(Vec3::new(0.0, 90.0, 0.0))
            .mass(10.0)
            .build(),
    );

    let integrator = Rk4Integrator::with_simulation_g();
    let dt = 0.01;
    let frames = 20_000;
    let report_every = 2_000;

    let e0 = total_energy(&set);
    println!("Two-body orbit, G = {:.0}, dt = {}", SIM_G, dt);
    println!(
        "Initial: sun at {}, earth at {}",
        set.get(sun).unwrap().position(),
        set.get(earth).unwrap().position()
    );

    for frame in 1..=frames {
        if let Err(e) = integrator.step(&mut set, dt) {
            eprintln!("Step failed at frame {}: {}", frame, e);
            return;
        }

        if frame % report_every == 0 {
            let earth_pos = set.get(earth).unwrap().position();
            let r = (earth_pos - set.get(sun).unwrap().position()).magnitude();
            println!(
                "t = {:7.2}  earth = ({:9.1}, {:9.1}, {:5.1})  r = {:7.1}",
                frame as f64 * dt,
                earth_pos.x,
                earth_pos.y,
                earth_pos.z,
                r
            );
        }
    }

    let drift = ((total_energy(&set) - e0) / e0).abs();
    println!("Relative energy drift over {} frames: {:.3e}", frames, drift);
}

fn total_energy(set: &BodySet) -> f64 {
    integration::total_kinetic_energy(set) + gravity::total_potential_energy(set, SIM_G)
}
