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
//! Semi-implicit (symplectic) Euler integrator
//!
//! Each step first evaluates all pairwise forces from the positions at the
//! start of the step, then updates every body:
//!
//! ```text
//! v(t + dt) = v(t) + a(t)*dt
//! x(t + dt) = x(t) + v(t + dt)*dt
//! ```
//!
//! The position update uses the *new* velocity. That ordering is what makes
//! the scheme symplectic: orbits keep a bounded energy error instead of
//! spiralling outward as they do with explicit Euler.
//!
//! # Properties
//!
//! - **Symplectic**: Preserves phase space area
//! - **First-order accurate**: Global error O(dt)
//! - **One force evaluation per step**
//!
//! # References
//!
//! - Hairer, E., Lubich, C., & Wanner, G. (2006). Geometric Numerical Integration:
//!   Structure-Preserving Algorithms for Ordinary Differential Equations (2nd ed.).
//!   Springer. Section VI.3.

use crate::gravity::Gravity;
use crate::world::World;
use glam::DVec2;

/// Semi-implicit Euler integrator with a reusable force buffer
///
/// # Example
///
/// ```
/// use gravity_sandbox::{World, BodyKind, SemiImplicitEuler};
/// use glam::DVec2;
///
/// let mut world = World::new();
/// world.add_body(DVec2::ZERO, DVec2::ZERO, 1.989e30, BodyKind::Star).unwrap();
/// world.add_body(DVec2::new(1.496e11, 0.0), DVec2::new(0.0, 29_780.0), 5.972e24, BodyKind::Planet).unwrap();
///
/// let mut integrator = SemiImplicitEuler::new();
/// integrator.step(&mut world);
/// assert!(world.bodies()[1].velocity().x < 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SemiImplicitEuler {
    forces: Vec<DVec2>,
    steps: u64,
}

impl SemiImplicitEuler {
    /// Create an integrator with an empty force buffer
    pub fn new() -> Self {
        SemiImplicitEuler::default()
    }

    /// Name of the integration scheme
    pub fn name(&self) -> &str {
        "Semi-implicit Euler"
    }

    /// Number of steps taken so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advance the world by exactly one timestep
    ///
    /// # Panics
    ///
    /// Panics if any body has a non-positive mass. [`World::add_body`] rejects
    /// such bodies, so this only fires on a broken invariant.
    pub fn step(&mut self, world: &mut World) {
        if world.is_empty() {
            return;
        }

        let dt = world.timestep();
        let gravity = Gravity::for_world(world);

        // Forces for the whole step come from the start-of-step positions
        gravity.accumulate_forces(world.bodies(), &mut self.forces);

        let mut invalid = 0usize;
        for (body, force) in world.bodies_mut().iter_mut().zip(&self.forces) {
            let mass = body.mass();
            assert!(mass > 0.0, "Body mass must be positive during integration");

            let acceleration = *force / mass;
            let velocity = body.velocity() + acceleration * dt;
            body.set_velocity(velocity);
            body.set_position(body.position() + velocity * dt);

            if !body.is_valid() {
                invalid += 1;
            }
        }

        self.steps += 1;
        if invalid > 0 {
            log::warn!(
                "step {} produced non-finite state for {} of {} bodies",
                self.steps,
                invalid,
                world.len()
            );
        }
        log::trace!("step {} advanced {} bodies by {} s", self.steps, world.len(), dt);
    }
}

/// Advance the world by one timestep with a temporary force buffer
///
/// Drivers stepping every frame should keep a [`SemiImplicitEuler`] around
/// instead, so the buffer is reused.
pub fn step(world: &mut World) {
    SemiImplicitEuler::new().step(world);
}
