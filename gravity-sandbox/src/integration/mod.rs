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
//! Time integration and conserved-quantity diagnostics
//!
//! The sandbox advances with a single fixed-step scheme, semi-implicit
//! Euler, chosen for its bounded long-run energy error at one force
//! evaluation per step. The diagnostics below let drivers and tests track
//! momentum and energy drift.
//!
//! # Timestep Guidelines
//!
//! - Orbits need a few hundred steps per revolution to stay visually stable
//! - Close encounters inside the softening radius are bounded, not accurate
//! - The world clamps the timestep into its configured range

use crate::gravity::Gravity;
use crate::world::World;
use glam::DVec2;

mod euler;

pub use euler::{step, SemiImplicitEuler};

/// Total linear momentum `Σ m v`
pub fn total_momentum(world: &World) -> DVec2 {
    world.bodies().iter().map(|body| body.momentum()).sum()
}

/// Total kinetic energy `Σ 0.5 m v²`
pub fn kinetic_energy(world: &World) -> f64 {
    world.bodies().iter().map(|body| body.kinetic_energy()).sum()
}

/// Total softened gravitational potential energy
pub fn potential_energy(world: &World) -> f64 {
    Gravity::for_world(world).potential_energy(world.bodies())
}

/// Kinetic plus potential energy
pub fn total_energy(world: &World) -> f64 {
    kinetic_energy(world) + potential_energy(world)
}

/// Mass-weighted mean position, or `None` for an empty world
pub fn center_of_mass(world: &World) -> Option<DVec2> {
    let total_mass: f64 = world.bodies().iter().map(|body| body.mass()).sum();
    if world.is_empty() {
        return None;
    }
    let weighted: DVec2 = world
        .bodies()
        .iter()
        .map(|body| body.position() * body.mass())
        .sum();
    Some(weighted / total_mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::BodyKind;

    #[test]
    fn test_diagnostics_empty_world() {
        let world = World::new();
        assert_eq!(total_momentum(&world), DVec2::ZERO);
        assert_eq!(kinetic_energy(&world), 0.0);
        assert_eq!(potential_energy(&world), 0.0);
        assert_eq!(center_of_mass(&world), None);
    }

    #[test]
    fn test_momentum_and_center_of_mass() {
        let mut world = World::new();
        world.add_body(DVec2::ZERO, DVec2::new(1.0, 0.0), 3e29, BodyKind::Star).unwrap();
        world.add_body(DVec2::new(4e10, 0.0), DVec2::new(0.0, 2.0), 3e29, BodyKind::Star).unwrap();

        assert_eq!(total_momentum(&world), DVec2::new(3e29, 6e29));
        let com = center_of_mass(&world).unwrap();
        assert!((com.x - 2e10).abs() < 1.0);
        assert_eq!(com.y, 0.0);
    }

    #[test]
    fn test_bound_orbit_has_negative_energy() {
        let mut world = World::new();
        world.add_body(DVec2::ZERO, DVec2::ZERO, 1.989e30, BodyKind::Star).unwrap();
        world
            .add_body(DVec2::new(1.496e11, 0.0), DVec2::new(0.0, 29_780.0), 5.972e24, BodyKind::Planet)
            .unwrap();
        assert!(total_energy(&world) < 0.0);
    }
}
