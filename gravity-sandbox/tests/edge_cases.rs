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
//! Edge case tests for the world and integrator
//!
//! Tests boundary conditions, extreme values, and unusual scenarios

use glam::DVec2;
use gravity_sandbox::{step, Body, BodyKind, Gravity, SemiImplicitEuler, SimError, World};

#[test]
fn test_add_body_rejects_zero_mass() {
    let mut world = World::new();
    let result = world.add_body(DVec2::ZERO, DVec2::ZERO, 0.0, BodyKind::Star);
    assert!(matches!(result, Err(SimError::InvalidParameter(_))));
    assert_eq!(world.len(), 0);
}

#[test]
fn test_add_body_rejects_negative_mass() {
    let mut world = World::new();
    world.add_body(DVec2::ZERO, DVec2::ZERO, 1e30, BodyKind::Star).unwrap();

    let result = world.add_body(DVec2::ZERO, DVec2::ZERO, -5.0, BodyKind::Planet);
    assert!(matches!(result, Err(SimError::InvalidParameter(_))));
    assert_eq!(world.len(), 1);
}

#[test]
fn test_add_body_rejects_non_finite_components() {
    let mut world = World::new();
    let cases = [
        (DVec2::new(f64::NAN, 0.0), DVec2::ZERO),
        (DVec2::new(0.0, f64::INFINITY), DVec2::ZERO),
        (DVec2::ZERO, DVec2::new(f64::NEG_INFINITY, 0.0)),
        (DVec2::ZERO, DVec2::new(0.0, f64::NAN)),
    ];
    for (position, velocity) in cases {
        let result = world.add_body(position, velocity, 1e30, BodyKind::Star);
        assert!(result.unwrap_err().is_invalid_parameter());
    }
    assert!(world.is_empty());
}

#[test]
fn test_coincident_bodies_stay_finite() {
    let mut world = World::new();
    let a = world.add_body(DVec2::new(1e9, 1e9), DVec2::ZERO, 2e30, BodyKind::Star).unwrap();
    let b = world.add_body(DVec2::new(1e9, 1e9), DVec2::ZERO, 1e27, BodyKind::Planet).unwrap();

    let mut integrator = SemiImplicitEuler::new();
    for _ in 0..100 {
        integrator.step(&mut world);
    }

    for handle in [a, b] {
        let body = world.get(handle).unwrap();
        assert!(body.position().is_finite(), "position became {}", body.position());
        assert!(body.velocity().is_finite(), "velocity became {}", body.velocity());
    }
}

#[test]
fn test_close_flyby_stays_finite() {
    let mut world = World::new();
    world.set_timestep(100.0).unwrap();
    world.add_body(DVec2::ZERO, DVec2::ZERO, 4e30, BodyKind::Star).unwrap();
    // Aimed straight through the star
    world
        .add_body(DVec2::new(-1e9, 0.0), DVec2::new(2e5, 0.0), 1e27, BodyKind::Planet)
        .unwrap();

    let mut integrator = SemiImplicitEuler::new();
    for _ in 0..500 {
        integrator.step(&mut world);
        assert!(world.bodies().iter().all(Body::is_valid));
    }
}

#[test]
fn test_tiny_mass_is_tolerated() {
    let mut world = World::new();
    world.add_body(DVec2::ZERO, DVec2::ZERO, 1.989e30, BodyKind::Star).unwrap();
    let dust = world
        .add_body(DVec2::new(1.496e11, 0.0), DVec2::new(0.0, 29_780.0), 1e-6, BodyKind::Planet)
        .unwrap();

    step(&mut world);
    let body = world.get(dust).unwrap();
    assert_eq!(body.mass(), 1e-6);
    assert!(body.is_valid());
    assert!(body.velocity().x < 0.0);
}

#[test]
fn test_force_symmetry_above_softening() {
    let gravity = Gravity::new(6.6743e-11, 1e7);
    let masses = [1.31e22, 5.972e24, 1.898e27, 2.38e29, 1.989e30];
    let offsets = [
        DVec2::new(1.0001e7, 0.0),
        DVec2::new(-3.3e8, 4.4e8),
        DVec2::new(7.1e10, -2.2e11),
        DVec2::new(-1.0e12, -9.9e11),
    ];

    for &m1 in &masses {
        for &m2 in &masses {
            for &offset in &offsets {
                let a = Body::new(DVec2::new(1.5e9, -2.5e9), DVec2::ZERO, m1, BodyKind::Star).unwrap();
                let b = Body::new(a.position() + offset, DVec2::ZERO, m2, BodyKind::Planet).unwrap();
                assert_eq!(gravity.pairwise_force(&a, &b), -gravity.pairwise_force(&b, &a));
            }
        }
    }
}

#[test]
fn test_timestep_rejection_leaves_state_unchanged() {
    let mut world = World::new();
    world.set_timestep(4000.0).unwrap();
    assert!(world.set_timestep(0.0).is_err());
    assert!(world.set_timestep(-10.0).is_err());
    assert_eq!(world.timestep(), 4000.0);
}

#[test]
fn test_timestep_is_clamped_into_range() {
    let mut world = World::new();
    let range = world.timestep_range();
    assert_eq!(world.set_timestep(1e-3).unwrap(), *range.start());
    assert_eq!(world.set_timestep(1e12).unwrap(), *range.end());
}

#[test]
fn test_step_uses_current_timestep() {
    let mut world = World::new();
    let h = world.add_body(DVec2::ZERO, DVec2::new(1.0, 0.0), 1e30, BodyKind::Star).unwrap();

    world.set_timestep(500.0).unwrap();
    step(&mut world);
    world.set_timestep(2000.0).unwrap();
    step(&mut world);

    assert_eq!(world.get(h).unwrap().position(), DVec2::new(2500.0, 0.0));
}
