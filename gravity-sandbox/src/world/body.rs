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
//! Body record
//!
//! A body is a fixed-shape point mass in the simulation plane. Positions and
//! velocities are double-precision world coordinates (meters, meters per
//! second) and never depend on any camera or display scale.

use crate::error::{Result, SimError};
use glam::DVec2;
use std::fmt;

/// Kind of celestial body
///
/// Only the creation policy (mass clamps) and focus selection look at the
/// kind. Gravity treats every body the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BodyKind {
    /// Stellar body, mass clamped from below at creation
    #[default]
    Star,
    /// Planetary body, mass clamped from above at creation
    Planet,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyKind::Star => f.write_str("Star"),
            BodyKind::Planet => f.write_str("Planet"),
        }
    }
}

/// Point mass with position, velocity and kind
///
/// # Examples
///
/// ```
/// use gravity_sandbox::{Body, BodyKind};
/// use glam::DVec2;
///
/// let earth = Body::new(DVec2::new(1.496e11, 0.0), DVec2::new(0.0, 29_780.0), 5.972e24, BodyKind::Planet).unwrap();
/// assert_eq!(earth.mass(), 5.972e24);
/// assert!(Body::new(DVec2::ZERO, DVec2::ZERO, 0.0, BodyKind::Star).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    position: DVec2,
    velocity: DVec2,
    mass: f64,
    kind: BodyKind,
}

impl Body {
    /// Create a body, rejecting non-positive mass and non-finite components
    pub fn new(position: DVec2, velocity: DVec2, mass: f64, kind: BodyKind) -> Result<Self> {
        if !position.is_finite() {
            return Err(SimError::invalid(format!("position must be finite, got {}", position)));
        }
        if !velocity.is_finite() {
            return Err(SimError::invalid(format!("velocity must be finite, got {}", velocity)));
        }
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(SimError::invalid(format!("mass must be positive and finite, got {}", mass)));
        }
        Ok(Body { position, velocity, mass, kind })
    }

    /// Position in meters
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Velocity in meters per second
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Mass in kilograms
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Body kind
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Kinetic energy `0.5 * m * v²`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Check if position and velocity are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    pub(crate) fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    pub(crate) fn set_velocity(&mut self, velocity: DVec2) {
        self.velocity = velocity;
    }

    pub(crate) fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_creation() {
        let body = Body::new(DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0), 10.0, BodyKind::Planet).unwrap();
        assert_eq!(body.position(), DVec2::new(1.0, 2.0));
        assert_eq!(body.velocity(), DVec2::new(3.0, 4.0));
        assert_eq!(body.mass(), 10.0);
        assert_eq!(body.kind(), BodyKind::Planet);
    }

    #[test]
    fn test_body_rejects_bad_mass() {
        for mass in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = Body::new(DVec2::ZERO, DVec2::ZERO, mass, BodyKind::Star);
            assert!(result.unwrap_err().is_invalid_parameter(), "mass {} accepted", mass);
        }
    }

    #[test]
    fn test_body_rejects_non_finite_vectors() {
        let nan = DVec2::new(f64::NAN, 0.0);
        let inf = DVec2::new(0.0, f64::NEG_INFINITY);
        assert!(Body::new(nan, DVec2::ZERO, 1.0, BodyKind::Star).is_err());
        assert!(Body::new(DVec2::ZERO, inf, 1.0, BodyKind::Star).is_err());
    }

    #[test]
    fn test_body_momentum_and_energy() {
        let body = Body::new(DVec2::ZERO, DVec2::new(3.0, 4.0), 2.0, BodyKind::Planet).unwrap();
        assert_eq!(body.momentum(), DVec2::new(6.0, 8.0));
        assert_eq!(body.kinetic_energy(), 25.0);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(BodyKind::Star.to_string(), "Star");
        assert_eq!(BodyKind::Planet.to_string(), "Planet");
        assert_eq!(BodyKind::default(), BodyKind::Star);
    }
}
