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
//! Newtonian gravity with a distance floor
//!
//! Every body attracts every other body with
//!
//! **F = G * m₁ * m₂ * r / d³**, where **d = max(|r|, s)**
//!
//! and `s` is the softening radius. Unlike Plummer softening (`r² + ε²`) the
//! floor leaves forces untouched once two bodies are further apart than `s`;
//! it only caps the force when bodies coincide or pass very close.
//!
//! The all-pairs sum is O(n²) and is the hot path of every step. Pairs are
//! visited once and the force is applied to both bodies with opposite signs,
//! so the total force over the system is zero up to the pairwise rounding.

use crate::world::{Body, World};
use glam::DVec2;

/// Pairwise gravity evaluator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    g: f64,
    softening_radius: f64,
}

impl Gravity {
    /// Create an evaluator from G and the softening radius
    ///
    /// # Panics
    ///
    /// Panics if `g` is negative or not finite, or if `softening_radius` is
    /// not positive and finite.
    pub fn new(g: f64, softening_radius: f64) -> Self {
        assert!(
            g >= 0.0 && g.is_finite(),
            "Gravitational constant must be non-negative and finite"
        );
        assert!(
            softening_radius > 0.0 && softening_radius.is_finite(),
            "Softening radius must be positive and finite"
        );
        Gravity { g, softening_radius }
    }

    /// Evaluator matching a world's constants
    pub fn for_world(world: &World) -> Self {
        Gravity::new(world.gravitational_constant(), world.softening_radius())
    }

    /// Gravitational constant
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Softening radius in meters
    pub fn softening_radius(&self) -> f64 {
        self.softening_radius
    }

    /// Distance used in place of `|r|`
    #[inline]
    pub fn softened_distance(&self, r: DVec2) -> f64 {
        r.length().max(self.softening_radius)
    }

    /// Force on body `a` due to body `b`
    ///
    /// Swapping the arguments negates the result exactly.
    #[inline]
    pub fn pairwise_force(&self, a: &Body, b: &Body) -> DVec2 {
        let r = b.position() - a.position();
        let d = self.softened_distance(r);
        // m_a * m_b is formed first so the product is the same for both orders
        let scale = self.g * (a.mass() * b.mass()) / (d * d * d);
        r * scale
    }

    /// Net force on every body, written into `forces`
    ///
    /// `forces` is resized to `bodies.len()` and overwritten. Positions are
    /// only read, so the result is entirely determined by the state passed in.
    pub fn accumulate_forces(&self, bodies: &[Body], forces: &mut Vec<DVec2>) {
        forces.clear();
        forces.resize(bodies.len(), DVec2::ZERO);

        for (i, a) in bodies.iter().enumerate() {
            for (j, b) in bodies.iter().enumerate().skip(i + 1) {
                let f = self.pairwise_force(a, b);
                forces[i] += f;
                forces[j] -= f;
            }
        }
    }

    /// Gravitational potential energy `-Σ G m_i m_j / d` over all pairs
    pub fn potential_energy(&self, bodies: &[Body]) -> f64 {
        let mut energy = 0.0;
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                let d = self.softened_distance(b.position() - a.position());
                energy -= self.g * (a.mass() * b.mass()) / d;
            }
        }
        energy
    }
}
