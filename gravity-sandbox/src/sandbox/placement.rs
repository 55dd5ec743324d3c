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
//! Press-hold-drag gesture for creating bodies
//!
//! A placement starts when the user presses on the canvas. While the button
//! is held the previewed mass grows with the hold duration; dragging away
//! from the press point sets the launch velocity. The body is created at the
//! press point when the gesture is released.

use crate::config::{PlacementConfig, SimulationConfig};
use crate::world::BodyKind;
use glam::DVec2;
use std::time::Duration;

/// Mass reached after holding for `held`
///
/// Stars grow linearly from the minimum stellar mass without an upper bound.
/// Planets grow from the minimum planetary mass along a quartic ease-in and
/// reach the planetary mass limit after the full hold time.
pub fn held_mass(
    kind: BodyKind,
    held: Duration,
    placement: &PlacementConfig,
    simulation: &SimulationConfig,
) -> f64 {
    let secs = held.as_secs_f64();
    match kind {
        BodyKind::Star => simulation.min_star_mass + secs * placement.star_mass_rate,
        BodyKind::Planet => {
            let progress = secs / placement.planet_full_hold_secs;
            if progress >= 1.0 {
                return simulation.max_planet_mass;
            }
            let range = simulation.max_planet_mass - placement.min_planet_mass;
            (placement.min_planet_mass + range * progress.powi(4)).min(simulation.max_planet_mass)
        }
    }
}

/// In-progress placement gesture, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    press: DVec2,
    cursor: DVec2,
    held: Duration,
    kind: BodyKind,
}

impl Placement {
    /// Start a gesture at a screen position
    pub fn new(press: DVec2, kind: BodyKind) -> Self {
        Placement {
            press,
            cursor: press,
            held: Duration::ZERO,
            kind,
        }
    }

    /// Screen position where the gesture started
    pub fn press(&self) -> DVec2 {
        self.press
    }

    /// Current cursor position
    pub fn cursor(&self) -> DVec2 {
        self.cursor
    }

    /// Kind of body being placed
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Time the button has been held
    pub fn held(&self) -> Duration {
        self.held
    }

    /// Move the cursor
    pub fn drag_to(&mut self, cursor: DVec2) {
        self.cursor = cursor;
    }

    /// Record the total time held since the press
    pub fn hold_for(&mut self, held: Duration) {
        self.held = held;
    }

    /// Launch velocity relative to the focused body
    pub fn drag_velocity(&self, config: &PlacementConfig) -> DVec2 {
        (self.cursor - self.press) * config.velocity_per_pixel
    }

    /// Mass the body would be created with right now
    pub fn mass(&self, placement: &PlacementConfig, simulation: &SimulationConfig) -> f64 {
        held_mass(self.kind, self.held, placement, simulation)
    }
}

/// Numeric preview of a placement for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPreview {
    /// Press position on screen
    pub screen_position: DVec2,
    /// Press position in world coordinates
    pub world_position: DVec2,
    /// Drag velocity, relative to the focused body
    pub relative_velocity: DVec2,
    /// Current mass
    pub mass: f64,
    /// Body kind
    pub kind: BodyKind,
}
