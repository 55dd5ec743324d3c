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
//! Interactive simulation context
//!
//! The sandbox bundles everything the driving loop mutates between frames:
//! the world, the integrator, the camera, the run flag, the placement mode,
//! the focused body and an in-progress placement gesture. Input handlers map
//! decoded events onto these methods; the renderer reads the world, the
//! camera and [`Sandbox::preview`] after [`Sandbox::frame`] returns.

mod camera;
mod placement;

pub use camera::Camera;
pub use placement::{held_mass, Placement, PlacementPreview};

use crate::config::{PlacementConfig, SandboxConfig};
use crate::error::{Result, SimError};
use crate::integration::SemiImplicitEuler;
use crate::world::{Body, BodyHandle, BodyKind, World};
use glam::DVec2;
use std::time::Duration;

/// Simulation context owned by the driving loop
///
/// # Example
///
/// ```
/// use gravity_sandbox::{Sandbox, BodyKind};
/// use glam::DVec2;
/// use std::time::Duration;
///
/// let mut sandbox = Sandbox::new();
/// sandbox.press(DVec2::new(400.0, 375.0));
/// sandbox.hold_for(Duration::from_secs(2));
/// let sun = sandbox.release(DVec2::new(400.0, 375.0)).unwrap().unwrap();
/// assert_eq!(sandbox.focused(), Some(sun));
///
/// sandbox.toggle_running();
/// assert!(sandbox.frame());
/// ```
#[derive(Debug, Clone)]
pub struct Sandbox {
    world: World,
    integrator: SemiImplicitEuler,
    camera: Camera,
    placement_config: PlacementConfig,
    running: bool,
    mode: BodyKind,
    focus: Option<BodyHandle>,
    placement: Option<Placement>,
}

impl Sandbox {
    /// Create a paused, empty sandbox with default configuration
    pub fn new() -> Self {
        let config = SandboxConfig::default();
        Sandbox {
            world: World::new(),
            integrator: SemiImplicitEuler::new(),
            camera: Camera::new(config.camera),
            placement_config: config.placement,
            running: false,
            mode: BodyKind::Star,
            focus: None,
            placement: None,
        }
    }

    /// Create a paused, empty sandbox from a validated configuration
    pub fn with_config(config: SandboxConfig) -> Result<Self> {
        config.validate()?;
        Ok(Sandbox {
            world: World::with_config(config.simulation)?,
            integrator: SemiImplicitEuler::new(),
            camera: Camera::new(config.camera),
            placement_config: config.placement,
            running: false,
            mode: BodyKind::Star,
            focus: None,
            placement: None,
        })
    }

    /// Read-only world access for rendering
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Camera state
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Integrator state
    pub fn integrator(&self) -> &SemiImplicitEuler {
        &self.integrator
    }

    /// Whether frames advance the simulation
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or pause the simulation
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Flip the run flag, returning the new value
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        log::debug!("simulation {}", if self.running { "running" } else { "paused" });
        self.running
    }

    /// Kind used for new placements and focus cycling
    pub fn mode(&self) -> BodyKind {
        self.mode
    }

    /// Switch the placement mode
    pub fn set_mode(&mut self, mode: BodyKind) {
        self.mode = mode;
    }

    /// Add a body directly and focus it
    pub fn add_body(
        &mut self,
        position: DVec2,
        velocity: DVec2,
        mass: f64,
        kind: BodyKind,
    ) -> Result<BodyHandle> {
        let handle = self.world.add_body(position, velocity, mass, kind)?;
        self.focus = Some(handle);
        Ok(handle)
    }

    /// Remove a body, dropping focus if it was focused
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<Body> {
        let body = self.world.remove_body(handle)?;
        if self.focus == Some(handle) {
            self.focus = None;
        }
        Ok(body)
    }

    /// Set the timestep in seconds; see [`World::set_timestep`]
    pub fn set_timestep(&mut self, seconds: f64) -> Result<f64> {
        self.world.set_timestep(seconds)
    }

    /// Set the timestep from a slider position in `[0, 1]`
    ///
    /// The slider spans `0..=max_timestep` linearly; positions that map below
    /// the minimum timestep select the minimum. Positions outside `[0, 1]`
    /// are clamped.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidParameter`] if `fraction` is NaN or infinite.
    pub fn set_timestep_from_slider(&mut self, fraction: f64) -> Result<f64> {
        if !fraction.is_finite() {
            return Err(SimError::invalid(format!(
                "slider position must be finite, got {}",
                fraction
            )));
        }
        let range = self.world.timestep_range();
        let seconds = (fraction.clamp(0.0, 1.0) * range.end()).max(*range.start());
        self.world.set_timestep(seconds)
    }

    /// Currently focused body
    pub fn focused(&self) -> Option<BodyHandle> {
        self.focus
    }

    /// State of the focused body
    pub fn focused_body(&self) -> Option<&Body> {
        self.focus.and_then(|handle| self.world.get(handle).ok())
    }

    /// Focus a specific body
    pub fn focus(&mut self, handle: BodyHandle) -> Result<()> {
        self.world.index_of(handle)?;
        self.focus = Some(handle);
        Ok(())
    }

    /// Drop focus; the camera stays where it is
    pub fn unfocus(&mut self) {
        self.focus = None;
    }

    /// Focus the next body of the current mode after the focused one
    ///
    /// Scans at most every body once, wrapping around. If the focused body is
    /// the only match it stays focused. With no match focus is cleared and
    /// `None` is returned.
    pub fn focus_next(&mut self) -> Option<BodyHandle> {
        let count = self.world.len();
        if count == 0 {
            self.focus = None;
            return None;
        }

        // Unfocused scans start from index 0
        let start = self
            .focus
            .and_then(|handle| self.world.index_of(handle).ok())
            .unwrap_or(count - 1);

        let mode = self.mode;
        let next = (1..=count)
            .map(|offset| (start + offset) % count)
            .find(|&index| self.world.bodies()[index].kind() == mode)
            .and_then(|index| self.world.handle_at(index));

        self.focus = next;
        match next {
            Some(handle) => log::debug!("focused {}", handle),
            None => log::debug!("no {} to focus", mode),
        }
        next
    }

    /// Remove the focused body, if any, and clear focus
    pub fn remove_focused(&mut self) -> Option<Body> {
        let handle = self.focus.take()?;
        self.world.remove_body(handle).ok()
    }

    /// Pan the camera by whole steps; ignored while a body is focused
    ///
    /// Returns whether the camera moved.
    pub fn pan(&mut self, steps: DVec2) -> bool {
        if self.focus.is_some() {
            return false;
        }
        self.camera.pan(steps);
        true
    }

    /// Zoom in one step
    pub fn zoom_in(&mut self) -> f64 {
        self.camera.zoom_in()
    }

    /// Zoom out one step
    pub fn zoom_out(&mut self) -> f64 {
        self.camera.zoom_out()
    }

    /// Begin placing a body of the current mode at a screen position
    pub fn press(&mut self, screen: DVec2) {
        self.placement = Some(Placement::new(screen, self.mode));
    }

    /// Update the drag point of the active placement
    pub fn drag(&mut self, screen: DVec2) {
        if let Some(placement) = self.placement.as_mut() {
            placement.drag_to(screen);
        }
    }

    /// Record the total hold time of the active placement
    pub fn hold_for(&mut self, held: Duration) {
        if let Some(placement) = self.placement.as_mut() {
            placement.hold_for(held);
        }
    }

    /// Abandon the active placement
    pub fn cancel_placement(&mut self) {
        self.placement = None;
    }

    /// Active placement, if any
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Preview values of the active placement
    pub fn preview(&self) -> Option<PlacementPreview> {
        self.placement.map(|placement| PlacementPreview {
            screen_position: placement.press(),
            world_position: self.camera.screen_to_world(placement.press()),
            relative_velocity: placement.drag_velocity(&self.placement_config),
            mass: placement.mass(&self.placement_config, self.world.config()),
            kind: placement.kind(),
        })
    }

    /// Finish the active placement at a screen position
    ///
    /// The body is created at the press point with the drag velocity added
    /// to the focused body's velocity, then becomes the focus. Returns
    /// `Ok(None)` when no placement was active.
    pub fn release(&mut self, screen: DVec2) -> Result<Option<BodyHandle>> {
        let Some(mut placement) = self.placement.take() else {
            return Ok(None);
        };
        placement.drag_to(screen);

        let frame_velocity = self
            .focused_body()
            .map(|body| body.velocity())
            .unwrap_or(DVec2::ZERO);
        let position = self.camera.screen_to_world(placement.press());
        let velocity = placement.drag_velocity(&self.placement_config) + frame_velocity;
        let mass = placement.mass(&self.placement_config, self.world.config());

        self.add_body(position, velocity, mass, placement.kind()).map(Some)
    }

    /// Advance one frame
    ///
    /// Steps the world once if running and non-empty, then recenters the
    /// camera on the focused body. Returns whether a step was taken.
    pub fn frame(&mut self) -> bool {
        let stepped = self.running && !self.world.is_empty();
        if stepped {
            self.integrator.step(&mut self.world);
        }
        if let Some(position) = self.focused_body().map(|body| body.position()) {
            self.camera.set_offset(position);
        }
        stepped
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}
