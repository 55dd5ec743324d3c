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
//! World management
//!
//! The World owns every body and the global simulation parameters. Bodies
//! live in a dense, insertion-ordered vector so iteration and rendering stay
//! cache friendly; a slot arena maps generation-checked handles onto dense
//! indices. Removal shifts every later body down by one dense index, while
//! handles of the surviving bodies stay valid.

use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::world::{Body, BodyHandle, BodyKind};
use glam::DVec2;
use std::ops::RangeInclusive;

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    dense: Option<usize>,
}

/// Container for bodies and simulation parameters
///
/// All mutation of body state goes through the world: lifecycle via
/// [`add_body`](World::add_body) / [`remove_body`](World::remove_body) and
/// physics via the integrator.
///
/// # Example
///
/// ```
/// use gravity_sandbox::{World, BodyKind};
/// use glam::DVec2;
///
/// let mut world = World::new();
/// let sun = world.add_body(DVec2::ZERO, DVec2::ZERO, 1.989e30, BodyKind::Star).unwrap();
/// assert_eq!(world.len(), 1);
/// world.remove_body(sun).unwrap();
/// assert!(world.get(sun).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct World {
    config: SimulationConfig,
    timestep: f64,
    bodies: Vec<Body>,
    handles: Vec<BodyHandle>,
    slots: Vec<Slot>,
    free_slots: Vec<u32>,
}

impl World {
    /// Create an empty world with the default configuration
    pub fn new() -> Self {
        let config = SimulationConfig::default();
        World {
            timestep: config.timestep,
            config,
            bodies: Vec::new(),
            handles: Vec::new(),
            slots: Vec::new(),
            free_slots: Vec::new(),
        }
    }

    /// Create an empty world with a custom configuration
    ///
    /// The configured timestep is clamped into the configured range.
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let timestep = config.timestep.clamp(config.min_timestep, config.max_timestep);
        Ok(World {
            timestep,
            config,
            bodies: Vec::new(),
            handles: Vec::new(),
            slots: Vec::new(),
            free_slots: Vec::new(),
        })
    }

    /// Add a body and return its handle
    ///
    /// Stars lighter than the minimum stellar mass are raised to it and
    /// planets heavier than the maximum planetary mass are lowered to it.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidParameter`] if `mass <= 0` or any component is NaN or
    /// infinite. The world is left unchanged.
    pub fn add_body(
        &mut self,
        position: DVec2,
        velocity: DVec2,
        mass: f64,
        kind: BodyKind,
    ) -> Result<BodyHandle> {
        let mut body = Body::new(position, velocity, mass, kind)?;
        let clamped = self.clamp_mass(kind, mass);
        if clamped != mass {
            log::debug!("{} mass {:.3e} kg clamped to {:.3e} kg", kind, mass, clamped);
            body.set_mass(clamped);
        }

        let dense = self.bodies.len();
        let handle = match self.free_slots.pop() {
            Some(slot) => {
                let entry = &mut self.slots[slot as usize];
                entry.dense = Some(dense);
                BodyHandle::new(slot, entry.generation)
            }
            None => {
                let slot = self.slots.len() as u32;
                self.slots.push(Slot { generation: 0, dense: Some(dense) });
                BodyHandle::new(slot, 0)
            }
        };

        self.bodies.push(body);
        self.handles.push(handle);
        log::debug!("added {} {} at {} ({} bodies)", kind, handle, position, self.bodies.len());
        Ok(handle)
    }

    /// Remove a body, returning its final state
    ///
    /// Every body after it moves down one dense index. The slot generation is
    /// bumped so the removed handle never resolves again.
    ///
    /// # Errors
    ///
    /// [`SimError::NotFound`] if the handle is invalid or already removed.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<Body> {
        let index = self.index_of(handle)?;
        let body = self.bodies.remove(index);
        self.handles.remove(index);

        for later in &self.handles[index..] {
            if let Some(dense) = self.slots[later.slot() as usize].dense.as_mut() {
                *dense -= 1;
            }
        }

        let slot = &mut self.slots[handle.slot() as usize];
        slot.dense = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_slots.push(handle.slot());

        log::debug!("removed {} ({} bodies)", handle, self.bodies.len());
        Ok(body)
    }

    /// Set the timestep in seconds, clamped into the allowed range
    ///
    /// Returns the value actually stored.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidParameter`] if `seconds` is not positive and finite.
    pub fn set_timestep(&mut self, seconds: f64) -> Result<f64> {
        if !(seconds > 0.0 && seconds.is_finite()) {
            return Err(SimError::invalid(format!(
                "timestep must be positive and finite, got {}",
                seconds
            )));
        }
        let clamped = seconds.clamp(self.config.min_timestep, self.config.max_timestep);
        if clamped != seconds {
            log::debug!("timestep {} s clamped to {} s", seconds, clamped);
        }
        self.timestep = clamped;
        Ok(clamped)
    }

    /// Current timestep in seconds
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Allowed timestep range in seconds
    pub fn timestep_range(&self) -> RangeInclusive<f64> {
        self.config.min_timestep..=self.config.max_timestep
    }

    /// Gravitational constant G
    pub fn gravitational_constant(&self) -> f64 {
        self.config.gravitational_constant
    }

    /// Minimum pairwise distance used in force evaluation
    pub fn softening_radius(&self) -> f64 {
        self.config.softening_radius
    }

    /// Configuration the world was built with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Look up a body by handle
    pub fn get(&self, handle: BodyHandle) -> Result<&Body> {
        let index = self.index_of(handle)?;
        Ok(&self.bodies[index])
    }

    /// Check if a handle refers to a live body
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.index_of(handle).is_ok()
    }

    /// Current dense index of a body
    pub fn index_of(&self, handle: BodyHandle) -> Result<usize> {
        self.slots
            .get(handle.slot() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.dense)
            .ok_or(SimError::NotFound(handle))
    }

    /// Handle of the body at a dense index
    pub fn handle_at(&self, index: usize) -> Option<BodyHandle> {
        self.handles.get(index).copied()
    }

    /// Bodies in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Handles in the same order as [`bodies`](World::bodies)
    pub fn handles(&self) -> &[BodyHandle] {
        &self.handles
    }

    /// Iterate over `(handle, body)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.handles.iter().copied().zip(self.bodies.iter())
    }

    /// Copy out the current state of every body
    pub fn snapshot(&self) -> Vec<(BodyHandle, Body)> {
        self.iter().map(|(handle, body)| (handle, *body)).collect()
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Check if the world has no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    fn clamp_mass(&self, kind: BodyKind, mass: f64) -> f64 {
        match kind {
            BodyKind::Star => mass.max(self.config.min_star_mass),
            BodyKind::Planet => mass.min(self.config.max_planet_mass),
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
