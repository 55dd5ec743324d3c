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
//! Simulation, placement and camera configuration
//!
//! Defaults reproduce the constants of the interactive sandbox: SI units,
//! a 10,000 km softening radius and a timestep slider spanning 100 s to
//! 29,000 s. With the `serde` feature every struct can be loaded from a
//! partial document; missing fields fall back to their defaults.

use crate::error::{Result, SimError};

/// Gravitational constant in SI units (m³/(kg⋅s²))
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;

/// Default softening radius (meters)
///
/// Pairwise distances below this value are raised to it before the force is
/// evaluated.
pub const DEFAULT_SOFTENING_RADIUS: f64 = 1e7;

/// Default integration timestep (seconds)
pub const DEFAULT_TIMESTEP: f64 = 1000.0;

/// Smallest stellar mass accepted for a star (~0.12 solar masses, Proxima Centauri)
pub const MIN_STAR_MASS: f64 = 2.38e29;

/// Largest planetary mass accepted for a planet (Jupiter)
pub const MAX_PLANET_MASS: f64 = 1.898e27;

/// Mass a planet starts from while being placed (Pluto)
pub const MIN_PLANET_MASS: f64 = 1.31e22;

fn require_positive(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::invalid(format!("{} must be positive and finite, got {}", name, value)))
    }
}

/// Physical constants and parameter bounds of a [`World`](crate::World)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Gravitational constant G
    pub gravitational_constant: f64,
    /// Minimum pairwise distance used in force evaluation
    pub softening_radius: f64,
    /// Initial timestep, clamped into `[min_timestep, max_timestep]`
    pub timestep: f64,
    /// Lower timestep bound
    pub min_timestep: f64,
    /// Upper timestep bound
    pub max_timestep: f64,
    /// Stars created lighter than this are raised to it
    pub min_star_mass: f64,
    /// Planets created heavier than this are lowered to it
    pub max_planet_mass: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            softening_radius: DEFAULT_SOFTENING_RADIUS,
            timestep: DEFAULT_TIMESTEP,
            min_timestep: 100.0,
            max_timestep: 29_000.0,
            min_star_mass: MIN_STAR_MASS,
            max_planet_mass: MAX_PLANET_MASS,
        }
    }
}

impl SimulationConfig {
    /// Set the gravitational constant
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    /// Set the softening radius
    pub fn with_softening_radius(mut self, radius: f64) -> Self {
        self.softening_radius = radius;
        self
    }

    /// Set the initial timestep
    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    /// Set the allowed timestep range
    pub fn with_timestep_range(mut self, min: f64, max: f64) -> Self {
        self.min_timestep = min;
        self.max_timestep = max;
        self
    }

    /// Set the star and planet mass clamps
    pub fn with_mass_limits(mut self, min_star_mass: f64, max_planet_mass: f64) -> Self {
        self.min_star_mass = min_star_mass;
        self.max_planet_mass = max_planet_mass;
        self
    }

    /// Check that every value is usable by the world and integrator
    pub fn validate(&self) -> Result<()> {
        require_positive("gravitational_constant", self.gravitational_constant)?;
        require_positive("softening_radius", self.softening_radius)?;
        require_positive("timestep", self.timestep)?;
        require_positive("min_timestep", self.min_timestep)?;
        require_positive("max_timestep", self.max_timestep)?;
        if self.min_timestep > self.max_timestep {
            return Err(SimError::invalid(format!(
                "min_timestep {} exceeds max_timestep {}",
                self.min_timestep, self.max_timestep
            )));
        }
        require_positive("min_star_mass", self.min_star_mass)?;
        require_positive("max_planet_mass", self.max_planet_mass)?;
        Ok(())
    }
}

/// Hold-to-grow and drag-to-launch parameters for placing bodies
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementConfig {
    /// Stellar mass added per second of hold (kg/s)
    pub star_mass_rate: f64,
    /// Planet mass at the start of a hold
    pub min_planet_mass: f64,
    /// Hold duration after which a planet reaches the planetary mass limit (s)
    pub planet_full_hold_secs: f64,
    /// Launch speed per pixel of drag (m/s)
    pub velocity_per_pixel: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        PlacementConfig {
            star_mass_rate: 3e29,
            min_planet_mass: MIN_PLANET_MASS,
            planet_full_hold_secs: 15.0,
            velocity_per_pixel: 1e3,
        }
    }
}

impl PlacementConfig {
    /// Set the launch speed per pixel of drag
    pub fn with_velocity_per_pixel(mut self, velocity: f64) -> Self {
        self.velocity_per_pixel = velocity;
        self
    }

    /// Check that every value is positive and finite
    pub fn validate(&self) -> Result<()> {
        require_positive("star_mass_rate", self.star_mass_rate)?;
        require_positive("min_planet_mass", self.min_planet_mass)?;
        require_positive("planet_full_hold_secs", self.planet_full_hold_secs)?;
        require_positive("velocity_per_pixel", self.velocity_per_pixel)
    }
}

/// Viewport and zoom parameters for the camera
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraConfig {
    /// Viewport width in pixels
    pub viewport_width: f64,
    /// Viewport height in pixels
    pub viewport_height: f64,
    /// Meters per pixel at startup
    pub initial_scale: f64,
    /// Scale ratio applied per zoom request
    pub zoom_factor: f64,
    /// Most zoomed-in scale (meters per pixel)
    pub min_scale: f64,
    /// Most zoomed-out scale (meters per pixel)
    pub max_scale: f64,
    /// Pan distance per request in pixels
    pub pan_step_pixels: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            viewport_width: 800.0,
            viewport_height: 750.0,
            initial_scale: 1e9,
            zoom_factor: 1.1,
            min_scale: 1e3,
            max_scale: 1e11,
            pan_step_pixels: 50.0,
        }
    }
}

impl CameraConfig {
    /// Set the viewport size in pixels
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set the startup scale in meters per pixel
    pub fn with_initial_scale(mut self, scale: f64) -> Self {
        self.initial_scale = scale;
        self
    }

    /// Check viewport, zoom and scale bounds
    pub fn validate(&self) -> Result<()> {
        require_positive("viewport_width", self.viewport_width)?;
        require_positive("viewport_height", self.viewport_height)?;
        require_positive("initial_scale", self.initial_scale)?;
        require_positive("min_scale", self.min_scale)?;
        require_positive("max_scale", self.max_scale)?;
        require_positive("pan_step_pixels", self.pan_step_pixels)?;
        if !(self.zoom_factor > 1.0 && self.zoom_factor.is_finite()) {
            return Err(SimError::invalid(format!(
                "zoom_factor must be finite and greater than 1, got {}",
                self.zoom_factor
            )));
        }
        if self.min_scale > self.max_scale {
            return Err(SimError::invalid(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        Ok(())
    }
}

/// Complete configuration for a [`Sandbox`](crate::Sandbox)
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SandboxConfig {
    /// World constants
    pub simulation: SimulationConfig,
    /// Body placement gesture
    pub placement: PlacementConfig,
    /// Camera
    pub camera: CameraConfig,
}

impl SandboxConfig {
    /// Validate every section plus the cross-section mass ordering
    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        self.placement.validate()?;
        self.camera.validate()?;
        if self.placement.min_planet_mass > self.simulation.max_planet_mass {
            return Err(SimError::invalid(format!(
                "min_planet_mass {} exceeds max_planet_mass {}",
                self.placement.min_planet_mass, self.simulation.max_planet_mass
            )));
        }
        Ok(())
    }
}
