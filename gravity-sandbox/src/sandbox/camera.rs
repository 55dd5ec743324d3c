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
//! Camera transform between world meters and screen pixels
//!
//! The camera is described by the world point shown at the viewport center
//! (`offset`) and a zoom level in meters per pixel (`scale`). Screen
//! coordinates have their origin at the top-left corner of the viewport.

use crate::config::CameraConfig;
use glam::DVec2;

/// Pan/zoom state of the view
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    offset: DVec2,
    scale: f64,
    config: CameraConfig,
}

impl Camera {
    /// Create a camera centered on the origin at the configured scale
    pub fn new(config: CameraConfig) -> Self {
        Camera {
            offset: DVec2::ZERO,
            scale: config.initial_scale,
            config,
        }
    }

    /// World point at the viewport center (meters)
    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    /// Move the viewport center to a world point
    pub fn set_offset(&mut self, offset: DVec2) {
        self.offset = offset;
    }

    /// Zoom level in meters per pixel
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Viewport size in pixels
    pub fn viewport(&self) -> DVec2 {
        DVec2::new(self.config.viewport_width, self.config.viewport_height)
    }

    /// Screen position of the viewport center
    pub fn screen_center(&self) -> DVec2 {
        (self.viewport() * 0.5).floor()
    }

    /// Map a world position to screen pixels
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        (world - self.offset) / self.scale + self.screen_center()
    }

    /// Map a screen position to world meters
    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        (screen - self.screen_center()) * self.scale + self.offset
    }

    /// Zoom in by one step, returning the new scale
    pub fn zoom_in(&mut self) -> f64 {
        self.scale = (self.scale / self.config.zoom_factor).max(self.config.min_scale);
        self.scale
    }

    /// Zoom out by one step, returning the new scale
    pub fn zoom_out(&mut self) -> f64 {
        self.scale = (self.scale * self.config.zoom_factor).min(self.config.max_scale);
        self.scale
    }

    /// Pan by whole steps along each axis (e.g. `(0, -1)` moves the view up)
    pub fn pan(&mut self, steps: DVec2) {
        self.offset += steps * self.config.pan_step_pixels * self.scale;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_center_maps_to_offset() {
        let mut camera = Camera::default();
        camera.set_offset(DVec2::new(3e11, -2e11));
        assert_eq!(camera.screen_to_world(DVec2::new(400.0, 375.0)), DVec2::new(3e11, -2e11));
        assert_eq!(camera.world_to_screen(DVec2::new(3e11, -2e11)), DVec2::new(400.0, 375.0));
    }

    #[test]
    fn test_screen_world_roundtrip() {
        let camera = Camera::default();
        let world = camera.screen_to_world(DVec2::new(500.0, 275.0));
        assert_eq!(world, DVec2::new(1e11, -1e11));
        assert_eq!(camera.world_to_screen(world), DVec2::new(500.0, 275.0));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::default();
        for _ in 0..500 {
            camera.zoom_in();
        }
        assert_eq!(camera.scale(), 1e3);
        for _ in 0..500 {
            camera.zoom_out();
        }
        assert_eq!(camera.scale(), 1e11);
    }

    #[test]
    fn test_pan_scales_with_zoom() {
        let mut camera = Camera::default();
        camera.pan(DVec2::new(1.0, 0.0));
        assert_eq!(camera.offset(), DVec2::new(50.0 * 1e9, 0.0));
        camera.pan(DVec2::new(0.0, -2.0));
        assert_eq!(camera.offset(), DVec2::new(5e10, -1e11));
    }
}
