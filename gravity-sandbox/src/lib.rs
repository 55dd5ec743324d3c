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
//! # Gravity Sandbox
//!
//! Core of an interactive 2D gravitational N-body sandbox: users place stars
//! and planets, launch them with a drag gesture and watch Newtonian gravity
//! play out at an adjustable timestep.
//!
//! ## Features
//!
//! - **World**: Ordered body storage with generation-checked handles
//! - **Gravity**: All-pairs Newtonian forces with a distance floor
//! - **Integration**: Semi-implicit (symplectic) Euler with conservation diagnostics
//! - **Sandbox**: Run flag, focus cycling, camera and placement gestures in one context
//!
//! Windowing, input decoding and drawing live outside this crate; they feed
//! numbers in and read body state back out.
//!
//! ## Example
//!
//! ```rust
//! use gravity_sandbox::{World, BodyKind, SemiImplicitEuler};
//! use glam::DVec2;
//!
//! let mut world = World::new();
//! world.add_body(DVec2::ZERO, DVec2::ZERO, 1.989e30, BodyKind::Star).unwrap();
//! let earth = world
//!     .add_body(DVec2::new(1.496e11, 0.0), DVec2::new(0.0, 29_780.0), 5.972e24, BodyKind::Planet)
//!     .unwrap();
//!
//! let mut integrator = SemiImplicitEuler::new();
//! for _ in 0..100 {
//!     integrator.step(&mut world);
//! }
//! assert!(world.get(earth).unwrap().position().y > 0.0);
//! ```

#![warn(missing_docs)]

/// Error taxonomy
pub mod error;

/// Simulation, placement and camera configuration
pub mod config;

/// Bodies, handles and the world container
pub mod world;

/// Pairwise Newtonian gravity
pub mod gravity;

/// Time integration and diagnostics
pub mod integration;

/// Interactive simulation context
pub mod sandbox;

pub use config::{CameraConfig, PlacementConfig, SandboxConfig, SimulationConfig};
pub use error::{Result, SimError};
pub use gravity::Gravity;
pub use integration::{step, SemiImplicitEuler};
pub use sandbox::{Camera, Placement, PlacementPreview, Sandbox};
pub use world::{Body, BodyHandle, BodyKind, World};
