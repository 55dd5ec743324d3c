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
//! Body storage and lifecycle
//!
//! This module provides the simulation's data owner:
//! - Body records tagged by kind
//! - Generation-checked handles
//! - The World container with parameter policy

mod body;
mod handle;
#[allow(clippy::module_inception)]
mod world;

pub use body::{Body, BodyKind};
pub use handle::BodyHandle;
pub use world::World;
