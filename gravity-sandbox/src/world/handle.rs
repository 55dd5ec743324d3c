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
//! Body handles
//!
//! A handle names a body by its arena slot plus the slot's generation at the
//! time the body was created. Removing a body bumps the slot generation, so old
//! handles stop resolving instead of aliasing whatever body reuses the slot.

use std::fmt;

/// Generation-checked reference to a body in a [`World`](crate::World)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle {
    slot: u32,
    generation: u32,
}

impl BodyHandle {
    /// Create a handle from a raw slot index and generation
    pub fn new(slot: u32, generation: u32) -> Self {
        BodyHandle { slot, generation }
    }

    /// Get the arena slot index
    pub fn slot(&self) -> u32 {
        self.slot
    }

    /// Get the generation number
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({}, gen: {})", self.slot, self.generation)
    }
}
