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
//! Error types for simulation state mutation
//!
//! Every fallible operation either fully succeeds or rejects with one of
//! these variants, leaving the world untouched.

use crate::world::BodyHandle;
use std::error::Error;
use std::fmt;

/// Errors reported by world, configuration and sandbox operations
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A mass, vector component, timestep or configuration value was out of range
    InvalidParameter(String),
    /// The handle does not refer to a live body
    NotFound(BodyHandle),
}

impl SimError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SimError::InvalidParameter(message.into())
    }

    /// Returns true for [`SimError::InvalidParameter`]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SimError::InvalidParameter(_))
    }

    /// Returns true for [`SimError::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, SimError::NotFound(_))
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidParameter(message) => write!(f, "invalid parameter: {}", message),
            SimError::NotFound(handle) => write!(f, "{} not found", handle),
        }
    }
}

impl Error for SimError {}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimError>;
