// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the player core talks through.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The player session only ever sees the traits
//!
//! # Example
//!
//! ```ignore
//! use onair::application::port::MediaEngine;
//!
//! // Infrastructure implements the port trait
//! struct PlatformEngine { /* ... */ }
//! impl MediaEngine for PlatformEngine { /* ... */ }
//! ```

pub mod port;
