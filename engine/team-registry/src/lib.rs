//! Team Registry - In-memory registry of sports teams and players
//!
//! This crate provides the TeamRegistry which manages team and player
//! registration, captain designation, roster lookups, and skill/salary
//! rankings for a single process. No persistence, no network surface.

pub mod error;
pub mod registry;
pub mod types;

pub use error::{RegistryError, Result};
pub use registry::TeamRegistry;
pub use types::{Player, PlayerId, Team, TeamId};
