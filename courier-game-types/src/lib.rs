//! Shared game types for the two-courier delivery game.
//!
//! The game is played on a rectangular grid where some edges are blocked.
//! Two couriers move one step per tick (courier One moves first, courier Two
//! acts within the same tick) and compete or cooperate to pick up and deliver
//! time-windowed packages. This crate owns the data model and the transition
//! rules; the search engine in `courier-minimax` simulates futures by cloning
//! [`world::World`] values.

pub mod grid;
pub mod types;
pub mod world;

pub use grid::{Grid, GridError};
pub use types::{AgentId, Move, Vertex};
pub use world::{Agent, Package, PackageStatus, World};
