//! Runs entities forward in time, with bots standing in for players

use super::*;

mod bot;
mod simulation;

pub use bot::{Bot, UPGRADE_PATIENCE};
pub use simulation::{EntityKey, Simulation, SPAWN_PROTECTION};
