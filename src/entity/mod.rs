//! Simulated objects, the commands they accept and the systems that advance them each tick

use super::*;

mod commands;
#[allow(clippy::module_inception)]
mod entity;
mod sensors;
mod systems;

pub use commands::{Command, Control, Fire, Upgrade};
pub use entity::{Entity, Transform};
pub use sensors::{
    request_active_sensors, update_active_sensors, ACTIVE_SENSOR_COOLDOWN, ACTIVE_SENSOR_WINDOW,
};
pub use systems::tick_entity;
