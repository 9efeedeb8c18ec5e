//! Small value types shared by everything that runs each tick

use super::*;

mod angle;
mod ticks;

pub use angle::Angle;
pub use ticks::Ticks;
