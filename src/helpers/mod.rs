//! General useful bits and bobs

use super::*;

mod config;
mod filesystem;
mod metronome;
mod or_log;
#[cfg(test)]
mod test_helpers;

pub use config::{build_config, MasterConfig};
pub use filesystem::{real_filesystem, FileSource, Filesystem};
pub use metronome::Metronome;
pub use or_log::OrLog;
#[cfg(test)]
pub use test_helpers::*;
