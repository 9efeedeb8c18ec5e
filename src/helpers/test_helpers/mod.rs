use super::*;

mod fixtures;
mod memory_files;
mod mock_keys;

pub use fixtures::*;
pub use memory_files::*;
pub use mock_keys::*;
