//! Per-entity state that changes every tick, and the storage strategies behind it

use super::*;

mod cow_slice;
#[allow(clippy::module_inception)]
mod extension;
mod safe_extension;
mod scalars;
mod sharing_extension;
mod strategy;
mod template;

pub use cow_slice::CowSlice;
pub use extension::Extension;
pub use safe_extension::SafeExtension;
pub use scalars::ExtensionScalars;
pub use sharing_extension::SharingExtension;
pub use strategy::ExtensionStrategy;
pub use template::ExtensionTemplate;
