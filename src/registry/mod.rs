//! Static data about entity types, shared by every entity of a type

use super::*;

mod entity_data;
mod load_types;
mod type_registry;

pub use entity_data::{Armament, EntityData, Turret};
pub use load_types::{load_types, parse_types, DEFAULT_TYPES_PATH};
pub use type_registry::{EntityType, TypeRegistry};
