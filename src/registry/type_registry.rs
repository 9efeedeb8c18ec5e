use super::*;

use slotmap::SlotMap;

new_key_type! {
    /// Identifies an entity type in a TypeRegistry
    pub struct EntityType;
}

/// Owns the static data of every entity type. Built once at startup and only read after that.
#[derive(Default)]
pub struct TypeRegistry {
    types: SlotMap<EntityType, EntityData>,
    labels: HashMap<String, EntityType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type. Fails if the label is taken or if an armament is mounted on a turret the
    /// type does not have.
    pub fn register(&mut self, data: EntityData) -> Result<EntityType, Box<dyn Error>> {
        if self.labels.contains_key(&data.label) {
            return Err(format!("entity type {} registered multiple times", data.label).into());
        }
        for (i, armament) in data.armaments().iter().enumerate() {
            if let Some(turret) = armament.turret {
                if turret >= data.turret_count() {
                    return Err(format!(
                        "armament {} of {} is on turret {}, but there are only {} turrets",
                        i,
                        data.label,
                        turret,
                        data.turret_count()
                    )
                    .into());
                }
            }
        }
        let label = data.label.clone();
        let entity_type = self.types.insert(data);
        self.labels.insert(label, entity_type);
        Ok(entity_type)
    }

    pub fn data(&self, entity_type: EntityType) -> Result<&EntityData, String> {
        self.types
            .get(entity_type)
            .ok_or_else(|| format!("{:?} is not a registered entity type", entity_type))
    }

    pub fn lookup(&self, label: &str) -> Option<EntityType> {
        self.labels.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// In registration order
    pub fn iter(&self) -> impl Iterator<Item = (EntityType, &EntityData)> {
        self.types.iter()
    }

    /// Types new entities can start out as
    pub fn spawn_options(&self) -> impl Iterator<Item = EntityType> + '_ {
        self.iter()
            .filter(|(_, data)| data.level == 1)
            .map(|(entity_type, _)| entity_type)
    }

    /// Types an entity of the given type can become by upgrading. Empty if there are none or if
    /// the type is unknown.
    pub fn upgrade_options(&self, entity_type: EntityType) -> impl Iterator<Item = EntityType> + '_ {
        let next_level = self
            .types
            .get(entity_type)
            .and_then(|data| data.level.checked_add(1));
        self.iter()
            .filter(move |(_, data)| Some(data.level) == next_level)
            .map(|(entity_type, _)| entity_type)
    }
}
