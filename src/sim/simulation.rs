use super::*;

use slotmap::{SecondaryMap, SlotMap};

/// How long newly spawned entities are protected for
pub const SPAWN_PROTECTION: Ticks = Ticks(10 * Ticks::FREQUENCY_HZ);
/// Distance between neighboring bot spawn points
const BOT_SPACING: f32 = 200.0;

new_key_type! {
    pub struct EntityKey;
}

/// Owns every entity and advances them all together one tick at a time
pub struct Simulation {
    registry: TypeRegistry,
    strategy: ExtensionStrategy,
    entities: SlotMap<EntityKey, Entity>,
    bots: SecondaryMap<EntityKey, Bot>,
    /// Bots ever spawned, so every bot gets its own index even after others are despawned
    bots_spawned: usize,
    tick_count: u64,
}

impl Simulation {
    pub fn new(registry: TypeRegistry, strategy: ExtensionStrategy) -> Self {
        info!("simulation using {} extensions", strategy);
        Self {
            registry,
            strategy,
            entities: SlotMap::with_key(),
            bots: SecondaryMap::new(),
            bots_spawned: 0,
            tick_count: 0,
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    pub fn entities(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities.iter()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of entities whose extension currently owns all of its storage
    pub fn detached_count(&self) -> usize {
        self.entities
            .values()
            .filter(|entity| entity.extension.copy_is_noop())
            .count()
    }

    pub fn spawn(
        &mut self,
        entity_type: EntityType,
        transform: Transform,
    ) -> Result<EntityKey, String> {
        let mut entity = Entity::new(&self.registry, entity_type, self.strategy, transform)?;
        entity.extension.set_spawn_protection(SPAWN_PROTECTION);
        let key = self.entities.insert(entity);
        debug!("spawned {:?} as {:?}", entity_type, key);
        Ok(key)
    }

    /// Spawns an entity of one of the level 1 types and hands it to a new bot
    pub fn spawn_bot(&mut self) -> Result<EntityKey, String> {
        let index = self.bots_spawned;
        let options: Vec<EntityType> = self.registry.spawn_options().collect();
        if options.is_empty() {
            return Err("there are no entity types bots can spawn as".to_string());
        }
        let direction = Angle::from_degrees(index as f32 * 137.5);
        let transform = Transform::new(
            direction.to_vec() * BOT_SPACING * (index + 1) as f32,
            -direction,
        );
        let key = self.spawn(options[index % options.len()], transform)?;
        self.bots.insert(key, Bot::new(index));
        self.bots_spawned += 1;
        Ok(key)
    }

    /// Removes an entity (and its bot, if it has one). Its extension goes with it.
    pub fn despawn(&mut self, key: EntityKey) -> Result<(), String> {
        self.bots.remove(key);
        match self.entities.remove(key) {
            Some(_) => {
                debug!("despawned {:?}", key);
                Ok(())
            }
            None => Err(format!("can not despawn {:?}, it does not exist", key)),
        }
    }

    pub fn command(&mut self, key: EntityKey, command: &Command) -> Result<(), String> {
        let entity = self
            .entities
            .get_mut(key)
            .ok_or_else(|| format!("{:?} does not exist", key))?;
        command.apply(entity, &self.registry)
    }

    pub fn tick(&mut self) {
        let mut commands = Vec::new();
        for (key, bot) in &mut self.bots {
            if let Some(entity) = self.entities.get(key) {
                for command in bot.update(entity, &self.registry) {
                    commands.push((key, command));
                }
            }
        }
        for (key, command) in commands {
            self.command(key, &command)
                .or_log_warn(&format!("bot command for {:?}", key));
        }

        let registry = &self.registry;
        for (key, entity) in &mut self.entities {
            entity
                .data(registry)
                .map(|data| tick_entity(entity, data))
                .or_log_error(&format!("ticking {:?}", key));
        }
        self.tick_count += 1;
        trace!("finished tick {}", self.tick_count);
    }
}
