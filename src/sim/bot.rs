use super::*;

/// How far ahead of its entity a bot aims
const AIM_DISTANCE: f32 = 500.0;
/// Ticks a bot keeps its sensors in each state before asking to flip them
const SENSOR_PERIOD: u32 = 80;
/// Ticks a bot spends at each depth before changing it
const DIVE_PERIOD: u32 = 120;
/// Ticks a bot waits after spawning or upgrading before upgrading again
pub const UPGRADE_PATIENCE: u32 = 300;

/// Drives an entity without a player. Deterministic, so simulations with bots are repeatable.
#[derive(Debug)]
pub struct Bot {
    index: usize,
    /// Direction the bot is currently aiming, relative to the world
    sweep: Angle,
    sweep_speed: Angle,
    /// Highest level the bot will upgrade to
    level_ambition: u8,
    /// Ticks since spawning or the last upgrade
    age: u32,
}

impl Bot {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            sweep: Angle::from_degrees(index as f32 * 37.0),
            sweep_speed: Angle::from_degrees(2.0 + (index % 4) as f32),
            level_ambition: 1 + (index % 3) as u8,
            age: 0,
        }
    }

    /// Commands the bot wants to issue this tick
    pub fn update(&mut self, entity: &Entity, registry: &TypeRegistry) -> Vec<Command> {
        let data = match entity.data(registry) {
            Ok(data) => data,
            Err(e) => {
                warn!("bot {} can not control its entity: {}", self.index, e);
                return Vec::new();
            }
        };
        self.age = self.age.saturating_add(1);
        self.sweep = self.sweep + self.sweep_speed;

        let mut commands = vec![Command::Control(Control {
            aim_target: Some(entity.transform.position + self.sweep.to_vec() * AIM_DISTANCE),
            altitude_target: Some(if (self.age / DIVE_PERIOD) % 2 == 1 {
                -1.0
            } else {
                0.0
            }),
            active: (self.age / SENSOR_PERIOD) % 2 == 0,
        })];

        if let Some(index) = ready_armament(&*entity.extension, data) {
            commands.push(Command::Fire(Fire { index }));
        }

        if self.age >= UPGRADE_PATIENCE && data.level < self.level_ambition {
            let options: Vec<EntityType> = registry.upgrade_options(entity.entity_type()).collect();
            if !options.is_empty() {
                commands.push(Command::Upgrade(Upgrade {
                    entity_type: options[self.index % options.len()],
                }));
                self.age = 0;
            }
        }

        commands
    }
}

/// First armament that is loaded and, if it is on a turret, pointed somewhere it can fire
fn ready_armament(ext: &dyn Extension, data: &EntityData) -> Option<usize> {
    let consumption = ext.armament_consumption();
    let angles = ext.turret_angles();
    data.armaments()
        .iter()
        .enumerate()
        .find(|(i, armament)| {
            consumption[*i].is_zero()
                && armament
                    .turret
                    .map_or(true, |t| data.turrets()[t].within_azimuth(angles[t]))
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_fire(commands: &[Command]) -> bool {
        commands
            .iter()
            .any(|command| matches!(command, Command::Fire(_)))
    }

    #[test]
    fn always_controls_entity() {
        let registry = mock_registry();
        let entity = mock_entity(&registry, "turret_boat", ExtensionStrategy::Sharing);
        let mut bot = Bot::new(0);
        let commands = bot.update(&entity, &registry);
        assert!(matches!(commands[0], Command::Control(_)));
    }

    #[test]
    fn fires_first_ready_armament() {
        let registry = mock_registry();
        let mut entity = mock_entity(&registry, "boat", ExtensionStrategy::Sharing);
        let mut bot = Bot::new(0);
        let commands = bot.update(&entity, &registry);
        assert!(commands.contains(&Command::Fire(Fire { index: 0 })));
        entity.extension.copy_armament_consumption()[0] = Ticks(3);
        let commands = bot.update(&entity, &registry);
        assert!(commands.contains(&Command::Fire(Fire { index: 1 })));
        entity.extension.copy_armament_consumption()[1] = Ticks(3);
        assert!(!has_fire(&bot.update(&entity, &registry)));
    }

    #[test]
    fn does_not_fire_turret_outside_azimuth() {
        let registry = mock_registry();
        let mut entity = mock_entity(&registry, "boat", ExtensionStrategy::Exclusive);
        entity.extension.copy_turret_angles()[0] = Angle::from_degrees(-90.0);
        let commands = Bot::new(0).update(&entity, &registry);
        assert!(commands.contains(&Command::Fire(Fire { index: 1 })));
    }

    #[test]
    fn upgrades_after_patience() {
        let registry = mock_registry();
        let entity = mock_entity(&registry, "boat", ExtensionStrategy::Sharing);
        // Index 1 is ambitious enough to reach level 2
        let mut bot = Bot::new(1);
        let is_upgrade = |command: &Command| matches!(command, Command::Upgrade(_));
        for _ in 1..UPGRADE_PATIENCE {
            assert!(!bot.update(&entity, &registry).iter().any(is_upgrade));
        }
        let commands = bot.update(&entity, &registry);
        assert!(commands.contains(&Command::Upgrade(Upgrade {
            entity_type: registry.lookup("turret_boat").unwrap()
        })));
    }

    #[test]
    fn unambitious_bot_does_not_upgrade() {
        let registry = mock_registry();
        let entity = mock_entity(&registry, "boat", ExtensionStrategy::Sharing);
        let mut bot = Bot::new(0);
        for _ in 0..UPGRADE_PATIENCE * 2 {
            assert!(!bot
                .update(&entity, &registry)
                .iter()
                .any(|command| matches!(command, Command::Upgrade(_))));
        }
    }
}
