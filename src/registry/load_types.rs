use super::*;

use serde::Deserialize;

pub const DEFAULT_TYPES_PATH: &str = "entity_types.toml";

/// On disk, angles are in degrees and times and speeds are per second
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TypesFile {
    #[serde(default)]
    entity: Vec<EntityEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EntityEntry {
    label: String,
    #[serde(default = "default_level")]
    level: u8,
    #[serde(default)]
    altitude_speed: f32,
    #[serde(default)]
    armament: Vec<ArmamentEntry>,
    #[serde(default)]
    turret: Vec<TurretEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ArmamentEntry {
    reload: f32,
    turret: Option<usize>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TurretEntry {
    #[serde(default)]
    angle: f32,
    #[serde(default = "default_turret_speed")]
    speed: f32,
    azimuth: Option<f32>,
    #[serde(default)]
    forward: f32,
    #[serde(default)]
    side: f32,
}

fn default_level() -> u8 {
    1
}

fn default_turret_speed() -> f32 {
    90.0
}

impl From<EntityEntry> for EntityData {
    fn from(entry: EntityEntry) -> Self {
        let hz = Ticks::FREQUENCY_HZ as f32;
        let mut data = EntityData::new(&entry.label)
            .with_level(entry.level)
            .with_altitude_speed(entry.altitude_speed / hz);
        for turret in entry.turret {
            let mut built = Turret::new(Angle::from_degrees(turret.angle))
                .with_speed(Angle::from_degrees(turret.speed / hz))
                .with_position(turret.forward, turret.side);
            if let Some(azimuth) = turret.azimuth {
                built = built.with_azimuth(Angle::from_degrees(azimuth));
            }
            data = data.with_turret(built);
        }
        for armament in entry.armament {
            let mut built = Armament::new(Ticks::from_secs(armament.reload));
            if let Some(turret) = armament.turret {
                built = built.on_turret(turret);
            }
            data = data.with_armament(built);
        }
        data
    }
}

/// Builds a registry out of the contents of a types file
pub fn parse_types(contents: &str) -> Result<TypeRegistry, Box<dyn Error>> {
    let file: TypesFile = toml::from_str(contents)?;
    let mut registry = TypeRegistry::new();
    for entry in file.entity {
        registry.register(entry.into())?;
    }
    Ok(registry)
}

pub fn load_types(path: &str, fs: &Filesystem) -> Result<TypeRegistry, Box<dyn Error>> {
    let contents = fs.read(path)?;
    let registry = parse_types(&contents).map_err(|e| format!("{}: {}", path, e))?;
    if registry.is_empty() {
        warn!("{} does not define any entity types", path);
    } else {
        info!("loaded {} entity types from {}", registry.len(), path);
    }
    Ok(registry)
}
