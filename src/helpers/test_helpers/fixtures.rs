use super::*;

/// Level 1. Armament 0 is on the turret and reloads in 10 ticks, armament 1 is fixed and reloads
/// in 30. The turret rests pointing left and can swing 90° either way.
pub fn mock_boat_data() -> EntityData {
    EntityData::new("boat")
        .with_altitude_speed(0.1)
        .with_turret(Turret::new(Angle::from_degrees(90.0)).with_azimuth(Angle::from_degrees(90.0)))
        .with_armament(Armament::new(Ticks(10)).on_turret(0))
        .with_armament(Armament::new(Ticks(30)))
}

/// Level 2, no armaments and three turrets that rotate all the way around
pub fn mock_turret_boat_data() -> EntityData {
    EntityData::new("turret_boat")
        .with_level(2)
        .with_turret(Turret::new(Angle::ZERO))
        .with_turret(Turret::new(Angle::from_degrees(45.0)))
        .with_turret(Turret::new(Angle::from_degrees(315.0)))
}

pub fn mock_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register(mock_boat_data()).unwrap();
    registry.register(mock_turret_boat_data()).unwrap();
    registry
}

pub fn mock_entity(registry: &TypeRegistry, label: &str, strategy: ExtensionStrategy) -> Entity {
    let entity_type = registry
        .lookup(label)
        .unwrap_or_else(|| panic!("no {} in mock registry", label));
    Entity::new(registry, entity_type, strategy, Transform::default()).unwrap()
}
