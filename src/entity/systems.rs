use super::*;

/// Advances an entity by one tick. Only writes to slice storage when something actually changes,
/// so idle entities of the sharing strategy stay aliased to their type's template.
pub fn tick_entity(entity: &mut Entity, data: &EntityData) {
    reload_armaments(&mut *entity.extension);
    aim_turrets(&entity.transform, &mut *entity.extension, data);
    update_altitude(&mut *entity.extension, data);
    update_spawn_protection(&mut *entity.extension);
    update_active_sensors(&mut *entity.extension);
}

pub fn reload_armaments(ext: &mut dyn Extension) {
    if ext.armament_consumption().iter().all(|ticks| ticks.is_zero()) {
        return;
    }
    for ticks in ext.copy_armament_consumption() {
        *ticks = ticks.saturating_sub(Ticks::ONE);
    }
}

/// Angle a turret moves to this tick, starting from current
fn turret_step(transform: &Transform, aim_target: Vector2<f32>, turret: &Turret, current: Angle) -> Angle {
    let mount = transform.transform_point(turret.position());
    let goal = Angle::from_vec(aim_target - mount) - transform.direction;
    current.rotate_towards(turret.clamp_to_azimuth(goal), turret.speed)
}

pub fn aim_turrets(transform: &Transform, ext: &mut dyn Extension, data: &EntityData) {
    let aim_target = ext.aim_target();
    let settled = data
        .turrets()
        .iter()
        .zip(ext.turret_angles())
        .all(|(turret, &current)| turret_step(transform, aim_target, turret, current) == current);
    if settled {
        return;
    }
    for (turret, angle) in data.turrets().iter().zip(ext.copy_turret_angles()) {
        *angle = turret_step(transform, aim_target, turret, *angle);
    }
}

pub fn update_altitude(ext: &mut dyn Extension, data: &EntityData) {
    let altitude = ext.altitude();
    let target = ext.altitude_target().max(-1.0).min(1.0);
    if altitude == target {
        return;
    }
    let next = if (target - altitude).abs() <= data.altitude_speed {
        target
    } else if target > altitude {
        altitude + data.altitude_speed
    } else {
        altitude - data.altitude_speed
    };
    ext.set_altitude(next);
}

pub fn update_spawn_protection(ext: &mut dyn Extension) {
    let ticks = ext.spawn_protection();
    if !ticks.is_zero() {
        ext.set_spawn_protection(ticks - Ticks::ONE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_angle_near(actual: Angle, expected: Angle) {
        if (actual - expected).abs() > Angle::from_degrees(0.1) {
            panic!("{} ≉ {}", actual, expected);
        }
    }

    #[test]
    fn idle_entity_stays_aliased() {
        let registry = mock_registry();
        let mut entity = mock_entity(&registry, "boat", ExtensionStrategy::Sharing);
        let data = entity.data(&registry).unwrap();
        // Where the turret already points
        entity.extension.set_aim_target(Vector2::new(0.0, 1000.0));
        for _ in 0..10 {
            tick_entity(&mut entity, data);
        }
        assert_eq!(
            entity.extension.armament_consumption().as_ptr(),
            data.template().armament_consumption().as_ptr()
        );
        assert_eq!(
            entity.extension.turret_angles().as_ptr(),
            data.template().turret_angles().as_ptr()
        );
    }

    #[test]
    fn reload_counts_down_to_zero() {
        let mut ext = ExtensionStrategy::Exclusive.create();
        ext.set_type(&mock_boat_data());
        ext.copy_armament_consumption()[0] = Ticks(2);
        reload_armaments(&mut *ext);
        assert_eq!(ext.armament_consumption(), &[Ticks(1), Ticks::ZERO]);
        reload_armaments(&mut *ext);
        reload_armaments(&mut *ext);
        assert_eq!(ext.armament_consumption(), &[Ticks::ZERO, Ticks::ZERO]);
    }

    #[test]
    fn reload_of_ready_entity_does_not_copy() {
        let data = mock_boat_data();
        let mut ext = ExtensionStrategy::Sharing.create();
        ext.set_type(&data);
        reload_armaments(&mut *ext);
        assert_eq!(
            ext.armament_consumption().as_ptr(),
            data.template().armament_consumption().as_ptr()
        );
    }

    #[test]
    fn turret_rotates_toward_target_at_speed() {
        let data = mock_turret_boat_data();
        let mut ext = ExtensionStrategy::Sharing.create();
        ext.set_type(&data);
        // Directly to the left
        ext.set_aim_target(Vector2::new(0.0, 100.0));
        aim_turrets(&Transform::default(), &mut *ext, &data);
        let speed = data.turrets()[0].speed;
        assert_angle_near(ext.turret_angles()[0], speed);
        for _ in 0..100 {
            aim_turrets(&Transform::default(), &mut *ext, &data);
        }
        assert_angle_near(ext.turret_angles()[0], Angle::from_degrees(90.0));
    }

    #[test]
    fn settled_turrets_are_not_copied() {
        let data = mock_turret_boat_data();
        let mut ext = ExtensionStrategy::Exclusive.create();
        ext.set_type(&data);
        ext.set_aim_target(Vector2::new(0.0, 100.0));
        for _ in 0..100 {
            aim_turrets(&Transform::default(), &mut *ext, &data);
        }
        // Every exclusive copy reallocates, so an unchanged pointer means nothing was copied
        let before = ext.turret_angles().as_ptr();
        aim_turrets(&Transform::default(), &mut *ext, &data);
        assert_eq!(ext.turret_angles().as_ptr(), before);
        for &angle in ext.turret_angles() {
            assert_angle_near(angle, Angle::from_degrees(90.0));
        }
    }

    #[test]
    fn only_moving_turrets_change() {
        let data = mock_turret_boat_data();
        let mut ext = ExtensionStrategy::Sharing.create();
        ext.set_type(&data);
        // Straight ahead, where turret 0 already points
        ext.set_aim_target(Vector2::new(100.0, 0.0));
        aim_turrets(&Transform::default(), &mut *ext, &data);
        let speed = data.turrets()[1].speed;
        assert_eq!(ext.turret_angles()[0], Angle::ZERO);
        assert_angle_near(ext.turret_angles()[1], Angle::from_degrees(45.0) - speed);
        assert_angle_near(ext.turret_angles()[2], Angle::from_degrees(-45.0) + speed);
    }

    #[test]
    fn turret_aim_accounts_for_entity_direction() {
        let data = mock_turret_boat_data();
        let mut ext = ExtensionStrategy::Exclusive.create();
        ext.set_type(&data);
        let transform = Transform::new(Vector2::zero(), Angle::from_degrees(90.0));
        // Dead ahead of an entity facing +Y
        ext.set_aim_target(Vector2::new(0.0, 100.0));
        for _ in 0..100 {
            aim_turrets(&transform, &mut *ext, &data);
        }
        assert_angle_near(ext.turret_angles()[0], Angle::ZERO);
    }

    #[test]
    fn turret_stops_at_azimuth() {
        let data = mock_boat_data();
        let mut ext = ExtensionStrategy::Sharing.create();
        ext.set_type(&data);
        // Behind and to the right, outside of the turret's reach
        ext.set_aim_target(Vector2::new(-100.0, -100.0));
        for _ in 0..100 {
            aim_turrets(&Transform::default(), &mut *ext, &data);
        }
        let turret = &data.turrets()[0];
        let angle = ext.turret_angles()[0];
        assert!(turret.within_azimuth(angle));
        assert_angle_near(angle, turret.clamp_to_azimuth(Angle::from_degrees(-135.0)));
    }

    #[test]
    fn altitude_approaches_target() {
        let data = mock_boat_data();
        let mut ext = ExtensionStrategy::Sharing.create();
        ext.set_type(&data);
        ext.set_altitude_target(-1.0);
        update_altitude(&mut *ext, &data);
        assert_eq!(ext.altitude(), -data.altitude_speed);
        for _ in 0..1000 {
            update_altitude(&mut *ext, &data);
        }
        assert_eq!(ext.altitude(), -1.0);
    }

    #[test]
    fn spawn_protection_runs_out() {
        let mut ext = ExtensionStrategy::Exclusive.create();
        ext.set_spawn_protection(Ticks(2));
        update_spawn_protection(&mut *ext);
        update_spawn_protection(&mut *ext);
        assert_eq!(ext.spawn_protection(), Ticks::ZERO);
        update_spawn_protection(&mut *ext);
        assert_eq!(ext.spawn_protection(), Ticks::ZERO);
    }

    #[test]
    fn tick_runs_every_system() {
        let registry = mock_registry();
        let mut entity = mock_entity(&registry, "boat", ExtensionStrategy::Sharing);
        let data = entity.data(&registry).unwrap().clone();
        entity.extension.copy_armament_consumption()[1] = Ticks(5);
        entity.extension.set_spawn_protection(Ticks(5));
        entity.extension.set_altitude_target(1.0);
        tick_entity(&mut entity, &data);
        assert_eq!(entity.extension.armament_consumption()[1], Ticks(4));
        assert_eq!(entity.extension.spawn_protection(), Ticks(4));
        assert_eq!(entity.extension.altitude(), data.altitude_speed);
    }
}
