use super::*;

/// Something a player (or bot) wants its entity to do. Commands come from outside the
/// simulation, so invalid ones are rejected with an error rather than trusted.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Control(Control),
    Fire(Fire),
    Upgrade(Upgrade),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Control {
    pub aim_target: Option<Vector2<f32>>,
    pub altitude_target: Option<f32>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fire {
    /// Armament slot
    pub index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Upgrade {
    pub entity_type: EntityType,
}

impl Command {
    pub fn apply(&self, entity: &mut Entity, registry: &TypeRegistry) -> Result<(), String> {
        match self {
            Self::Control(control) => control.apply(&mut *entity.extension),
            Self::Fire(fire) => fire.apply(entity, registry),
            Self::Upgrade(upgrade) => upgrade.apply(entity, registry),
        }
    }
}

impl Control {
    /// Checks every field before touching the entity, so a rejected command changes nothing
    fn validate(&self) -> Result<(), String> {
        if let Some(target) = self.aim_target {
            if !target.x.is_finite() || !target.y.is_finite() {
                return Err(format!("aim target {:?} is not finite", target));
            }
        }
        if let Some(altitude) = self.altitude_target {
            if !altitude.is_finite() {
                return Err(format!("altitude target {} is not finite", altitude));
            }
        }
        Ok(())
    }

    fn apply(&self, ext: &mut dyn Extension) -> Result<(), String> {
        self.validate()?;
        if let Some(target) = self.aim_target {
            ext.set_aim_target(target);
        }
        if let Some(altitude) = self.altitude_target {
            ext.set_altitude_target(altitude.max(-1.0).min(1.0));
        }
        request_active_sensors(ext, self.active);
        Ok(())
    }
}

impl Fire {
    fn apply(&self, entity: &mut Entity, registry: &TypeRegistry) -> Result<(), String> {
        let data = entity.data(registry)?;
        let armament = data.armaments().get(self.index).ok_or_else(|| {
            format!(
                "armament {} out of range, {} has {} armaments",
                self.index,
                data.label,
                data.armament_count()
            )
        })?;
        let ext = &mut entity.extension;
        let consumption = ext.armament_consumption()[self.index];
        if !consumption.is_zero() {
            return Err(format!(
                "armament {} is reloading ({} left)",
                self.index, consumption
            ));
        }
        if let Some(turret_index) = armament.turret {
            let angle = ext.turret_angles()[turret_index];
            if !data.turrets()[turret_index].within_azimuth(angle) {
                return Err(format!(
                    "turret {} is outside of its azimuth at {}",
                    turret_index, angle
                ));
            }
        }
        ext.copy_armament_consumption()[self.index] = armament.reload;
        // Firing gives up spawn protection
        ext.set_spawn_protection(Ticks::ZERO);
        Ok(())
    }
}

impl Upgrade {
    fn apply(&self, entity: &mut Entity, registry: &TypeRegistry) -> Result<(), String> {
        if !registry
            .upgrade_options(entity.entity_type())
            .any(|option| option == self.entity_type)
        {
            return Err(format!(
                "{:?} is not an upgrade option for {:?}",
                self.entity_type,
                entity.entity_type()
            ));
        }
        entity.change_type(registry, self.entity_type)
    }
}
