use super::*;

/// A weapon or launcher slot
#[derive(Clone, Debug, PartialEq)]
pub struct Armament {
    /// Ticks it takes to be ready again after firing
    pub reload: Ticks,
    /// Index of the turret this armament is mounted on, if any
    pub turret: Option<usize>,
}

impl Armament {
    pub fn new(reload: Ticks) -> Self {
        Self {
            reload,
            turret: None,
        }
    }

    pub fn on_turret(mut self, turret: usize) -> Self {
        self.turret = Some(turret);
        self
    }
}

/// A rotatable mount
#[derive(Clone, Debug, PartialEq)]
pub struct Turret {
    /// Rest angle relative to the entity's heading
    pub angle: Angle,
    /// Maximum rotation per tick
    pub speed: Angle,
    /// How far the turret can rotate away from its rest angle in either direction, or None if it
    /// can rotate all the way around
    pub azimuth: Option<Angle>,
    /// Offset from the entity's center along its heading
    pub position_forward: f32,
    /// Offset from the entity's center to its left
    pub position_side: f32,
}

impl Turret {
    pub fn new(angle: Angle) -> Self {
        Self {
            angle,
            speed: Angle::from_degrees(9.0),
            azimuth: None,
            position_forward: 0.0,
            position_side: 0.0,
        }
    }

    pub fn with_speed(mut self, speed: Angle) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_azimuth(mut self, azimuth: Angle) -> Self {
        self.azimuth = Some(azimuth);
        self
    }

    pub fn with_position(mut self, forward: f32, side: f32) -> Self {
        self.position_forward = forward;
        self.position_side = side;
        self
    }

    pub fn position(&self) -> Vector2<f32> {
        Vector2::new(self.position_forward, self.position_side)
    }

    pub fn within_azimuth(&self, angle: Angle) -> bool {
        match self.azimuth {
            Some(azimuth) => (angle - self.angle).abs() <= azimuth,
            None => true,
        }
    }

    /// The closest angle to the given one this turret can reach
    pub fn clamp_to_azimuth(&self, angle: Angle) -> Angle {
        match self.azimuth {
            Some(azimuth) => self.angle + (angle - self.angle).clamp_magnitude(azimuth),
            None => angle,
        }
    }
}

/// Static data about an entity type. Owned by the TypeRegistry.
#[derive(Clone, Debug)]
pub struct EntityData {
    pub label: String,
    /// Types can only be upgraded to types of the next level
    pub level: u8,
    /// Maximum altitude change per tick
    pub altitude_speed: f32,
    armaments: Vec<Armament>,
    turrets: Vec<Turret>,
    template: ExtensionTemplate,
}

impl EntityData {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            level: 1,
            altitude_speed: 0.0,
            armaments: Vec::new(),
            turrets: Vec::new(),
            template: ExtensionTemplate::new(0, Vec::new()),
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_altitude_speed(mut self, altitude_speed: f32) -> Self {
        self.altitude_speed = altitude_speed;
        self
    }

    pub fn with_armament(mut self, armament: Armament) -> Self {
        self.armaments.push(armament);
        self.rebuild_template();
        self
    }

    pub fn with_turret(mut self, turret: Turret) -> Self {
        self.turrets.push(turret);
        self.rebuild_template();
        self
    }

    pub fn armaments(&self) -> &[Armament] {
        &self.armaments
    }

    pub fn turrets(&self) -> &[Turret] {
        &self.turrets
    }

    pub fn armament_count(&self) -> usize {
        self.armaments.len()
    }

    pub fn turret_count(&self) -> usize {
        self.turrets.len()
    }

    /// Fresh extension storage for this type, shared by every sharing extension of this type
    pub fn template(&self) -> &ExtensionTemplate {
        &self.template
    }

    fn rebuild_template(&mut self) {
        self.template = ExtensionTemplate::new(
            self.armaments.len(),
            self.turrets.iter().map(|turret| turret.angle),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_follows_slots() {
        let data = EntityData::new("frigate")
            .with_armament(Armament::new(Ticks(20)))
            .with_turret(Turret::new(Angle::from_degrees(180.0)))
            .with_armament(Armament::new(Ticks(5)).on_turret(0));
        assert_eq!(data.template().armament_consumption().len(), 2);
        assert_eq!(
            &**data.template().turret_angles(),
            &[Angle::from_degrees(180.0)]
        );
    }

    #[test]
    fn turret_without_azimuth_reaches_everywhere() {
        let turret = Turret::new(Angle::ZERO);
        let angle = Angle::from_degrees(170.0);
        assert!(turret.within_azimuth(angle));
        assert_eq!(turret.clamp_to_azimuth(angle), angle);
    }

    #[test]
    fn turret_azimuth_is_relative_to_rest_angle() {
        let turret =
            Turret::new(Angle::from_degrees(180.0)).with_azimuth(Angle::from_degrees(30.0));
        assert!(turret.within_azimuth(Angle::from_degrees(-160.0)));
        assert!(!turret.within_azimuth(Angle::from_degrees(140.0)));
    }

    #[test]
    fn clamps_to_azimuth() {
        let turret = Turret::new(Angle::ZERO).with_azimuth(Angle::from_degrees(45.0));
        assert_eq!(
            turret.clamp_to_azimuth(Angle::from_degrees(90.0)),
            Angle::from_degrees(45.0)
        );
        assert_eq!(
            turret.clamp_to_azimuth(Angle::from_degrees(-60.0)),
            Angle::from_degrees(-45.0)
        );
    }
}
