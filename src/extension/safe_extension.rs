use super::*;

/// Extension that always owns its storage. Copies are unconditional, which wastes a little
/// work but can never alias another entity's data.
#[derive(Debug, Default)]
pub struct SafeExtension {
    armaments: Vec<Ticks>,
    angles: Vec<Angle>,
    scalars: ExtensionScalars,
}

impl Extension for SafeExtension {
    fn set_type(&mut self, data: &EntityData) {
        *self = Self {
            armaments: vec![Ticks::ZERO; data.armament_count()],
            angles: data.turrets().iter().map(|turret| turret.angle).collect(),
            scalars: self.scalars.retained_across_type_change(),
        };
    }

    fn copy_is_noop(&self) -> bool {
        false
    }

    fn armament_consumption(&self) -> &[Ticks] {
        &self.armaments
    }

    fn copy_armament_consumption(&mut self) -> &mut [Ticks] {
        self.armaments = self.armaments.to_vec();
        &mut self.armaments
    }

    fn turret_angles(&self) -> &[Angle] {
        &self.angles
    }

    fn copy_turret_angles(&mut self) -> &mut [Angle] {
        self.angles = self.angles.to_vec();
        &mut self.angles
    }

    fn scalars(&self) -> &ExtensionScalars {
        &self.scalars
    }

    fn scalars_mut(&mut self) -> &mut ExtensionScalars {
        &mut self.scalars
    }
}
