use super::*;

/// Extension that starts out aliasing the fresh storage of its entity type, which every
/// entity of that type shares. Each slice field is duplicated the first time it is copied
/// for writing and stays private after that, until the next set_type().
#[derive(Debug, Default)]
pub struct SharingExtension {
    armaments: CowSlice<Ticks>,
    angles: CowSlice<Angle>,
    scalars: ExtensionScalars,
}

impl Extension for SharingExtension {
    fn set_type(&mut self, data: &EntityData) {
        let template = data.template();
        *self = Self {
            armaments: CowSlice::from(template.armament_consumption()),
            angles: CowSlice::from(template.turret_angles()),
            scalars: self.scalars.retained_across_type_change(),
        };
    }

    fn copy_is_noop(&self) -> bool {
        self.armaments.is_detached() && self.angles.is_detached()
    }

    fn armament_consumption(&self) -> &[Ticks] {
        self.armaments.as_slice()
    }

    fn copy_armament_consumption(&mut self) -> &mut [Ticks] {
        self.armaments.detach()
    }

    fn turret_angles(&self) -> &[Angle] {
        self.angles.as_slice()
    }

    fn copy_turret_angles(&mut self) -> &mut [Angle] {
        self.angles.detach()
    }

    fn scalars(&self) -> &ExtensionScalars {
        &self.scalars
    }

    fn scalars_mut(&mut self) -> &mut ExtensionScalars {
        &mut self.scalars
    }
}
