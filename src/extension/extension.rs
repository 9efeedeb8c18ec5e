use super::*;

/// The fast-changing, per-entity state that is read and written every tick. Slice fields are
/// read through the plain getters. Before writing into one, call the matching copy_*()
/// method: it makes sure the storage belongs to this extension alone (duplicating it if
/// needed) and returns it for writing. Scalar fields are stored by value and can be set
/// directly.
///
/// Simulation code should not care which implementation it is talking to. The only hint it
/// gets is copy_is_noop(), which can be used to skip work on the write path.
pub trait Extension {
    /// Reinitializes for a new entity type. Armament consumption and turret angles are reset
    /// to the type's fresh values, aim target, altitude target, spawn protection and active
    /// are kept, and everything else is zeroed.
    fn set_type(&mut self, data: &EntityData);

    /// True if the copy_*() methods currently do no work because the storage is already
    /// exclusively owned. False if calling them performs a real copy.
    fn copy_is_noop(&self) -> bool;

    /// Remaining reload ticks of each armament, indexed by armament slot
    fn armament_consumption(&self) -> &[Ticks];

    /// Must be used for all writes to armament consumption
    fn copy_armament_consumption(&mut self) -> &mut [Ticks];

    /// Current angle of each turret relative to the entity, indexed by turret
    fn turret_angles(&self) -> &[Angle];

    /// Must be used for all writes to turret angles
    fn copy_turret_angles(&mut self) -> &mut [Angle];

    fn scalars(&self) -> &ExtensionScalars;

    fn scalars_mut(&mut self) -> &mut ExtensionScalars;

    fn aim_target(&self) -> Vector2<f32> {
        self.scalars().aim_target
    }

    fn set_aim_target(&mut self, target: Vector2<f32>) {
        self.scalars_mut().aim_target = target;
    }

    fn altitude(&self) -> f32 {
        self.scalars().altitude
    }

    fn set_altitude(&mut self, altitude: f32) {
        self.scalars_mut().altitude = altitude;
    }

    fn altitude_target(&self) -> f32 {
        self.scalars().altitude_target
    }

    fn set_altitude_target(&mut self, altitude: f32) {
        self.scalars_mut().altitude_target = altitude;
    }

    fn spawn_protection(&self) -> Ticks {
        self.scalars().spawn_protection
    }

    fn set_spawn_protection(&mut self, ticks: Ticks) {
        self.scalars_mut().spawn_protection = ticks;
    }

    fn active(&self) -> bool {
        self.scalars().active
    }

    fn set_active(&mut self, active: bool) {
        self.scalars_mut().active = active;
    }

    fn active_ticks(&self) -> Ticks {
        self.scalars().active_ticks
    }

    fn set_active_ticks(&mut self, ticks: Ticks) {
        self.scalars_mut().active_ticks = ticks;
    }
}
