use super::*;

/// The fields of an extension that are always stored by value. Since they are never aliased
/// they can be written without a copy step, regardless of storage strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtensionScalars {
    /// Position weapons and sensors are aimed at
    pub aim_target: Vector2<f32>,
    /// Current altitude, -1 is fully submerged, 0 is the surface and 1 is fully airborne
    pub altitude: f32,
    /// Altitude the entity is moving toward
    pub altitude_target: f32,
    /// Remaining ticks of immunity to damage
    pub spawn_protection: Ticks,
    /// If active sensors are emitting
    pub active: bool,
    /// Remaining ticks of the current sensor phase (emitting window or cooldown)
    pub active_ticks: Ticks,
}

impl Default for ExtensionScalars {
    fn default() -> Self {
        Self {
            aim_target: Vector2::zero(),
            altitude: 0.0,
            altitude_target: 0.0,
            spawn_protection: Ticks::ZERO,
            active: false,
            active_ticks: Ticks::ZERO,
        }
    }
}

impl ExtensionScalars {
    /// The values that survive an entity type change. Everything not listed here is reset.
    pub fn retained_across_type_change(&self) -> Self {
        Self {
            aim_target: self.aim_target,
            altitude_target: self.altitude_target,
            spawn_protection: self.spawn_protection,
            active: self.active,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retains_exactly_the_allow_list() {
        let before = ExtensionScalars {
            aim_target: Vector2::new(3.0, -4.0),
            altitude: -0.5,
            altitude_target: 0.75,
            spawn_protection: Ticks(300),
            active: true,
            active_ticks: Ticks(12),
        };
        let after = before.retained_across_type_change();
        assert_eq!(
            after,
            ExtensionScalars {
                aim_target: Vector2::new(3.0, -4.0),
                altitude: 0.0,
                altitude_target: 0.75,
                spawn_protection: Ticks(300),
                active: true,
                active_ticks: Ticks::ZERO,
            }
        );
    }
}
