use super::*;

/// The freshly-reset slice state of an entity type. Built once per type so that sharing
/// extensions of that type can all alias it instead of allocating their own.
#[derive(Clone, Debug)]
pub struct ExtensionTemplate {
    armament_consumption: Arc<[Ticks]>,
    turret_angles: Arc<[Angle]>,
}

impl ExtensionTemplate {
    /// All armaments replenished, all turrets at their base angles
    pub fn new(armament_count: usize, turret_angles: impl IntoIterator<Item = Angle>) -> Self {
        Self {
            armament_consumption: vec![Ticks::ZERO; armament_count].into(),
            turret_angles: turret_angles.into_iter().collect::<Vec<_>>().into(),
        }
    }

    pub fn armament_consumption(&self) -> &Arc<[Ticks]> {
        &self.armament_consumption
    }

    pub fn turret_angles(&self) -> &Arc<[Angle]> {
        &self.turret_angles
    }
}
