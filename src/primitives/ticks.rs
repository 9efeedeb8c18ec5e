use super::*;

/// A discrete number of simulation ticks. Used for reload timers, spawn protection and other
/// countdowns that advance once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticks(pub u16);

impl Ticks {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const MAX: Self = Self(u16::MAX);

    /// How many ticks the simulation runs per second
    pub const FREQUENCY_HZ: u16 = 10;

    /// Rounds to the nearest tick, saturating at the ends of the range
    pub fn from_secs(secs: f32) -> Self {
        let ticks = (secs * Self::FREQUENCY_HZ as f32).round();
        if ticks <= 0.0 {
            Self::ZERO
        } else if ticks >= u16::MAX as f32 {
            Self::MAX
        } else {
            Self(ticks as u16)
        }
    }

    pub fn to_secs(self) -> f32 {
        self.0 as f32 / Self::FREQUENCY_HZ as f32
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Ticks {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl Sub for Ticks {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.saturating_sub(other)
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}
