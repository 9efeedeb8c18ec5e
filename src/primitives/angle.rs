use super::*;

/// Radians per unit of the fixed point representation
const SCALE: f32 = 32768.0 / std::f32::consts::PI;

/// Fixed point angle. The full i16 range covers one revolution, so arithmetic wraps around
/// naturally and the difference of two angles is always the shortest rotation between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(pub i16);

impl Angle {
    pub const ZERO: Self = Self(0);
    /// Just short of half a revolution, the largest magnitude an angle can have
    pub const MAX: Self = Self(i16::MAX);

    /// Wraps angles outside of [-π, π)
    pub fn from_radians(radians: f32) -> Self {
        Self((radians * SCALE).round() as i32 as i16)
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Direction of the given vector, with +X being zero and +Y being a quarter turn
    pub fn from_vec(vec: Vector2<f32>) -> Self {
        Self::from_radians(vec.y.atan2(vec.x))
    }

    pub fn to_radians(self) -> f32 {
        self.0 as f32 / SCALE
    }

    pub fn to_degrees(self) -> f32 {
        self.to_radians().to_degrees()
    }

    /// Unit vector pointing in this direction
    pub fn to_vec(self) -> Vector2<f32> {
        let (sin, cos) = self.to_radians().sin_cos();
        Vector2::new(cos, sin)
    }

    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Limits the magnitude of this angle to max (which should not be negative)
    pub fn clamp_magnitude(self, max: Self) -> Self {
        if self.0 > max.0 {
            max
        } else if self.0 < -max.0 {
            -max
        } else {
            self
        }
    }

    /// Rotates toward target the short way around, by no more than max_step
    pub fn rotate_towards(self, target: Self, max_step: Self) -> Self {
        self + (target - self).clamp_magnitude(max_step)
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.wrapping_sub(other.0))
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.to_degrees())
    }
}
