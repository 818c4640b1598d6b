use core::ops::Sub;

/// Radians to degrees.
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Which of the two sensors a reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub enum ChannelId {
    One,
    Two,
}

impl ChannelId {
    pub const ALL: [ChannelId; 2] = [ChannelId::One, ChannelId::Two];

    pub fn index(self) -> usize {
        match self {
            ChannelId::One => 0,
            ChannelId::Two => 1,
        }
    }

    /// 1-based number used in column labels.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// One channel's instantaneous reading.
///
/// Acceleration is in m/s², angular rate in rad/s.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub struct Sample {
    pub channel: ChannelId,
    pub accel: Vector3,
    pub gyro: Vector3,
}

impl Sample {
    pub const fn new(channel: ChannelId, accel: Vector3, gyro: Vector3) -> Self {
        Self {
            channel,
            accel,
            gyro,
        }
    }

    /// Angular rate converted to deg/s.
    pub fn gyro_dps(&self) -> Vector3 {
        self.gyro.scaled(RAD_TO_DEG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_numbers_are_one_based() {
        assert_eq!(ChannelId::One.number(), 1);
        assert_eq!(ChannelId::Two.number(), 2);
        assert_eq!(ChannelId::Two.index(), 1);
    }

    #[test]
    fn gyro_dps_uses_180_over_pi() {
        let s = Sample::new(
            ChannelId::One,
            Vector3::ZERO,
            Vector3::new(core::f32::consts::PI, 0.0, -core::f32::consts::FRAC_PI_2),
        );
        let dps = s.gyro_dps();
        assert!((dps.x - 180.0).abs() < 1e-4);
        assert_eq!(dps.y, 0.0);
        assert!((dps.z + 90.0).abs() < 1e-4);
    }

    #[test]
    fn vector_subtraction_is_per_axis() {
        let d = Vector3::new(9.8, 0.5, -1.0) - Vector3::new(9.8, 0.25, 1.0);
        assert_eq!(d, Vector3::new(0.0, 0.25, -2.0));
    }
}
