//! MPU-6050 range and filter settings.

use core::f32::consts::PI;

/// Standard gravity, m/s² per g.
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Accelerometer full-scale range (ACCEL_CONFIG.AFS_SEL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub enum AccelRange {
    G2,
    G4,
    G8,
    G16,
}

impl AccelRange {
    pub fn register_value(self) -> u8 {
        match self {
            AccelRange::G2 => 0x00,
            AccelRange::G4 => 0x08,
            AccelRange::G8 => 0x10,
            AccelRange::G16 => 0x18,
        }
    }

    pub fn lsb_per_g(self) -> f32 {
        match self {
            AccelRange::G2 => 16384.0,
            AccelRange::G4 => 8192.0,
            AccelRange::G8 => 4096.0,
            AccelRange::G16 => 2048.0,
        }
    }

    /// Raw LSB to m/s²
    pub fn scale_to_m_s2(self) -> f32 {
        STANDARD_GRAVITY / self.lsb_per_g()
    }

    pub fn label(self) -> &'static str {
        match self {
            AccelRange::G2 => "+-2G",
            AccelRange::G4 => "+-4G",
            AccelRange::G8 => "+-8G",
            AccelRange::G16 => "+-16G",
        }
    }
}

/// Gyroscope full-scale range (GYRO_CONFIG.FS_SEL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub enum GyroRange {
    Dps250,
    Dps500,
    Dps1000,
    Dps2000,
}

impl GyroRange {
    pub fn register_value(self) -> u8 {
        match self {
            GyroRange::Dps250 => 0x00,
            GyroRange::Dps500 => 0x08,
            GyroRange::Dps1000 => 0x10,
            GyroRange::Dps2000 => 0x18,
        }
    }

    pub fn lsb_per_dps(self) -> f32 {
        match self {
            GyroRange::Dps250 => 131.0,
            GyroRange::Dps500 => 65.5,
            GyroRange::Dps1000 => 32.8,
            GyroRange::Dps2000 => 16.4,
        }
    }

    /// Raw LSB to rad/s
    pub fn scale_to_rad_s(self) -> f32 {
        (PI / 180.0) / self.lsb_per_dps()
    }

    pub fn label(self) -> &'static str {
        match self {
            GyroRange::Dps250 => "+- 250 deg/s",
            GyroRange::Dps500 => "+- 500 deg/s",
            GyroRange::Dps1000 => "+- 1000 deg/s",
            GyroRange::Dps2000 => "+- 2000 deg/s",
        }
    }
}

/// Digital low-pass filter bandwidth (CONFIG.DLPF_CFG)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub enum FilterBandwidth {
    Hz260,
    Hz184,
    Hz94,
    Hz44,
    Hz21,
    Hz10,
    Hz5,
}

impl FilterBandwidth {
    pub fn register_value(self) -> u8 {
        match self {
            FilterBandwidth::Hz260 => 0,
            FilterBandwidth::Hz184 => 1,
            FilterBandwidth::Hz94 => 2,
            FilterBandwidth::Hz44 => 3,
            FilterBandwidth::Hz21 => 4,
            FilterBandwidth::Hz10 => 5,
            FilterBandwidth::Hz5 => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterBandwidth::Hz260 => "260 Hz",
            FilterBandwidth::Hz184 => "184 Hz",
            FilterBandwidth::Hz94 => "94 Hz",
            FilterBandwidth::Hz44 => "44 Hz",
            FilterBandwidth::Hz21 => "21 Hz",
            FilterBandwidth::Hz10 => "10 Hz",
            FilterBandwidth::Hz5 => "5 Hz",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub struct Mpu6050Config {
    pub accel_range: AccelRange,
    pub gyro_range: GyroRange,
    pub bandwidth: FilterBandwidth,
}

impl Default for Mpu6050Config {
    /// Settings the logger ships with: ±16 g, ±250 °/s, 21 Hz.
    fn default() -> Self {
        Self {
            accel_range: AccelRange::G16,
            gyro_range: GyroRange::Dps250,
            bandwidth: FilterBandwidth::Hz21,
        }
    }
}
