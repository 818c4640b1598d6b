//! MPU-6050 6-axis IMU on a shared I2C bus.
//!
//! Register decoding and unit scaling live here and build on every target;
//! the bus I/O in `driver` needs the `stm32` feature.

mod config;
pub mod registers;

#[cfg(feature = "stm32")]
mod driver;

pub use config::{AccelRange, FilterBandwidth, GyroRange, Mpu6050Config, STANDARD_GRAVITY};
#[cfg(feature = "stm32")]
pub use driver::{Mpu6050, Mpu6050Channel, Mpu6050Error};

use crate::sampling::{ChannelId, Sample, Vector3};
use registers::BURST_LEN;

/// Decode the ACCEL_XOUT_H..GYRO_ZOUT_L burst (big-endian words, temperature
/// skipped) into SI units.
pub fn decode_burst(
    raw: &[u8; BURST_LEN],
    channel: ChannelId,
    accel_scale: f32,
    gyro_scale: f32,
) -> Sample {
    let word = |i: usize| i16::from_be_bytes([raw[i], raw[i + 1]]) as f32;

    let accel = Vector3::new(word(0), word(2), word(4)).scaled(accel_scale);
    let gyro = Vector3::new(word(8), word(10), word(12)).scaled(gyro_scale);

    Sample::new(channel, accel, gyro)
}
