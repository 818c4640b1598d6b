// Centralize all configuration constants
pub const CONSOLE_BAUDRATE: u32 = 115_200;
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

// MPU-6050 addresses, selected by the AD0 pin
pub const SENSOR_1_ADDRESS: u8 = 0x68;
pub const SENSOR_2_ADDRESS: u8 = 0x69;

// Output period in milliseconds. Increase to decrease data points.
pub const CADENCE_MS: u64 = 0;
pub const PAUSE_POLL_MS: u64 = 100;

// Calibration timing and acceptance
pub const CALIBRATION_SETTLE_MS: u64 = 500;
pub const CALIBRATION_VERIFY_MS: u64 = 1_000;
pub const CALIBRATION_RESUME_MS: u64 = 5_000;
pub const CALIBRATION_THRESHOLD: f32 = 0.1;

pub const ROTATION_OUTPUT: bool = cfg!(feature = "rotation-output");
pub const GYRO_OFFSET: bool = cfg!(feature = "gyro-offset");

// Channel sizes
pub const COMMAND_CHANNEL_SIZE: usize = 16;

// Large enough for twelve fully expanded f32 fields
pub const ROW_CAPACITY: usize = 640;
