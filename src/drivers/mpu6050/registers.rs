// MPU-6050 register map (subset used by the logger)

pub const SMPLRT_DIV: u8 = 0x19;
pub const CONFIG: u8 = 0x1A;
pub const GYRO_CONFIG: u8 = 0x1B;
pub const ACCEL_CONFIG: u8 = 0x1C;

/// First register of the 14-byte accel/temp/gyro burst
pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const BURST_LEN: usize = 14;

pub const SIGNAL_PATH_RESET: u8 = 0x68;
pub const PWR_MGMT_1: u8 = 0x6B;
pub const WHO_AM_I: u8 = 0x75;

// WHO_AM_I reads 0x68 regardless of AD0
pub const WHO_AM_I_VALUE: u8 = 0x68;

pub const PWR_MGMT_1_DEVICE_RESET: u8 = 0x80;
pub const PWR_MGMT_1_CLKSEL_PLL_XGYRO: u8 = 0x01;
pub const SIGNAL_PATH_RESET_ALL: u8 = 0x07;
