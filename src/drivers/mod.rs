pub mod mpu6050;
pub mod recovery;

#[cfg(feature = "stm32")]
pub mod console;

#[cfg(feature = "stm32")]
pub use console::UartConsole;
#[cfg(feature = "stm32")]
pub use mpu6050::{Mpu6050, Mpu6050Channel, Mpu6050Error};
pub use mpu6050::Mpu6050Config;
pub use recovery::{retry, FaultCounter};
