use embassy_stm32::{i2c::I2c, mode::Async};
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex as RawMutex, channel::Channel, mutex::Mutex,
};
use portable_atomic::{AtomicU32, Ordering};

use crate::config::COMMAND_CHANNEL_SIZE;

/// I2C2, shared by both sensors. Each transaction holds the lock.
pub type SharedI2c = Mutex<RawMutex, I2c<'static, Async>>;

/* console rx -> sampling loop */
pub static COMMAND_CH: Channel<RawMutex, u8, COMMAND_CHANNEL_SIZE> = Channel::new();

/* lines written to the console since boot */
pub static LINES_WRITTEN: AtomicU32 = AtomicU32::new(0);

pub fn record_line() {
    LINES_WRITTEN.fetch_add(1, Ordering::Relaxed);
}

pub fn lines_written() -> u32 {
    LINES_WRITTEN.load(Ordering::Relaxed)
}
