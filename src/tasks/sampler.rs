use defmt::*;
use embassy_executor::task;
use embassy_time::Timer;

use crate::drivers::{Mpu6050Channel, UartConsole};
use crate::sampling::{Pacer, SamplingLoop};

pub type Sampler = SamplingLoop<Mpu6050Channel, Mpu6050Channel, UartConsole, EmbassyPacer>;

/// Delays backed by the embassy time driver.
pub struct EmbassyPacer;

impl Pacer for EmbassyPacer {
    async fn delay_ms(&mut self, ms: u64) {
        Timer::after_millis(ms).await;
    }
}

#[task]
pub async fn sampler_task(mut sampler: Sampler) {
    info!("Sampler task started");
    sampler.emit_header().await;
    sampler.run().await
}
