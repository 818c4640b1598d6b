use defmt::*;
use embassy_stm32::i2c;
use embassy_time::{Duration, Timer};

use super::config::Mpu6050Config;
use super::decode_burst;
use super::registers::*;
use crate::drivers::recovery::{retry, FaultCounter};
use crate::ipc::SharedI2c;
use crate::sampling::{ChannelId, ChannelReader, Sample, Vector3};

const INIT_ATTEMPTS: u8 = 3;
const REGISTER_RETRIES: u8 = 3;
const REGISTER_RETRY_PAUSE_MS: u64 = 10;
const READ_RETRIES: u8 = 2;
const READ_RETRY_PAUSE_MS: u64 = 1;
const READ_ERROR_LOG_EVERY: u32 = 100;

#[derive(Debug, Format)]
pub enum Mpu6050Error {
    Bus(i2c::Error),
    UnknownDevice(u8),
}

impl From<i2c::Error> for Mpu6050Error {
    fn from(e: i2c::Error) -> Self {
        Self::Bus(e)
    }
}

pub struct Mpu6050 {
    bus: &'static SharedI2c,
    addr: u8,
    config: Mpu6050Config,
    accel_scale: f32,
    gyro_scale: f32,
}

impl Mpu6050 {
    pub async fn new(
        bus: &'static SharedI2c,
        addr: u8,
        config: Mpu6050Config,
    ) -> Result<Self, Mpu6050Error> {
        let mpu = Self {
            bus,
            addr,
            config,
            accel_scale: config.accel_range.scale_to_m_s2(),
            gyro_scale: config.gyro_range.scale_to_rad_s(),
        };

        info!("Starting MPU6050 initialization at 0x{:02X}", addr);

        // Give the chip time to power up
        Timer::after(Duration::from_millis(100)).await;

        let mut last_error = Mpu6050Error::Bus(i2c::Error::Timeout);
        for attempt in 1..=INIT_ATTEMPTS {
            match mpu.try_init().await {
                Ok(()) => {
                    info!("MPU6050 0x{:02X} initialized on attempt {}", addr, attempt);
                    return Ok(mpu);
                }
                Err(e) => {
                    warn!("MPU6050 0x{:02X} init attempt {} failed: {:?}", addr, attempt, e);
                    last_error = e;
                    let delay_ms = 100u64 << (attempt - 1);
                    Timer::after(Duration::from_millis(delay_ms)).await;
                }
            }
        }

        error!("MPU6050 0x{:02X} initialization failed", addr);
        Err(last_error)
    }

    async fn try_init(&self) -> Result<(), Mpu6050Error> {
        let id = self.read_register(WHO_AM_I).await?;
        if id != WHO_AM_I_VALUE {
            error!(
                "Unexpected WHO_AM_I: 0x{:02X}, expected 0x{:02X}",
                id, WHO_AM_I_VALUE
            );
            return Err(Mpu6050Error::UnknownDevice(id));
        }

        self.write_register(PWR_MGMT_1, PWR_MGMT_1_DEVICE_RESET).await?;
        Timer::after(Duration::from_millis(100)).await;

        self.write_register(SIGNAL_PATH_RESET, SIGNAL_PATH_RESET_ALL).await?;
        Timer::after(Duration::from_millis(100)).await;

        self.write_register(SMPLRT_DIV, 0x00).await?;
        self.write_register(CONFIG, self.config.bandwidth.register_value()).await?;
        self.write_register(GYRO_CONFIG, self.config.gyro_range.register_value()).await?;
        self.write_register(ACCEL_CONFIG, self.config.accel_range.register_value()).await?;

        // Wake with the X gyro PLL as clock source
        self.write_register(PWR_MGMT_1, PWR_MGMT_1_CLKSEL_PLL_XGYRO).await?;
        Timer::after(Duration::from_millis(100)).await;

        Ok(())
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    pub fn config(&self) -> Mpu6050Config {
        self.config
    }

    pub async fn read_sample(&self, channel: ChannelId) -> Result<Sample, Mpu6050Error> {
        let raw = retry(
            READ_RETRIES,
            move || self.read_bytes::<BURST_LEN>(ACCEL_XOUT_H),
            || Timer::after_millis(READ_RETRY_PAUSE_MS),
        )
        .await?;
        Ok(decode_burst(&raw, channel, self.accel_scale, self.gyro_scale))
    }

    async fn read_register(&self, reg: u8) -> Result<u8, i2c::Error> {
        retry(
            REGISTER_RETRIES,
            move || self.read_byte(reg),
            || Timer::after_millis(REGISTER_RETRY_PAUSE_MS),
        )
        .await
    }

    async fn write_register(&self, reg: u8, value: u8) -> Result<(), i2c::Error> {
        retry(
            REGISTER_RETRIES,
            move || self.write_byte(reg, value),
            || Timer::after_millis(REGISTER_RETRY_PAUSE_MS),
        )
        .await
    }

    async fn write_byte(&self, reg: u8, value: u8) -> Result<(), i2c::Error> {
        let mut i2c = self.bus.lock().await;
        i2c.write(self.addr, &[reg, value]).await
    }

    async fn read_byte(&self, reg: u8) -> Result<u8, i2c::Error> {
        let mut buf = [0u8; 1];
        let mut i2c = self.bus.lock().await;
        i2c.write_read(self.addr, &[reg], &mut buf).await?;
        Ok(buf[0])
    }

    async fn read_bytes<const N: usize>(&self, reg: u8) -> Result<[u8; N], i2c::Error> {
        let mut buf = [0u8; N];
        let mut i2c = self.bus.lock().await;
        i2c.write_read(self.addr, &[reg], &mut buf).await?;
        Ok(buf)
    }
}

/// Sampling-loop view of one sensor.
///
/// Bus faults never reach the loop: the last good reading is repeated and the
/// fault is counted and logged.
pub struct Mpu6050Channel {
    sensor: Mpu6050,
    channel: ChannelId,
    last: Sample,
    faults: FaultCounter,
}

impl Mpu6050Channel {
    pub fn new(sensor: Mpu6050, channel: ChannelId) -> Self {
        Self {
            sensor,
            channel,
            last: Sample::new(channel, Vector3::ZERO, Vector3::ZERO),
            faults: FaultCounter::new(READ_ERROR_LOG_EVERY),
        }
    }
}

impl ChannelReader for Mpu6050Channel {
    fn channel(&self) -> ChannelId {
        self.channel
    }

    async fn read(&mut self) -> Sample {
        match self.sensor.read_sample(self.channel).await {
            Ok(sample) => {
                if let Some(streak) = self.faults.clear() {
                    info!(
                        "MPU6050 0x{:02X} recovered after {} consecutive errors",
                        self.sensor.address(),
                        streak
                    );
                }
                self.last = sample;
            }
            Err(e) => {
                if self.faults.record() {
                    warn!(
                        "MPU6050 0x{:02X} read error #{}: {:?}",
                        self.sensor.address(),
                        self.faults.total(),
                        e
                    );
                }
            }
        }
        self.last
    }
}
