#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_sync::mutex::Mutex;
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use kos_accel_logger::{
    config::{SENSOR_1_ADDRESS, SENSOR_2_ADDRESS},
    drivers::{Mpu6050, Mpu6050Channel, Mpu6050Config, UartConsole},
    ipc::SharedI2c,
    sampling::{ChannelId, Console},
    startup::{write_settings, SENSOR_1_FOUND, SENSOR_1_MISSING, SENSOR_2_FOUND, SENSOR_2_MISSING},
    tasks::{console_rx_task, console_stats_task, sampler_task, EmbassyPacer},
    Board, LoopConfig, SamplingLoop,
};

static I2C_BUS: StaticCell<SharedI2c> = StaticCell::new();

/// Reports a missing sensor and parks the firmware. Nothing else runs.
async fn halt(console: &mut UartConsole, message: &str) -> ! {
    error!("{}", message);
    console.emit(message).await;
    loop {
        Timer::after_millis(10).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Starting kos-accel-logger");
    let board = Board::init();
    let bus: &'static SharedI2c = I2C_BUS.init(Mutex::new(board.i2c));
    let mut console = UartConsole::new(board.console_tx);

    // Commands typed during startup are queued until sampling begins
    spawner.spawn(console_rx_task(board.console_rx)).unwrap();

    let config = Mpu6050Config::default();

    let first = match Mpu6050::new(bus, SENSOR_1_ADDRESS, config).await {
        Ok(mpu) => mpu,
        Err(e) => {
            error!("Sensor 1 initialization failed: {:?}", e);
            halt(&mut console, SENSOR_1_MISSING).await
        }
    };
    console.emit(SENSOR_1_FOUND).await;

    let second = match Mpu6050::new(bus, SENSOR_2_ADDRESS, config).await {
        Ok(mpu) => mpu,
        Err(e) => {
            error!("Sensor 2 initialization failed: {:?}", e);
            halt(&mut console, SENSOR_2_MISSING).await
        }
    };
    console.emit(SENSOR_2_FOUND).await;

    write_settings(&mut console, &config).await;
    Timer::after_millis(100).await;

    let sampler = SamplingLoop::new(
        Mpu6050Channel::new(first, ChannelId::One),
        Mpu6050Channel::new(second, ChannelId::Two),
        console,
        EmbassyPacer,
        LoopConfig::DEFAULT,
    );

    spawner.spawn(sampler_task(sampler)).unwrap();
    spawner.spawn(console_stats_task()).unwrap();
    info!("Sampler and stats tasks spawned on main executor");

    core::future::pending::<()>().await;
}
