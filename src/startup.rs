//! Console lines written while the sensors are brought up.

use core::fmt::Write;

use heapless::String;

use crate::drivers::Mpu6050Config;
use crate::sampling::Console;

pub const SENSOR_1_FOUND: &str = "MPU6050 Found!";
pub const SENSOR_2_FOUND: &str = "Second MPU6050 Found!";
pub const SENSOR_1_MISSING: &str = "Failed to find MPU6050 chip";
pub const SENSOR_2_MISSING: &str = "Failed to find second MPU6050 chip";

/// Range and bandwidth report, then a blank line.
pub async fn write_settings<C: Console>(console: &mut C, config: &Mpu6050Config) {
    announce(console, "Accelerometer range set to: ", config.accel_range.label()).await;
    announce(console, "Gyro range set to: ", config.gyro_range.label()).await;
    announce(console, "Filter bandwidth set to: ", config.bandwidth.label()).await;
    console.emit("").await;
}

async fn announce<C: Console>(console: &mut C, prefix: &str, value: &str) {
    let mut line: String<64> = String::new();
    if write!(line, "{}{}", prefix, value).is_err() {
        log_warn!("Banner line truncated");
    }
    console.emit(&line).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::mpu6050::{AccelRange, FilterBandwidth, GyroRange};
    use crate::sampling::mock::{ScriptedConsole, SimClock};
    use embassy_futures::block_on;

    fn lines(console: &ScriptedConsole) -> Vec<&str> {
        console.lines.iter().map(|(_, l)| l.as_str()).collect()
    }

    #[test]
    fn default_settings_banner() {
        let mut console = ScriptedConsole::new(SimClock::default());
        block_on(write_settings(&mut console, &Mpu6050Config::default()));

        assert_eq!(
            lines(&console),
            [
                "Accelerometer range set to: +-16G",
                "Gyro range set to: +- 250 deg/s",
                "Filter bandwidth set to: 21 Hz",
                "",
            ]
        );
    }

    #[test]
    fn banner_follows_configured_ranges() {
        let config = Mpu6050Config {
            accel_range: AccelRange::G2,
            gyro_range: GyroRange::Dps2000,
            bandwidth: FilterBandwidth::Hz260,
        };
        let mut console = ScriptedConsole::new(SimClock::default());
        block_on(write_settings(&mut console, &config));

        let lines = lines(&console);
        assert_eq!(lines[0], "Accelerometer range set to: +-2G");
        assert_eq!(lines[1], "Gyro range set to: +- 2000 deg/s");
        assert_eq!(lines[2], "Filter bandwidth set to: 260 Hz");
    }
}
