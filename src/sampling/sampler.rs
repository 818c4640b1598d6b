use super::calibration::{validate, CalibrationOutcome, CalibrationState, CorrectedSample, OffsetVector};
use super::command::Command;
use super::output::RowFormat;
use super::sample::{ChannelId, Sample};
use super::traits::{ChannelReader, Console, Pacer};
use crate::config;

pub const PAUSED_NOTICE: &str = "Data Collection Paused.  Press send 's' to continue";
pub const CALIBRATED_NOTICE: &str = "Successfully calibrated accelerometer offset values!";
pub const CALIBRATION_FAILED_NOTICE: &str = "Offset calibration failed.  Please try again.";

/// Loop timing and output options. `DEFAULT` is what the firmware runs with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    pub cadence_ms: u64,
    pub pause_poll_ms: u64,
    pub settle_ms: u64,
    pub verify_ms: u64,
    pub resume_ms: u64,
    pub threshold: f32,
    pub rotation_output: bool,
    pub gyro_offset: bool,
}

impl LoopConfig {
    pub const DEFAULT: Self = Self {
        cadence_ms: config::CADENCE_MS,
        pause_poll_ms: config::PAUSE_POLL_MS,
        settle_ms: config::CALIBRATION_SETTLE_MS,
        verify_ms: config::CALIBRATION_VERIFY_MS,
        resume_ms: config::CALIBRATION_RESUME_MS,
        threshold: config::CALIBRATION_THRESHOLD,
        rotation_output: config::ROTATION_OUTPUT,
        gyro_offset: config::GYRO_OFFSET,
    };

    pub fn row_format(&self) -> RowFormat {
        RowFormat {
            rotation: self.rotation_output,
            rotation_in_dps: self.gyro_offset,
        }
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub struct LoopState {
    pub calibration: CalibrationState,
    pub paused: bool,
    pub offsets: OffsetVector,
}

impl LoopState {
    pub const fn new(track_gyro: bool) -> Self {
        Self {
            calibration: CalibrationState::Pending,
            paused: false,
            offsets: OffsetVector::zeroed(track_gyro),
        }
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_calibrated()
    }
}

/// What happened during one `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycle {
    pub command: Option<Command>,
    pub calibration: Option<CalibrationOutcome>,
    pub corrected: [CorrectedSample; 2],
}

/// The dual-channel sampling and calibration loop.
///
/// Each cycle reads both channels, takes at most one command byte, optionally
/// pauses or calibrates, then emits one corrected row and waits the cadence.
pub struct SamplingLoop<A, B, C, P> {
    first: A,
    second: B,
    console: C,
    pacer: P,
    config: LoopConfig,
    format: RowFormat,
    state: LoopState,
}

impl<A, B, C, P> SamplingLoop<A, B, C, P>
where
    A: ChannelReader,
    B: ChannelReader,
    C: Console,
    P: Pacer,
{
    /// `first` must be channel 1 and `second` channel 2.
    pub fn new(first: A, second: B, console: C, pacer: P, config: LoopConfig) -> Self {
        debug_assert_eq!(first.channel(), ChannelId::One);
        debug_assert_eq!(second.channel(), ChannelId::Two);
        Self {
            first,
            second,
            console,
            pacer,
            format: config.row_format(),
            state: LoopState::new(config.gyro_offset),
            config,
        }
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Column labels, written once before the first cycle.
    pub async fn emit_header(&mut self) {
        let header = self.format.header();
        self.console.emit(&header).await;
    }

    pub async fn run(&mut self) -> ! {
        log_info!(
            "Sampling loop started, cadence {} ms, rotation output {}",
            self.config.cadence_ms,
            self.config.rotation_output
        );
        loop {
            self.step().await;
        }
    }

    pub async fn step(&mut self) -> Cycle {
        let mut samples = self.read_channels().await;
        let command = self.next_command();

        if command == Some(Command::Pause) {
            self.hold_until_resumed().await;
            samples = self.read_channels().await;
        }

        let calibration = if command == Some(Command::Recalibrate)
            || self.state.calibration.needs_initial_calibration()
        {
            Some(self.calibrate().await)
        } else {
            None
        };

        let offsets = self.state.offsets;
        let corrected = samples.map(|sample| offsets.correct(&sample));
        let row = self.format.data_row(&corrected);
        self.console.emit(&row).await;

        self.pacer.delay_ms(self.config.cadence_ms).await;

        Cycle {
            command,
            calibration,
            corrected,
        }
    }

    fn next_command(&mut self) -> Option<Command> {
        let byte = self.console.read_command()?;
        let command = Command::from_byte(byte);
        if command.is_none() {
            log_debug!("Ignoring console byte 0x{:02X}", byte);
        }
        command
    }

    async fn read_channels(&mut self) -> [Sample; 2] {
        [self.first.read().await, self.second.read().await]
    }

    /// Blocks until `'s'`; every other byte received meanwhile is dropped.
    async fn hold_until_resumed(&mut self) {
        self.state.paused = true;
        log_info!("Data collection paused");
        self.console.emit(PAUSED_NOTICE).await;

        loop {
            self.pacer.delay_ms(self.config.pause_poll_ms).await;
            if self.next_command() == Some(Command::Resume) {
                break;
            }
        }

        self.state.paused = false;
        log_info!("Data collection resumed");
    }

    async fn calibrate(&mut self) -> CalibrationOutcome {
        log_info!("Resetting acceleration offsets, sensors must be still");
        self.pacer.delay_ms(self.config.settle_ms).await;

        let baseline = self.read_channels().await;
        self.state.offsets = OffsetVector::from_baseline(&baseline, self.config.gyro_offset);

        self.pacer.delay_ms(self.config.verify_ms).await;
        let check = self.first.read().await;
        let offset_x = self.state.offsets.accel(ChannelId::One).x;
        let outcome = validate(offset_x, check.accel.x, self.config.threshold);
        self.state.calibration = self.state.calibration.after(outcome);

        match outcome {
            CalibrationOutcome::Succeeded => {
                log_info!("Calibration succeeded, offset x {}", offset_x);
                self.console.emit("").await;
                self.console.emit(CALIBRATED_NOTICE).await;
                self.console.emit("").await;
            }
            CalibrationOutcome::Failed => {
                log_warn!(
                    "Calibration failed, x drifted from {} to {}",
                    offset_x,
                    check.accel.x
                );
                self.console.emit(CALIBRATION_FAILED_NOTICE).await;
            }
        }
        self.console.emit("").await;
        self.pacer.delay_ms(self.config.resume_ms).await;

        outcome
    }
}
