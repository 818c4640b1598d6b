//! Zero-offset calibration: offset storage, correction and the acceptance check.

use super::sample::{ChannelId, Sample, Vector3};

/// Per-channel baseline subtracted from every reading.
///
/// Gyro offsets are kept in deg/s and are only populated when gyro tracking is
/// enabled; otherwise they stay zero and rotation passes through in rad/s.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub struct OffsetVector {
    accel: [Vector3; 2],
    gyro: [Vector3; 2],
    track_gyro: bool,
}

impl OffsetVector {
    pub const fn zeroed(track_gyro: bool) -> Self {
        Self {
            accel: [Vector3::ZERO; 2],
            gyro: [Vector3::ZERO; 2],
            track_gyro,
        }
    }

    /// Build a complete replacement vector from the baseline readings.
    pub fn from_baseline(baseline: &[Sample; 2], track_gyro: bool) -> Self {
        let mut offsets = Self::zeroed(track_gyro);
        for sample in baseline {
            let i = sample.channel.index();
            offsets.accel[i] = sample.accel;
            if track_gyro {
                offsets.gyro[i] = sample.gyro_dps();
            }
        }
        offsets
    }

    pub fn accel(&self, channel: ChannelId) -> Vector3 {
        self.accel[channel.index()]
    }

    pub fn gyro(&self, channel: ChannelId) -> Vector3 {
        self.gyro[channel.index()]
    }

    pub fn tracks_gyro(&self) -> bool {
        self.track_gyro
    }

    pub fn correct(&self, sample: &Sample) -> CorrectedSample {
        let rotation = if self.track_gyro {
            sample.gyro_dps() - self.gyro(sample.channel)
        } else {
            sample.gyro
        };
        CorrectedSample {
            channel: sample.channel,
            accel: sample.accel - self.accel(sample.channel),
            rotation,
        }
    }
}

/// A reading with the offsets removed. Rotation is in deg/s when gyro
/// tracking is on, rad/s otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub struct CorrectedSample {
    pub channel: ChannelId,
    pub accel: Vector3,
    pub rotation: Vector3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub enum CalibrationOutcome {
    Succeeded,
    Failed,
}

/// Calibration lifecycle. `Pending` is the power-on state and is the only
/// state that triggers a calibration without an operator request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub enum CalibrationState {
    #[default]
    Pending,
    Failed,
    Calibrated,
}

impl CalibrationState {
    pub fn is_calibrated(self) -> bool {
        self == CalibrationState::Calibrated
    }

    pub fn needs_initial_calibration(self) -> bool {
        self == CalibrationState::Pending
    }

    /// A failed attempt never revokes an earlier success.
    pub fn after(self, outcome: CalibrationOutcome) -> Self {
        match (outcome, self) {
            (CalibrationOutcome::Succeeded, _) => CalibrationState::Calibrated,
            (CalibrationOutcome::Failed, CalibrationState::Calibrated) => {
                CalibrationState::Calibrated
            }
            (CalibrationOutcome::Failed, _) => CalibrationState::Failed,
        }
    }
}

/// Acceptance check on channel 1's X axis after the settle delay.
///
/// Only an upward drift of `threshold` or more fails. Any reading at or below
/// the stored offset passes.
pub fn validate(offset_x: f32, new_x: f32, threshold: f32) -> CalibrationOutcome {
    if (new_x - offset_x) < threshold {
        CalibrationOutcome::Succeeded
    } else {
        CalibrationOutcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::sample::RAD_TO_DEG;

    fn sample(channel: ChannelId, accel: [f32; 3], gyro: [f32; 3]) -> Sample {
        Sample::new(
            channel,
            Vector3::new(accel[0], accel[1], accel[2]),
            Vector3::new(gyro[0], gyro[1], gyro[2]),
        )
    }

    #[test]
    fn zeroed_offsets_pass_readings_through() {
        let offsets = OffsetVector::zeroed(false);
        let s = sample(ChannelId::Two, [1.5, -2.0, 9.81], [0.1, 0.2, 0.3]);
        let c = offsets.correct(&s);
        assert_eq!(c.accel, s.accel);
        assert_eq!(c.rotation, s.gyro);
        assert_eq!(c.channel, ChannelId::Two);
    }

    #[test]
    fn baseline_replaces_every_accel_component() {
        let baseline = [
            sample(ChannelId::One, [9.8, 0.1, -0.2], [0.5, 0.0, 0.0]),
            sample(ChannelId::Two, [0.3, 9.7, 0.4], [0.0, 0.5, 0.0]),
        ];
        let offsets = OffsetVector::from_baseline(&baseline, false);
        assert_eq!(offsets.accel(ChannelId::One), baseline[0].accel);
        assert_eq!(offsets.accel(ChannelId::Two), baseline[1].accel);
        assert_eq!(offsets.gyro(ChannelId::One), Vector3::ZERO);
        assert_eq!(offsets.gyro(ChannelId::Two), Vector3::ZERO);
    }

    #[test]
    fn baseline_is_keyed_by_channel_not_position() {
        let baseline = [
            sample(ChannelId::Two, [2.0, 2.0, 2.0], [0.0; 3]),
            sample(ChannelId::One, [1.0, 1.0, 1.0], [0.0; 3]),
        ];
        let offsets = OffsetVector::from_baseline(&baseline, false);
        assert_eq!(offsets.accel(ChannelId::One), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(offsets.accel(ChannelId::Two), Vector3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn gyro_tracking_stores_degrees_per_second() {
        let baseline = [
            sample(ChannelId::One, [0.0; 3], [0.01, -0.02, 0.03]),
            sample(ChannelId::Two, [0.0; 3], [0.0, 0.0, 1.0]),
        ];
        let offsets = OffsetVector::from_baseline(&baseline, true);
        assert!(offsets.tracks_gyro());
        assert_eq!(offsets.gyro(ChannelId::One), baseline[0].gyro_dps());
        assert!((offsets.gyro(ChannelId::Two).z - RAD_TO_DEG).abs() < 1e-4);

        let c = offsets.correct(&baseline[0]);
        assert_eq!(c.rotation, Vector3::ZERO);
    }

    #[test]
    fn correction_is_exact_subtraction() {
        let baseline = [
            sample(ChannelId::One, [9.8, 0.0, 0.0], [0.0; 3]),
            sample(ChannelId::Two, [0.0, 0.0, 9.8], [0.0; 3]),
        ];
        let offsets = OffsetVector::from_baseline(&baseline, false);
        let raw = sample(ChannelId::One, [10.3, -0.7, 0.25], [0.4, 0.5, 0.6]);
        let c = offsets.correct(&raw);
        assert_eq!(c.accel.x, 10.3f32 - 9.8f32);
        assert_eq!(c.accel.y, -0.7f32);
        assert_eq!(c.accel.z, 0.25f32);
        assert_eq!(c.rotation, raw.gyro);
    }

    #[test]
    fn validation_is_one_sided() {
        assert_eq!(validate(9.8, 9.8, 0.1), CalibrationOutcome::Succeeded);
        assert_eq!(validate(9.8, 14.8, 0.1), CalibrationOutcome::Failed);
        // Large downward drift still passes
        assert_eq!(validate(9.8, 0.0, 0.1), CalibrationOutcome::Succeeded);
        assert_eq!(validate(0.0, 0.1, 0.1), CalibrationOutcome::Failed);
    }

    #[test]
    fn state_transitions() {
        use CalibrationOutcome as O;
        use CalibrationState as S;

        assert!(S::Pending.needs_initial_calibration());
        assert!(!S::Failed.needs_initial_calibration());
        assert_eq!(S::Pending.after(O::Succeeded), S::Calibrated);
        assert_eq!(S::Pending.after(O::Failed), S::Failed);
        assert_eq!(S::Calibrated.after(O::Failed), S::Calibrated);
        assert_eq!(S::Failed.after(O::Succeeded), S::Calibrated);
        assert!(S::Calibrated.is_calibrated());
        assert!(!S::Pending.is_calibrated());
    }
}
