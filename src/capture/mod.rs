//! Reader side of the console stream.
//!
//! A capture tool splits every received line on tabs. Only lines with the
//! header's field count, a blank leading field and numeric-or-blank values are
//! data; banners, notices and the header itself are skipped.

use crate::sampling::output::FIELD_COUNT;
use crate::sampling::sample::{ChannelId, Vector3};

#[cfg(any(test, feature = "std"))]
mod recorder;

#[cfg(any(test, feature = "std"))]
pub use recorder::{
    start_streaming, stop_streaming, unique_path, Recorder, TimedRow, CAPTURE_DIR,
};

/// Values per data row, excluding the leading blank field.
pub const VALUES: usize = FIELD_COUNT - 1;

/// One parsed data line. Blank placeholder fields are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRow {
    values: [Option<f32>; VALUES],
}

impl DataRow {
    pub fn values(&self) -> &[Option<f32>; VALUES] {
        &self.values
    }

    pub fn accel(&self, channel: ChannelId) -> Option<Vector3> {
        self.vector(channel.index() * 6)
    }

    /// `None` when the rotation columns were left blank.
    pub fn rotation(&self, channel: ChannelId) -> Option<Vector3> {
        self.vector(channel.index() * 6 + 3)
    }

    fn vector(&self, start: usize) -> Option<Vector3> {
        Some(Vector3::new(
            self.values[start]?,
            self.values[start + 1]?,
            self.values[start + 2]?,
        ))
    }
}

/// Parse one line (terminator optional) or return `None` if it is not data.
pub fn parse_row(line: &str) -> Option<DataRow> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut fields = line.split('\t');

    if !fields.next()?.is_empty() {
        return None;
    }

    let mut values = [None; VALUES];
    let mut seen = 0;
    for field in fields {
        if seen == VALUES {
            return None;
        }
        let field = field.trim();
        if !field.is_empty() {
            values[seen] = Some(field.parse::<f32>().ok()?);
        }
        seen += 1;
    }

    if seen != VALUES || values.iter().all(Option::is_none) {
        return None;
    }
    Some(DataRow { values })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_row() {
        let row = parse_row(
            "\t0.00\t-0.25\t9.81\t0.01\t0.02\t-0.03\t1.00\t2.00\t3.00\t-1.50\t0.00\t2.25\r\n",
        )
        .unwrap();
        assert_eq!(row.accel(ChannelId::One), Some(Vector3::new(0.0, -0.25, 9.81)));
        assert_eq!(
            row.rotation(ChannelId::Two),
            Some(Vector3::new(-1.5, 0.0, 2.25))
        );
    }

    #[test]
    fn placeholder_rotation_is_none() {
        let row = parse_row("\t0.00\t-0.25\t9.81\t\t\t\t1.00\t2.00\t3.00\t\t\t").unwrap();
        assert_eq!(row.accel(ChannelId::Two), Some(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(row.rotation(ChannelId::One), None);
        assert_eq!(row.rotation(ChannelId::Two), None);
        assert_eq!(row.values().iter().filter(|v| v.is_none()).count(), 6);
    }

    #[test]
    fn status_lines_are_skipped() {
        for line in [
            "",
            "\n",
            "MPU6050 Found!",
            "Data Collection Paused.  Press send 's' to continue",
            "Offset calibration failed.  Please try again.",
            "Accelerometer range set to: +-16G",
        ] {
            assert_eq!(parse_row(line), None, "{line:?}");
        }
    }

    #[test]
    fn header_is_not_data() {
        let header = "\tAccel1_X [m/s^2]\tAccel1_Y [m/s^2]\tAccel1_Z [m/s^2]\
                      \tRotation1_X [rad/s]\tRotation1_Y [rad/s]\tRotation1_Z [rad/s]\
                      \tAccel2_X [m/s^2]\tAccel2_Y [m/s^2]\tAccel2_Z [m/s^2]\
                      \tRotation2_X [rad/s]\tRotation2_Y [rad/s]\tRotation2_Z [rad/s]";
        assert_eq!(parse_row(header), None);
    }

    #[test]
    fn wrong_field_count_is_skipped() {
        assert_eq!(parse_row("\t1.00\t2.00\t3.00"), None);
        assert_eq!(
            parse_row("\t1\t2\t3\t4\t5\t6\t7\t8\t9\t10\t11\t12\t13"),
            None
        );
        assert_eq!(parse_row("x\t1\t2\t3\t4\t5\t6\t7\t8\t9\t10\t11\t12"), None);
    }
}
