//! Tab-separated row layout shared by the header and every data row.

use core::fmt::Write;

use heapless::String;

use super::calibration::CorrectedSample;
use super::sample::{ChannelId, Vector3};
use crate::config::ROW_CAPACITY;

pub type Row = String<ROW_CAPACITY>;

/// Fields per line, counting the leading blank one.
pub const FIELD_COUNT: usize = 13;

const AXES: [char; 3] = ['X', 'Y', 'Z'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFormat {
    /// Emit angular rate; otherwise its columns are left blank.
    pub rotation: bool,
    /// Rotation is reported in deg/s (gyro offset tracking) instead of rad/s.
    pub rotation_in_dps: bool,
}

impl RowFormat {
    pub fn header(&self) -> Row {
        let rotation_unit = if self.rotation_in_dps { "deg/s" } else { "rad/s" };
        let mut row = Row::new();
        for channel in ChannelId::ALL {
            let n = channel.number();
            for axis in AXES {
                let _ = write!(row, "\tAccel{}_{} [m/s^2]", n, axis);
            }
            for axis in AXES {
                let _ = write!(row, "\tRotation{}_{} [{}]", n, axis, rotation_unit);
            }
        }
        row
    }

    /// `samples` must be ordered channel 1, channel 2.
    pub fn data_row(&self, samples: &[CorrectedSample; 2]) -> Row {
        let mut row = Row::new();
        for sample in samples {
            push_vector(&mut row, sample.accel);
            if self.rotation {
                push_vector(&mut row, sample.rotation);
            } else {
                let _ = row.push_str("\t\t\t");
            }
        }
        row
    }
}

fn push_vector(row: &mut Row, v: Vector3) {
    for value in v.to_array() {
        let _ = write!(row, "\t{:.2}", value);
    }
}
