//! Hardware-independent sampling core: command handling, calibration, row
//! formatting and the per-cycle loop that ties them together.

pub mod calibration;
pub mod command;
pub mod output;
pub mod sample;
pub mod sampler;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use calibration::{CalibrationOutcome, CalibrationState, CorrectedSample, OffsetVector};
pub use command::Command;
pub use output::{Row, RowFormat};
pub use sample::{ChannelId, Sample, Vector3};
pub use sampler::{Cycle, LoopConfig, LoopState, SamplingLoop};
pub use traits::{ChannelReader, Console, Pacer};
