//! Collaborator interfaces consumed by the sampling loop.

use super::sample::{ChannelId, Sample};

/// One sensor channel.
///
/// `read` always returns a complete reading; transport faults are the
/// implementor's problem.
#[allow(async_fn_in_trait)]
pub trait ChannelReader {
    fn channel(&self) -> ChannelId;

    async fn read(&mut self) -> Sample;
}

/// Operator console: single-byte commands in, text lines out.
#[allow(async_fn_in_trait)]
pub trait Console {
    /// Next pending command byte, if any. Never waits.
    fn read_command(&mut self) -> Option<u8>;

    /// Write one line; the implementor adds the line terminator.
    async fn emit(&mut self, line: &str);
}

/// Time source for every wait in the loop.
#[allow(async_fn_in_trait)]
pub trait Pacer {
    async fn delay_ms(&mut self, ms: u64);
}
