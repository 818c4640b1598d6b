//! Fault handling shared by the bus drivers: bounded retries and
//! rate-limited fault counting.

use core::future::Future;

/// Run `op` up to `attempts` times, awaiting `pause` between failures.
///
/// Returns the first success or the last error. `op` always runs at least once.
pub async fn retry<T, E, Op, OpFut, Pause, PauseFut>(
    attempts: u8,
    mut op: Op,
    mut pause: Pause,
) -> Result<T, E>
where
    Op: FnMut() -> OpFut,
    OpFut: Future<Output = Result<T, E>>,
    Pause: FnMut() -> PauseFut,
    PauseFut: Future<Output = ()>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= attempts => return Err(e),
            Err(_) => {
                attempt += 1;
                pause().await;
            }
        }
    }
}

/// Running fault tally. Counters wrap instead of overflowing, so a bus left
/// unplugged indefinitely keeps logging on the same cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultCounter {
    total: u32,
    streak: u32,
    log_every: u32,
}

impl FaultCounter {
    /// Log the first fault of a streak and every `log_every`th after it.
    pub const fn new(log_every: u32) -> Self {
        Self {
            total: 0,
            streak: 0,
            log_every,
        }
    }

    /// Count one fault. Returns true when this one should be logged.
    pub fn record(&mut self) -> bool {
        self.total = self.total.wrapping_add(1);
        self.streak = self.streak.wrapping_add(1);
        self.log_every <= 1 || self.streak % self.log_every == 1
    }

    /// End the current streak, returning its length if there was one.
    pub fn clear(&mut self) -> Option<u32> {
        let streak = core::mem::replace(&mut self.streak, 0);
        (streak > 0).then_some(streak)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }
}
