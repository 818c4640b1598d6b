use defmt::*;
use embassy_executor::task;
use embassy_time::{Duration, Ticker};

use crate::ipc::lines_written;

/// Logs console throughput once a second on the debug link.
#[task]
pub async fn console_stats_task() {
    info!("Console stats task started");
    let mut ticker = Ticker::every(Duration::from_secs(1));
    let mut last = lines_written();

    loop {
        ticker.next().await;
        let now = lines_written();
        let rate = now.wrapping_sub(last);
        if rate > 0 {
            debug!("Console: {} lines/s", rate);
        }
        last = now;
    }
}
