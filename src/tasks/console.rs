use defmt::*;
use embassy_executor::task;
use embassy_stm32::usart::RingBufferedUartRx;
use embedded_io_async::Read;

use crate::drivers::FaultCounter;
use crate::ipc::COMMAND_CH;

#[task]
pub async fn console_rx_task(mut rx: RingBufferedUartRx<'static>) {
    info!("Console rx task started");
    let mut buf = [0u8; 32];
    let mut dropped = FaultCounter::new(16);

    loop {
        match rx.read(&mut buf).await {
            Ok(n) => {
                for &byte in &buf[..n] {
                    // Bytes past the queue depth are lost, like a full serial buffer
                    if COMMAND_CH.try_send(byte).is_err() {
                        if dropped.record() {
                            warn!("Command queue full, {} byte(s) dropped", dropped.total());
                        }
                    } else {
                        dropped.clear();
                    }
                }
            }
            Err(e) => warn!("Console rx error: {:?}", e),
        }
    }
}
