//! Operator console on USART1.
//!
//! Output goes straight to the TX half. Input bytes are queued on
//! `COMMAND_CH` by `console_rx_task` and picked up one per cycle.

use defmt::*;
use embassy_stm32::{
    mode::Async,
    usart::{Error as UartError, UartTx},
};
use embedded_io_async::Write;

use crate::drivers::recovery::FaultCounter;
use crate::ipc::{record_line, COMMAND_CH};
use crate::sampling::Console;

const WRITE_ERROR_LOG_EVERY: u32 = 100;

pub struct UartConsole {
    tx: UartTx<'static, Async>,
    write_faults: FaultCounter,
}

impl UartConsole {
    pub fn new(tx: UartTx<'static, Async>) -> Self {
        Self {
            tx,
            write_faults: FaultCounter::new(WRITE_ERROR_LOG_EVERY),
        }
    }

    pub async fn write_line(&mut self, line: &str) -> Result<(), UartError> {
        self.tx.write_all(line.as_bytes()).await?;
        self.tx.write_all(b"\n").await?;
        record_line();
        Ok(())
    }
}

impl Console for UartConsole {
    fn read_command(&mut self) -> Option<u8> {
        COMMAND_CH.try_receive().ok()
    }

    async fn emit(&mut self, line: &str) {
        match self.write_line(line).await {
            Ok(()) => {
                self.write_faults.clear();
            }
            Err(e) => {
                if self.write_faults.record() {
                    warn!("Console write error #{}: {:?}", self.write_faults.total(), e);
                }
            }
        }
    }
}
