#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod logging;

pub mod capture;
pub mod config;
pub mod drivers;
pub mod sampling;
pub mod startup;

#[cfg(feature = "stm32")]
pub mod board;
#[cfg(feature = "stm32")]
pub mod ipc;
#[cfg(feature = "stm32")]
pub mod tasks;

#[cfg(feature = "stm32")]
pub use board::Board;
pub use sampling::{LoopConfig, Sample, SamplingLoop};
