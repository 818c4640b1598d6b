pub mod console;
pub mod sampler;
pub mod stats;

pub use console::console_rx_task;
pub use sampler::{sampler_task, EmbassyPacer, Sampler};
pub use stats::console_stats_task;
