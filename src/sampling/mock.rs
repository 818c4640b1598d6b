//! Scripted collaborators on a simulated millisecond clock.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use super::sample::{ChannelId, Sample, Vector3};
use super::traits::{ChannelReader, Console, Pacer};
use crate::capture::{parse_row, DataRow};

#[derive(Clone, Default)]
pub struct SimClock(Rc<Cell<u64>>);

impl SimClock {
    pub fn now(&self) -> u64 {
        self.0.get()
    }

    fn advance(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }
}

pub fn reading(channel: ChannelId, accel: [f32; 3]) -> Sample {
    Sample::new(
        channel,
        Vector3::new(accel[0], accel[1], accel[2]),
        Vector3::ZERO,
    )
}

/// Returns queued readings in order, then repeats `steady` forever.
pub struct ScriptedChannel {
    channel: ChannelId,
    queued: VecDeque<Sample>,
    steady: Sample,
    pub reads: usize,
}

impl ScriptedChannel {
    pub fn steady(steady: Sample) -> Self {
        Self {
            channel: steady.channel,
            queued: VecDeque::new(),
            steady,
            reads: 0,
        }
    }

    pub fn then(mut self, sample: Sample) -> Self {
        self.queued.push_back(sample);
        self
    }
}

impl ChannelReader for ScriptedChannel {
    fn channel(&self) -> ChannelId {
        self.channel
    }

    async fn read(&mut self) -> Sample {
        self.reads += 1;
        self.queued.pop_front().unwrap_or(self.steady)
    }
}

/// Delivers each command byte once the clock reaches its timestamp and
/// records every emitted line with the time it was written.
pub struct ScriptedConsole {
    clock: SimClock,
    commands: VecDeque<(u64, u8)>,
    pub lines: Vec<(u64, String)>,
}

impl ScriptedConsole {
    pub fn new(clock: SimClock) -> Self {
        Self {
            clock,
            commands: VecDeque::new(),
            lines: Vec::new(),
        }
    }

    pub fn send_at(&mut self, at_ms: u64, byte: u8) {
        self.commands.push_back((at_ms, byte));
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    pub fn data_rows(&self) -> Vec<(u64, DataRow)> {
        self.lines
            .iter()
            .filter_map(|(t, line)| parse_row(line).map(|row| (*t, row)))
            .collect()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|(_, line)| line == text)
    }
}

impl Console for ScriptedConsole {
    fn read_command(&mut self) -> Option<u8> {
        match self.commands.front() {
            Some(&(at, byte)) if at <= self.clock.now() => {
                self.commands.pop_front();
                Some(byte)
            }
            _ => None,
        }
    }

    async fn emit(&mut self, line: &str) {
        self.lines.push((self.clock.now(), String::from(line)));
    }
}

pub struct SimPacer {
    clock: SimClock,
    pub delays: Vec<u64>,
}

impl SimPacer {
    pub fn new(clock: SimClock) -> Self {
        Self {
            clock,
            delays: Vec::new(),
        }
    }
}

impl Pacer for SimPacer {
    async fn delay_ms(&mut self, ms: u64) {
        self.delays.push(ms);
        self.clock.advance(ms);
    }
}
