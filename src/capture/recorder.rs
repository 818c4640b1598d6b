//! Host-side capture: stamps incoming lines, keeps the data rows and saves
//! them as CSV under a name that never overwrites an earlier capture.

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::string::String;
use std::time::Instant;
use std::vec::Vec;

use super::{parse_row, DataRow};
use crate::sampling::{Command, RowFormat};

/// Default directory for saved captures, relative to the working directory.
pub const CAPTURE_DIR: &str = "AccelData";

const CSV_EOL: &str = "\r\n";

/// Ask the device to stream. Only ends a pause; ignored otherwise.
pub fn start_streaming<W: Write>(port: &mut W) -> io::Result<()> {
    send(port, Command::Resume)
}

pub fn stop_streaming<W: Write>(port: &mut W) -> io::Result<()> {
    send(port, Command::Pause)
}

fn send<W: Write>(port: &mut W, command: Command) -> io::Result<()> {
    port.write_all(&[command.byte()])?;
    port.flush()
}

/// A data row with its arrival time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedRow {
    pub time_ms: u64,
    pub row: DataRow,
}

#[derive(Debug, Default)]
pub struct Recorder {
    rows: Vec<TimedRow>,
    skipped: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps `line` if it is a data row. Returns whether it was kept.
    pub fn push_line(&mut self, time_ms: u64, line: &str) -> bool {
        match parse_row(line) {
            Some(row) => {
                self.rows.push(TimedRow { time_ms, row });
                true
            }
            None => {
                self.skipped += 1;
                false
            }
        }
    }

    /// Reads lines until end of stream, stamping each with `clock()` as it
    /// arrives. Lines that are not valid UTF-8 are skipped. Returns the
    /// number of rows kept.
    pub fn read_from<R, F>(&mut self, mut reader: R, mut clock: F) -> io::Result<usize>
    where
        R: BufRead,
        F: FnMut() -> u64,
    {
        let mut buf = Vec::new();
        let mut kept = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(kept);
            }
            let time_ms = clock();
            match std::str::from_utf8(&buf) {
                Ok(line) if self.push_line(time_ms, line) => kept += 1,
                Ok(_) => {}
                Err(_) => self.skipped += 1,
            }
        }
    }

    /// `read_from` with milliseconds elapsed since this call.
    pub fn read_timed<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let start = Instant::now();
        self.read_from(reader, || start.elapsed().as_millis() as u64)
    }

    pub fn rows(&self) -> &[TimedRow] {
        &self.rows
    }

    /// Lines seen that were not data.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.skipped = 0;
    }

    /// `Time` followed by the device's column labels, then one line per row.
    /// Blank placeholders stay blank.
    pub fn write_csv<W: Write>(&self, out: &mut W, format: &RowFormat) -> io::Result<()> {
        let header = format.header();
        let mut line = String::from("Time");
        for label in header.split('\t').skip(1) {
            line.push(',');
            line.push_str(label);
        }
        line.push_str(CSV_EOL);
        out.write_all(line.as_bytes())?;

        for timed in &self.rows {
            line.clear();
            line.push_str(&timed.time_ms.to_string());
            for value in timed.row.values() {
                line.push(',');
                if let Some(v) = value {
                    line.push_str(&v.to_string());
                }
            }
            line.push_str(CSV_EOL);
            out.write_all(line.as_bytes())?;
        }
        out.flush()
    }

    /// Writes the capture to `dir/<name>.csv`, or the first free
    /// `dir/<name>_<n>.csv`. Returns the path written.
    pub fn save(&self, dir: &Path, name: &str, format: &RowFormat) -> io::Result<PathBuf> {
        let path = unique_path(dir, name)?;
        let file = File::options().write(true).create_new(true).open(&path)?;
        let mut out = BufWriter::new(file);
        self.write_csv(&mut out, format)?;
        Ok(path)
    }
}

/// First of `name.csv`, `name_1.csv`, `name_2.csv`, ... that does not exist
/// in `dir`. Creates `dir` if needed.
pub fn unique_path(dir: &Path, name: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let mut counter = 0u32;
    loop {
        let file_name = if counter == 0 {
            format!("{}.csv", name)
        } else {
            format!("{}_{}.csv", name, counter)
        };
        let path = dir.join(file_name);
        if !path.exists() {
            return Ok(path);
        }
        counter += 1;
    }
}
