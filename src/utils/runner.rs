//! Time table export.
//!
//! One line per size: `N  time  average_ob  max_ob  min_ob`, time with ten
//! decimals and the average with two, fields separated by two spaces. The
//! layout is what the plotting scripts read, so it must not drift.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::timer::TimeRecord;
use crate::error::Result;

/// Format one table line, newline included.
pub fn format_time_row(record: &TimeRecord) -> String {
    format!(
        "{}  {:.10}  {:.2}  {}  {}\n",
        record.n, record.time, record.average_ob, record.max_ob, record.min_ob
    )
}

/// Write `records` to `path`, truncating any existing file.
pub fn save_time_table(path: impl AsRef<Path>, records: &[TimeRecord]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for record in records {
        out.write_all(format_time_row(record).as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Read back a table written by [`save_time_table`].
///
/// The file does not store the trial count, so `n_elems` comes back as 0.
pub fn read_time_table(path: impl AsRef<Path>) -> Result<Vec<TimeRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(bad_line(line_no, &line));
        }
        let parse = || -> Option<TimeRecord> {
            Some(TimeRecord {
                n: fields[0].parse().ok()?,
                n_elems: 0,
                time: fields[1].parse().ok()?,
                average_ob: fields[2].parse().ok()?,
                max_ob: fields[3].parse().ok()?,
                min_ob: fields[4].parse().ok()?,
            })
        };
        records.push(parse().ok_or_else(|| bad_line(line_no, &line))?);
    }
    Ok(records)
}

fn bad_line(line_no: usize, line: &str) -> crate::error::AlgoError {
    std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        format!("malformed time table line {}: {:?}", line_no + 1, line),
    )
    .into()
}
