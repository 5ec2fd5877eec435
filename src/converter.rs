//! Line-at-a-time conversion driver.
//!
//! Each input line is parsed, decoded, normalised to UTC, classified and
//! rendered before the next line is read. A failing line is reported on the
//! diagnostics stream and skipped; the scan always runs to the end of input.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, TimeZone};
use tracing::{debug, info};

use crate::adif::{AdifRecord, AdifWriter};
use crate::band::freq_to_band;
use crate::config::Config;
use crate::error::ConvertError;
use crate::field::is_empty_field;
use crate::record::{LogRecord, parse_line};
use crate::time::{time_off_offset, to_utc};

/// State carried from one line to the next.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    /// Highest record number parsed so far, exported or not.
    pub latest_no: u64,
}

impl RunState {
    pub fn observe(&mut self, number: u64) {
        if number > self.latest_no {
            self.latest_no = number;
        }
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines processed without error, including filtered ones.
    pub converted: usize,
    /// Lines read.
    pub lines: usize,
    /// Records written to the output.
    pub exported: usize,
    /// Highest record number seen in the file.
    pub latest_no: u64,
}

impl RunSummary {
    /// Lines skipped because of an error.
    pub fn errors(&self) -> usize {
        self.lines - self.converted
    }
}

/// Build the ADIF record for one parsed contact.
///
/// `station_callsign` is written as given.
pub fn build_record(record: &LogRecord, station_callsign: &str) -> Result<AdifRecord, ConvertError> {
    if is_empty_field(&record.date) || is_empty_field(&record.time_on) {
        return Err(ConvertError::MissingRequiredField);
    }

    let (qso_date, time_on) = to_utc(
        &record.date,
        &record.time_on,
        &record.timezone,
        chrono::Duration::zero(),
    )?;

    let mut out = AdifRecord::new();
    out.field("QSO_DATE", &qso_date).field("TIME_ON", &time_on);

    if !is_empty_field(&record.time_off) && record.time_off != record.time_on {
        let offset = time_off_offset(&record.time_on, &record.time_off);
        let (qso_date_off, time_off) =
            to_utc(&record.date, &record.time_off, &record.timezone, offset)?;
        if qso_date_off != qso_date {
            out.field("QSO_DATE_OFF", &qso_date_off);
        }
        out.field("TIME_OFF", &time_off);
    }

    out.field("CALL", &record.call)
        .field("FREQ", &record.freq)
        .opt_field("BAND", freq_to_band(&record.freq))
        .field("MODE", &record.mode)
        .field("RST_RCVD", &record.rst_rcvd)
        .field("RST_SENT", &record.rst_sent)
        .field("TX_PWR", &record.power)
        .field("NAME", &record.op_name)
        .field("QTH", &record.qth)
        .field("STATION_CALLSIGN", station_callsign)
        .field("MY_CITY", &record.station_qth)
        .field("COMMENT", &record.comment);

    Ok(out)
}

/// Convert one raw input line.
///
/// Returns `Ok(None)` for a record numbered below the configured start,
/// which is not an error. `state` is updated as soon as the record number
/// parses, whatever happens to the rest of the line.
pub fn convert_line(
    line: &str,
    config: &Config,
    state: &mut RunState,
) -> Result<Option<AdifRecord>, ConvertError> {
    let record = parse_line(line, |number| state.observe(number))?;

    if record.number < config.start_no {
        debug!(
            number = record.number,
            start_no = config.start_no,
            "record below start number, not exported"
        );
        return Ok(None);
    }

    let adif = build_record(&record, &config.station_callsign_upper())?;
    debug!(number = record.number, call = %record.call, "record converted");
    Ok(Some(adif))
}

/// Read one line without its terminator, decoding invalid UTF-8 lossily.
///
/// Returns `Ok(None)` at end of input.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Convert every line of `input`, writing records to `writer` and per-line
/// errors to `diag`.
///
/// Only I/O failures end the scan early.
pub fn convert_lines<R, W, E>(
    config: &Config,
    mut input: R,
    writer: &mut AdifWriter<W>,
    diag: &mut E,
) -> io::Result<RunSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut state = RunState::default();
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();

    while let Some(line) = read_line(&mut input, &mut buf)? {
        summary.lines += 1;

        match convert_line(&line, config, &mut state) {
            Ok(Some(record)) => {
                writer.write_record(&record)?;
                summary.exported += 1;
            }
            Ok(None) => {}
            Err(e) => {
                writeln!(diag, "Error [{e}]. Line: {line}")?;
                continue;
            }
        }
        summary.converted += 1;
    }

    summary.latest_no = state.latest_no;
    Ok(summary)
}

/// Write the closing counts to `diag`.
pub fn write_summary<E: Write>(diag: &mut E, summary: &RunSummary) -> io::Result<()> {
    writeln!(
        diag,
        "Converted {} record(s) from {} lines with {} error(s). Exported {} record(s).",
        summary.converted,
        summary.lines,
        summary.errors(),
        summary.exported
    )?;
    writeln!(diag, "Latest No: {}", summary.latest_no)
}

/// Run a whole conversion: header, every line, then the closing counts.
///
/// `generated` is the timestamp shown in the header.
pub fn convert<R, W, E, Tz>(
    config: &Config,
    input: R,
    out: W,
    mut diag: E,
    generated: &DateTime<Tz>,
) -> io::Result<RunSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    info!(input = %config.input.display(), start_no = config.start_no, "conversion started");

    let mut writer = AdifWriter::new(out);
    writer.write_header(generated, &config.station_callsign)?;
    let summary = convert_lines(config, input, &mut writer, &mut diag)?;
    writer.flush()?;
    write_summary(&mut diag, &summary)?;

    info!(
        lines = summary.lines,
        exported = summary.exported,
        errors = summary.errors(),
        latest_no = summary.latest_no,
        "conversion finished"
    );
    Ok(summary)
}
