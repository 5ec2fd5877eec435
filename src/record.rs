//! One line of a HamLog CSV export.
//!
//! Line layout:
//! ```text
//! <summary text>,<no>|<date>|<time on>|<time off>|<freq>|<mode>|<power>|
//!     <my qth>|<timezone>|<rst sent>|<rst rcvd>|<call>|<name>|<qth>|<comment>
//! ```
//!
//! The summary before the first comma is a human-readable digest HamLog
//! prepends to every line; it duplicates the fields and is ignored.

use crate::error::ConvertError;
use crate::field::decode_field;

/// Number of pipe-delimited fields in a valid line.
pub const FIELD_COUNT: usize = 15;

/// Separator between the summary text and the field list.
const SUMMARY_SEPARATOR: char = ',';

/// Separator between fields.
const FIELD_SEPARATOR: char = '|';

/// Fields of one contact, in export order.
///
/// Free text fields (`station_qth`, `op_name`, `qth`, `comment`) are stored
/// decoded. Every other field is kept exactly as exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub number: u64,
    pub date: String,
    pub time_on: String,
    pub time_off: String,
    /// Frequency in MHz, as a decimal string.
    pub freq: String,
    pub mode: String,
    pub power: String,
    pub station_qth: String,
    pub timezone: String,
    pub rst_sent: String,
    pub rst_rcvd: String,
    pub call: String,
    pub op_name: String,
    pub qth: String,
    pub comment: String,
}

/// Split a raw line into its field list, dropping the summary prefix.
///
/// A line without a comma has no field list; it yields one empty field so
/// the count check rejects it.
pub fn split_fields(line: &str) -> Vec<&str> {
    let rest = match line.split_once(SUMMARY_SEPARATOR) {
        Some((_summary, rest)) => rest,
        None => "",
    };
    rest.split(FIELD_SEPARATOR).collect()
}

/// Parse the record number field.
pub fn parse_record_number(value: &str) -> Result<u64, ConvertError> {
    value
        .parse::<u64>()
        .map_err(|source| ConvertError::RecordNumber {
            value: value.to_string(),
            source,
        })
}

impl LogRecord {
    /// Build a record from an already split and counted field list.
    fn from_fields(number: u64, fields: &[&str]) -> Self {
        Self {
            number,
            date: fields[1].to_string(),
            time_on: fields[2].to_string(),
            time_off: fields[3].to_string(),
            freq: fields[4].to_string(),
            mode: fields[5].to_string(),
            power: fields[6].to_string(),
            station_qth: decode_field(fields[7]),
            timezone: fields[8].to_string(),
            rst_sent: fields[9].to_string(),
            rst_rcvd: fields[10].to_string(),
            call: fields[11].to_string(),
            op_name: decode_field(fields[12]),
            qth: decode_field(fields[13]),
            comment: decode_field(fields[14]),
        }
    }
}

/// Parse one raw line.
///
/// `on_number` is called with the record number as soon as it parses, before
/// any other field is looked at, so the caller can track the highest number
/// in the file even for records it later filters out.
pub fn parse_line(line: &str, on_number: impl FnOnce(u64)) -> Result<LogRecord, ConvertError> {
    let fields = split_fields(line);
    if fields.len() != FIELD_COUNT {
        return Err(ConvertError::FieldCount {
            found: fields.len(),
        });
    }

    let number = parse_record_number(fields[0])?;
    on_number(number);

    Ok(LogRecord::from_fields(number, &fields))
}
