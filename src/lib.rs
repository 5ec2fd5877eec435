//! # hamlog-c2a
//!
//! Convert HamLog CSV exports into ADIF, the text format logging programs
//! use to exchange contact records.
//!
//! ## Overview
//!
//! HamLog writes one contact per line: a free-text summary, a comma, then
//! fifteen `|`-separated fields. Conversion is a single sequential pass:
//! - **Parse**: split off the summary, count fields, read the record number
//! - **Decode**: turn `_C_` back into commas, drop `-` placeholders
//! - **Normalise**: local `D/M/YYYY` + `HHMM` at UTC+08:00 to UTC
//! - **Classify**: frequency in MHz to an ADIF band name
//! - **Emit**: `<NAME:len>value` tags closed by `<EOR>`
//!
//! ## Example
//!
//! ```
//! use hamlog_c2a::{Config, RunState, convert_line};
//!
//! let line = "BA1AA 20m FT8,1|1/6/2024|2030|-|14.074|FT8|-|-|UTC+08:00|-10|-12|BA1AA|-|-|-";
//! let mut state = RunState::default();
//!
//! let record = convert_line(line, &Config::default(), &mut state)
//!     .unwrap()
//!     .unwrap();
//!
//! assert!(record.as_str().starts_with("<QSO_DATE:8>20240531<TIME_ON:4>1230"));
//! assert!(record.as_str().contains("<BAND:3>20M"));
//! assert_eq!(state.latest_no, 1);
//! ```

pub mod adif;
pub mod band;
pub mod config;
pub mod converter;
pub mod error;
pub mod field;
pub mod record;
pub mod time;

pub use adif::{AdifRecord, AdifWriter};
pub use band::{BAND_TABLE, BandFreqRange, freq_to_band};
pub use config::Config;
pub use converter::{
    RunState, RunSummary, build_record, convert, convert_line, convert_lines, write_summary,
};
pub use error::ConvertError;
pub use field::{decode_field, is_empty_field};
pub use record::{FIELD_COUNT, LogRecord, parse_line};
pub use time::{SUPPORTED_TIMEZONE, to_utc};
