//! Record-level conversion errors.
//!
//! Every variant describes why a single input line was skipped. None of them
//! abort the scan; the driver reports them and moves on to the next line.

use std::num::ParseIntError;

use thiserror::Error;

use crate::record::FIELD_COUNT;

/// Why one input line could not be converted.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    /// The pipe-delimited field list did not have exactly [`FIELD_COUNT`] entries.
    #[error("expected {} fields, found {found}", FIELD_COUNT)]
    FieldCount { found: usize },

    /// The record number field is not a non-negative integer.
    #[error("invalid record number '{value}': {source}")]
    RecordNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// QSO date or start time is absent or the `-` placeholder.
    #[error("QSO_DATE or TIME_ON is missing")]
    MissingRequiredField,

    /// The timezone label is not the single supported fixed offset.
    #[error("only supports {supported} timezone, found '{label}'")]
    UnsupportedTimezone {
        label: String,
        supported: &'static str,
    },

    /// The date/time does not match `D/M/YYYY HHMM` or names no real instant.
    ///
    /// `source` is set when the shape was right but chrono rejected the values.
    #[error("invalid date/time '{value}'")]
    TimeGrammar {
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}
