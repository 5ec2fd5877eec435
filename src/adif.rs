//! ADIF (`.adi`) text output.
//!
//! Fields are written as `<NAME:len>value` with nothing between them. A
//! record ends with `<EOR>` on its own line. The header is free text followed
//! by metadata tags, one per line, and `<EOH>`.

use std::fmt::Display;
use std::io::{self, Write};

use crate::field::is_empty_field;

/// ADIF version this output conforms to.
pub const ADIF_VERSION: &str = "3.1.1";

/// Program identifier written to the header.
pub const PROGRAM_ID: &str = "HamLog-C2A";

/// Program version written to the header.
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// End-of-header marker.
pub const EOH: &str = "<EOH>";

/// End-of-record marker.
pub const EOR: &str = "<EOR>";

/// Format of the generation timestamp on the first header line.
const GENERATED_FORMAT: &str = "%Y-%m-%d at %H:%M:%S %Z";

/// Render one `<NAME:len>value` tag, or nothing for an empty value.
///
/// `len` counts characters, not bytes.
pub fn format_field(name: &str, value: &str) -> String {
    let mut out = String::new();
    push_field(&mut out, name, value);
    out
}

fn push_field(out: &mut String, name: &str, value: &str) {
    if is_empty_field(value) {
        return;
    }
    out.push_str(&format!("<{}:{}>{}", name, value.chars().count(), value));
}

/// One ADIF record being assembled.
///
/// Nothing reaches the output until [`AdifWriter::write_record`] is called
/// with the finished record, so an error halfway through building one leaves
/// no trace in the stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdifRecord {
    body: String,
}

impl AdifRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; empty values and the `-` placeholder are skipped.
    pub fn field(&mut self, name: &str, value: &str) -> &mut Self {
        push_field(&mut self.body, name, value);
        self
    }

    /// Append a field whose value may be absent.
    pub fn opt_field(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.field(name, value);
        }
        self
    }

    /// Field tags written so far, without the end-of-record marker.
    pub fn as_str(&self) -> &str {
        &self.body
    }
}

/// Writes an ADIF header and records to an output stream.
pub struct AdifWriter<W: Write> {
    out: W,
}

impl<W: Write> AdifWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the header block.
    ///
    /// `generated` is shown on the first line as a human-readable timestamp
    /// next to the uppercased station callsign.
    pub fn write_header<Tz>(
        &mut self,
        generated: &chrono::DateTime<Tz>,
        station_callsign: &str,
    ) -> io::Result<()>
    where
        Tz: chrono::TimeZone,
        Tz::Offset: Display,
    {
        writeln!(
            self.out,
            "Generated on {} for {}",
            generated.format(GENERATED_FORMAT),
            station_callsign.to_uppercase()
        )?;
        for (name, value) in [
            ("ADIF_VER", ADIF_VERSION),
            ("PROGRAMID", PROGRAM_ID),
            ("PROGRAMVERSION", PROGRAM_VERSION),
        ] {
            writeln!(self.out, "{}", format_field(name, value))?;
        }
        writeln!(self.out, "{EOH}")
    }

    /// Write a finished record followed by `<EOR>` on its own line.
    pub fn write_record(&mut self, record: &AdifRecord) -> io::Result<()> {
        self.out.write_all(record.as_str().as_bytes())?;
        writeln!(self.out, "{EOR}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
