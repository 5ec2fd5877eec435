//! Run configuration.

use std::path::PathBuf;

/// Input file read when none is given.
pub const DEFAULT_INPUT: &str = "HamLog.csv";

/// Station callsign used when none is given.
pub const DEFAULT_STATION_CALLSIGN: &str = "BG1REN";

/// Settings fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HamLog CSV export to read.
    pub input: PathBuf,
    /// Operating station's callsign, any case.
    pub station_callsign: String,
    /// Records numbered below this are read but not exported.
    pub start_no: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            station_callsign: DEFAULT_STATION_CALLSIGN.to_string(),
            start_no: 0,
        }
    }
}

impl Config {
    /// Station callsign as written to the output.
    pub fn station_callsign_upper(&self) -> String {
        self.station_callsign.to_uppercase()
    }
}
