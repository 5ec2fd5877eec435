//! Frequency to amateur band classification.
//!
//! Band edges follow the ADIF 3.1.1 band enumeration
//! (<http://adif.org.uk/311/ADIF_311.htm#Band_Enumeration>). Ranges are
//! inclusive, stored in hertz, and kept in ascending order so the first
//! matching entry wins.

/// One named band and its inclusive frequency range in hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandFreqRange {
    pub band: &'static str,
    pub from_hz: u64,
    pub to_hz: u64,
}

impl BandFreqRange {
    const fn new(band: &'static str, from_hz: u64, to_hz: u64) -> Self {
        Self {
            band,
            from_hz,
            to_hz,
        }
    }

    /// True if `hz` falls inside this band, edges included.
    pub fn contains(&self, hz: u64) -> bool {
        (self.from_hz..=self.to_hz).contains(&hz)
    }
}

/// All known bands, lowest first.
///
/// 5M starts one hertz above the top of 6M so 54 MHz stays in 6M.
pub static BAND_TABLE: &[BandFreqRange] = &[
    BandFreqRange::new("2190M", 135_700, 137_800),
    BandFreqRange::new("630M", 472_000, 479_000),
    BandFreqRange::new("560M", 501_000, 504_000),
    BandFreqRange::new("160M", 1_800_000, 2_000_000),
    BandFreqRange::new("80M", 3_500_000, 4_000_000),
    BandFreqRange::new("60M", 5_060_000, 5_450_000),
    BandFreqRange::new("40M", 7_000_000, 7_300_000),
    BandFreqRange::new("30M", 10_100_000, 10_150_000),
    BandFreqRange::new("20M", 14_000_000, 14_350_000),
    BandFreqRange::new("17M", 18_068_000, 18_168_000),
    BandFreqRange::new("15M", 21_000_000, 21_450_000),
    BandFreqRange::new("12M", 24_890_000, 24_990_000),
    BandFreqRange::new("10M", 28_000_000, 29_700_000),
    BandFreqRange::new("8M", 40_000_000, 45_000_000),
    BandFreqRange::new("6M", 50_000_000, 54_000_000),
    BandFreqRange::new("5M", 54_000_001, 69_900_000),
    BandFreqRange::new("4M", 70_000_000, 71_000_000),
    BandFreqRange::new("2M", 144_000_000, 148_000_000),
    BandFreqRange::new("1.25M", 222_000_000, 225_000_000),
    BandFreqRange::new("70CM", 420_000_000, 450_000_000),
    BandFreqRange::new("33CM", 902_000_000, 928_000_000),
    BandFreqRange::new("23CM", 1_240_000_000, 1_300_000_000),
    BandFreqRange::new("13CM", 2_300_000_000, 2_450_000_000),
    BandFreqRange::new("9CM", 3_300_000_000, 3_500_000_000),
    BandFreqRange::new("6CM", 5_650_000_000, 5_925_000_000),
    BandFreqRange::new("3CM", 10_000_000_000, 10_500_000_000),
    BandFreqRange::new("1.25CM", 24_000_000_000, 24_250_000_000),
    BandFreqRange::new("6MM", 47_000_000_000, 47_200_000_000),
    BandFreqRange::new("4MM", 75_500_000_000, 81_000_000_000),
    BandFreqRange::new("2.5MM", 119_980_000_000, 120_020_000_000),
    BandFreqRange::new("2MM", 142_000_000_000, 149_000_000_000),
    BandFreqRange::new("1MM", 241_000_000_000, 999_999_999_999),
];

/// Convert a frequency in MHz to whole hertz, truncating.
///
/// Returns `None` if the string is not a number.
pub fn mhz_to_hz(freq_mhz: &str) -> Option<u64> {
    let mhz: f64 = freq_mhz.parse().ok()?;
    // `as` saturates: negatives and NaN become 0, which is in no band.
    Some((mhz * 1e6) as u64)
}

/// Band containing `hz`, if any.
pub fn band_for_hz(hz: u64) -> Option<&'static str> {
    BAND_TABLE.iter().find(|r| r.contains(hz)).map(|r| r.band)
}

/// Band for a frequency given as a decimal MHz string.
pub fn freq_to_band(freq_mhz: &str) -> Option<&'static str> {
    band_for_hz(mhz_to_hz(freq_mhz)?)
}
