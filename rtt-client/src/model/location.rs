//! Station identity types.

use serde::Serialize;

/// One or many TIPLOC codes for a station.
///
/// Small stations have a single timing point, while large ones (e.g.
/// Clapham Junction) span several. The API sends a bare string in the
/// first case and an array in the second; both shapes are kept as sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Tiploc {
    /// A single TIPLOC code.
    Single(String),
    /// Several TIPLOC codes, in the order the API listed them.
    Multiple(Vec<String>),
}

impl Tiploc {
    /// Iterate over every code regardless of representation.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        let codes = match self {
            Tiploc::Single(code) => std::slice::from_ref(code),
            Tiploc::Multiple(codes) => codes.as_slice(),
        };
        codes.iter().map(String::as_str)
    }

    /// Whether `code` is one of this station's TIPLOCs.
    pub fn contains(&self, code: &str) -> bool {
        self.codes().any(|c| c == code)
    }
}

/// The station a search was made for (or filtered to).
///
/// `name` and `crs` are guaranteed non-empty by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetail {
    /// Human-readable station name.
    pub name: String,
    /// 3-letter CRS code.
    pub crs: String,
    /// TIPLOC code(s) covered by the station.
    pub tiploc: Tiploc,
}
