use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Which side of a trade record is ranked as the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionMode {
    Export,
    Import,
}

impl DirectionMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::Import => "import",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "export" | "exports" | "exporters" => Some(Self::Export),
            "import" | "imports" | "importers" => Some(Self::Import),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Export => "Exporters",
            Self::Import => "Importers",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Export => Self::Import,
            Self::Import => Self::Export,
        }
    }

    /// Splits a record into `(subject, partner)` for this mode.
    pub fn subject_and_partner(self, record: &TradeRecord) -> (&str, &str) {
        match self {
            Self::Export => (&record.exporter, &record.importer),
            Self::Import => (&record.importer, &record.exporter),
        }
    }

    /// Maps a `(subject, partner)` pair back to `(exporter, importer)`.
    pub const fn exporter_importer<'a>(self, subject: &'a str, partner: &'a str) -> (&'a str, &'a str) {
        match self {
            Self::Export => (subject, partner),
            Self::Import => (partner, subject),
        }
    }
}

impl fmt::Display for DirectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maximum number of ranked partners kept per subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Truncation {
    Top(usize),
    All,
}

impl Truncation {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        value.parse::<usize>().ok().map(Self::Top)
    }

    pub const fn limit(self) -> Option<usize> {
        match self {
            Self::Top(count) => Some(count),
            Self::All => None,
        }
    }
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top(count) => write!(f, "{count}"),
            Self::All => f.write_str("all"),
        }
    }
}

impl Serialize for Truncation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Top(count) => serializer.serialize_u64(*count as u64),
            Self::All => serializer.serialize_str("all"),
        }
    }
}

/// A geographic point, serialised as `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lat, point.lon]
    }
}

/// One bilateral trade row after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub year: i32,
    pub exporter: String,
    pub importer: String,
    /// Thousands of USD.
    pub value: f64,
    /// Thousands of kg. Informational only.
    #[serde(default)]
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Partner {
    pub name: String,
    pub total_value: f64,
}

/// Ranked trading partners of one subject country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartnerAggregate {
    pub subject: String,
    pub partners: Vec<Partner>,
}

impl PartnerAggregate {
    pub fn total(&self) -> f64 {
        self.partners.iter().map(|partner| partner.total_value).sum()
    }
}

/// A directed flow from exporter to importer, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowEdge {
    pub source: GeoPoint,
    pub target: GeoPoint,
    pub value: f64,
    pub exporter: String,
    pub importer: String,
}

impl FlowEdge {
    pub fn connects(&self, exporter: &str, importer: &str) -> bool {
        self.exporter == exporter && self.importer == importer
    }

    pub fn touches(&self, country: &str) -> bool {
        self.exporter == country || self.importer == country
    }
}
