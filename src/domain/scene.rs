//! Sentinel-1 scene metadata and polarization channels.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

const UNKNOWN: &str = "unknown";

fn unknown() -> String {
    UNKNOWN.to_string()
}

fn default_platform() -> String {
    "SENTINEL-1".to_string()
}

/// Catalog record for one acquisition.
///
/// This is also the on-disk metadata record written by the retrieval pipeline
/// and read back by the downloader, so field names are part of the file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub granule_name: String,
    /// Raw acquisition timestamp as reported by the catalog.
    pub acquisition_date: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "unknown")]
    pub beam_mode: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub size_mb: f64,
    #[serde(default = "unknown")]
    pub path: String,
    #[serde(default = "unknown")]
    pub frame: String,
    #[serde(default = "unknown")]
    pub orbit_direction: String,
    #[serde(default = "unknown")]
    pub polarization: String,
    #[serde(default)]
    pub s3_urls: Vec<String>,
}

impl Scene {
    /// Minimal record with defaults for everything but name and date.
    #[must_use]
    pub fn new(granule_name: impl Into<String>, acquisition_date: impl Into<String>) -> Self {
        Self {
            granule_name: granule_name.into(),
            acquisition_date: acquisition_date.into(),
            platform: default_platform(),
            beam_mode: unknown(),
            url: String::new(),
            size_mb: 0.0,
            path: unknown(),
            frame: unknown(),
            orbit_direction: unknown(),
            polarization: unknown(),
            s3_urls: Vec::new(),
        }
    }

    /// Parsed acquisition time, if the raw value is an ISO-8601 timestamp.
    #[must_use]
    pub fn acquired_at(&self) -> Option<NaiveDateTime> {
        parse_acquisition_time(&self.acquisition_date)
    }

    /// Check that the granule name can be used as a single file name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidGranuleName`] for empty names, names with
    /// separators, `.`/`..` or absolute paths.
    pub fn check_granule_name(&self) -> Result<(), DomainError> {
        if is_plain_file_name(&self.granule_name) {
            Ok(())
        } else {
            Err(DomainError::InvalidGranuleName(self.granule_name.clone()))
        }
    }

    /// File name of the downloaded product archive.
    #[must_use]
    pub fn zip_file_name(&self) -> String {
        format!("{}.zip", self.granule_name)
    }

    /// Directory name of the extracted SAFE product.
    #[must_use]
    pub fn safe_dir_name(&self) -> String {
        format!("{}.SAFE", self.granule_name)
    }

    /// File name of the metadata record.
    #[must_use]
    pub fn metadata_file_name(&self) -> String {
        format!("{}.json", self.granule_name)
    }

    /// Product size in GiB.
    #[must_use]
    pub fn size_gb(&self) -> f64 {
        self.size_mb / 1024.0
    }
}

/// True when `name` is exactly one normal path component.
#[must_use]
pub fn is_plain_file_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == OsStr::new(name)
    )
}

/// Parse a catalog timestamp into UTC wall-clock time.
///
/// Only values containing a `T` separator are considered. A `Z` or `+00:00`
/// suffix is dropped; any other offset is converted to UTC.
#[must_use]
pub fn parse_acquisition_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if !raw.contains('T') {
        return None;
    }

    let naive = raw
        .strip_suffix('Z')
        .or_else(|| raw.strip_suffix("+00:00"))
        .unwrap_or(raw);
    if let Ok(parsed) = NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed);
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|with_offset| with_offset.naive_utc())
}

/// Radar polarization channel of a measurement raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Polarization {
    VV,
    VH,
    HH,
    HV,
}

impl Polarization {
    /// Match order used when a file name could contain more than one label.
    const SEARCH_ORDER: [(&'static str, Polarization); 4] = [
        ("vv", Polarization::VV),
        ("vh", Polarization::VH),
        ("hh", Polarization::HH),
        ("hv", Polarization::HV),
    ];

    /// Detect the polarization from a measurement file name.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::SEARCH_ORDER
            .iter()
            .find(|(needle, _)| lower.contains(needle))
            .map(|(_, polarization)| *polarization)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VV => "VV",
            Self::VH => "VH",
            Self::HH => "HH",
            Self::HV => "HV",
        }
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarization {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VV" => Ok(Self::VV),
            "VH" => Ok(Self::VH),
            "HH" => Ok(Self::HH),
            "HV" => Ok(Self::HV),
            _ => Err(DomainError::UnknownPolarization(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn parses_zulu_timestamp() {
        assert_eq!(
            parse_acquisition_time("2025-07-14T15:48:54Z"),
            Some(at(2025, 7, 14, 15, 48, 54))
        );
    }

    #[test]
    fn parses_fractional_seconds_with_utc_offset() {
        let parsed = parse_acquisition_time("2025-07-14T15:48:54.123456+00:00").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 7, 14).unwrap());
    }

    #[test]
    fn converts_non_utc_offset() {
        assert_eq!(
            parse_acquisition_time("2025-07-14T17:48:54+02:00"),
            Some(at(2025, 7, 14, 15, 48, 54))
        );
    }

    #[test]
    fn rejects_dates_without_time_separator() {
        assert_eq!(parse_acquisition_time("2025-07-14"), None);
        assert_eq!(parse_acquisition_time("unknown_date"), None);
    }

    #[test]
    fn polarization_from_measurement_file_name() {
        assert_eq!(
            Polarization::from_file_name("s1a-iw1-slc-vv-20250714t154856-20250714t154921-060082-077700-004.tiff"),
            Some(Polarization::VV)
        );
        assert_eq!(
            Polarization::from_file_name("S1A-IW2-SLC-VH-X.TIFF"),
            Some(Polarization::VH)
        );
        assert_eq!(Polarization::from_file_name("noise.tiff"), None);
    }

    #[test]
    fn polarization_search_order_prefers_vv() {
        assert_eq!(
            Polarization::from_file_name("hh-vv.tiff"),
            Some(Polarization::VV)
        );
    }

    #[test]
    fn plain_file_names() {
        assert!(is_plain_file_name("S1A_IW_SLC__1SDV_20250714T154854"));
        assert!(is_plain_file_name("S1A_TEST.SAFE"));
        for name in ["", ".", "..", "../escaped", "a/b", "/abs", "a\\b", "x.SAFE/"] {
            assert!(!is_plain_file_name(name), "{name:?} accepted");
        }
    }

    #[test]
    fn check_granule_name_rejects_traversal() {
        assert_eq!(
            Scene::new("../../escaped", "2025-07-14T15:48:54Z").check_granule_name(),
            Err(DomainError::InvalidGranuleName("../../escaped".to_string()))
        );
        assert!(Scene::new("S1A_TEST", "").check_granule_name().is_ok());
    }

    #[test]
    fn scene_record_fills_defaults() {
        let scene: Scene = serde_json::from_str(
            r#"{"granule_name": "S1A_TEST", "acquisition_date": "2025-07-14T15:48:54Z"}"#,
        )
        .unwrap();
        assert_eq!(scene.platform, "SENTINEL-1");
        assert_eq!(scene.orbit_direction, "unknown");
        assert!(scene.s3_urls.is_empty());
        assert_eq!(scene.zip_file_name(), "S1A_TEST.zip");
        assert_eq!(scene.safe_dir_name(), "S1A_TEST.SAFE");
    }
}
