use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Earthdata / ASF authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("either EDL_TOKEN or ASF_USERNAME/ASF_PASSWORD is required")]
    MissingCredentials,

    #[error("EDL token is not a JWT (expected 3 dot-separated segments, got {segments})")]
    MalformedToken { segments: usize },

    #[error("EDL token expired at {expired_at}")]
    TokenExpired {
        expired_at: chrono::DateTime<chrono::Utc>,
    },

    #[error("authentication rejected by {host}: HTTP {status}")]
    Rejected { host: String, status: u16 },

    #[error("login did not establish an ASF session (no {cookie} cookie)")]
    NoSession { cookie: &'static str },
}

/// SAFE archive layout and extraction errors.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("no .SAFE directory found in {}", archive.display())]
    NoSafeDirectory { archive: PathBuf },

    #[error("archive entry escapes the extraction directory: {name}")]
    UnsafeEntry { name: String },

    #[error("missing directory: {name}")]
    MissingDirectory { name: &'static str },

    #[error("missing file: {name}")]
    MissingFile { name: &'static str },

    #[error("no TIFF files in measurement")]
    NoMeasurementRasters,

    #[error("no recognised polarization among measurement files")]
    NoPolarizations,
}

/// Product acquisition errors.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("scene {granule} has no download URL")]
    MissingUrl { granule: String },

    #[error("download finished but {} was not found", path.display())]
    MissingDownload { path: PathBuf },

    #[error("{failed} of {total} scenes failed")]
    Incomplete { failed: usize, total: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("connection error: {0}")]
    Connection(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
