//! Credential verification port.

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;

/// How the archive session authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// Earthdata Login bearer token (`EDL_TOKEN`).
    Token,
    /// Earthdata username and password.
    Credentials,
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => f.write_str("EDL token"),
            Self::Credentials => f.write_str("username/password"),
        }
    }
}

#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Check that the configured credentials can be used for downloads.
    async fn verify(&self) -> Result<AuthMethod>;
}
