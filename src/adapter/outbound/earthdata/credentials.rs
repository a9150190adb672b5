//! Earthdata credentials from the environment.

use std::fmt;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{AuthError, Result};
use crate::port::AuthMethod;

pub const EDL_TOKEN_VAR: &str = "EDL_TOKEN";
pub const ASF_USERNAME_VAR: &str = "ASF_USERNAME";
pub const ASF_PASSWORD_VAR: &str = "ASF_PASSWORD";

/// Bearer token or username/password for Earthdata Login.
#[derive(Clone, PartialEq, Eq)]
pub enum EarthdataCredentials {
    Token(String),
    Basic { username: String, password: String },
}

impl EarthdataCredentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve credentials with `lookup`. A token wins over a username and
    /// password; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(token) = get(EDL_TOKEN_VAR) {
            return Ok(Self::Token(token.trim().to_string()));
        }
        match (get(ASF_USERNAME_VAR), get(ASF_PASSWORD_VAR)) {
            (Some(username), Some(password)) => Ok(Self::Basic { username, password }),
            _ => Err(AuthError::MissingCredentials.into()),
        }
    }

    #[must_use]
    pub const fn method(&self) -> AuthMethod {
        match self {
            Self::Token(_) => AuthMethod::Token,
            Self::Basic { .. } => AuthMethod::Credentials,
        }
    }

    /// Value of the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        match self {
            Self::Token(token) => format!("Bearer {token}"),
            Self::Basic { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
            }
        }
    }
}

impl fmt::Debug for EarthdataCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(***)"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Number of dot-separated segments in a token.
#[must_use]
pub fn token_segments(token: &str) -> usize {
    token.split('.').count()
}

/// Expiry from the `exp` claim when the payload decodes.
#[must_use]
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp?, 0)
}

/// Reject tokens that are not JWT-shaped or have expired.
pub fn validate_token(token: &str, now: DateTime<Utc>) -> Result<()> {
    let segments = token_segments(token);
    if segments != 3 {
        return Err(AuthError::MalformedToken { segments }.into());
    }
    if let Some(expired_at) = token_expiry(token).filter(|exp| *exp <= now) {
        return Err(AuthError::TokenExpired { expired_at }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn jwt(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"uid":"someone","exp":{exp}}}"#));
        format!("{header}.{payload}.signature")
    }

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn token_wins_over_username_and_password() {
        let creds = EarthdataCredentials::from_lookup(lookup(&[
            (EDL_TOKEN_VAR, "abc.def.ghi"),
            (ASF_USERNAME_VAR, "user"),
            (ASF_PASSWORD_VAR, "pass"),
        ]))
        .unwrap();
        assert_eq!(creds.method(), AuthMethod::Token);
        assert_eq!(creds.authorization(), "Bearer abc.def.ghi");
    }

    #[test]
    fn basic_credentials_are_base64_encoded() {
        let creds = EarthdataCredentials::from_lookup(lookup(&[
            (ASF_USERNAME_VAR, "user"),
            (ASF_PASSWORD_VAR, "pass"),
        ]))
        .unwrap();
        assert_eq!(creds.authorization(), "Basic dXNlcjpwYXNz");
        assert!(!format!("{creds:?}").contains("pass\""));
    }

    #[test]
    fn missing_password_is_an_error() {
        let result = EarthdataCredentials::from_lookup(lookup(&[
            (EDL_TOKEN_VAR, "  "),
            (ASF_USERNAME_VAR, "user"),
        ]));
        assert!(matches!(result, Err(Error::Auth(AuthError::MissingCredentials))));
    }

    #[test]
    fn reads_expiry_from_payload() {
        let expiry = token_expiry(&jwt(1_900_000_000)).unwrap();
        assert_eq!(expiry.timestamp(), 1_900_000_000);
        assert!(token_expiry("not-a-token").is_none());
    }

    #[test]
    fn validation_checks_shape_and_expiry() {
        let now = DateTime::from_timestamp(1_800_000_000, 0).unwrap();
        assert!(validate_token(&jwt(1_900_000_000), now).is_ok());
        assert!(matches!(
            validate_token(&jwt(1_700_000_000), now),
            Err(Error::Auth(AuthError::TokenExpired { .. }))
        ));
        assert!(matches!(
            validate_token("only.two", now),
            Err(Error::Auth(AuthError::MalformedToken { segments: 2 }))
        ));
    }
}
