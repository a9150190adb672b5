//! Authenticated HTTP session for ASF downloads.
//!
//! Product URLs redirect through Earthdata Login and end at pre-signed
//! storage URLs. Redirects are followed by hand so the `Authorization`
//! header only travels to hosts inside the configured auth domains.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{AUTHORIZATION, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Client, Response};
use tracing::{debug, info};
use url::{Host, Url};

use super::credentials::{validate_token, EarthdataCredentials};
use crate::error::{AuthError, Error, Result};
use crate::port::{AuthMethod, CredentialVerifier};

/// Hosts that receive credentials.
pub const DEFAULT_AUTH_DOMAINS: &[&str] =
    &["asf.alaska.edu", "earthdata.nasa.gov", "earthdatacloud.nasa.gov"];

/// Cookie set by the ASF auth host after a successful login.
pub const ASF_SESSION_COOKIE: &str = "asf-urs";

const MAX_REDIRECTS: usize = 10;

/// Earthdata Login endpoints used by the username/password flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSettings {
    pub urs_url: String,
    pub auth_host: String,
    pub client_id: String,
    pub auth_domains: Vec<String>,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            urs_url: "https://urs.earthdata.nasa.gov".to_string(),
            auth_host: "https://auth.asf.alaska.edu".to_string(),
            client_id: "BO_n7nTIlMljdvU6kRRB3g".to_string(),
            auth_domains: DEFAULT_AUTH_DOMAINS.iter().map(|d| (*d).to_string()).collect(),
        }
    }
}

pub struct EarthdataSession {
    client: Client,
    jar: Arc<Jar>,
    credentials: EarthdataCredentials,
    settings: LoginSettings,
}

impl EarthdataSession {
    pub fn new(credentials: EarthdataCredentials, settings: LoginSettings) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .user_agent(concat!("sarwatch/", env!("CARGO_PKG_VERSION")))
            .redirect(Policy::none())
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        Ok(Self {
            client,
            jar,
            credentials,
            settings,
        })
    }

    #[must_use]
    pub const fn method(&self) -> AuthMethod {
        self.credentials.method()
    }

    /// True when `url`'s host equals or is a subdomain of an auth domain.
    #[must_use]
    pub fn is_auth_host(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        self.settings.auth_domains.iter().any(|domain| {
            host == domain
                || host
                    .strip_suffix(domain.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    /// True when `url` may carry the `Authorization` header: an auth host
    /// reached over HTTPS, or over plain HTTP on a loopback address.
    #[must_use]
    pub fn sends_credentials(&self, url: &Url) -> bool {
        let secure = match url.scheme() {
            "https" => true,
            "http" => match url.host() {
                Some(Host::Ipv4(ip)) => ip.is_loopback(),
                Some(Host::Ipv6(ip)) => ip.is_loopback(),
                Some(Host::Domain(domain)) => domain == "localhost",
                None => false,
            },
            _ => false,
        };
        secure && self.is_auth_host(url)
    }

    /// GET `url`, following up to ten redirects.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let mut current = Url::parse(url)?;

        for hop in 0..=MAX_REDIRECTS {
            let mut request = self.client.get(current.clone());
            if self.sends_credentials(&current) {
                request = request.header(AUTHORIZATION, self.credentials.authorization());
            }
            let response = request.send().await?;

            if !response.status().is_redirection() {
                return Ok(response);
            }

            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| {
                    Error::Connection(format!("redirect from {current} without Location header"))
                })?;
            let next = current.join(location)?;
            debug!(hop, from = %current.host_str().unwrap_or(""), to = %next.host_str().unwrap_or(""), "Following redirect");
            current = next;
        }

        Err(Error::Connection(format!(
            "more than {MAX_REDIRECTS} redirects for {url}"
        )))
    }

    /// Run the ASF login flow and confirm the session cookie is present.
    async fn login(&self) -> Result<()> {
        let redirect_uri = format!("{}/login", self.settings.auth_host.trim_end_matches('/'));
        let authorize = Url::parse_with_params(
            &format!("{}/oauth/authorize", self.settings.urs_url.trim_end_matches('/')),
            &[
                ("response_type", "code"),
                ("client_id", self.settings.client_id.as_str()),
                ("redirect_uri", redirect_uri.as_str()),
            ],
        )?;

        let response = self.get(authorize.as_str()).await?;
        let status = response.status();
        if !status.is_success() {
            let host = response.url().host_str().unwrap_or_default().to_string();
            return Err(AuthError::Rejected {
                host,
                status: status.as_u16(),
            }
            .into());
        }

        let auth_host = Url::parse(&self.settings.auth_host)?;
        let has_session = self
            .jar
            .cookies(&auth_host)
            .and_then(|header| header.to_str().ok().map(str::to_string))
            .is_some_and(|cookies| {
                cookies
                    .split(';')
                    .any(|pair| pair.trim().starts_with(&format!("{ASF_SESSION_COOKIE}=")))
            });
        if !has_session {
            return Err(AuthError::NoSession {
                cookie: ASF_SESSION_COOKIE,
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialVerifier for EarthdataSession {
    async fn verify(&self) -> Result<AuthMethod> {
        match &self.credentials {
            EarthdataCredentials::Token(token) => validate_token(token, Utc::now())?,
            EarthdataCredentials::Basic { username, .. } => {
                info!(username = %username, "Logging in to Earthdata");
                self.login().await?;
            }
        }
        info!(method = %self.method(), "Earthdata authentication succeeded");
        Ok(self.method())
    }
}
