//! NASA Earthdata Login: credentials, ASF session and authenticated transfer.

mod credentials;
mod session;
mod transfer;

pub use credentials::{
    token_expiry, token_segments, validate_token, EarthdataCredentials, ASF_PASSWORD_VAR,
    ASF_USERNAME_VAR, EDL_TOKEN_VAR,
};
pub use session::{EarthdataSession, LoginSettings, ASF_SESSION_COOKIE, DEFAULT_AUTH_DOMAINS};
pub use transfer::EarthdataTransfer;
