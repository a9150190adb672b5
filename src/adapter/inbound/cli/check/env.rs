use chrono::Utc;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;

/// Inspect credential environment variables and the EDL token shape.
pub fn execute_env() -> Result<()> {
    let report = operator::operator()?.check_environment();

    output::section("Environment");
    for variable in &report.variables {
        match &variable.masked {
            Some(masked) => output::field(variable.name, masked),
            None => output::field(variable.name, output::muted("not set")),
        }
    }

    output::section("EDL Token");
    let Some(token) = &report.token else {
        output::warning("EDL_TOKEN not set");
        output::hint("generate a token at https://urs.earthdata.nasa.gov/profile");
        return Ok(());
    };

    output::field("Length", token.length);
    output::field("Segments", token.segments);
    if token.is_jwt() {
        output::success("Token looks like a JWT");
    } else {
        output::warning("Token is not a JWT (expected 3 dot-separated segments)");
    }
    match token.expires_at {
        Some(exp) if token.is_expired_at(Utc::now()) => {
            output::warning(&format!("Token expired at {}", exp.format("%Y-%m-%d %H:%M UTC")));
        }
        Some(exp) => output::field("Expires", exp.format("%Y-%m-%d %H:%M UTC")),
        None => output::note("No readable expiry claim"),
    }

    Ok(())
}
