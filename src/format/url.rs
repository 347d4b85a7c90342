use crate::{error::FormatError, format::require_input, normalizer::WorkingString};

const NAME: &str = "url";

/// Format `input` as an `http` or `https` URL, optionally under `subdomain`.
///
/// The host part is lower-cased; an empty `subdomain` adds no prefix.
pub fn to_url(input: &str, subdomain: &str, secure: bool) -> Result<String, FormatError> {
    require_input(NAME, input)?;

    let mut host = WorkingString::new(input);
    host.to_lower();

    let scheme = if secure { "https" } else { "http" };
    if subdomain.is_empty() {
        Ok(format!("{scheme}://{host}"))
    } else {
        Ok(format!("{scheme}://{subdomain}.{host}"))
    }
}
