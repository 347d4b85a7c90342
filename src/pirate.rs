//! Pirate speak through a remote translation endpoint.
//!
//! One GET per call: no retry, no timeout of our own, no pooling.  Whitespace
//! runs in the input are encoded as `%20`, every other reserved character is
//! percent-escaped, and the result is whatever body the endpoint answers with.

use crate::{
    error::FormatError, format::require_input, normalizer::WorkingString, unicode::is_space,
};
use log::{debug, warn};
use reqwest::Url;

const NAME: &str = "pirate";

pub const DEFAULT_ENDPOINT: &str = "http://www.isithackday.com/arrpi.php";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PirateConfig {
    /// Base URL; the request goes to `<endpoint>?text=<encoded input>`.
    pub endpoint: String,
}

impl Default for PirateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl PirateConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Build the request URL for `input`, rejecting empty input and an
    /// unparsable endpoint before any I/O happens.
    pub fn request_url(&self, input: &str) -> Result<Url, FormatError> {
        require_input(NAME, input)?;

        let escaped = escape_reserved(input);
        let mut text = WorkingString::new(&escaped);
        text.encode_spaces();

        Url::parse(&format!("{}?text={text}", self.endpoint))
            .map_err(|e| FormatError::Endpoint(NAME, format!("{}: {e}", self.endpoint)))
    }
}

/// Client for the translation endpoint.  Holds configuration only; every
/// call makes its own request.
#[derive(Debug, Clone, Default)]
pub struct PirateTranslator {
    config: PirateConfig,
}

impl PirateTranslator {
    pub fn new(config: PirateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PirateConfig {
        &self.config
    }

    /// Blocking translation.  Must not be called from inside an async
    /// runtime; use [`translate_async`](Self::translate_async) there.
    pub fn translate(&self, input: &str) -> Result<String, FormatError> {
        let url = self.config.request_url(input)?;
        debug!("GET {url}");

        let response = reqwest::blocking::get(url).map_err(transport)?;
        let status = response.status();
        let response = response.error_for_status().map_err(|e| {
            warn!("translation endpoint answered {status}");
            transport(e)
        })?;
        response.text().map_err(transport)
    }

    pub async fn translate_async(&self, input: &str) -> Result<String, FormatError> {
        let url = self.config.request_url(input)?;
        debug!("GET {url}");

        let response = reqwest::get(url).await.map_err(transport)?;
        let status = response.status();
        let response = response.error_for_status().map_err(|e| {
            warn!("translation endpoint answered {status}");
            transport(e)
        })?;
        response.text().await.map_err(transport)
    }
}

/// Percent-escape everything between whitespace runs, leaving the
/// whitespace itself for `encode_spaces`.
fn escape_reserved(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find(|c: char| !is_space(c)) {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        let end = rest.find(is_space).unwrap_or(rest.len());
        out.push_str(&urlencoding::encode(&rest[..end]));
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

fn transport(e: reqwest::Error) -> FormatError {
    FormatError::Transport(NAME, e)
}

/// Translate `input` into pirate speak with the default endpoint.  Blocks.
pub fn to_pirate_speak(input: &str) -> Result<String, FormatError> {
    PirateTranslator::default().translate(input)
}

/// Async counterpart of [`to_pirate_speak`].
pub async fn to_pirate_speak_async(input: &str) -> Result<String, FormatError> {
    PirateTranslator::default().translate_async(input).await
}
