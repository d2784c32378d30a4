use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use rig_core::entities::Build;

use crate::{ExportError, ensure_exportable};

/// Query parameter that carries the encoded build.
pub const SHARE_PARAM: &str = "build";

/// Encode `build` into a link under `base_url`.
///
/// The payload is the build's compact JSON, base64-encoded with the standard
/// alphabet, then percent-encoded.
///
/// # Errors
///
/// Fails the same way as [`ensure_exportable`], or with
/// [`ExportError::Json`] if the build cannot be serialized.
pub fn share_link(base_url: &str, build: &Build) -> Result<String, ExportError> {
    ensure_exportable(build)?;

    let json = serde_json::to_string(build)?;
    let payload = STANDARD.encode(json);
    let separator = if base_url.contains('?') { '&' } else { '?' };
    Ok(format!(
        "{base_url}{separator}{SHARE_PARAM}={}",
        urlencoding::encode(&payload)
    ))
}

/// Recover a build from a share link or from its bare payload.
///
/// # Errors
///
/// Returns [`ExportError::MissingPayload`] for an empty payload, then the
/// first decoding failure among percent-decoding, base64, UTF-8, and JSON.
pub fn decode_share_link(input: &str) -> Result<Build, ExportError> {
    let encoded = extract_payload(input.trim());
    if encoded.is_empty() {
        return Err(ExportError::MissingPayload);
    }

    let payload = urlencoding::decode(encoded)?;
    let bytes = STANDARD.decode(payload.as_bytes())?;
    let json = String::from_utf8(bytes)?;
    let build = serde_json::from_str(&json)?;

    tracing::debug!(payload_len = encoded.len(), "decoded share link");
    Ok(build)
}

/// The `build` query value when `input` looks like a URL, else `input` itself.
fn extract_payload(input: &str) -> &str {
    let Some((_, query)) = input.split_once('?') else {
        return input;
    };
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_PARAM)
        .map_or("", |(_, value)| value)
}
