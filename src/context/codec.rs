//! Share token encoding.
//!
//! A share token is the card state serialized as JSON, zlib-compressed and
//! encoded with the URL-safe base64 alphabet without padding. The token
//! travels as the `state` query parameter of the share URL.

use std::io::{Read, Write};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use thiserror::Error;
use url::Url;

use super::state::BingoState;

/// Query parameter carrying the share token.
pub const STATE_PARAM: &str = "state";

/// Upper bound on the decompressed payload size.
const MAX_PAYLOAD_BYTES: u64 = 1 << 20;

/// Errors produced while encoding a state into a token.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to compress state: {0}")]
    Compress(#[from] std::io::Error),
}

/// Errors produced while decoding a token back into a state.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload failed to decompress: {0}")]
    Decompress(std::io::Error),
    #[error("token payload is too large")]
    TooLarge,
    #[error("token payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("token payload is not a card: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Errors produced while building a share URL.
#[derive(Debug, Error)]
pub enum ShareUrlError {
    #[error("invalid base URL '{base}': {source}")]
    BaseUrl {
        base: String,
        source: url::ParseError,
    },
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Encode a state into a share token.
pub fn encode(state: &BingoState) -> Result<String, EncodeError> {
    let json = serde_json::to_vec(state)?;
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;
    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

/// Decode a share token into a state.
///
/// Tokens written with the standard base64 alphabet, with `=` padding, or
/// with `+` turned into a space by a query-string decoder are accepted too.
pub fn decode(token: &str) -> Result<BingoState, DecodeError> {
    let normalized = normalize_alphabet(token);
    let compressed = URL_SAFE_NO_PAD.decode(normalized.as_bytes())?;

    let mut json = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .take(MAX_PAYLOAD_BYTES + 1)
        .read_to_end(&mut json)
        .map_err(DecodeError::Decompress)?;
    if json.len() as u64 > MAX_PAYLOAD_BYTES {
        return Err(DecodeError::TooLarge);
    }

    let json = String::from_utf8(json)?;
    Ok(serde_json::from_str(&json)?)
}

/// Resolve the initial state from an optional token.
///
/// A missing token yields the default card. An undecodable token is logged
/// and also yields the default card, so the two cases look the same.
pub fn load(token: Option<&str>) -> BingoState {
    let Some(token) = token else {
        return BingoState::default();
    };

    match decode(token) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring undecodable share token");
            BingoState::default()
        }
    }
}

/// Build the share URL for `state`: `base_url` with its `state` query
/// parameter set to the encoded token. Other query parameters are kept.
pub fn share_url(base_url: &str, state: &BingoState) -> Result<Url, ShareUrlError> {
    let mut url = Url::parse(base_url).map_err(|source| ShareUrlError::BaseUrl {
        base: base_url.to_string(),
        source,
    })?;
    let token = encode(state)?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != STATE_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(STATE_PARAM, &token);

    Ok(url)
}

/// Extract a share token from user input.
///
/// Absolute URLs yield their `state` query parameter (or `None` when it is
/// absent). Input with a `?` but no scheme, such as `bingo.example/?state=..`,
/// is read as an `http` URL. Anything else that is not blank is taken as a
/// bare token.
pub fn token_from_input(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let url = Url::parse(input).or_else(|e| {
        if input.contains('?') {
            Url::parse(&format!("http://{}", input))
        } else {
            Err(e)
        }
    });

    match url {
        Ok(url) => {
            tracing::debug!(%url, "reading share token from link");
            url.query_pairs()
                .find(|(k, _)| k == STATE_PARAM)
                .map(|(_, v)| v.into_owned())
                .filter(|v| !v.is_empty())
        }
        Err(_) => {
            tracing::debug!("reading input as a bare share token");
            Some(input.to_string())
        }
    }
}

fn normalize_alphabet(token: &str) -> String {
    token
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            // A form decoder reads `+` as a space.
            '+' | ' ' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}
