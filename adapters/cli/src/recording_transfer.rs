//! Single-line encoding of a recording for clipboard-style transfer.
//!
//! The wire shape is `rewind:v1:<level>:<base64 json>`: a readable header
//! carrying the level id, then the JSON-serialized recording. Decoding
//! validates every segment and cross-checks the header level against the
//! payload.

use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use maze_rewind_core::Recording;

const TRANSFER_DOMAIN: &str = "rewind";
const TRANSFER_VERSION: &str = "v1";

/// Identifier prefix emitted before the level id and payload.
pub(crate) const TRANSFER_HEADER: &str = "rewind:v1";
const FIELD_DELIMITER: char = ':';

/// Encodes a recording into a single transfer line.
pub(crate) fn encode(recording: &Recording) -> String {
    let json = serde_json::to_vec(recording).expect("recording serialization never fails");
    let encoded = STANDARD_NO_PAD.encode(json);
    format!("{TRANSFER_HEADER}:{}:{encoded}", recording.level)
}

/// Decodes a recording from its transfer line.
pub(crate) fn decode(value: &str) -> Result<Recording, RecordingTransferError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecordingTransferError::EmptyPayload);
    }

    let mut parts = trimmed.splitn(4, FIELD_DELIMITER);
    let domain = parts.next().ok_or(RecordingTransferError::MissingPrefix)?;
    let version = parts.next().ok_or(RecordingTransferError::MissingVersion)?;
    let level = parts.next().ok_or(RecordingTransferError::MissingLevel)?;
    let payload = parts.next().ok_or(RecordingTransferError::MissingPayload)?;

    if domain != TRANSFER_DOMAIN {
        return Err(RecordingTransferError::InvalidPrefix(domain.to_owned()));
    }
    if version != TRANSFER_VERSION {
        return Err(RecordingTransferError::UnsupportedVersion(
            version.to_owned(),
        ));
    }
    let level: i32 = level
        .trim()
        .parse()
        .map_err(|_| RecordingTransferError::InvalidLevel(level.to_owned()))?;

    let bytes = STANDARD_NO_PAD
        .decode(payload.as_bytes())
        .map_err(RecordingTransferError::InvalidEncoding)?;
    let recording: Recording =
        serde_json::from_slice(&bytes).map_err(RecordingTransferError::InvalidPayload)?;

    if recording.level != level {
        return Err(RecordingTransferError::LevelMismatch {
            header: level,
            payload: recording.level,
        });
    }
    Ok(recording)
}

/// Errors that can occur while decoding transfer strings.
#[derive(Debug)]
pub(crate) enum RecordingTransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// The prefix segment was missing from the transfer string.
    MissingPrefix,
    /// The transfer string did not contain a version segment.
    MissingVersion,
    /// The transfer string did not include the level id.
    MissingLevel,
    /// The transfer string did not include the payload segment.
    MissingPayload,
    /// The transfer string used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The transfer string used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The level id could not be parsed from the transfer string.
    InvalidLevel(String),
    /// The header level disagrees with the level the payload carries.
    LevelMismatch {
        /// Level named in the readable header.
        header: i32,
        /// Level carried by the decoded recording.
        payload: i32,
    },
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The decoded payload could not be deserialised.
    InvalidPayload(serde_json::Error),
}

impl fmt::Display for RecordingTransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "transfer string was empty"),
            Self::MissingPrefix => write!(f, "transfer string is missing the prefix"),
            Self::MissingVersion => write!(f, "transfer string is missing the version"),
            Self::MissingLevel => write!(f, "transfer string is missing the level id"),
            Self::MissingPayload => write!(f, "transfer string is missing the payload"),
            Self::InvalidPrefix(prefix) => {
                write!(f, "transfer prefix '{prefix}' is not supported")
            }
            Self::UnsupportedVersion(version) => {
                write!(f, "transfer version '{version}' is not supported")
            }
            Self::InvalidLevel(level) => write!(f, "could not parse level id '{level}'"),
            Self::LevelMismatch { header, payload } => write!(
                f,
                "transfer header names level {header} but the recording is for level {payload}"
            ),
            Self::InvalidEncoding(error) => {
                write!(f, "could not decode transfer payload: {error}")
            }
            Self::InvalidPayload(error) => {
                write!(f, "could not parse transfer payload: {error}")
            }
        }
    }
}

impl Error for RecordingTransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(error) => Some(error),
            Self::InvalidPayload(error) => Some(error),
            _ => None,
        }
    }
}
