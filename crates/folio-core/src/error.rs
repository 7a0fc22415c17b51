#![forbid(unsafe_code)]

//! Error type for the parsing boundaries of the presentation layer.
//!
//! Page handlers never return errors. Errors only surface where host input is
//! decoded (artifact tags, JSON events, config).

use core::fmt;

/// Errors raised while decoding host input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// A download was requested for an artifact tag other than `pdf`/`apk`.
    UnknownArtifact(String),
    /// A host event could not be decoded.
    InvalidEvent(String),
    /// Host-supplied configuration could not be decoded.
    InvalidConfig(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArtifact(tag) => write!(f, "unknown artifact type: {tag:?}"),
            Self::InvalidEvent(msg) => write!(f, "invalid event: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for FolioError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_tag() {
        let err = FolioError::UnknownArtifact("zip".into());
        assert_eq!(err.to_string(), "unknown artifact type: \"zip\"");
    }

    #[test]
    fn display_carries_decoder_message() {
        let err = FolioError::InvalidEvent("missing field `id`".into());
        assert!(err.to_string().contains("missing field `id`"));
    }
}
