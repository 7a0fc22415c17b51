#![forbid(unsafe_code)]

//! Page input events.
//!
//! The host translates DOM events into [`PageEvent`] values, either directly
//! or as tagged JSON:
//!
//! ```json
//! {"type": "select", "id": "music"}
//! {"type": "dismiss", "source": "overlay"}
//! {"type": "key", "key": "Escape"}
//! {"type": "download", "id": "music", "kind": "pdf"}
//! {"type": "filter", "category": "all"}
//! ```

use serde::Deserialize;

use crate::download::ArtifactKind;
use crate::error::FolioError;
use crate::notice::NoticeId;

/// DOM `KeyboardEvent.key` value that closes the modal.
pub const ESCAPE_KEY: &str = "Escape";

/// Where a modal dismissal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissSource {
    /// The modal's close button.
    #[default]
    CloseButton,
    /// A click on the dimmed background.
    Overlay,
    /// The Escape key.
    Escape,
    /// A direct API call.
    Api,
}

/// One user or host event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// A project tile was activated.
    Select { id: String },
    /// The modal close button or overlay was activated.
    Dismiss {
        #[serde(default)]
        source: DismissSource,
    },
    /// A key was pressed anywhere on the page.
    Key { key: String },
    /// A download button in the modal was activated.
    Download { id: String, kind: ArtifactKind },
    /// The contact form was submitted.
    SubmitContact,
    /// A category filter button was activated.
    Filter { category: String },
    /// A notice's close button was activated.
    CloseNotice { id: NoticeId },
    /// The load-more button was activated.
    LoadMore,
    /// Host clock reading in milliseconds.
    Time { now_ms: u64 },
}

impl PageEvent {
    /// Decode a tagged JSON event.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        serde_json::from_str(json).map_err(|err| FolioError::InvalidEvent(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_select() {
        let event = PageEvent::from_json(r#"{"type":"select","id":"music"}"#)
            .expect("select should decode");
        assert_eq!(event, PageEvent::Select { id: "music".into() });
    }

    #[test]
    fn decode_dismiss_defaults_to_close_button() {
        let event = PageEvent::from_json(r#"{"type":"dismiss"}"#).expect("dismiss should decode");
        assert_eq!(
            event,
            PageEvent::Dismiss {
                source: DismissSource::CloseButton
            }
        );
    }

    #[test]
    fn decode_download_kind() {
        let event = PageEvent::from_json(r#"{"type":"download","id":"music","kind":"apk"}"#)
            .expect("download should decode");
        assert_eq!(
            event,
            PageEvent::Download {
                id: "music".into(),
                kind: ArtifactKind::Apk
            }
        );
    }

    #[test]
    fn decode_unit_variants_and_notice_ids() {
        assert_eq!(
            PageEvent::from_json(r#"{"type":"submit_contact"}"#),
            Ok(PageEvent::SubmitContact)
        );
        assert_eq!(
            PageEvent::from_json(r#"{"type":"close_notice","id":7}"#),
            Ok(PageEvent::CloseNotice { id: NoticeId(7) })
        );
    }

    #[test]
    fn unknown_kind_is_invalid_event() {
        let err = PageEvent::from_json(r#"{"type":"download","id":"music","kind":"zip"}"#)
            .expect_err("zip is not an artifact");
        assert!(matches!(err, FolioError::InvalidEvent(_)));
    }

    #[test]
    fn unknown_type_is_invalid_event() {
        assert!(PageEvent::from_json(r#"{"type":"scroll"}"#).is_err());
        assert!(PageEvent::from_json("not json").is_err());
    }
}
