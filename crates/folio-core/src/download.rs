#![forbid(unsafe_code)]

//! Download stubs attached to the project modal.
//!
//! Neither artifact exists. A request only asks the host to open a save
//! prompt with a fixed filename; no bytes are fetched or generated.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Artifact offered by a project's download buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Project documentation.
    Pdf,
    /// Android application package.
    Apk,
}

impl ArtifactKind {
    /// Both kinds, in the order their buttons appear.
    pub const ALL: [Self; 2] = [Self::Pdf, Self::Apk];

    /// Lowercase tag used in markup bindings.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Apk => "apk",
        }
    }

    /// Filename offered in the save prompt. Independent of the project.
    #[must_use]
    pub const fn filename(self) -> &'static str {
        match self {
            Self::Pdf => "documentation.pdf",
            Self::Apk => "app.apk",
        }
    }

    /// Button label in the modal.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pdf => "Download Documentation",
            Self::Apk => "Download APK",
        }
    }

    /// Text of the success notice emitted once the save prompt is triggered.
    #[must_use]
    pub fn started_message(self) -> String {
        format!("{} download started!", self.tag().to_ascii_uppercase())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ArtifactKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(Self::Pdf),
            "apk" => Ok(Self::Apk),
            other => Err(FolioError::UnknownArtifact(other.to_owned())),
        }
    }
}

/// A save prompt the host should open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    /// Project whose button was pressed.
    pub project_id: String,
    pub kind: ArtifactKind,
    /// Suggested filename for the prompt.
    pub filename: &'static str,
}

impl SaveRequest {
    #[must_use]
    pub fn new(project_id: impl Into<String>, kind: ArtifactKind) -> Self {
        Self {
            project_id: project_id.into(),
            kind,
            filename: kind.filename(),
        }
    }
}
