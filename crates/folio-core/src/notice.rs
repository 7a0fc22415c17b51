#![forbid(unsafe_code)]

//! Transient notices.
//!
//! A notice is a non-blocking message in the page corner. The page has room
//! for exactly one: showing a new notice discards the current one on the
//! spot. Each notice walks through Entering → Visible → Exiting → Hidden on
//! the host clock and is removed once Hidden, unless its close button
//! removes it first.
//!
//! # Invariants
//!
//! 1. **Single slot**: [`NoticeSlot::current`] is `None` or one notice.
//! 2. **Monotonic ids**: every shown notice gets a fresh [`NoticeId`], so a
//!    late close or expiry aimed at a superseded notice never touches the
//!    one on screen.
//! 3. **Phase order**: phases only move forward.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::PresentationConfig;

/// Unique identifier for a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoticeId(pub u64);

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notice-{}", self.0)
    }
}

/// Visual treatment of a notice. Has no other meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Icon class shown before the message.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fa-check",
            Self::Error => "fa-exclamation-triangle",
            Self::Info => "fa-info-circle",
        }
    }

    /// Background class of the notice box.
    #[must_use]
    pub const fn background_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-600",
            Self::Error => "bg-red-600",
            Self::Info => "bg-blue-600",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl FromStr for Severity {
    type Err = core::convert::Infallible;

    /// Unrecognised names get the info treatment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        })
    }
}

/// Lifecycle phase of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticePhase {
    /// Sliding in from the right edge.
    #[default]
    Entering,
    /// Fully on screen.
    Visible,
    /// Sliding out after the display time ran out.
    Exiting,
    /// Gone; the element is removed.
    Hidden,
}

/// Timings driving the phase transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTimings {
    pub enter_delay: Duration,
    /// Time from showing until the exit starts.
    pub duration: Duration,
    pub exit: Duration,
}

impl Default for NoticeTimings {
    fn default() -> Self {
        Self::from(&PresentationConfig::default())
    }
}

impl From<&PresentationConfig> for NoticeTimings {
    fn from(config: &PresentationConfig) -> Self {
        Self {
            enter_delay: config.notice_enter_delay(),
            duration: config.notice_duration(),
            exit: config.notice_exit(),
        }
    }
}

impl NoticeTimings {
    /// Phase of a notice that has been up for `elapsed`.
    #[must_use]
    pub fn phase_at(&self, elapsed: Duration) -> NoticePhase {
        if elapsed < self.enter_delay.min(self.duration) {
            NoticePhase::Entering
        } else if elapsed < self.duration {
            NoticePhase::Visible
        } else if elapsed < self.duration.saturating_add(self.exit) {
            NoticePhase::Exiting
        } else {
            NoticePhase::Hidden
        }
    }
}

/// A notice as handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub severity: Severity,
    /// Host clock reading when the notice was shown.
    #[serde(skip)]
    pub shown_at: Duration,
    pub phase: NoticePhase,
}

/// Phase change reported by [`NoticeSlot::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTransition {
    /// The notice moved to a new on-screen phase.
    Phase(NoticeId, NoticePhase),
    /// The notice reached Hidden and left the slot.
    Removed(NoticeId),
}

/// The page's single notice slot.
#[derive(Debug, Clone)]
pub struct NoticeSlot {
    current: Option<Notice>,
    next_id: u64,
    timings: NoticeTimings,
}

impl Default for NoticeSlot {
    fn default() -> Self {
        Self::new(NoticeTimings::default())
    }
}

impl NoticeSlot {
    #[must_use]
    pub fn new(timings: NoticeTimings) -> Self {
        Self {
            current: None,
            next_id: 1,
            timings,
        }
    }

    /// The notice on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Put a new notice in the slot.
    ///
    /// Returns the id of the notice it replaced, if one was up, together with
    /// the new notice.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: Duration,
    ) -> (Option<NoticeId>, &Notice) {
        let id = NoticeId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let replaced = self.current.take().map(|notice| notice.id);
        let notice: &Notice = self.current.insert(Notice {
            id,
            message: message.into(),
            severity,
            shown_at: now,
            phase: self.timings.phase_at(Duration::ZERO),
        });
        (replaced, notice)
    }

    /// Remove the notice with `id` through its close button.
    ///
    /// Returns `false` when `id` is not the notice on screen.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Advance the current notice to the phase matching `now`.
    pub fn tick(&mut self, now: Duration) -> Option<NoticeTransition> {
        let notice = self.current.as_mut()?;
        let phase = self
            .timings
            .phase_at(now.saturating_sub(notice.shown_at))
            .max(notice.phase);
        let id = notice.id;
        if phase == NoticePhase::Hidden {
            self.current = None;
            return Some(NoticeTransition::Removed(id));
        }
        if phase == notice.phase {
            return None;
        }
        notice.phase = phase;
        Some(NoticeTransition::Phase(id, phase))
    }
}
