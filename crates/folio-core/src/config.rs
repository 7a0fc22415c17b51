#![forbid(unsafe_code)]

//! Presentation timing and policy knobs.
//!
//! The page host may hand a JSON object to [`PresentationConfig::from_json`];
//! every field is optional and falls back to [`PresentationConfig::default`].
//!
//! ```json
//! { "notice_duration_ms": 5000, "fallback_on_unknown": true }
//! ```

use core::time::Duration;

use serde::Deserialize;

use crate::error::FolioError;

/// Auto-dismiss delay for notices.
pub const NOTICE_DURATION_MS: u64 = 5_000;
/// Delay before a fresh notice slides in.
pub const NOTICE_ENTER_DELAY_MS: u64 = 100;
/// Slide-out time after a notice expires.
pub const NOTICE_EXIT_MS: u64 = 300;
/// Simulated fetch time for the load-more button.
pub const LOAD_MORE_DELAY_MS: u64 = 2_000;

/// Configuration for a [`crate::Presentation`] controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// How long a notice stays up before it starts exiting.
    pub notice_duration_ms: u64,
    /// Delay between showing a notice and its entrance completing.
    pub notice_enter_delay_ms: u64,
    /// Length of the exit transition before the notice is removed.
    pub notice_exit_ms: u64,
    /// Time the load-more button stays busy.
    pub load_more_delay_ms: u64,
    /// Resolve unknown project ids to the default record instead of refusing
    /// to open the modal.
    pub fallback_on_unknown: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: NOTICE_DURATION_MS,
            notice_enter_delay_ms: NOTICE_ENTER_DELAY_MS,
            notice_exit_ms: NOTICE_EXIT_MS,
            load_more_delay_ms: LOAD_MORE_DELAY_MS,
            fallback_on_unknown: true,
        }
    }
}

impl PresentationConfig {
    /// Decode a (possibly partial) JSON object.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        serde_json::from_str(json).map_err(|err| FolioError::InvalidConfig(err.to_string()))
    }

    /// Set the notice auto-dismiss delay.
    #[must_use]
    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration_ms = duration_ms(duration);
        self
    }

    /// Set the load-more busy time.
    #[must_use]
    pub fn with_load_more_delay(mut self, delay: Duration) -> Self {
        self.load_more_delay_ms = duration_ms(delay);
        self
    }

    /// Toggle fallback-to-default for unknown project ids.
    #[must_use]
    pub fn with_fallback_on_unknown(mut self, enabled: bool) -> Self {
        self.fallback_on_unknown = enabled;
        self
    }

    /// Disable entrance and exit transitions.
    #[must_use]
    pub fn without_transitions(mut self) -> Self {
        self.notice_enter_delay_ms = 0;
        self.notice_exit_ms = 0;
        self
    }

    #[must_use]
    pub const fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    #[must_use]
    pub const fn notice_enter_delay(&self) -> Duration {
        Duration::from_millis(self.notice_enter_delay_ms)
    }

    #[must_use]
    pub const fn notice_exit(&self) -> Duration {
        Duration::from_millis(self.notice_exit_ms)
    }

    #[must_use]
    pub const fn load_more_delay(&self) -> Duration {
        Duration::from_millis(self.load_more_delay_ms)
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
