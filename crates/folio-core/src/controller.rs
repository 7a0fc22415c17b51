#![forbid(unsafe_code)]

//! Presentation controller.
//!
//! [`Presentation`] owns every piece of mutable page state: the modal state,
//! the notice slot, the load-more timer, and the active filter. It reacts to
//! one input at a time and pushes the resulting changes to its [`Surface`].
//!
//! # Modal state machine
//!
//! ```text
//!            select(id)                     select(id2)
//!  Closed ─────────────▶ Open(id) ─────────────────────▶ Open(id2)
//!    ▲                      │
//!    └──────── dismiss ─────┘        (dismiss on Closed is a no-op)
//! ```
//!
//! Opening renders the view and locks page scrolling behind the modal.
//! Dismissing hides the modal and restores scrolling. There is no terminal
//! state.
//!
//! # Time
//!
//! The controller never reads a system clock. The host calls
//! [`Presentation::advance_time`] or [`Presentation::set_time`]; notice
//! transitions and the load-more completion fire when the clock passes their
//! deadline.

use core::time::Duration;

use crate::catalog::Catalog;
use crate::clock::DeterministicClock;
use crate::config::PresentationConfig;
use crate::contact::{ContactOutcome, MISSING_FIELDS_MESSAGE, SENT_MESSAGE};
use crate::download::{ArtifactKind, SaveRequest};
use crate::event::{DismissSource, ESCAPE_KEY, PageEvent};
use crate::filter::CategoryFilter;
use crate::notice::{Notice, NoticeId, NoticeSlot, NoticeTimings, NoticeTransition, Severity};
use crate::surface::Surface;
use crate::view::ProjectView;

/// Notice text once the load-more delay has elapsed.
pub const LOAD_MORE_MESSAGE: &str = "More projects will be added soon!";
/// Notice text when fallback is disabled and the id is unknown.
pub const UNKNOWN_PROJECT_MESSAGE: &str = "Project not found";

/// Open/closed state of the single project modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    /// Open for the id the caller selected.
    Open(String),
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Id the modal is open for.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Self::Open(id) => Some(id),
            Self::Closed => None,
        }
    }
}

/// State of the load-more button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LoadMore {
    #[default]
    Idle,
    Busy { until: Duration },
}

/// Event-driven controller for the portfolio page.
#[derive(Debug)]
pub struct Presentation<S: Surface> {
    surface: S,
    catalog: Catalog,
    config: PresentationConfig,
    clock: DeterministicClock,
    modal: ModalState,
    notices: NoticeSlot,
    load_more: LoadMore,
    filter: CategoryFilter,
}

impl<S: Surface> Presentation<S> {
    /// Controller over `surface` with default timings.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, PresentationConfig::default())
    }

    #[must_use]
    pub fn with_config(surface: S, config: PresentationConfig) -> Self {
        let notices = NoticeSlot::new(NoticeTimings::from(&config));
        Self {
            surface,
            catalog: Catalog::builtin(),
            config,
            clock: DeterministicClock::new(),
            modal: ModalState::Closed,
            notices,
            load_more: LoadMore::Idle,
            filter: CategoryFilter::All,
        }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to type into the contact form.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &PresentationConfig {
        &self.config
    }

    #[must_use]
    pub const fn modal_state(&self) -> &ModalState {
        &self.modal
    }

    /// The notice on screen, if any.
    #[must_use]
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    #[must_use]
    pub const fn active_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub fn is_loading_more(&self) -> bool {
        matches!(self.load_more, LoadMore::Busy { .. })
    }

    /// Current host clock reading.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Dispatch one page event.
    pub fn handle(&mut self, event: PageEvent) {
        match event {
            PageEvent::Select { id } => self.select_project(&id),
            PageEvent::Dismiss { source } => self.dismiss_from(source),
            PageEvent::Key { key } => {
                self.handle_key(&key);
            }
            PageEvent::Download { id, kind } => self.request_download(&id, kind),
            PageEvent::SubmitContact => {
                self.submit_contact();
            }
            PageEvent::Filter { category } => {
                self.apply_filter(&category);
            }
            PageEvent::CloseNotice { id } => {
                self.close_notice(id);
            }
            PageEvent::LoadMore => {
                self.load_more();
            }
            PageEvent::Time { now_ms } => self.set_time(Duration::from_millis(now_ms)),
        }
    }

    /// Open the modal for `id`, or re-render it in place if already open.
    ///
    /// Unknown ids resolve to the default record. With fallback disabled in
    /// the config they leave the state untouched and raise an error notice.
    /// A page without modal anchors makes this a no-op.
    pub fn select_project(&mut self, id: &str) {
        if !self.surface.has_modal() {
            crate::debug!(project = id, "modal anchors missing, select ignored");
            return;
        }
        let record = if self.config.fallback_on_unknown {
            self.catalog.lookup(id)
        } else {
            match self.catalog.get(id) {
                Some(record) => record,
                None => {
                    crate::warn!(project = id, "unknown project id");
                    self.notify(UNKNOWN_PROJECT_MESSAGE, Severity::Error);
                    return;
                }
            }
        };

        let view = ProjectView::build(id, record);
        self.surface.render_modal(&view);
        if !self.modal.is_open() {
            self.surface.set_modal_visible(true);
            self.surface.set_scroll_locked(true);
        }
        crate::debug!(project = id, resolved = record.id, "modal open");
        self.modal = ModalState::Open(id.to_owned());
    }

    /// Close the modal. Safe to call at any time.
    pub fn dismiss_modal(&mut self) {
        self.dismiss_from(DismissSource::Api);
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn dismiss_from(&mut self, source: DismissSource) {
        if !self.modal.is_open() {
            return;
        }
        self.surface.set_modal_visible(false);
        self.surface.set_scroll_locked(false);
        self.modal = ModalState::Closed;
        crate::debug!(?source, "modal closed");
    }

    /// Handle a page-level key press. Escape closes an open modal.
    ///
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && self.modal.is_open() {
            self.dismiss_from(DismissSource::Escape);
            true
        } else {
            false
        }
    }

    /// Open a save prompt for `kind` and confirm with a success notice.
    ///
    /// The project id is passed through as-is; it is not checked against the
    /// catalog.
    pub fn request_download(&mut self, id: &str, kind: ArtifactKind) {
        let request = SaveRequest::new(id, kind);
        crate::info!(project = id, file = request.filename, "download requested");
        self.surface.save_file(&request);
        self.notify(kind.started_message(), Severity::Success);
    }

    /// Validate and "send" the contact form.
    ///
    /// A rejected form is left untouched. No request leaves the page.
    pub fn submit_contact(&mut self) -> ContactOutcome {
        let Some(form) = self.surface.contact_form() else {
            crate::debug!("contact form missing, submit ignored");
            return ContactOutcome::NoForm;
        };
        match form.validate() {
            Ok(()) => {
                self.surface.clear_contact_form();
                self.notify(SENT_MESSAGE, Severity::Success);
                ContactOutcome::Sent
            }
            Err(err) => {
                crate::debug!(%err, "contact form rejected");
                self.notify(MISSING_FIELDS_MESSAGE, Severity::Error);
                ContactOutcome::Rejected(err)
            }
        }
    }

    /// Show only tiles tagged `category` (`"all"` shows every tile).
    ///
    /// Returns the number of visible tiles.
    pub fn apply_filter(&mut self, category: &str) -> usize {
        let filter = CategoryFilter::from_tag(category);
        self.surface.set_active_filter(filter.tag());
        let tags = self.surface.tile_categories();
        let visibility = filter.visibility(tags.iter().map(Option::as_deref));
        for (index, &visible) in visibility.iter().enumerate() {
            self.surface.set_tile_visible(index, visible);
        }
        let shown = visibility.iter().filter(|&&v| v).count();
        crate::debug!(%filter, shown, total = visibility.len(), "filter applied");
        self.filter = filter;
        shown
    }

    /// Show a notice, replacing any notice on screen.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NoticeId {
        let now = self.clock.now();
        let (replaced, notice) = self.notices.show(message, severity, now);
        if let Some(old) = replaced {
            self.surface.remove_notice(old);
        }
        self.surface.show_notice(notice);
        crate::trace!(id = notice.id.0, severity = severity.as_str(), "notice shown");
        notice.id
    }

    /// Close the notice `id` through its close button.
    ///
    /// Returns `false` if `id` is not the notice on screen.
    pub fn close_notice(&mut self, id: NoticeId) -> bool {
        if self.notices.dismiss(id) {
            self.surface.remove_notice(id);
            true
        } else {
            false
        }
    }

    /// Start the load-more placeholder. Ignored while already busy or when
    /// the page has no button.
    ///
    /// Returns `true` if loading started.
    pub fn load_more(&mut self) -> bool {
        if self.is_loading_more() || !self.surface.set_load_more_busy(true) {
            return false;
        }
        let until = self.clock.now().saturating_add(self.config.load_more_delay());
        self.load_more = LoadMore::Busy { until };
        true
    }

    /// Advance the host clock by `dt` and run due timers.
    pub fn advance_time(&mut self, dt: Duration) {
        self.clock.advance(dt);
        self.run_timers();
    }

    /// Set the host clock to `now` and run due timers.
    pub fn set_time(&mut self, now: Duration) {
        self.clock.set(now);
        self.run_timers();
    }

    fn run_timers(&mut self) {
        let now = self.clock.now();
        match self.notices.tick(now) {
            Some(NoticeTransition::Phase(id, phase)) => self.surface.set_notice_phase(id, phase),
            Some(NoticeTransition::Removed(id)) => self.surface.remove_notice(id),
            None => {}
        }
        if let LoadMore::Busy { until } = self.load_more {
            if now >= until {
                self.load_more = LoadMore::Idle;
                self.surface.set_load_more_busy(false);
                self.notify(LOAD_MORE_MESSAGE, Severity::Info);
            }
        }
    }
}
