#![forbid(unsafe_code)]

//! Host capability interface.
//!
//! [`Surface`] is everything the controller needs from the page: a modal
//! container, the document scroll policy, a notice area, a save prompt, the
//! contact form, the project tiles, and the load-more button. The browser
//! implementation lives in `folio-web`; [`MemorySurface`] keeps the same
//! state in plain fields for tests and headless hosts.
//!
//! Methods that depend on an optional page anchor report whether the anchor
//! exists. The controller skips the dependent work when it does not.

use crate::catalog::Catalog;
use crate::contact::ContactForm;
use crate::download::SaveRequest;
use crate::notice::{Notice, NoticeId, NoticePhase, Severity};
use crate::view::ProjectView;

/// Page operations the presentation controller relies on.
pub trait Surface {
    /// Whether the modal container, title, and body anchors exist.
    fn has_modal(&self) -> bool;

    /// Replace the modal title and body with `view`.
    fn render_modal(&mut self, view: &ProjectView);

    /// Show or hide the modal container.
    fn set_modal_visible(&mut self, visible: bool);

    /// Lock (or restore) scrolling of the page behind the modal.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Insert the element for a freshly shown notice.
    fn show_notice(&mut self, notice: &Notice);

    /// Move an on-screen notice to `phase`.
    fn set_notice_phase(&mut self, id: NoticeId, phase: NoticePhase);

    /// Remove a notice element. Unknown ids are ignored.
    fn remove_notice(&mut self, id: NoticeId);

    /// Open a save prompt for an empty file.
    fn save_file(&mut self, request: &SaveRequest);

    /// Current contact form values, or `None` if the page has no form.
    fn contact_form(&self) -> Option<ContactForm>;

    /// Reset every contact form input.
    fn clear_contact_form(&mut self);

    /// Category tag of each project tile, in page order.
    fn tile_categories(&self) -> Vec<Option<String>>;

    /// Show or hide the tile at `index`.
    fn set_tile_visible(&mut self, index: usize, visible: bool);

    /// Mark the filter button with `tag` active and every other one inactive.
    fn set_active_filter(&mut self, tag: &str);

    /// Switch the load-more button between busy and idle. Returns `false` if
    /// the page has no such button.
    fn set_load_more_busy(&mut self, busy: bool) -> bool;
}

/// One project tile on a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTile {
    pub category: Option<String>,
    pub visible: bool,
}

/// A notice record kept by [`MemorySurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownNotice {
    pub id: NoticeId,
    pub message: String,
    pub severity: Severity,
    pub phase: NoticePhase,
}

/// In-memory [`Surface`].
///
/// Every field mirrors a piece of page state; tests inspect them directly.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    /// Whether the modal anchors exist.
    pub modal_present: bool,
    pub modal_visible: bool,
    /// Title as last rendered.
    pub modal_title: Option<String>,
    /// Body markup as last rendered.
    pub modal_body: Option<String>,
    /// Structured view as last rendered.
    pub last_view: Option<ProjectView>,
    /// Number of modal renders.
    pub renders: usize,
    pub scroll_locked: bool,
    /// Notice elements currently in the page.
    pub notices: Vec<ShownNotice>,
    /// Every notice ever shown, oldest first.
    pub notice_log: Vec<ShownNotice>,
    /// Save prompts opened, oldest first.
    pub saves: Vec<SaveRequest>,
    /// Contact form inputs; `None` when the page has no form.
    pub contact: Option<ContactForm>,
    pub tiles: Vec<MemoryTile>,
    /// Tag of the active filter button.
    pub active_filter: Option<String>,
    /// Load-more button busy flag; `None` when the page has no button.
    pub load_more_busy: Option<bool>,
}

impl MemorySurface {
    /// A complete page: modal, empty contact form, one tile per catalog
    /// record tagged with its category, and a load-more button.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modal_present: true,
            contact: Some(ContactForm::default()),
            tiles: Catalog::builtin()
                .iter()
                .map(|record| MemoryTile {
                    category: Some(record.category.to_owned()),
                    visible: true,
                })
                .collect(),
            active_filter: Some(crate::filter::ALL_CATEGORIES.to_owned()),
            load_more_busy: Some(false),
            ..Self::default()
        }
    }

    /// A page with none of the optional anchors.
    #[must_use]
    pub fn bare() -> Self {
        Self::default()
    }

    /// Replace the tiles with ones carrying `tags`.
    #[must_use]
    pub fn with_tiles<'a>(mut self, tags: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        self.tiles = tags
            .into_iter()
            .map(|tag| MemoryTile {
                category: tag.map(str::to_owned),
                visible: true,
            })
            .collect();
        self
    }

    /// Fill the contact form (creating it if absent).
    pub fn fill_contact(&mut self, form: ContactForm) {
        self.contact = Some(form);
    }

    /// Tile visibility, in page order.
    #[must_use]
    pub fn visible_tiles(&self) -> Vec<bool> {
        self.tiles.iter().map(|tile| tile.visible).collect()
    }

    /// Most recently shown notice.
    #[must_use]
    pub fn last_notice(&self) -> Option<&ShownNotice> {
        self.notice_log.last()
    }
}

impl Surface for MemorySurface {
    fn has_modal(&self) -> bool {
        self.modal_present
    }

    fn render_modal(&mut self, view: &ProjectView) {
        if !self.modal_present {
            return;
        }
        self.modal_title = Some(view.title.clone());
        self.modal_body = Some(view.body_html());
        self.last_view = Some(view.clone());
        self.renders += 1;
    }

    fn set_modal_visible(&mut self, visible: bool) {
        if self.modal_present {
            self.modal_visible = visible;
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn show_notice(&mut self, notice: &Notice) {
        let shown = ShownNotice {
            id: notice.id,
            message: notice.message.clone(),
            severity: notice.severity,
            phase: notice.phase,
        };
        self.notices.push(shown.clone());
        self.notice_log.push(shown);
    }

    fn set_notice_phase(&mut self, id: NoticeId, phase: NoticePhase) {
        if let Some(shown) = self.notices.iter_mut().find(|n| n.id == id) {
            shown.phase = phase;
        }
    }

    fn remove_notice(&mut self, id: NoticeId) {
        self.notices.retain(|n| n.id != id);
    }

    fn save_file(&mut self, request: &SaveRequest) {
        self.saves.push(request.clone());
    }

    fn contact_form(&self) -> Option<ContactForm> {
        self.contact.clone()
    }

    fn clear_contact_form(&mut self) {
        if let Some(form) = self.contact.as_mut() {
            *form = ContactForm::default();
        }
    }

    fn tile_categories(&self) -> Vec<Option<String>> {
        self.tiles.iter().map(|tile| tile.category.clone()).collect()
    }

    fn set_tile_visible(&mut self, index: usize, visible: bool) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.visible = visible;
        }
    }

    fn set_active_filter(&mut self, tag: &str) {
        self.active_filter = Some(tag.to_owned());
    }

    fn set_load_more_busy(&mut self, busy: bool) -> bool {
        match self.load_more_busy.as_mut() {
            Some(state) => {
                *state = busy;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::ArtifactKind;

    #[test]
    fn new_page_has_one_tile_per_record() {
        let surface = MemorySurface::new();
        assert_eq!(surface.tiles.len(), Catalog::builtin().len());
        assert!(surface.visible_tiles().iter().all(|&v| v));
        assert!(surface.has_modal());
    }

    #[test]
    fn bare_page_ignores_modal_calls() {
        let mut surface = MemorySurface::bare();
        let view = ProjectView::from_record(Catalog::builtin().default_record());
        surface.render_modal(&view);
        surface.set_modal_visible(true);
        assert_eq!(surface.renders, 0);
        assert!(!surface.modal_visible);
        assert!(!surface.set_load_more_busy(true));
        assert!(surface.contact_form().is_none());
    }

    #[test]
    fn remove_unknown_notice_is_ignored() {
        let mut surface = MemorySurface::new();
        surface.remove_notice(NoticeId(42));
        assert!(surface.notices.is_empty());
    }

    #[test]
    fn saves_are_recorded_in_order() {
        let mut surface = MemorySurface::new();
        surface.save_file(&SaveRequest::new("a", ArtifactKind::Pdf));
        surface.save_file(&SaveRequest::new("b", ArtifactKind::Apk));
        let names: Vec<_> = surface.saves.iter().map(|s| s.filename).collect();
        assert_eq!(names, ["documentation.pdf", "app.apk"]);
    }
}
