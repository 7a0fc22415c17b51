#![forbid(unsafe_code)]

//! Page anchors and generated markup.
//!
//! Everything here is plain string work so it compiles and tests on native
//! targets; the DOM glue in `dom.rs` only moves these strings into elements.

use core::fmt::Write as _;

use folio_core::notice::{Notice, NoticeId, NoticePhase, Severity};
use folio_core::view::html_escape_into;

/// Modal container id.
pub const MODAL_ID: &str = "project-modal";
/// Modal title element id.
pub const MODAL_TITLE_ID: &str = "modal-title";
/// Modal body element id.
pub const MODAL_BODY_ID: &str = "modal-body";
/// Class toggled on the modal container while it is closed.
pub const HIDDEN_CLASS: &str = "hidden";

/// Contact form id.
pub const CONTACT_FORM_ID: &str = "contact-form";

/// Project tile selector.
pub const TILE_SELECTOR: &str = ".project-card";
/// Filter button selector.
pub const FILTER_SELECTOR: &str = ".category-filter";
/// Category attribute on tiles and filter buttons.
pub const CATEGORY_ATTR: &str = "data-category";
/// Class marking the active filter button.
pub const ACTIVE_CLASS: &str = "active";
/// Animation applied to a tile when it becomes visible.
pub const TILE_ENTER_ANIMATION: &str = "fadeInUp 0.6s ease-out";

/// Load-more button id.
pub const LOAD_MORE_ID: &str = "load-more-btn";

/// Attribute carrying a notice's numeric id on its element.
pub const NOTICE_ID_ATTR: &str = "data-notice-id";
/// Attribute carrying a notice's numeric id on its close button.
pub const NOTICE_CLOSE_ATTR: &str = "data-notice-close";

const NOTICE_BASE_CLASS: &str = "notification fixed top-20 right-4 z-50 p-4 rounded-lg shadow-lg transform translate-x-full transition-transform duration-300";

/// Full class list of a notice element.
#[must_use]
pub fn notice_class(severity: Severity) -> String {
    format!("{NOTICE_BASE_CLASS} {}", severity.background_class())
}

/// Inner markup of a notice element: icon, escaped message, close button.
#[must_use]
pub fn notice_inner_html(notice: &Notice) -> String {
    let mut out = String::with_capacity(256);
    out.push_str("<div class=\"flex items-center\"><i class=\"fas ");
    out.push_str(notice.severity.icon_class());
    out.push_str(" mr-2\"></i><span>");
    html_escape_into(&mut out, &notice.message);
    let _ = write!(
        out,
        "</span><button {NOTICE_CLOSE_ATTR}=\"{}\"",
        notice.id.0
    );
    out.push_str(" class=\"ml-4 text-white hover:text-gray-200\"><i class=\"fas fa-times\"></i></button></div>");
    out
}

/// CSS selector for the element of notice `id`.
#[must_use]
pub fn notice_selector(id: NoticeId) -> String {
    format!("[{NOTICE_ID_ATTR}=\"{}\"]", id.0)
}

/// Inline `transform` for a notice in `phase`.
///
/// Only a visible notice is on screen; the CSS transition slides it in and out.
#[must_use]
pub const fn notice_transform(phase: NoticePhase) -> &'static str {
    match phase {
        NoticePhase::Visible => "translateX(0)",
        NoticePhase::Entering | NoticePhase::Exiting | NoticePhase::Hidden => "translateX(100%)",
    }
}

/// Label markup of the load-more button.
#[must_use]
pub const fn load_more_html(busy: bool) -> &'static str {
    if busy {
        "<i class=\"fas fa-spinner fa-spin mr-2\"></i>Loading..."
    } else {
        "<i class=\"fas fa-plus mr-2\"></i>Load More Projects"
    }
}

/// `display` value of a project tile.
#[must_use]
pub const fn tile_display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// Body `overflow` value while scrolling is locked or restored.
#[must_use]
pub const fn body_overflow(locked: bool) -> &'static str {
    if locked { "hidden" } else { "auto" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;
    use folio_core::notice::NoticeSlot;

    fn shown(message: &str, severity: Severity) -> Notice {
        let mut slot = NoticeSlot::default();
        let (_, notice) = slot.show(message, severity, Duration::ZERO);
        notice.clone()
    }

    #[test]
    fn notice_class_carries_severity_background() {
        assert!(notice_class(Severity::Error).ends_with(" bg-red-600"));
        assert!(notice_class(Severity::Info).starts_with("notification "));
    }

    #[test]
    fn notice_markup_escapes_message() {
        let notice = shown("<b>hi</b>", Severity::Success);
        let html = notice_inner_html(&notice);
        assert!(html.contains("fa-check"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn close_button_names_its_notice() {
        let notice = shown("saved", Severity::Info);
        let html = notice_inner_html(&notice);
        assert!(html.contains(&format!("{NOTICE_CLOSE_ATTR}=\"{}\"", notice.id.0)));
        assert_eq!(
            notice_selector(notice.id),
            format!("[data-notice-id=\"{}\"]", notice.id.0)
        );
    }

    #[test]
    fn only_visible_notices_sit_on_screen() {
        assert_eq!(notice_transform(NoticePhase::Visible), "translateX(0)");
        assert_eq!(notice_transform(NoticePhase::Entering), "translateX(100%)");
        assert_eq!(notice_transform(NoticePhase::Exiting), "translateX(100%)");
    }

    #[test]
    fn style_values() {
        assert_eq!(tile_display(false), "none");
        assert_eq!(body_overflow(true), "hidden");
        assert!(load_more_html(true).contains("Loading..."));
        assert!(load_more_html(false).contains("Load More Projects"));
    }
}
