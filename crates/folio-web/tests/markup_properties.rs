//! Property tests for generated page markup.
//!
//! Verifies:
//! 1. Notice messages never leak raw markup into the notice element.
//! 2. Each notice's close button and selector agree on its id.
//! 3. Every severity maps to its own background class.

use core::time::Duration;

use folio_core::notice::{NoticeSlot, Severity};
use folio_web::markup::{notice_class, notice_inner_html, notice_selector, NOTICE_CLOSE_ATTR};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![Just(Severity::Info), Just(Severity::Success), Just(Severity::Error)]
}

proptest! {
    #[test]
    fn messages_are_escaped(message in ".{0,40}", severity in arb_severity()) {
        let mut slot = NoticeSlot::default();
        let (_, notice) = slot.show(message.clone(), severity, Duration::ZERO);
        let html = notice_inner_html(notice);
        let start = html.find("<span>").map(|i| i + "<span>".len());
        let end = html.find("</span>");
        prop_assert!(start.is_some() && end.is_some());
        if let (Some(start), Some(end)) = (start, end) {
            let text = &html[start..end];
            prop_assert!(!text.contains('<'));
            prop_assert!(!text.contains('>'));
            prop_assert!(!text.contains('"'));
        }
    }

    #[test]
    fn close_button_targets_current_notice(count in 1usize..6) {
        let mut slot = NoticeSlot::default();
        for i in 0..count {
            let (_, notice) = slot.show(format!("n{i}"), Severity::Info, Duration::ZERO);
            let html = notice_inner_html(notice);
            let attr = format!("{NOTICE_CLOSE_ATTR}=\"{}\"", notice.id.0);
            prop_assert!(html.contains(&attr));
            let selector = notice_selector(notice.id);
            prop_assert!(selector.contains(&notice.id.0.to_string()));
        }
    }
}

#[test]
fn severities_have_distinct_backgrounds() {
    let classes: Vec<String> = [Severity::Info, Severity::Success, Severity::Error]
        .into_iter()
        .map(notice_class)
        .collect();
    assert_eq!(classes[0].split(' ').last(), Some("bg-blue-600"));
    assert_eq!(classes[1].split(' ').last(), Some("bg-green-600"));
    assert_eq!(classes[2].split(' ').last(), Some("bg-red-600"));
}

#[test]
fn native_stub_constructs() {
    let _web = folio_web::FolioWeb::new();
}
