//! Invariant tests for the presentation controller.
//!
//! Verifies:
//! 1. select → dismiss returns to Closed; a second dismiss changes nothing
//! 2. select(a) → select(b) leaves Open(b) with no residue of a
//! 3. scroll lock and modal visibility always track the modal state
//! 4. at most one notice element is ever on the page
//! 5. contact submissions with an empty field never mutate the form and emit
//!    exactly one error notice
//! 6. complete contact submissions clear the form and emit exactly one
//!    success notice
//! 7. download scenario: music/pdf → documentation.pdf + success notice

use core::time::Duration;

use folio_core::catalog::Catalog;
use folio_core::contact::{ContactField, ContactForm, ContactOutcome};
use folio_core::download::ArtifactKind;
use folio_core::event::{DismissSource, PageEvent};
use folio_core::notice::{NoticeId, Severity};
use folio_core::view::ProjectView;
use folio_core::{MemorySurface, ModalState, Presentation};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_project_id() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["ecommerce", "fitness", "task", "music", "ai-chat", "weather"])
            .prop_map(str::to_owned),
        "[a-z-]{1,10}",
    ]
}

fn arb_event() -> impl Strategy<Value = PageEvent> {
    prop_oneof![
        arb_project_id().prop_map(|id| PageEvent::Select { id }),
        prop_oneof![
            Just(DismissSource::CloseButton),
            Just(DismissSource::Overlay),
            Just(DismissSource::Api),
        ]
        .prop_map(|source| PageEvent::Dismiss { source }),
        prop_oneof![Just("Escape"), Just("Enter"), Just("a")]
            .prop_map(|key| PageEvent::Key { key: key.to_owned() }),
        (arb_project_id(), prop_oneof![Just(ArtifactKind::Pdf), Just(ArtifactKind::Apk)])
            .prop_map(|(id, kind)| PageEvent::Download { id, kind }),
        Just(PageEvent::SubmitContact),
        prop_oneof![Just("all"), Just("Mobile App"), Just("AI/ML"), Just("none")]
            .prop_map(|c| PageEvent::Filter { category: c.to_owned() }),
        (0u64..8).prop_map(|id| PageEvent::CloseNotice { id: NoticeId(id) }),
        Just(PageEvent::LoadMore),
        (0u64..8_000).prop_map(|now_ms| PageEvent::Time { now_ms }),
    ]
}

fn arb_form_with_gap() -> impl Strategy<Value = ContactForm> {
    (
        prop::sample::select(ContactField::ALL.to_vec()),
        "[a-z]{1,8}",
        "[a-z]{1,8}@x\\.io",
        "[a-z ]{1,12}",
        "[a-z ]{1,24}",
    )
        .prop_map(|(gap, name, email, subject, message)| {
            let mut form = ContactForm::new(name, email, subject, message);
            form.field_mut(gap).clear();
            form
        })
}

fn arb_complete_form() -> impl Strategy<Value = ContactForm> {
    ("[a-z]{1,8}", "[a-z]{1,8}@x\\.io", "[a-z ]{1,12}", "[a-z ]{1,24}")
        .prop_map(|(name, email, subject, message)| ContactForm::new(name, email, subject, message))
}

fn page() -> Presentation<MemorySurface> {
    Presentation::new(MemorySurface::new())
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn select_then_dismiss_is_closed_and_idempotent(id in arb_project_id()) {
        let mut p = page();
        p.select_project(&id);
        p.dismiss_modal();
        prop_assert_eq!(p.modal_state(), &ModalState::Closed);
        let renders = p.surface().renders;
        p.dismiss_modal();
        prop_assert_eq!(p.modal_state(), &ModalState::Closed);
        prop_assert_eq!(p.surface().renders, renders);
        prop_assert!(!p.surface().scroll_locked);
        prop_assert!(!p.surface().modal_visible);
    }

    #[test]
    fn reselect_leaves_only_second_project(a in arb_project_id(), b in arb_project_id()) {
        let mut p = page();
        p.select_project(&a);
        p.select_project(&b);
        prop_assert_eq!(p.modal_state(), &ModalState::Open(b.clone()));
        let expected = ProjectView::build(&b, Catalog::builtin().lookup(&b));
        let html = expected.body_html();
        prop_assert_eq!(p.surface().last_view.as_ref(), Some(&expected));
        prop_assert_eq!(p.surface().modal_body.as_deref(), Some(html.as_str()));
    }

    #[test]
    fn host_state_tracks_modal_state(events in prop::collection::vec(arb_event(), 0..40)) {
        let mut p = page();
        for event in events {
            p.handle(event);
            let open = p.modal_state().is_open();
            prop_assert_eq!(p.surface().modal_visible, open);
            prop_assert_eq!(p.surface().scroll_locked, open);
            prop_assert!(p.surface().notices.len() <= 1);
            prop_assert_eq!(
                p.surface().notices.first().map(|n| n.id),
                p.current_notice().map(|n| n.id)
            );
        }
    }

    #[test]
    fn incomplete_contact_is_rejected_untouched(form in arb_form_with_gap()) {
        let mut p = page();
        p.surface_mut().fill_contact(form.clone());
        let outcome = p.submit_contact();
        prop_assert!(matches!(outcome, ContactOutcome::Rejected(_)), "outcome was {:?}", outcome);
        prop_assert_eq!(p.surface().contact.as_ref(), Some(&form));
        prop_assert_eq!(p.surface().notice_log.len(), 1);
        prop_assert_eq!(p.surface().notice_log[0].severity, Severity::Error);
    }

    #[test]
    fn complete_contact_is_sent_and_cleared(form in arb_complete_form()) {
        let mut p = page();
        p.surface_mut().fill_contact(form);
        prop_assert_eq!(p.submit_contact(), ContactOutcome::Sent);
        let cleared = ContactForm::default();
        prop_assert_eq!(p.surface().contact.as_ref(), Some(&cleared));
        prop_assert_eq!(p.surface().notice_log.len(), 1);
        prop_assert_eq!(p.surface().notice_log[0].severity, Severity::Success);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────

#[test]
fn music_pdf_download_scenario() {
    let mut p = page();
    p.request_download("music", ArtifactKind::Pdf);
    let s = p.surface();
    assert_eq!(s.saves.len(), 1);
    assert_eq!(s.saves[0].filename, "documentation.pdf");
    assert_eq!(s.notice_log.len(), 1);
    assert_eq!(s.notice_log[0].severity, Severity::Success);
}

#[test]
fn modal_download_button_flow() {
    let mut p = page();
    p.select_project("weather");
    let action = p
        .surface()
        .last_view
        .as_ref()
        .map(|view| view.actions[1].clone())
        .expect("view rendered");
    p.handle(PageEvent::Download {
        id: action.project_id,
        kind: action.kind,
    });
    assert_eq!(p.surface().saves[0].filename, "app.apk");
    assert_eq!(p.surface().saves[0].project_id, "weather");
    assert!(p.modal_state().is_open(), "download keeps the modal open");
}

#[test]
fn notice_lifecycle_over_json_events() {
    let mut p = page();
    for json in [
        r#"{"type":"select","id":"fitness"}"#,
        r#"{"type":"key","key":"Escape"}"#,
        r#"{"type":"load_more"}"#,
        r#"{"type":"time","now_ms":2000}"#,
    ] {
        p.handle(PageEvent::from_json(json).expect("event decodes"));
    }
    assert_eq!(p.modal_state(), &ModalState::Closed);
    let notice = p.current_notice().expect("load-more notice");
    assert_eq!(notice.severity, Severity::Info);
    p.advance_time(Duration::from_millis(5_300));
    assert!(p.current_notice().is_none());
    assert!(p.surface().notices.is_empty());
}
