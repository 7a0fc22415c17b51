#![forbid(unsafe_code)]

//! Browser [`Surface`] backed by `web-sys`.
//!
//! DOM calls that fail (detached nodes, rejected style writes) are logged and
//! skipped; none of them abort the controller.

use folio_core::contact::{ContactField, ContactForm};
use folio_core::download::SaveRequest;
use folio_core::notice::{Notice, NoticeId, NoticePhase};
use folio_core::view::ProjectView;
use folio_core::Surface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement,
};

use crate::markup;

/// [`Surface`] over the live document.
pub(crate) struct DomSurface {
    document: Document,
}

impl DomSurface {
    /// Bind to the window's document.
    pub(crate) fn from_window() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        Ok(Self { document })
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn set_style(element: &Element, property: &str, value: &str) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            check(html.style().set_property(property, value), property);
        }
    }

    fn field_value(&self, field: ContactField) -> String {
        let Some(element) = self.by_id(field.element_id()) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn check(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        #[cfg(feature = "tracing")]
        tracing::debug!(what, error = ?err, "dom update failed");
    }
}

impl Surface for DomSurface {
    fn has_modal(&self) -> bool {
        [markup::MODAL_ID, markup::MODAL_TITLE_ID, markup::MODAL_BODY_ID]
            .iter()
            .all(|id| self.by_id(id).is_some())
    }

    fn render_modal(&mut self, view: &ProjectView) {
        if let Some(title) = self.by_id(markup::MODAL_TITLE_ID) {
            title.set_text_content(Some(&view.title));
        }
        if let Some(body) = self.by_id(markup::MODAL_BODY_ID) {
            body.set_inner_html(&view.body_html());
        }
    }

    fn set_modal_visible(&mut self, visible: bool) {
        if let Some(modal) = self.by_id(markup::MODAL_ID) {
            let classes = modal.class_list();
            let result = if visible {
                classes.remove_1(markup::HIDDEN_CLASS)
            } else {
                classes.add_1(markup::HIDDEN_CLASS)
            };
            check(result, "modal visibility");
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        if let Some(body) = self.document.body() {
            check(
                body.style().set_property("overflow", markup::body_overflow(locked)),
                "overflow",
            );
        }
    }

    fn show_notice(&mut self, notice: &Notice) {
        let Some(body) = self.document.body() else {
            return;
        };
        let Ok(element) = self.document.create_element("div") else {
            return;
        };
        element.set_class_name(&markup::notice_class(notice.severity));
        check(
            element.set_attribute(markup::NOTICE_ID_ATTR, &notice.id.0.to_string()),
            "notice id",
        );
        element.set_inner_html(&markup::notice_inner_html(notice));
        Self::set_style(&element, "transform", markup::notice_transform(notice.phase));
        check(body.append_child(&element).map(|_| ()), "notice insert");
    }

    fn set_notice_phase(&mut self, id: NoticeId, phase: NoticePhase) {
        if let Ok(Some(element)) = self.document.query_selector(&markup::notice_selector(id)) {
            Self::set_style(&element, "transform", markup::notice_transform(phase));
        }
    }

    fn remove_notice(&mut self, id: NoticeId) {
        if let Ok(Some(element)) = self.document.query_selector(&markup::notice_selector(id)) {
            element.remove();
        }
    }

    fn save_file(&mut self, request: &SaveRequest) {
        let Ok(element) = self.document.create_element("a") else {
            return;
        };
        let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() else {
            return;
        };
        anchor.set_href("#");
        anchor.set_download(request.filename);
        anchor.click();
    }

    fn contact_form(&self) -> Option<ContactForm> {
        self.by_id(markup::CONTACT_FORM_ID)?;
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            *form.field_mut(field) = self.field_value(field);
        }
        Some(form)
    }

    fn clear_contact_form(&mut self) {
        if let Some(form) = self
            .by_id(markup::CONTACT_FORM_ID)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    fn tile_categories(&self) -> Vec<Option<String>> {
        self.all(markup::TILE_SELECTOR)
            .iter()
            .map(|tile| tile.get_attribute(markup::CATEGORY_ATTR))
            .collect()
    }

    fn set_tile_visible(&mut self, index: usize, visible: bool) {
        if let Some(tile) = self.all(markup::TILE_SELECTOR).get(index) {
            Self::set_style(tile, "display", markup::tile_display(visible));
            if visible {
                Self::set_style(tile, "animation", markup::TILE_ENTER_ANIMATION);
            }
        }
    }

    fn set_active_filter(&mut self, tag: &str) {
        for button in self.all(markup::FILTER_SELECTOR) {
            let active = button.get_attribute(markup::CATEGORY_ATTR).as_deref() == Some(tag);
            check(
                button
                    .class_list()
                    .toggle_with_force(markup::ACTIVE_CLASS, active)
                    .map(|_| ()),
                "filter class",
            );
        }
    }

    fn set_load_more_busy(&mut self, busy: bool) -> bool {
        let Some(button) = self
            .by_id(markup::LOAD_MORE_ID)
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
        else {
            return false;
        };
        button.set_inner_html(markup::load_more_html(busy));
        button.set_disabled(busy);
        true
    }
}
