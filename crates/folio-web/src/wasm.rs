#![forbid(unsafe_code)]

use core::time::Duration;

use folio_core::download::ArtifactKind;
use folio_core::event::PageEvent;
use folio_core::notice::NoticeId;
use folio_core::{Catalog, FolioError, Presentation, PresentationConfig};
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::dom::DomSurface;

fn to_js(err: FolioError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Portfolio page controller bound to the live document.
///
/// The host wires DOM listeners to these methods (or forwards tagged JSON
/// events through [`FolioWeb::input`]) and calls [`FolioWeb::tick`] from a
/// `requestAnimationFrame` or interval loop so notices and the load-more
/// placeholder advance.
#[wasm_bindgen]
pub struct FolioWeb {
    presentation: Presentation<DomSurface>,
    started: Instant,
}

#[wasm_bindgen]
impl FolioWeb {
    /// Bind to `window.document`. `options` is an optional JSON config
    /// object; omitted keys keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<String>) -> Result<FolioWeb, JsValue> {
        let config = match options.as_deref() {
            Some(json) => PresentationConfig::from_json(json).map_err(to_js)?,
            None => PresentationConfig::default(),
        };
        let surface = DomSurface::from_window()?;
        Ok(Self {
            presentation: Presentation::with_config(surface, config),
            started: Instant::now(),
        })
    }

    /// Open the detail modal for `id`.
    #[wasm_bindgen(js_name = selectProject)]
    pub fn select_project(&mut self, id: &str) {
        self.presentation.select_project(id);
    }

    /// Close the modal.
    #[wasm_bindgen(js_name = dismissModal)]
    pub fn dismiss_modal(&mut self) {
        self.presentation.dismiss_modal();
    }

    /// Route a `keydown` key. Returns `true` if the key was consumed.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> bool {
        self.presentation.handle_key(key)
    }

    /// Save the `kind` artifact (`"pdf"` or `"apk"`) of project `id`.
    #[wasm_bindgen(js_name = requestDownload)]
    pub fn request_download(&mut self, id: &str, kind: &str) -> Result<(), JsValue> {
        let kind: ArtifactKind = kind.parse().map_err(to_js)?;
        self.presentation.request_download(id, kind);
        Ok(())
    }

    /// Validate and submit the contact form. Returns `true` if it was sent.
    #[wasm_bindgen(js_name = submitContact)]
    pub fn submit_contact(&mut self) -> bool {
        matches!(
            self.presentation.submit_contact(),
            folio_core::contact::ContactOutcome::Sent
        )
    }

    /// Filter project tiles by category tag. Returns the visible tile count.
    #[wasm_bindgen(js_name = applyFilter)]
    pub fn apply_filter(&mut self, category: &str) -> u32 {
        u32::try_from(self.presentation.apply_filter(category)).unwrap_or(u32::MAX)
    }

    /// Close notice `id` from its close button.
    #[wasm_bindgen(js_name = closeNotice)]
    pub fn close_notice(&mut self, id: f64) -> bool {
        if !(id.is_finite() && id >= 0.0) {
            return false;
        }
        self.presentation.close_notice(NoticeId(id as u64))
    }

    /// Start the load-more placeholder.
    #[wasm_bindgen(js_name = loadMore)]
    pub fn load_more(&mut self) -> bool {
        self.presentation.load_more()
    }

    /// Decode and dispatch one tagged JSON event.
    pub fn input(&mut self, event: &str) -> Result<(), JsValue> {
        let event = PageEvent::from_json(event).map_err(to_js)?;
        self.presentation.handle(event);
        Ok(())
    }

    /// Sync the controller clock with wall time since construction.
    pub fn tick(&mut self) {
        let elapsed = self.started.elapsed();
        self.presentation.set_time(elapsed);
    }

    /// Advance the controller clock by `ms` milliseconds.
    #[wasm_bindgen(js_name = advanceTime)]
    pub fn advance_time(&mut self, ms: f64) {
        if ms.is_finite() && ms > 0.0 {
            let dt = Duration::try_from_secs_f64(ms / 1_000.0).unwrap_or(Duration::MAX);
            self.presentation.advance_time(dt);
        }
    }

    /// Id of the project shown in the modal, if open.
    #[wasm_bindgen(js_name = openProject)]
    pub fn open_project(&self) -> Option<String> {
        self.presentation.modal_state().project_id().map(str::to_owned)
    }

    /// Catalog ids in page order.
    #[wasm_bindgen(js_name = projectIds)]
    pub fn project_ids(&self) -> js_sys::Array {
        Catalog::builtin()
            .iter()
            .map(|record| JsValue::from_str(record.id))
            .collect()
    }

    /// The project catalog as a JSON array.
    #[wasm_bindgen(js_name = catalogJson)]
    pub fn catalog_json(&self) -> Result<String, JsValue> {
        let records: Vec<_> = Catalog::builtin().iter().collect();
        serde_json::to_string(&records).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

/// Route `tracing` events to the browser console. Returns `false` when the
/// crate was built without the `tracing` feature or a subscriber already
/// exists.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() -> bool {
    #[cfg(feature = "tracing")]
    {
        crate::console::init()
    }
    #[cfg(not(feature = "tracing"))]
    {
        false
    }
}
