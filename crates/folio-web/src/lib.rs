#![forbid(unsafe_code)]

//! WASM frontend for folio.
//!
//! Binds [`folio_core::Presentation`] to the page DOM through `wasm-bindgen`.
//! The page markup provides the anchors listed in [`markup`]; the host wires
//! its listeners to the exported [`FolioWeb`] methods.

pub mod markup;

#[cfg(all(target_arch = "wasm32", feature = "tracing"))]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{FolioWeb, init_logging};

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct FolioWeb;

#[cfg(not(target_arch = "wasm32"))]
impl FolioWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
