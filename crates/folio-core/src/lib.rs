#![forbid(unsafe_code)]

//! Core: project catalog, modal presentation, notices, and the contact form.
//!
//! Everything in this crate is host-agnostic. The page (or a test) implements
//! [`surface::Surface`] and drives a [`controller::Presentation`] with input
//! events and explicit time steps.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod contact;
pub mod controller;
pub mod download;
pub mod error;
pub mod event;
pub mod filter;
pub mod logging;
pub mod notice;
pub mod surface;
pub mod view;

// Event macros at the crate root, matching the no-op fallbacks.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};

pub use catalog::{Catalog, ProjectRecord};
pub use config::PresentationConfig;
pub use controller::{ModalState, Presentation};
pub use error::FolioError;
pub use surface::{MemorySurface, Surface};
