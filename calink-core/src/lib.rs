//! Core of calink: turn event details into "add to calendar" links.
//!
//! - `event`: the form's event details
//! - `links`: the link generator and its output
//! - `session`: a live form whose links are recomputed on every change
//! - `config`: user configuration

pub mod config;
pub mod encode;
pub mod error;
pub mod event;
pub mod links;
pub mod provider;
pub mod session;
pub mod timestamp;

pub use error::{LinkError, LinkResult};
pub use event::{EventDetails, EventField};
pub use links::{GeneratedLinks, LinkGenerator, generate_links};
pub use provider::Provider;
pub use session::{FormSession, OutputFocus};
