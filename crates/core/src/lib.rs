//! Pure domain core for dashboard layout templates.
//!
//! Zero I/O: model types, placement validation, the base64 storage
//! codec, and built-in seed templates. HTTP handlers and persistence
//! live in the hosting service and call into this crate; they re-run
//! [`validate`] before any write.

pub mod codec;
pub mod defaults;
pub mod template;
pub mod types;
pub mod validation;

pub use codec::{decode, encode, DecodeError};
pub use template::{Breakpoint, DashboardTemplate, GridItem, TemplateBase, TemplateConfig};
pub use types::{DbId, Timestamp};
pub use validation::{validate, TemplateError};
