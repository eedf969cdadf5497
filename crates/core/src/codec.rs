//! Base64 storage codec for dashboard templates.
//!
//! Encodes a template as canonical JSON wrapped in standard padded
//! base64, producing one opaque token that fits a flat text column or a
//! single request field. Decoding reverses both layers and runs
//! [`validate`] before returning, so an accepted token always holds a
//! semantically valid template.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::template::DashboardTemplate;
use crate::validation::{validate, TemplateError};

/// Decode failures, in the order the stages run.
///
/// Every variant is transparent: the underlying diagnostic is the error
/// message, passed through unchanged because callers observe it
/// literally.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The token is not valid padded base64.
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not well-formed JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The decoded template failed semantic validation.
    #[error(transparent)]
    Validation(#[from] TemplateError),
}

/// Encode a template as a self-contained storage token.
///
/// Field order is the struct declaration order, so the same input always
/// yields the same token. Serializing a well-typed in-memory template
/// does not fail in practice; an error here is internal, not bad user
/// input.
pub fn encode(template: &DashboardTemplate) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(template)?;
    Ok(STANDARD.encode(json))
}

/// Decode and validate a storage token.
///
/// Unknown JSON fields are ignored and missing fields take their type's
/// zero value, so a structurally incomplete payload reaches the
/// validation stage instead of failing at the syntax stage.
pub fn decode(token: &str) -> Result<DashboardTemplate, DecodeError> {
    let bytes = STANDARD.decode(token)?;
    let template: DashboardTemplate = serde_json::from_slice(&bytes)?;
    validate(&template)?;
    Ok(template)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
