//! Structural and placement validation for dashboard templates.
//!
//! Pure checks over a [`DashboardTemplate`] value; no I/O. Checks run in
//! a fixed order and stop at the first failure, so exactly one error is
//! reported per call. Callers match on the literal error strings, so the
//! `#[error]` formats here are part of the contract and must not change.

use crate::template::{Breakpoint, DashboardTemplate};

/// Validation failures for a dashboard template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// `base.name` is empty.
    #[error("invalid template name")]
    InvalidName,

    /// `base.displayName` is empty.
    #[error("invalid template display name")]
    InvalidDisplayName,

    /// A placement's X coordinate is outside its breakpoint's column
    /// budget.
    #[error("invalid grid item, layout variant {breakpoint}, coordinate X must be less than {limit}, current value is {value}")]
    GridItemOutOfBounds {
        breakpoint: Breakpoint,
        limit: u32,
        value: u32,
    },
}

/// Validate a template's base identifiers and per-breakpoint placements.
///
/// Check order: empty name, then empty display name, then each breakpoint
/// in `sm, md, lg, xl` order, each placement in sequence order. An absent
/// or empty layout is valid.
///
/// Only the X coordinate is bounds-checked. Width overflow (`x + w`) and
/// height bounds (`minH <= h <= maxH`) are not enforced; the stored
/// template corpus contains layouts that would fail such checks.
pub fn validate(template: &DashboardTemplate) -> Result<(), TemplateError> {
    if template.base.name.is_empty() {
        return Err(TemplateError::InvalidName);
    }
    if template.base.display_name.is_empty() {
        return Err(TemplateError::InvalidDisplayName);
    }

    for breakpoint in Breakpoint::ALL {
        let Some(items) = template.config.layout(breakpoint) else {
            continue;
        };
        for item in items {
            if item.x >= breakpoint.columns() {
                return Err(TemplateError::GridItemOutOfBounds {
                    breakpoint,
                    limit: breakpoint.columns(),
                    value: item.x,
                });
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
