//! Dashboard layout template data model.
//!
//! A template declares how UI widgets are arranged on a responsive grid
//! across four screen-size variants. This module defines the value types
//! and the per-breakpoint column budgets; validation lives in
//! [`crate::validation`] and the storage codec in [`crate::codec`].
//!
//! Wire field names match the tokens the hosting service already has in
//! storage, so previously stored templates decode unchanged. Every field
//! is optional on decode: unknown keys are ignored and missing keys take
//! their type's zero value.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Breakpoints
// ---------------------------------------------------------------------------

/// Responsive grid breakpoints, narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// All breakpoints, in validation order.
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Column budget for this breakpoint.
    ///
    /// Single edit point for grid capacities: narrow layouts are
    /// effectively single-column, wide layouts allow five parallel
    /// widgets.
    pub const fn columns(self) -> u32 {
        match self {
            Breakpoint::Sm => 1,
            Breakpoint::Md => 3,
            Breakpoint::Lg => 4,
            Breakpoint::Xl => 5,
        }
    }

    /// Lowercase variant name as it appears in the wire format and in
    /// validation messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Grid items
// ---------------------------------------------------------------------------

/// A single widget placement on one breakpoint's grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridItem {
    /// Display title.
    pub title: String,
    /// Grid-item instance id, conventionally `"<WidgetKind>#<instanceTag>"`.
    /// Unique within a layout, not across breakpoints.
    #[serde(rename = "i")]
    pub id: String,
    /// Column coordinate.
    pub x: u32,
    /// Row coordinate.
    pub y: u32,
    /// Width in columns.
    pub w: u32,
    /// Height in rows.
    pub h: u32,
    #[serde(rename = "maxH")]
    pub max_height: u32,
    #[serde(rename = "minH")]
    pub min_height: u32,
    /// Non-draggable in the UI. Carried through, not interpreted here.
    #[serde(rename = "static")]
    pub is_static: bool,
}

// ---------------------------------------------------------------------------
// Template config
// ---------------------------------------------------------------------------

/// One grid layout per breakpoint.
///
/// An absent layout is `None`, not an error. Item order is insertion
/// order from the source data; it carries no meaning beyond stability
/// for equality and round-trip checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub sm: Option<Vec<GridItem>>,
    pub md: Option<Vec<GridItem>>,
    pub lg: Option<Vec<GridItem>>,
    pub xl: Option<Vec<GridItem>>,
}

impl TemplateConfig {
    /// The layout for `breakpoint`, if one is present.
    pub fn layout(&self, breakpoint: Breakpoint) -> Option<&[GridItem]> {
        match breakpoint {
            Breakpoint::Sm => self.sm.as_deref(),
            Breakpoint::Md => self.md.as_deref(),
            Breakpoint::Lg => self.lg.as_deref(),
            Breakpoint::Xl => self.xl.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// Identifying base of a template. Both fields are required to be
/// non-empty for any template that is not a raw storage seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateBase {
    /// Stable template key.
    pub name: String,
    /// Presentation text.
    pub display_name: String,
}

/// A named dashboard layout template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardTemplate {
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    #[serde(rename = "userIdentityID")]
    pub user_identity_id: DbId,
    /// Marks a built-in seed template. Not itself interpreted by
    /// validation; used by collaborators to seed storage.
    pub default: bool,
    #[serde(rename = "TemplateBase")]
    pub base: TemplateBase,
    #[serde(rename = "templateConfig")]
    pub config: TemplateConfig,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
