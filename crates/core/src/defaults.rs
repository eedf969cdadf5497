//! Built-in seed templates.
//!
//! The hosting service seeds storage from a name → template table. The
//! table is built on demand and returned by value so callers inject it
//! where needed instead of reading ambient global state.

use std::collections::HashMap;

use crate::template::{DashboardTemplate, GridItem, TemplateBase, TemplateConfig};

fn widget(id: &str, x: u32, y: u32) -> GridItem {
    GridItem {
        title: "Widget 1".to_string(),
        id: id.to_string(),
        x,
        y,
        w: 1,
        h: 1,
        max_height: 4,
        min_height: 1,
        is_static: true,
    }
}

fn landing_page_config() -> TemplateConfig {
    // The sm budget is a single column, so every widget stacks at x = 0.
    // Wider breakpoints place the small/medium widgets in the last column.
    TemplateConfig {
        sm: Some(vec![
            widget("LargeWidget#lw1", 0, 0),
            widget("LargeWidget#lw2", 0, 1),
            widget("LargeWidget#lw3", 0, 2),
            widget("SmallWidget#sw1", 0, 3),
            widget("SmallWidget#sw2", 0, 4),
            widget("MediumWidget#mw1", 0, 5),
        ]),
        md: Some(vec![
            widget("LargeWidget#lw1", 0, 0),
            widget("LargeWidget#lw2", 0, 1),
            widget("LargeWidget#lw3", 0, 2),
            widget("SmallWidget#sw1", 2, 0),
            widget("SmallWidget#sw2", 2, 1),
            widget("MediumWidget#mw1", 2, 2),
        ]),
        lg: Some(vec![
            widget("LargeWidget#lw1", 0, 0),
            widget("LargeWidget#lw2", 0, 1),
            widget("LargeWidget#lw3", 0, 2),
            widget("SmallWidget#sw1", 3, 0),
            widget("SmallWidget#sw2", 3, 1),
            widget("MediumWidget#mw1", 3, 2),
        ]),
        xl: Some(vec![
            widget("LargeWidget#lw1", 0, 0),
            widget("LargeWidget#lw2", 0, 1),
            widget("LargeWidget#lw3", 0, 2),
            widget("SmallWidget#sw1", 4, 0),
            widget("SmallWidget#sw2", 4, 1),
            widget("MediumWidget#mw1", 4, 2),
        ]),
    }
}

/// Build the default-template table.
///
/// Seed templates are flagged `default` and are immutable from this
/// crate's point of view; persistence re-validates before any write.
pub fn default_templates() -> HashMap<&'static str, DashboardTemplate> {
    let mut templates = HashMap::new();
    templates.insert(
        "landingPage",
        DashboardTemplate {
            default: true,
            base: TemplateBase {
                name: "landingPage".to_string(),
                display_name: "Landing Page".to_string(),
            },
            config: landing_page_config(),
            ..DashboardTemplate::default()
        },
    );
    templates
}

/// Render a placement sequence as the canonical JSON text used inside a
/// layout field, for fixtures and seed data outside the encode path.
pub fn grid_items_json(items: &[GridItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
