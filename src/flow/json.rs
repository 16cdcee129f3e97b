//! JSON projection of parsed documents
//!
//! This is the serialization boundary: pages are projected in document
//! order into `{"data": [...]}`, captions and paragraphs are trimmed, an
//! absent condition is replaced by a configurable default, and interaction
//! kinds are mapped to their lowercase wire names. None of these transforms
//! happen in the core; the tree keeps raw token payloads.

use serde::Serialize;

use crate::flow::parser::ast::{Document, Interaction, Page};

/// Options for the JSON projection
#[derive(Debug, Clone, PartialEq)]
pub struct JsonOptions {
    /// Condition emitted for pages that carry none
    pub default_condition: String,
    /// Pretty-print the emitted document
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            default_condition: "page".to_string(),
            pretty: true,
        }
    }
}

#[derive(Serialize)]
struct DocumentJson {
    data: Vec<PageJson>,
}

#[derive(Serialize)]
struct PageJson {
    id: i64,
    caption: String,
    condition: String,
    text: Vec<String>,
    interactions: Vec<InteractionJson>,
}

#[derive(Serialize)]
struct InteractionJson {
    value: String,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Lowercase wire names for interaction kinds
fn interaction_type(interaction: &Interaction) -> &'static str {
    match interaction {
        Interaction::Button(_) => "button",
        Interaction::Image(_) => "image",
        Interaction::Action(_) => "action",
    }
}

fn project_page(page: &Page, options: &JsonOptions) -> PageJson {
    PageJson {
        id: page.id,
        caption: page.caption.trim().to_string(),
        condition: page
            .condition
            .clone()
            .unwrap_or_else(|| options.default_condition.clone()),
        text: page.body.iter().map(|p| p.trim().to_string()).collect(),
        interactions: page
            .interactions
            .iter()
            .map(|interaction| InteractionJson {
                value: interaction.label().to_string(),
                kind: interaction_type(interaction),
            })
            .collect(),
    }
}

/// Emit a document as a JSON string
pub fn to_json(document: &Document, options: &JsonOptions) -> Result<String, serde_json::Error> {
    let projected = DocumentJson {
        data: document.pages.iter().map(|p| project_page(p, options)).collect(),
    };
    if options.pretty {
        serde_json::to_string_pretty(&projected)
    } else {
        serde_json::to_string(&projected)
    }
}
