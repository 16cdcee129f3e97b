//! Tree model for parsed page flow documents
//!
//! The tree is built bottom-up by the parser and owned exclusively by the
//! caller until serialized. Payloads are the raw token contents; trimming
//! happens at the JSON boundary.

use std::fmt;

/// An ordered, non-empty sequence of pages
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
}

/// One screen of the document
///
/// The id is strictly informational: the grammar enforces no uniqueness or
/// ordering, and pages are emitted in source order regardless of their
/// declared numeric id.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: i64,
    pub caption: String,
    pub condition: Option<String>,
    pub body: Vec<String>,
    pub interactions: Vec<Interaction>,
}

/// A player-facing control attached to a page
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Button(String),
    Image(String),
    Action(String),
}

/// The discriminant of an [`Interaction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Button,
    Image,
    Action,
}

impl Interaction {
    pub fn kind(&self) -> InteractionKind {
        match self {
            Interaction::Button(_) => InteractionKind::Button,
            Interaction::Image(_) => InteractionKind::Image,
            Interaction::Action(_) => InteractionKind::Action,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Interaction::Button(label) | Interaction::Image(label) | Interaction::Action(label) => {
                label
            }
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InteractionKind::Button => "Button",
            InteractionKind::Image => "Image",
            InteractionKind::Action => "Action",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interaction_kind_and_label() {
        let interaction = Interaction::Button("Continue".to_string());
        assert_eq!(interaction.kind(), InteractionKind::Button);
        assert_eq!(interaction.label(), "Continue");

        assert_eq!(Interaction::Image("Hero".to_string()).kind(), InteractionKind::Image);
        assert_eq!(Interaction::Action("menu".to_string()).kind(), InteractionKind::Action);
    }

    #[test]
    fn test_interaction_kind_display() {
        assert_eq!(InteractionKind::Button.to_string(), "Button");
        assert_eq!(InteractionKind::Action.to_string(), "Action");
    }
}
