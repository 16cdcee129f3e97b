//! High-level conversion pipeline
//!
//! `FlowPipeline` ties the stages together: strip the byte-order mark if
//! one is present, lex and parse the script, and project the tree to JSON.
//! Configuration is held by value, so a pipeline can be built once and
//! reused across independent documents (each parse is share-nothing).
//!
//! ```text
//! let pipeline = FlowPipeline::new().with_default_condition("lobby");
//! let json = pipeline.convert(source)?;
//! ```

use crate::flow::error::{ParseError, PipelineError};
use crate::flow::json::{to_json, JsonOptions};
use crate::flow::lexer::FlowLexer;
use crate::flow::parser::ast::Document;
use crate::flow::parser::{FlowParser, Strictness};

/// Source → document → JSON conversion with held configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FlowPipeline {
    strictness: Strictness,
    json: JsonOptions,
}

impl FlowPipeline {
    /// A strict pipeline with the default JSON options
    pub fn new() -> Self {
        FlowPipeline {
            strictness: Strictness::Strict,
            json: JsonOptions::default(),
        }
    }

    /// A pipeline that tolerates trailing input after the last page
    pub fn lenient() -> Self {
        Self::new().with_strictness(Strictness::Lenient)
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_default_condition(mut self, name: &str) -> Self {
        self.json.default_condition = name.to_string();
        self
    }

    pub fn with_compact_output(mut self) -> Self {
        self.json.pretty = false;
        self
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Parse a source string into the document tree
    pub fn parse(&self, source: &str) -> Result<Document, ParseError> {
        let lexer = FlowLexer::new(strip_bom(source));
        let parser = FlowParser::with_strictness(lexer, self.strictness)?;
        parser.parse()
    }

    /// Parse a source string and emit the JSON document
    pub fn convert(&self, source: &str) -> Result<String, PipelineError> {
        let document = self.parse(source)?;
        Ok(to_json(&document, &self.json)?)
    }
}

impl Default for FlowPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop a leading U+FEFF byte-order mark; it is an encoding hint, not
/// document content.
pub fn strip_bom(source: &str) -> &str {
    source.strip_prefix('\u{feff}').unwrap_or(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "1. Welcome(:start)\n==========\nHello traveler.\n[Continue]\n";

    #[test]
    fn test_convert_scenario() {
        let json = FlowPipeline::new().with_compact_output().convert(SCENARIO).unwrap();
        assert_eq!(
            json,
            r#"{"data":[{"id":1,"caption":"Welcome","condition":"start","text":["Hello traveler."],"interactions":[{"value":"Continue","type":"button"}]}]}"#
        );
    }

    #[test]
    fn test_bom_is_stripped() {
        let source = format!("\u{feff}{}", SCENARIO);
        let document = FlowPipeline::new().parse(&source).unwrap();
        assert_eq!(document.pages[0].id, 1);
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}abc"), "abc");
        assert_eq!(strip_bom("abc"), "abc");
    }

    #[test]
    fn test_strictness_split_on_trailing_input() {
        let source = "1. Hi\n==\nBody\n[A]\n{B}\n<C>\n";
        assert!(FlowPipeline::new().convert(source).is_err());
        assert!(FlowPipeline::lenient().convert(source).is_ok());
    }

    #[test]
    fn test_default_condition_override() {
        let json = FlowPipeline::new()
            .with_default_condition("lobby")
            .with_compact_output()
            .convert("1. Hi\n==\nBody\n[Ok]\n")
            .unwrap();
        assert!(json.contains(r#""condition":"lobby""#));
    }

    #[test]
    fn test_pipeline_is_reusable() {
        let pipeline = FlowPipeline::new().with_compact_output();
        let first = pipeline.convert(SCENARIO).unwrap();
        let second = pipeline.convert(SCENARIO).unwrap();
        assert_eq!(first, second);
    }
}
