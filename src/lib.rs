//! # pageflow
//!
//! A converter for the page flow script format: terse, hand-authored
//! scripts describing branching narrative screens are parsed into a typed
//! document tree and projected to JSON for downstream tooling.
//!
//! The crate is organized as a pipeline: [`flow::lexer`] turns the raw
//! character stream into tokens, [`flow::parser`] builds the page tree with
//! one token of lookahead, and [`flow::json`] projects the finished tree to
//! the wire format. [`flow::pipeline::FlowPipeline`] ties the stages
//! together and is the entry point most callers want.

pub mod flow;

pub use flow::pipeline::FlowPipeline;
