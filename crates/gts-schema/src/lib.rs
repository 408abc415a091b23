//! # gts-schema
//!
//! JSON Schema generation and request validation for the thesis registry.
//!
//! Payload types are defined in `gts-core` with `#[derive(JsonSchema)]`.
//! This crate builds their schemas into a [`SchemaRegistry`], validates
//! request bodies against them, and reports failures as
//! [`FieldIssue`](gts_core::responses::FieldIssue) lists. Search query
//! strings are checked by [`parse_search_params`].

mod error;
mod payload;
mod registry;
mod search;

pub use error::SchemaError;
pub use payload::Payload;
pub use registry::SchemaRegistry;
pub use search::parse_search_params;
