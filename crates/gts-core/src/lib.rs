//! # gts-core
//!
//! Core types for the GTS thesis registry.
//!
//! This crate provides the foundational types shared across all GTS crates:
//! - Entity structs for every stored record (universities, theses, etc.)
//! - Enums for thesis types, supervisor roles, and entity kinds
//! - Create/update payloads accepted by the HTTP API
//! - The thesis search filter and its raw query-string form
//! - Response envelope and dashboard types shared by server and client
//! - camelCase views used by UI-facing consumers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filters;
pub mod inputs;
pub mod responses;
pub mod views;
