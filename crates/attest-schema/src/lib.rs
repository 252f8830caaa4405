//! # attest-schema
//!
//! JSON Schemas for every document Attest exchanges.
//!
//! Types are defined in `attest-core` with `#[derive(JsonSchema)]`. This crate
//! collects them into a [`SchemaRegistry`] so the CLI can print a schema
//! (`attest schema <name>`) and validate hand-edited working-set files
//! before they are deserialized.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
