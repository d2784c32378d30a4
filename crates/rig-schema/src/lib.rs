//! # rig-schema
//!
//! JSON Schema generation, validation, and registry for rigforge.
//!
//! Types are defined in `rig-core`, `rig-catalog`, and `rig-export` with
//! `#[derive(JsonSchema)]`. This crate collects their schemas into a
//! [`SchemaRegistry`] used to validate build files and to export schemas
//! for external tooling (`rig schema`).

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
