//! # rig-core
//!
//! Core value types for rigforge.
//!
//! This crate provides the foundational types shared across all rigforge crates:
//! - Typed component records (CPU, GPU, motherboard, RAM, storage, PSU, case)
//! - The `Build` aggregate with one optional slot per component category
//! - Compatibility issues and their severity
//! - Use-case, slot, storage-kind, and performance-tier enums
//! - Response types derived from a build (summaries, tiers)
//! - Cross-cutting error types
//!
//! Every type serializes with the configurator's camelCase JSON field names so
//! exported build files and share links stay readable by other tools.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
