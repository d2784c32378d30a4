//! Entity structs for every rigforge domain object.
//!
//! Components are immutable catalog records: a build replaces a slot's
//! component wholesale and never edits one in place. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod build;
mod case;
mod component;
mod cpu;
mod gpu;
mod issue;
mod motherboard;
mod psu;
mod ram;
mod storage;

pub use build::Build;
pub use case::Case;
pub use component::{ComponentInfo, SpecEntry, SpecValue, Specs};
pub use cpu::Cpu;
pub use gpu::Gpu;
pub use issue::CompatibilityIssue;
pub use motherboard::Motherboard;
pub use psu::Psu;
pub use ram::Ram;
pub use storage::Storage;
