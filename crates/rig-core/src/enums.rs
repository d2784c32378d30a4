//! Use-case, slot, severity, storage-kind, and tier enums for rigforge.
//!
//! Wire strings follow the configurator's JSON vocabulary: use cases are
//! kebab-case, storage kinds are upper-case, everything else is lower-case.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// UseCase
// ---------------------------------------------------------------------------

/// What the build is primarily meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum UseCase {
    Gaming,
    ContentCreation,
    Office,
}

impl UseCase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gaming => "gaming",
            Self::ContentCreation => "content-creation",
            Self::Office => "office",
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How serious a compatibility issue is.
///
/// `Error` means the parts cannot work together as selected; `Warning` means
/// they work but something is suboptimal (downclocked RAM, thin PSU headroom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StorageKind
// ---------------------------------------------------------------------------

/// Storage device variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum StorageKind {
    /// Solid-state drive on SATA.
    #[serde(rename = "SSD")]
    Ssd,
    /// Spinning hard disk.
    #[serde(rename = "HDD")]
    Hdd,
    /// NVMe solid-state drive.
    #[serde(rename = "NVME")]
    Nvme,
}

impl StorageKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ssd => "SSD",
            Self::Hdd => "HDD",
            Self::Nvme => "NVME",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// A named position in a build that holds one component or nothing.
///
/// Also doubles as the catalog category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Cpu,
    Motherboard,
    Ram,
    Gpu,
    Storage,
    Psu,
    Case,
}

impl Slot {
    /// All slots in the order the build wizard presents them.
    pub const ALL: [Self; 7] = [
        Self::Cpu,
        Self::Motherboard,
        Self::Ram,
        Self::Gpu,
        Self::Storage,
        Self::Psu,
        Self::Case,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Motherboard => "motherboard",
            Self::Ram => "ram",
            Self::Gpu => "gpu",
            Self::Storage => "storage",
            Self::Psu => "psu",
            Self::Case => "case",
        }
    }

    /// Human-facing label used in summaries and issue text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Motherboard => "Motherboard",
            Self::Ram => "RAM",
            Self::Gpu => "GPU",
            Self::Storage => "Storage",
            Self::Psu => "PSU",
            Self::Case => "Case",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PerformanceTier
// ---------------------------------------------------------------------------

/// Rough performance expectation for a budget ceiling.
///
/// ```text
/// budget < 800   → entry_level
/// budget < 1500  → mid_range
/// budget < 2500  → high_end
/// otherwise      → enthusiast
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    EntryLevel,
    MidRange,
    HighEnd,
    Enthusiast,
}

impl PerformanceTier {
    #[must_use]
    pub fn for_budget(budget: f64) -> Self {
        if budget < 800.0 {
            Self::EntryLevel
        } else if budget < 1500.0 {
            Self::MidRange
        } else if budget < 2500.0 {
            Self::HighEnd
        } else {
            Self::Enthusiast
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EntryLevel => "entry_level",
            Self::MidRange => "mid_range",
            Self::HighEnd => "high_end",
            Self::Enthusiast => "enthusiast",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EntryLevel => "Entry Level",
            Self::MidRange => "Mid-Range",
            Self::HighEnd => "High-End",
            Self::Enthusiast => "Enthusiast",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::EntryLevel => "Great for office work and light gaming",
            Self::MidRange => "1080p gaming at high settings",
            Self::HighEnd => "1440p gaming at ultra settings",
            Self::Enthusiast => "4K gaming and professional workloads",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
