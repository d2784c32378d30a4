//! Per-category access to component records.

use serde::Serialize;

use rig_core::entities::{Case, ComponentInfo, Cpu, Gpu, Motherboard, Psu, Ram, Storage};
use rig_core::enums::Slot;

/// Shared view over the typed component records.
pub(crate) trait Part {
    const SLOT: Slot;

    fn info(&self) -> &ComponentInfo;

    /// One-line summary of the typed fields.
    fn detail(&self) -> String;
}

impl Part for Cpu {
    const SLOT: Slot = Slot::Cpu;

    fn info(&self) -> &ComponentInfo {
        &self.info
    }

    fn detail(&self) -> String {
        format!(
            "{} · {}C/{}T · {}W",
            self.socket, self.cores, self.threads, self.tdp
        )
    }
}

impl Part for Gpu {
    const SLOT: Slot = Slot::Gpu;

    fn info(&self) -> &ComponentInfo {
        &self.info
    }

    fn detail(&self) -> String {
        format!("{}GB · {}W · {}mm", self.vram, self.tdp, self.length)
    }
}

impl Part for Motherboard {
    const SLOT: Slot = Slot::Motherboard;

    fn info(&self) -> &ComponentInfo {
        &self.info
    }

    fn detail(&self) -> String {
        format!(
            "{} {} · {} up to {}MHz · {}",
            self.socket, self.chipset, self.ram_type, self.max_ram_speed, self.form_factor
        )
    }
}

impl Part for Ram {
    const SLOT: Slot = Slot::Ram;

    fn info(&self) -> &ComponentInfo {
        &self.info
    }

    fn detail(&self) -> String {
        format!("{} · {}MHz · {}GB", self.ram_type, self.speed, self.capacity)
    }
}

impl Part for Storage {
    const SLOT: Slot = Slot::Storage;

    fn info(&self) -> &ComponentInfo {
        &self.info
    }

    fn detail(&self) -> String {
        format!(
            "{} · {}GB · {}/{} MB/s",
            self.kind, self.capacity, self.read, self.write
        )
    }
}

impl Part for Psu {
    const SLOT: Slot = Slot::Psu;

    fn info(&self) -> &ComponentInfo {
        &self.info
    }

    fn detail(&self) -> String {
        let cabling = if self.modular { "modular" } else { "fixed" };
        format!("{}W · {} · {cabling}", self.wattage, self.efficiency)
    }
}

impl Part for Case {
    const SLOT: Slot = Slot::Case;

    fn info(&self) -> &ComponentInfo {
        &self.info
    }

    fn detail(&self) -> String {
        format!("{} · GPU up to {}mm", self.form_factor, self.max_gpu_length)
    }
}

/// A component of any category, tagged with its category on the wire.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CatalogItem {
    Cpu(Cpu),
    Gpu(Gpu),
    Motherboard(Motherboard),
    Ram(Ram),
    Storage(Storage),
    Psu(Psu),
    Case(Case),
}

impl CatalogItem {
    #[must_use]
    pub const fn slot(&self) -> Slot {
        match self {
            Self::Cpu(_) => Slot::Cpu,
            Self::Gpu(_) => Slot::Gpu,
            Self::Motherboard(_) => Slot::Motherboard,
            Self::Ram(_) => Slot::Ram,
            Self::Storage(_) => Slot::Storage,
            Self::Psu(_) => Slot::Psu,
            Self::Case(_) => Slot::Case,
        }
    }
}

/// Flat listing row for `rig catalog list`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogRow {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub detail: String,
}

impl CatalogRow {
    pub(crate) fn from_part<T: Part>(part: &T) -> Self {
        let info = part.info();
        Self {
            id: info.id.clone(),
            name: info.name.clone(),
            brand: info.brand.clone(),
            price: info.price,
            detail: part.detail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn rows_describe_typed_fields() {
        let catalog = Catalog::builtin().unwrap();
        let rows = catalog.list(Slot::Cpu);
        assert_eq!(rows[0].id, "cpu-ryzen5-7600");
        assert_eq!(rows[0].detail, "AM5 · 6C/12T · 65W");

        let psus = catalog.list(Slot::Psu);
        assert_eq!(psus[0].detail, "650W · 80+ Bronze · fixed");
    }

    #[test]
    fn item_serializes_with_category_tag() {
        let catalog = Catalog::builtin().unwrap();
        let item = catalog.find("gpu-rtx4070").expect("gpu exists");
        assert_eq!(item.slot(), Slot::Gpu);

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["category"], "gpu");
        assert_eq!(value["name"], "GeForce RTX 4070");
        assert_eq!(value["length"], 285);
    }
}
