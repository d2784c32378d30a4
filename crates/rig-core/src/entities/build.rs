use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Case, ComponentInfo, Cpu, Gpu, Motherboard, Psu, Ram, Storage};
use crate::enums::{Slot, UseCase};

/// A build snapshot: use case, budget, and one optional component per slot.
///
/// Any subset of slots may be empty. Callers replace a slot's component
/// wholesale; nothing here mutates a component in place.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub use_case: UseCase,
    /// Budget ceiling in the catalog's currency unit.
    pub budget: f64,
    #[serde(default)]
    pub cpu: Option<Cpu>,
    #[serde(default)]
    pub gpu: Option<Gpu>,
    #[serde(default)]
    pub motherboard: Option<Motherboard>,
    #[serde(default)]
    pub ram: Option<Ram>,
    #[serde(default)]
    pub storage: Option<Storage>,
    #[serde(default)]
    pub psu: Option<Psu>,
    #[serde(default)]
    pub case: Option<Case>,
}

impl Build {
    /// An empty build with every slot unset.
    #[must_use]
    pub const fn new(use_case: UseCase, budget: f64) -> Self {
        Self {
            use_case,
            budget,
            cpu: None,
            gpu: None,
            motherboard: None,
            ram: None,
            storage: None,
            psu: None,
            case: None,
        }
    }

    /// Base fields of the component in `slot`, if one is selected.
    #[must_use]
    pub fn component(&self, slot: Slot) -> Option<&ComponentInfo> {
        match slot {
            Slot::Cpu => self.cpu.as_ref().map(|c| &c.info),
            Slot::Motherboard => self.motherboard.as_ref().map(|c| &c.info),
            Slot::Ram => self.ram.as_ref().map(|c| &c.info),
            Slot::Gpu => self.gpu.as_ref().map(|c| &c.info),
            Slot::Storage => self.storage.as_ref().map(|c| &c.info),
            Slot::Psu => self.psu.as_ref().map(|c| &c.info),
            Slot::Case => self.case.as_ref().map(|c| &c.info),
        }
    }

    /// Every selected component's base fields, in wizard order.
    pub fn components(&self) -> impl Iterator<Item = &ComponentInfo> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.component(slot))
    }

    #[must_use]
    pub fn is_filled(&self, slot: Slot) -> bool {
        self.component(slot).is_some()
    }

    #[must_use]
    pub fn filled_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.is_filled(*slot))
            .collect()
    }

    #[must_use]
    pub fn missing_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| !self.is_filled(*slot))
            .collect()
    }

    /// True when every slot holds a component.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Slot::ALL.into_iter().all(|slot| self.is_filled(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Specs;

    fn info(id: &str) -> ComponentInfo {
        ComponentInfo {
            id: id.into(),
            name: id.to_uppercase(),
            brand: "Test".into(),
            price: 10.0,
            image: String::new(),
            specs: Specs::new(),
        }
    }

    #[test]
    fn new_build_has_every_slot_missing() {
        let build = Build::new(UseCase::Office, 800.0);
        assert!(build.filled_slots().is_empty());
        assert_eq!(build.missing_slots(), Slot::ALL.to_vec());
        assert!(!build.is_complete());
        assert_eq!(build.components().count(), 0);
    }

    #[test]
    fn component_lookup_follows_slot() {
        let mut build = Build::new(UseCase::Gaming, 1500.0);
        build.psu = Some(Psu {
            info: info("psu-1"),
            wattage: 650,
            efficiency: "80+ Bronze".into(),
            modular: false,
        });

        assert_eq!(build.component(Slot::Psu).map(|c| c.id.as_str()), Some("psu-1"));
        assert!(build.component(Slot::Cpu).is_none());
        assert_eq!(build.filled_slots(), vec![Slot::Psu]);
    }

    #[test]
    fn missing_slots_deserialize_as_empty() {
        let build: Build =
            serde_json::from_str(r#"{"useCase":"office","budget":800,"cpu":null}"#).unwrap();
        assert_eq!(build, Build::new(UseCase::Office, 800.0));
    }
}
