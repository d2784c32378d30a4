//! # rig-catalog
//!
//! Read-only component catalogs for rigforge.
//!
//! A [`Catalog`] holds one list per component category plus a gallery of
//! example builds stored as id [`BuildSelection`]s. Catalogs load from JSON or
//! TOML files; a default catalog is compiled into the crate.
//!
//! The catalog is trusted reference data: beyond rejecting duplicate ids it
//! does not check field ranges.

mod error;
mod part;
mod selection;

use std::collections::HashSet;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use rig_core::entities::{Build, Case, Cpu, Gpu, Motherboard, Psu, Ram, Storage};
use rig_core::enums::Slot;

pub use error::CatalogError;
pub use part::{CatalogItem, CatalogRow};
pub use selection::BuildSelection;

use part::Part;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub cpus: Vec<Cpu>,
    #[serde(default)]
    pub gpus: Vec<Gpu>,
    #[serde(default)]
    pub motherboards: Vec<Motherboard>,
    #[serde(default)]
    pub ram: Vec<Ram>,
    #[serde(default)]
    pub storage: Vec<Storage>,
    #[serde(default)]
    pub psus: Vec<Psu>,
    #[serde(default)]
    pub cases: Vec<Case>,
    /// Example-build gallery.
    #[serde(default)]
    pub examples: Vec<BuildSelection>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_json_str(BUILTIN_CATALOG)?;
        tracing::debug!(
            components = catalog.len(),
            examples = catalog.examples.len(),
            "loaded built-in catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog file, picking the parser from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read,
    /// [`CatalogError::UnsupportedFormat`] for an unknown extension, a parse
    /// error, or a validation error from [`Catalog::validate`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let read = || {
            std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let catalog = match extension.as_deref() {
            Some("json") => Self::from_json_str(&read()?)?,
            Some("toml") => Self::from_toml_str(&read()?)?,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        tracing::debug!(
            path = %path.display(),
            cpus = catalog.cpus.len(),
            gpus = catalog.gpus.len(),
            motherboards = catalog.motherboards.len(),
            ram = catalog.ram.len(),
            storage = catalog.storage.len(),
            psus = catalog.psus.len(),
            cases = catalog.cases.len(),
            examples = catalog.examples.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate a JSON catalog.
    ///
    /// # Errors
    ///
    /// Returns a parse error or a validation error from [`Catalog::validate`].
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a TOML catalog.
    ///
    /// # Errors
    ///
    /// Returns a parse error or a validation error from [`Catalog::validate`].
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject duplicate ids within a category and gallery entries that point
    /// at missing components.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError::DuplicateId`] or
    /// [`CatalogError::UnknownComponent`] found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_unique(&self.cpus)?;
        check_unique(&self.gpus)?;
        check_unique(&self.motherboards)?;
        check_unique(&self.ram)?;
        check_unique(&self.storage)?;
        check_unique(&self.psus)?;
        check_unique(&self.cases)?;

        for selection in &self.examples {
            self.resolve(selection)?;
        }
        Ok(())
    }

    /// Total number of components across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cpus.len()
            + self.gpus.len()
            + self.motherboards.len()
            + self.ram.len()
            + self.storage.len()
            + self.psus.len()
            + self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Turn an id selection into a build snapshot.
    ///
    /// Unset ids leave their slot empty.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownComponent`] for an id that is not in
    /// its slot's category.
    pub fn resolve(&self, selection: &BuildSelection) -> Result<Build, CatalogError> {
        Ok(Build {
            use_case: selection.use_case,
            budget: selection.budget,
            cpu: pick(&self.cpus, selection.cpu.as_deref())?,
            gpu: pick(&self.gpus, selection.gpu.as_deref())?,
            motherboard: pick(&self.motherboards, selection.motherboard.as_deref())?,
            ram: pick(&self.ram, selection.ram.as_deref())?,
            storage: pick(&self.storage, selection.storage.as_deref())?,
            psu: pick(&self.psus, selection.psu.as_deref())?,
            case: pick(&self.cases, selection.case.as_deref())?,
        })
    }

    /// Every gallery entry resolved to a build, in catalog order.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError::UnknownComponent`] from [`Catalog::resolve`].
    pub fn example_builds(&self) -> Result<Vec<Build>, CatalogError> {
        self.examples
            .iter()
            .map(|selection| self.resolve(selection))
            .collect()
    }

    /// One gallery entry by zero-based index.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ExampleOutOfRange`] for a bad index.
    pub fn example_build(&self, index: usize) -> Result<Build, CatalogError> {
        let selection = self
            .examples
            .get(index)
            .ok_or(CatalogError::ExampleOutOfRange {
                index,
                count: self.examples.len(),
            })?;
        self.resolve(selection)
    }

    /// Look up a component by id across every category.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<CatalogItem> {
        find_in(&self.cpus, id)
            .map(|c| CatalogItem::Cpu(c.clone()))
            .or_else(|| find_in(&self.gpus, id).map(|c| CatalogItem::Gpu(c.clone())))
            .or_else(|| {
                find_in(&self.motherboards, id).map(|c| CatalogItem::Motherboard(c.clone()))
            })
            .or_else(|| find_in(&self.ram, id).map(|c| CatalogItem::Ram(c.clone())))
            .or_else(|| find_in(&self.storage, id).map(|c| CatalogItem::Storage(c.clone())))
            .or_else(|| find_in(&self.psus, id).map(|c| CatalogItem::Psu(c.clone())))
            .or_else(|| find_in(&self.cases, id).map(|c| CatalogItem::Case(c.clone())))
    }

    /// Display rows for one category, in catalog order.
    #[must_use]
    pub fn list(&self, slot: Slot) -> Vec<CatalogRow> {
        match slot {
            Slot::Cpu => rows(&self.cpus),
            Slot::Motherboard => rows(&self.motherboards),
            Slot::Ram => rows(&self.ram),
            Slot::Gpu => rows(&self.gpus),
            Slot::Storage => rows(&self.storage),
            Slot::Psu => rows(&self.psus),
            Slot::Case => rows(&self.cases),
        }
    }
}

fn find_in<'a, T: Part>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.info().id == id)
}

fn pick<T: Part + Clone>(items: &[T], id: Option<&str>) -> Result<Option<T>, CatalogError> {
    id.map(|id| {
        find_in(items, id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownComponent {
                slot: T::SLOT,
                id: id.to_string(),
            })
    })
    .transpose()
}

fn check_unique<T: Part>(items: &[T]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let id = item.info().id.as_str();
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                slot: T::SLOT,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn rows<T: Part>(items: &[T]) -> Vec<CatalogRow> {
    items.iter().map(CatalogRow::from_part).collect()
}
