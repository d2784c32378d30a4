//! Central schema registry for all rigforge wire types.
//!
//! The `SchemaRegistry` builds JSON Schemas at construction time using
//! [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in rigforge.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing every build, component, catalog,
    /// and response schema.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Build snapshots (2) ---
        register!(schemas, "build", rig_core::entities::Build);
        register!(schemas, "build_selection", rig_catalog::BuildSelection);

        // --- Components (7) ---
        register!(schemas, "cpu", rig_core::entities::Cpu);
        register!(schemas, "gpu", rig_core::entities::Gpu);
        register!(schemas, "motherboard", rig_core::entities::Motherboard);
        register!(schemas, "ram", rig_core::entities::Ram);
        register!(schemas, "storage", rig_core::entities::Storage);
        register!(schemas, "psu", rig_core::entities::Psu);
        register!(schemas, "case", rig_core::entities::Case);

        // --- Catalog (1) ---
        register!(schemas, "catalog", rig_catalog::Catalog);

        // --- Engine output and responses (4) ---
        register!(
            schemas,
            "compatibility_issue",
            rig_core::entities::CompatibilityIssue
        );
        register!(schemas, "build_summary", rig_core::responses::BuildSummary);
        register!(schemas, "tier_response", rig_core::responses::TierResponse);
        register!(schemas, "build_export", rig_export::BuildExport);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_catalog::Catalog;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 2 builds + 7 components + 1 catalog + 4 responses
        assert_eq!(registry().schema_count(), 14);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn gallery_builds_validate() {
        let reg = registry();
        let catalog = Catalog::builtin().unwrap();
        for build in catalog.example_builds().unwrap() {
            let json = serde_json::to_value(&build).unwrap();
            assert!(reg.validate("build", &json).is_ok());

            let summary = serde_json::to_value(rig_compat::summarize(&build)).unwrap();
            assert!(reg.validate("build_summary", &summary).is_ok());
        }
    }

    #[test]
    fn builtin_catalog_validates() {
        let reg = registry();
        let json = serde_json::to_value(Catalog::builtin().unwrap()).unwrap();
        assert!(reg.validate("catalog", &json).is_ok());
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let reg = registry();
        let invalid = serde_json::json!({
            // "useCase" is missing
            "budget": 1500,
            "cpu": null
        });
        let result = reg.validate("build", &invalid);
        if let Err(SchemaError::ValidationFailed { errors }) = result {
            assert!(!errors.is_empty());
        } else {
            panic!("Expected ValidationFailed");
        }
    }

    #[test]
    fn validate_rejects_invalid_use_case() {
        let reg = registry();
        let invalid = serde_json::json!({"useCase": "mining", "budget": 1500});
        assert!(reg.validate("build", &invalid).is_err());
    }

    #[test]
    fn validate_rejects_component_missing_typed_field() {
        let reg = registry();
        let invalid = serde_json::json!({
            "id": "cpu-x", "name": "X", "brand": "B", "price": 100,
            "cores": 4, "threads": 8, "tdp": 65, "integratedGraphics": false
        });
        assert!(reg.validate("cpu", &invalid).is_err());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
