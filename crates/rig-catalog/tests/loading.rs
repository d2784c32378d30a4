//! File loading and gallery resolution against the engine.

use std::io::Write;

use pretty_assertions::assert_eq;
use rig_catalog::{Catalog, CatalogError};
use rig_compat::{evaluate, total_cost};
use rig_core::enums::{Severity, UseCase};

const TOML_CATALOG: &str = r#"
[[cpus]]
id = "cpu-a"
name = "Chip A"
brand = "Acme"
price = 200.0
socket = "AM5"
cores = 6
threads = 12
tdp = 65
integratedGraphics = false

[cpus.specs]
Cores = 6
Boost = "4.8 GHz"

[[motherboards]]
id = "mb-a"
name = "Board A"
brand = "Acme"
price = 150.0
socket = "LGA1700"
chipset = "B760"
ramType = "DDR5"
maxRamSpeed = 5600
formFactor = "ATX"

[[examples]]
useCase = "office"
budget = 600.0
cpu = "cpu-a"
motherboard = "mb-a"
"#;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn loads_toml_catalog_from_disk() {
    let file = write_temp(".toml", TOML_CATALOG);
    let catalog = Catalog::from_path(file.path()).expect("toml catalog loads");

    assert_eq!(catalog.cpus.len(), 1);
    assert_eq!(catalog.cpus[0].info.specs.len(), 2);
    assert_eq!(catalog.motherboards[0].ram_type, "DDR5");

    let build = catalog.example_build(0).expect("example resolves");
    assert_eq!(build.use_case, UseCase::Office);
    let issues = evaluate(&build);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert!(issues[0].message.contains("LGA1700"));
}

#[test]
fn loads_json_catalog_from_disk() {
    let json = r#"{"cases": [{"id": "c", "name": "C", "brand": "B", "price": 50,
                   "formFactor": "ATX", "maxGPULength": 320}]}"#;
    let file = write_temp(".json", json);
    let catalog = Catalog::from_path(file.path()).expect("json catalog loads");
    assert_eq!(catalog.cases[0].max_gpu_length, 320);
    assert!(catalog.examples.is_empty());
}

#[test]
fn unknown_extension_is_rejected() {
    let file = write_temp(".yaml", "cpus: []");
    let err = Catalog::from_path(file.path()).expect_err("yaml is unsupported");
    assert!(matches!(err, CatalogError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.json");
    let err = Catalog::from_path(&path).expect_err("file does not exist");
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn gallery_entry_with_unknown_id_fails_validation() {
    let json = r#"{"examples": [{"useCase": "gaming", "budget": 1000, "cpu": "ghost"}]}"#;
    let err = Catalog::from_json_str(json).expect_err("ghost cpu");
    assert_eq!(err.to_string(), "Unknown cpu component: ghost");
}

#[test]
fn builtin_gallery_matches_known_outcomes() {
    let catalog = Catalog::builtin().expect("built-in catalog");
    let builds = catalog.example_builds().expect("gallery resolves");
    assert_eq!(builds.len(), 4);
    assert!(builds.iter().all(rig_core::entities::Build::is_complete));

    let use_cases: Vec<_> = builds.iter().map(|b| b.use_case).collect();
    assert_eq!(
        use_cases,
        [
            UseCase::Gaming,
            UseCase::ContentCreation,
            UseCase::Office,
            UseCase::Gaming
        ]
    );

    assert!(evaluate(&builds[0]).is_empty());
    assert!(evaluate(&builds[1]).is_empty());
    assert!(evaluate(&builds[3]).is_empty());

    // The office example pairs DDR4 memory with a DDR5 board.
    let office = evaluate(&builds[2]);
    assert_eq!(office.len(), 1);
    assert_eq!(
        office[0].message,
        "RAM type DDR4 is not compatible with motherboard (requires DDR5)"
    );

    assert_eq!(total_cost(&builds[0]), 1653.0);
    assert_eq!(total_cost(&builds[1]), 2263.0);
    assert_eq!(total_cost(&builds[2]), 923.0);
}
