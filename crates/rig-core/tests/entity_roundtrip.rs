//! Serde roundtrip and JsonSchema validation tests for all entity types.

use pretty_assertions::assert_eq;
use rig_core::entities::*;
use rig_core::enums::*;
use rig_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn info(id: &str, name: &str, brand: &str, price: f64) -> ComponentInfo {
    ComponentInfo {
        id: id.into(),
        name: name.into(),
        brand: brand.into(),
        price,
        image: format!("/images/{id}.png"),
        specs: Specs::new()
            .with("Boost", SpecValue::Text("5.0 GHz".into()))
            .with("Cache", SpecValue::Number(96.0)),
    }
}

fn ryzen() -> Cpu {
    Cpu {
        info: info("cpu-2", "Ryzen 7 7800X3D", "AMD", 449.0),
        socket: "AM5".into(),
        cores: 8,
        threads: 16,
        tdp: 120,
        integrated_graphics: true,
    }
}

fn full_build() -> Build {
    Build {
        use_case: UseCase::Gaming,
        budget: 1500.0,
        cpu: Some(ryzen()),
        gpu: Some(Gpu {
            info: info("gpu-2", "GeForce RTX 4070", "NVIDIA", 549.0),
            vram: 12,
            tdp: 200,
            length: 285,
            performance: 75.0,
        }),
        motherboard: Some(Motherboard {
            info: info("mb-1", "ROG Strix B650-A", "ASUS", 259.0),
            socket: "AM5".into(),
            chipset: "B650".into(),
            ram_type: "DDR5".into(),
            max_ram_speed: 6400,
            form_factor: "ATX".into(),
        }),
        ram: Some(Ram {
            info: info("ram-2", "Trident Z5 32GB", "G.Skill", 119.0),
            ram_type: "DDR5".into(),
            speed: 6000,
            capacity: 32.0,
        }),
        storage: Some(Storage {
            info: info("st-1", "970 EVO Plus 1TB", "Samsung", 89.0),
            kind: StorageKind::Nvme,
            capacity: 1000.0,
            read: 3500,
            write: 3300,
        }),
        psu: Some(Psu {
            info: info("psu-2", "RM750e", "Corsair", 99.0),
            wattage: 750,
            efficiency: "80+ Gold".into(),
            modular: true,
        }),
        case: Some(Case {
            info: info("case-1", "H510 Flow", "NZXT", 89.0),
            form_factor: "ATX".into(),
            max_gpu_length: 360,
        }),
    }
}

roundtrip_and_validate!(cpu_roundtrip, Cpu, ryzen());

roundtrip_and_validate!(full_build_roundtrip, Build, full_build());

roundtrip_and_validate!(
    empty_build_roundtrip,
    Build,
    Build::new(UseCase::ContentCreation, 2500.0)
);

roundtrip_and_validate!(
    issue_roundtrip,
    CompatibilityIssue,
    CompatibilityIssue::warning("PSU", "PSU wattage 550W may be insufficient.")
);

roundtrip_and_validate!(
    summary_roundtrip,
    BuildSummary,
    BuildSummary {
        use_case: UseCase::Office,
        budget: 800.0,
        tier: PerformanceTier::MidRange,
        total_cost: 1203.5,
        total_power_draw: 180,
        recommended_wattage: Some(270),
        issues: vec![CompatibilityIssue::error(
            "RAM/Motherboard",
            "RAM type DDR4 is not compatible with motherboard (requires DDR5)",
        )],
        error_count: 1,
        warning_count: 0,
        slots: vec![
            SlotSummary {
                slot: Slot::Cpu,
                label: "CPU".into(),
                component: Some("Ryzen 5 7600".into()),
                price: Some(229.0),
            },
            SlotSummary {
                slot: Slot::Case,
                label: "Case".into(),
                component: None,
                price: None,
            },
        ],
        complete: false,
        all_compatible: false,
        exportable: false,
        budget_overrun: Some(403.5),
    }
);

roundtrip_and_validate!(tier_roundtrip, TierResponse, TierResponse::for_budget(3000.0));

#[test]
fn build_uses_configurator_field_names() {
    let value = serde_json::to_value(full_build()).unwrap();

    assert_eq!(value["useCase"], "gaming");
    assert_eq!(value["cpu"]["integratedGraphics"], true);
    assert_eq!(value["motherboard"]["ramType"], "DDR5");
    assert_eq!(value["motherboard"]["maxRamSpeed"], 6400);
    assert_eq!(value["ram"]["type"], "DDR5");
    assert_eq!(value["storage"]["type"], "NVME");
    assert_eq!(value["case"]["maxGPULength"], 360);
    assert_eq!(value["case"]["formFactor"], "ATX");
    // Base fields are flattened, not nested.
    assert_eq!(value["gpu"]["name"], "GeForce RTX 4070");
    assert!(value["gpu"].get("info").is_none());
}

#[test]
fn issue_severity_is_written_as_type() {
    let value = serde_json::to_value(CompatibilityIssue::error("GPU/Case", "too long")).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"type": "error", "component": "GPU/Case", "message": "too long"})
    );
}

#[test]
fn schema_rejects_unknown_storage_kind() {
    let schema = serde_json::to_value(schema_for!(Storage)).unwrap();
    let mut instance = serde_json::to_value(full_build().storage.unwrap()).unwrap();
    instance["type"] = serde_json::json!("TAPE");
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty());
}

#[test]
fn fractional_capacity_and_performance_decode() {
    let json = serde_json::json!({
        "id": "st-tiny", "name": "Half TB", "brand": "B", "price": 30,
        "type": "SSD", "capacity": 0.5, "read": 550, "write": 500
    });
    let storage: Storage = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(storage.capacity, 0.5);

    let schema = serde_json::to_value(schema_for!(Storage)).unwrap();
    assert!(validate_against_schema(&schema, &json).is_empty());

    let gpu: Gpu = serde_json::from_value(serde_json::json!({
        "id": "gpu-x", "name": "X", "brand": "B", "price": 300,
        "vram": 8, "tdp": 150, "length": 250, "performance": 62.5
    }))
    .unwrap();
    assert_eq!(gpu.performance, 62.5);
}

#[test]
fn empty_spec_array_passes_build_schema_and_decodes() {
    let mut instance = serde_json::to_value(full_build()).unwrap();
    instance["psu"]["specs"] = serde_json::json!([]);

    let schema = serde_json::to_value(schema_for!(Build)).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "{errors:?}");

    let build: Build = serde_json::from_value(instance).unwrap();
    assert!(build.psu.unwrap().info.specs.is_empty());
}
