//! Part builders shared by the engine integration tests.

#![allow(dead_code)]

use rig_core::entities::*;
use rig_core::enums::{StorageKind, UseCase};

pub fn info(id: &str, price: f64) -> ComponentInfo {
    ComponentInfo {
        id: id.into(),
        name: format!("Part {id}"),
        brand: "Acme".into(),
        price,
        image: String::new(),
        specs: Specs::new(),
    }
}

pub fn cpu(socket: &str, tdp: u32) -> Cpu {
    Cpu {
        info: info("cpu", 300.0),
        socket: socket.into(),
        cores: 8,
        threads: 16,
        tdp,
        integrated_graphics: true,
    }
}

pub fn gpu(length: u32, tdp: u32) -> Gpu {
    Gpu {
        info: info("gpu", 600.0),
        vram: 12,
        tdp,
        length,
        performance: 70.0,
    }
}

pub fn motherboard(socket: &str, ram_type: &str, max_ram_speed: u32) -> Motherboard {
    Motherboard {
        info: info("mb", 200.0),
        socket: socket.into(),
        chipset: "B650".into(),
        ram_type: ram_type.into(),
        max_ram_speed,
        form_factor: "ATX".into(),
    }
}

pub fn ram(ram_type: &str, speed: u32) -> Ram {
    Ram {
        info: info("ram", 100.0),
        ram_type: ram_type.into(),
        speed,
        capacity: 32.0,
    }
}

pub fn storage() -> Storage {
    Storage {
        info: info("storage", 90.0),
        kind: StorageKind::Nvme,
        capacity: 1000.0,
        read: 3500,
        write: 3300,
    }
}

pub fn psu(wattage: u32) -> Psu {
    Psu {
        info: info("psu", 110.0),
        wattage,
        efficiency: "80+ Gold".into(),
        modular: true,
    }
}

pub fn case(max_gpu_length: u32) -> Case {
    Case {
        info: info("case", 95.0),
        form_factor: "ATX".into(),
        max_gpu_length,
    }
}

pub fn empty() -> Build {
    Build::new(UseCase::Gaming, 1500.0)
}

/// Every slot filled with mutually compatible parts.
pub fn compatible() -> Build {
    Build {
        cpu: Some(cpu("AM5", 120)),
        gpu: Some(gpu(300, 200)),
        motherboard: Some(motherboard("AM5", "DDR5", 6400)),
        ram: Some(ram("DDR5", 6000)),
        storage: Some(storage()),
        psu: Some(psu(750)),
        case: Some(case(360)),
        ..empty()
    }
}
