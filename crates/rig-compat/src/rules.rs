//! The pairwise compatibility rules, in evaluation order.
//!
//! Each rule returns `None` when one of its slots is empty or the parts agree.

use rig_core::entities::{Build, CompatibilityIssue};

use crate::total_power_draw;

pub(crate) type Rule = fn(&Build) -> Option<CompatibilityIssue>;

/// Evaluation order is part of the output contract.
pub(crate) const RULES: [Rule; 5] = [
    cpu_socket,
    ram_type,
    ram_speed,
    gpu_clearance,
    psu_headroom,
];

/// PSU headroom factor of 1.5, kept as an exact ratio.
pub const PSU_HEADROOM_NUMERATOR: u64 = 3;
pub const PSU_HEADROOM_DENOMINATOR: u64 = 2;

/// Suggested PSU wattage: `ceil((cpu.tdp + gpu.tdp) * 1.5)`.
///
/// `None` when neither a CPU nor a GPU is selected.
#[must_use]
pub fn recommended_wattage(build: &Build) -> Option<u32> {
    if build.cpu.is_none() && build.gpu.is_none() {
        return None;
    }

    let total_tdp = u64::from(total_power_draw(build));
    let watts = (total_tdp * PSU_HEADROOM_NUMERATOR).div_ceil(PSU_HEADROOM_DENOMINATOR);
    Some(u32::try_from(watts).unwrap_or(u32::MAX))
}

fn cpu_socket(build: &Build) -> Option<CompatibilityIssue> {
    let (cpu, board) = (build.cpu.as_ref()?, build.motherboard.as_ref()?);
    (cpu.socket != board.socket).then(|| {
        CompatibilityIssue::error(
            "CPU/Motherboard",
            format!(
                "CPU socket {} is not compatible with motherboard socket {}",
                cpu.socket, board.socket
            ),
        )
    })
}

fn ram_type(build: &Build) -> Option<CompatibilityIssue> {
    let (ram, board) = (build.ram.as_ref()?, build.motherboard.as_ref()?);
    (ram.ram_type != board.ram_type).then(|| {
        CompatibilityIssue::error(
            "RAM/Motherboard",
            format!(
                "RAM type {} is not compatible with motherboard (requires {})",
                ram.ram_type, board.ram_type
            ),
        )
    })
}

// Independent of `ram_type`: a mismatched kit can also be too fast.
fn ram_speed(build: &Build) -> Option<CompatibilityIssue> {
    let (ram, board) = (build.ram.as_ref()?, build.motherboard.as_ref()?);
    (ram.speed > board.max_ram_speed).then(|| {
        CompatibilityIssue::warning(
            "RAM/Motherboard",
            format!(
                "RAM speed {}MHz exceeds motherboard maximum {}MHz. Will run at lower speed.",
                ram.speed, board.max_ram_speed
            ),
        )
    })
}

fn gpu_clearance(build: &Build) -> Option<CompatibilityIssue> {
    let (gpu, case) = (build.gpu.as_ref()?, build.case.as_ref()?);
    (gpu.length > case.max_gpu_length).then(|| {
        CompatibilityIssue::error(
            "GPU/Case",
            format!(
                "GPU length {}mm exceeds case clearance {}mm",
                gpu.length, case.max_gpu_length
            ),
        )
    })
}

fn psu_headroom(build: &Build) -> Option<CompatibilityIssue> {
    let psu = build.psu.as_ref()?;
    let recommended = recommended_wattage(build)?;
    (psu.wattage < recommended).then(|| {
        CompatibilityIssue::warning(
            "PSU",
            format!(
                "PSU wattage {}W may be insufficient. Recommended: {recommended}W or higher",
                psu.wattage
            ),
        )
    })
}
