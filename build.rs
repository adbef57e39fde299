//! Build script for threshold preset validation
//!
//! This script runs at compile time and validates all threshold preset JSON
//! files so a bad calibration never ships inside the wasm module.

// Include the shared threshold limits
#[path = "src/threshold_limits.rs"]
mod threshold_limits;

use serde::Deserialize;
use std::fs;
use std::path::Path;
use threshold_limits::{angle_in_range, normalized_in_range};

/// Threshold preset from JSON (every field optional, missing ones use defaults)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Preset {
    hand_raise_margin: Option<f32>,
    squat_knee_angle_deg: Option<f32>,
    jump_velocity: Option<f32>,
    jump_posture_distance: Option<f32>,
    clap_distance: Option<f32>,
    clap_height_tolerance: Option<f32>,
    min_visibility: Option<f32>,
}

/// Validate a single preset against the shared limits
fn validate_preset(preset: &Preset) -> Vec<String> {
    let mut errors = Vec::new();

    let check = |errors: &mut Vec<String>, name: &str, value: Option<f32>, ok: fn(f32) -> bool| {
        if let Some(value) = value {
            if !ok(value) {
                errors.push(format!("  {} out of range: {}", name, value));
            }
        }
    };

    check(&mut errors, "hand_raise_margin", preset.hand_raise_margin, normalized_in_range);
    check(&mut errors, "squat_knee_angle_deg", preset.squat_knee_angle_deg, angle_in_range);
    check(&mut errors, "jump_velocity", preset.jump_velocity, normalized_in_range);
    check(&mut errors, "jump_posture_distance", preset.jump_posture_distance, normalized_in_range);
    check(&mut errors, "clap_distance", preset.clap_distance, normalized_in_range);
    check(&mut errors, "clap_height_tolerance", preset.clap_height_tolerance, normalized_in_range);
    check(&mut errors, "min_visibility", preset.min_visibility, normalized_in_range);

    errors
}

/// Validate a preset file
fn validate_preset_file(path: &Path) -> Result<(), String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let preset: Preset = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    let errors = validate_preset(&preset);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Preset '{}' has invalid thresholds:\n{}",
            path.display(),
            errors.join("\n")
        ))
    }
}

fn main() {
    let preset_dir = Path::new("presets");

    if !preset_dir.exists() {
        println!("cargo:warning=Preset directory not found, skipping validation");
        return;
    }

    // Rerun if shared limits change
    println!("cargo:rerun-if-changed=src/threshold_limits.rs");

    let mut has_errors = false;

    if let Ok(entries) = fs::read_dir(preset_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                println!("cargo:rerun-if-changed={}", path.display());

                if let Err(e) = validate_preset_file(&path) {
                    println!("cargo:warning=VALIDATION ERROR: {}", e);
                    has_errors = true;
                }
            }
        }
    }

    if has_errors {
        panic!("Threshold preset validation failed! Fix the values in presets/.");
    }

    println!("cargo:rerun-if-changed={}", preset_dir.display());
}
