//! Build script for quimikey-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Keys accepted in each section, with their allowed integer range
///
/// Boolean keys use `None` as the range.
const SCHEMA: &[(&str, &[(&str, Option<(i64, i64)>)])] = &[
    ("keypad", &[("debounce_ms", Some((1, 1000)))]),
    (
        "joystick",
        &[
            ("center", Some((0, 4095))),
            ("deadzone", Some((1, 2047))),
            ("repeat_ms", Some((1, 10_000))),
            ("invert_x", None),
            ("invert_y", None),
        ],
    ),
    ("panel", &[("poll_interval_ms", Some((1, 999)))]),
    (
        "lcd",
        &[
            ("address", Some((0x08, 0x77))),
            ("columns", Some((8, 40))),
            ("rows", Some((1, 4))),
        ],
    ),
    ("serial", &[("baudrate", Some((1, 4_000_000)))]),
];

/// Validate panel.toml configuration at compile time
fn validate_config() {
    // Re-run if panel.toml changes
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a panel.toml configuration file.            ║\n\
            ║  Please create one in the quimikey-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in panel.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = validate_sections(&config);
    errors.extend(validate_timing(&config));

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid panel configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=panel.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check every section and key against the schema
fn validate_sections(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return errors,
    };

    for (name, section) in root {
        let Some(keys) = SCHEMA.iter().find(|(s, _)| *s == name.as_str()).map(|(_, k)| *k) else {
            errors.push(format!("unknown section [{}]", name));
            continue;
        };

        let section = match section {
            toml::Value::Table(t) => t,
            _ => {
                errors.push(format!("[{}] must be a table", name));
                continue;
            }
        };

        for (key, value) in section {
            let Some((_, range)) = keys.iter().find(|(k, _)| *k == key.as_str()) else {
                errors.push(format!("[{}] unknown key '{}'", name, key));
                continue;
            };

            match (range, value) {
                (None, toml::Value::Boolean(_)) => {}
                (None, _) => errors.push(format!("[{}] {} must be true or false", name, key)),
                (Some((min, max)), toml::Value::Integer(v)) => {
                    if v < min || v > max {
                        errors.push(format!("[{}] {} must be {}-{}", name, key, min, max));
                    }
                }
                (Some(_), _) => errors.push(format!("[{}] {} must be an integer", name, key)),
            }
        }
    }

    errors
}

/// Cross-field timing constraints
fn validate_timing(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let debounce = config
        .get("keypad")
        .and_then(|k| k.get("debounce_ms"))
        .and_then(|v| v.as_integer())
        .unwrap_or(50);
    let poll = config
        .get("panel")
        .and_then(|p| p.get("poll_interval_ms"))
        .and_then(|v| v.as_integer())
        .unwrap_or(5);

    if poll >= debounce {
        errors.push(format!(
            "poll_interval_ms ({}) must be below debounce_ms ({})",
            poll, debounce
        ));
    }

    errors
}
