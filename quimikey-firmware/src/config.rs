//! Panel configuration loading
//!
//! The configuration is embedded at build time from panel.toml (which
//! build.rs has already checked) and parsed with the core no_std parser.

use defmt::*;

use quimikey_core::config::{parse_config, PanelConfig};

/// Embedded configuration (compiled into firmware)
/// Edit panel.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../panel.toml");

/// Parse and validate the embedded configuration
///
/// Falls back to built-in defaults if either step fails.
pub fn load() -> PanelConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("panel.toml line {}: {:?}, using defaults", e.line, e.kind);
            return PanelConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        warn!("panel.toml rejected: {:?}, using defaults", e);
        return PanelConfig::default();
    }

    info!(
        "Config: debounce={}ms poll={}ms deadzone={} repeat={}ms",
        config.keypad.debounce_ms,
        config.poll_interval_ms,
        config.joystick.deadzone,
        config.joystick.repeat_ms
    );
    config
}
