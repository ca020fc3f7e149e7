//! Panel configuration
//!
//! Timing and threshold settings for the input pipeline plus the few
//! board-level parameters the firmware needs (LCD geometry, serial speed).
//!
//! The on-device format is a small TOML subset parsed without allocation:
//!
//! ```toml
//! [keypad]
//! debounce_ms = 50
//!
//! [joystick]
//! center = 2048
//! deadzone = 600
//! repeat_ms = 250
//! invert_y = false
//! ```
//!
//! Supported: `[section]` headers, `key = value` pairs with decimal or
//! `0x` hex integers and booleans, `#` comments. Anything else is rejected.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keypad scanning settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeypadConfig {
    /// Minimum time a closure must hold before it counts as a press
    pub debounce_ms: u32,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self { debounce_ms: 50 }
    }
}

/// Joystick settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoystickConfig {
    /// Rest reading used until the stick is calibrated (12-bit ADC midpoint)
    pub center: u16,
    /// Displacement from rest treated as no input
    pub deadzone: u16,
    /// Auto-repeat interval while the stick is held over
    pub repeat_ms: u32,
    /// Flip the horizontal axis
    pub invert_x: bool,
    /// Flip the vertical axis
    pub invert_y: bool,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            center: 2048,
            deadzone: 600,
            repeat_ms: 250,
            invert_x: false,
            invert_y: false,
        }
    }
}

/// Character LCD settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LcdConfig {
    /// 7-bit I2C address of the PCF8574 backpack
    pub address: u8,
    pub columns: u8,
    pub rows: u8,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            address: 0x27,
            columns: 16,
            rows: 2,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    pub keypad: KeypadConfig,
    pub joystick: JoystickConfig,
    /// Polling cycle period
    pub poll_interval_ms: u32,
    pub lcd: LcdConfig,
    /// Telemetry/command UART speed
    pub baudrate: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            keypad: KeypadConfig::default(),
            joystick: JoystickConfig::default(),
            poll_interval_ms: 5,
            lcd: LcdConfig::default(),
            baudrate: 115_200,
        }
    }
}

/// Semantic configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce window is zero or longer than a second
    DebounceOutOfRange,
    /// Deadzone leaves no usable travel around the center
    DeadzoneOutOfRange,
    /// Repeat interval is zero
    RepeatIntervalZero,
    /// Polling period is zero or not shorter than the debounce window
    PollIntervalOutOfRange,
    /// LCD geometry unsupported
    LcdGeometry,
    /// Baud rate is zero
    BaudRateZero,
}

/// Highest 12-bit ADC reading
const ADC_MAX: u16 = 4095;

impl PanelConfig {
    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keypad.debounce_ms == 0 || self.keypad.debounce_ms > 1000 {
            return Err(ConfigError::DebounceOutOfRange);
        }

        let center = self.joystick.center.min(ADC_MAX);
        let travel = center.min(ADC_MAX - center);
        if self.joystick.deadzone == 0 || self.joystick.deadzone >= travel {
            return Err(ConfigError::DeadzoneOutOfRange);
        }

        if self.joystick.repeat_ms == 0 {
            return Err(ConfigError::RepeatIntervalZero);
        }

        // Debounce needs at least two samples inside the window
        if self.poll_interval_ms == 0 || self.poll_interval_ms >= self.keypad.debounce_ms {
            return Err(ConfigError::PollIntervalOutOfRange);
        }

        if !(8..=40).contains(&self.lcd.columns) || !(1..=4).contains(&self.lcd.rows) {
            return Err(ConfigError::LcdGeometry);
        }

        if self.baudrate == 0 {
            return Err(ConfigError::BaudRateZero);
        }

        Ok(())
    }
}

/// Parse error with the 1-based line it occurred on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Parse error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// Invalid or unknown section header
    InvalidSection,
    /// Line is neither a header nor `key = value`
    Syntax,
    /// Key not valid in the current section
    UnknownKey,
    /// Value has the wrong type or does not fit
    InvalidValue,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Keypad,
    Joystick,
    Panel,
    Lcd,
    Serial,
}

/// Parse configuration text, starting from defaults
pub fn parse_config(input: &str) -> Result<PanelConfig, ParseError> {
    let mut config = PanelConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let err = |kind| ParseError {
            line: line_no,
            kind,
        };

        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(err(ParseErrorKind::InvalidSection));
            }
            section = parse_section_header(&line[1..line.len() - 1])
                .ok_or(err(ParseErrorKind::InvalidSection))?;
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(err(ParseErrorKind::Syntax))?;
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return Err(err(ParseErrorKind::Syntax));
        }

        apply_key(&mut config, section, key, value).map_err(err)?;
    }

    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(name: &str) -> Option<Section> {
    match name.trim() {
        "keypad" => Some(Section::Keypad),
        "joystick" => Some(Section::Joystick),
        "panel" => Some(Section::Panel),
        "lcd" => Some(Section::Lcd),
        "serial" => Some(Section::Serial),
        _ => None,
    }
}

fn apply_key(
    config: &mut PanelConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseErrorKind> {
    match (section, key) {
        (Section::Keypad, "debounce_ms") => config.keypad.debounce_ms = parse_int(value)?,

        (Section::Joystick, "center") => config.joystick.center = parse_int(value)?,
        (Section::Joystick, "deadzone") => config.joystick.deadzone = parse_int(value)?,
        (Section::Joystick, "repeat_ms") => config.joystick.repeat_ms = parse_int(value)?,
        (Section::Joystick, "invert_x") => config.joystick.invert_x = parse_bool(value)?,
        (Section::Joystick, "invert_y") => config.joystick.invert_y = parse_bool(value)?,

        (Section::Panel, "poll_interval_ms") => config.poll_interval_ms = parse_int(value)?,

        (Section::Lcd, "address") => config.lcd.address = parse_int(value)?,
        (Section::Lcd, "columns") => config.lcd.columns = parse_int(value)?,
        (Section::Lcd, "rows") => config.lcd.rows = parse_int(value)?,

        (Section::Serial, "baudrate") => config.baudrate = parse_int(value)?,

        _ => return Err(ParseErrorKind::UnknownKey),
    }
    Ok(())
}

/// Parse a decimal or `0x` hex integer into any unsigned width
fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseErrorKind> {
    let parsed = if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        value.parse::<u32>()
    };
    parsed
        .ok()
        .and_then(|v| T::try_from(v).ok())
        .ok_or(ParseErrorKind::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseErrorKind> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseErrorKind::InvalidValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(PanelConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config(""), Ok(PanelConfig::default()));
        assert_eq!(parse_config("# only a comment\n\n"), Ok(PanelConfig::default()));
    }

    #[test]
    fn test_parse_full_config() {
        let input = "\
# Quimikey panel
[keypad]
debounce_ms = 40

[joystick]
center = 2000      # measured at rest
deadzone = 500
repeat_ms = 300
invert_y = true

[panel]
poll_interval_ms = 4

[lcd]
address = 0x3F
columns = 20
rows = 4

[serial]
baudrate = 9600
";
        let config = parse_config(input).unwrap();
        assert_eq!(config.keypad.debounce_ms, 40);
        assert_eq!(config.joystick.center, 2000);
        assert_eq!(config.joystick.deadzone, 500);
        assert_eq!(config.joystick.repeat_ms, 300);
        assert!(!config.joystick.invert_x);
        assert!(config.joystick.invert_y);
        assert_eq!(config.poll_interval_ms, 4);
        assert_eq!(config.lcd.address, 0x3F);
        assert_eq!(config.lcd.columns, 20);
        assert_eq!(config.lcd.rows, 4);
        assert_eq!(config.baudrate, 9600);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_unknown_section() {
        let err = parse_config("[heater]\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidSection);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_key_in_wrong_section() {
        let err = parse_config("[keypad]\ndeadzone = 10\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownKey);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_key_before_any_section() {
        let err = parse_config("debounce_ms = 10\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownKey);
    }

    #[test]
    fn test_invalid_values() {
        let err = parse_config("[lcd]\naddress = 0x1FF\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidValue);

        let err = parse_config("[joystick]\ninvert_x = yes\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidValue);

        let err = parse_config("[keypad]\ndebounce_ms = -5\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidValue);
    }

    #[test]
    fn test_syntax_error() {
        let err = parse_config("[keypad]\ndebounce_ms 50\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Syntax);
    }

    #[test]
    fn test_validate_rejects_bad_timing() {
        let mut config = PanelConfig::default();
        config.keypad.debounce_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::DebounceOutOfRange));

        let mut config = PanelConfig::default();
        config.poll_interval_ms = config.keypad.debounce_ms;
        assert_eq!(config.validate(), Err(ConfigError::PollIntervalOutOfRange));

        let mut config = PanelConfig::default();
        config.joystick.repeat_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::RepeatIntervalZero));
    }

    #[test]
    fn test_validate_rejects_wide_deadzone() {
        let mut config = PanelConfig::default();
        config.joystick.deadzone = 2048;
        assert_eq!(config.validate(), Err(ConfigError::DeadzoneOutOfRange));

        let mut config = PanelConfig::default();
        config.joystick.center = 100;
        config.joystick.deadzone = 150;
        assert_eq!(config.validate(), Err(ConfigError::DeadzoneOutOfRange));
    }
}
