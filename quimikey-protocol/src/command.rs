//! Host commands
//!
//! Parsed from one line of the command input, then folded into the
//! current polling cycle as if the matching panel input had been used.

use heapless::String;
use quimikey_core::catalog::ElementTable;
use quimikey_core::input::Cycle;
use quimikey_core::GridPosition;

/// Longest element symbol
pub const MAX_SYMBOL_LEN: usize = 3;

/// A command received from the host
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemoteCommand {
    /// Select a cell by coordinates
    Select(GridPosition),
    /// Select an element by symbol
    Symbol(String<MAX_SYMBOL_LEN>),
    /// Select an element by atomic number
    Number(u8),
    /// Toggle the view mode
    ToggleView,
    /// Re-select the current cell
    Info,
}

/// Errors from command parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Line was blank
    Empty,
    /// First word is not a known command
    UnknownCommand,
    /// Required argument is absent
    MissingArgument,
    /// Argument could not be parsed
    InvalidArgument,
    /// More arguments than the command takes
    TrailingInput,
    /// No element has the requested symbol or number
    UnknownElement,
}

impl RemoteCommand {
    /// Parse one command line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_ascii_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?;

        let command = if keyword.eq_ignore_ascii_case("SEL") {
            let row = parse_coordinate(words.next())?;
            let col = parse_coordinate(words.next())?;
            RemoteCommand::Select(GridPosition::clamped(row, col))
        } else if keyword.eq_ignore_ascii_case("SYM") {
            let symbol = words.next().ok_or(CommandError::MissingArgument)?;
            if !symbol.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(CommandError::InvalidArgument);
            }
            let symbol = String::try_from(symbol).map_err(|_| CommandError::InvalidArgument)?;
            RemoteCommand::Symbol(symbol)
        } else if keyword.eq_ignore_ascii_case("NUM") {
            let number = words
                .next()
                .ok_or(CommandError::MissingArgument)?
                .parse::<u8>()
                .map_err(|_| CommandError::InvalidArgument)?;
            RemoteCommand::Number(number)
        } else if keyword.eq_ignore_ascii_case("VIEW") {
            RemoteCommand::ToggleView
        } else if keyword.eq_ignore_ascii_case("INFO") {
            RemoteCommand::Info
        } else {
            return Err(CommandError::UnknownCommand);
        };

        if words.next().is_some() {
            return Err(CommandError::TrailingInput);
        }
        Ok(command)
    }

    /// Fold this command into a polling cycle
    ///
    /// Selections by symbol or number are resolved against `table`. A view
    /// toggle merges with the toggle button instead of adding to it.
    pub fn merge_into(&self, cycle: &mut Cycle, table: &ElementTable) -> Result<(), CommandError> {
        match self {
            RemoteCommand::Select(position) => cycle.remote = Some(*position),
            RemoteCommand::Symbol(symbol) => {
                let position = table
                    .locate_symbol(symbol)
                    .ok_or(CommandError::UnknownElement)?;
                cycle.remote = Some(position);
            }
            RemoteCommand::Number(number) => {
                let position = table
                    .locate_number(*number)
                    .ok_or(CommandError::UnknownElement)?;
                cycle.remote = Some(position);
            }
            RemoteCommand::ToggleView => cycle.toggle_view = true,
            RemoteCommand::Info => cycle.confirm = true,
        }
        Ok(())
    }
}

fn parse_coordinate(word: Option<&str>) -> Result<i32, CommandError> {
    word.ok_or(CommandError::MissingArgument)?
        .parse::<i32>()
        .map_err(|_| CommandError::InvalidArgument)
}
