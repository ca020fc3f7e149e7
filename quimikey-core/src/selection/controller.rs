//! Selection controller
//!
//! Owns the current position and view mode. Each call to
//! [`SelectionController::step`] consumes the proposals of one polling cycle,
//! applies at most one positional change, and drives the sinks if anything
//! is owed.

use super::machine::{SelectionEvent, SelectionState};
use super::ViewMode;
use crate::catalog::Catalog;
use crate::grid::GridPosition;
use crate::input::Cycle;
use crate::traits::{DisplaySink, TelemetrySink};

/// Error from one of the output sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError<D, T> {
    /// Display failed to render or clear
    Display(D),
    /// Telemetry report could not be sent
    Telemetry(T),
}

/// Record of one flush
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Refresh {
    /// State that was flushed (`Moved` or `Selected`)
    pub state: SelectionState,
    pub position: GridPosition,
    pub mode: ViewMode,
    /// The cell holds an element
    pub occupied: bool,
    /// A telemetry report was sent
    pub emitted: bool,
}

/// Arbitrates input proposals and drives the display and telemetry
pub struct SelectionController<'a, C, D, T> {
    catalog: &'a C,
    display: &'a mut D,
    telemetry: &'a mut T,
    state: SelectionState,
    position: GridPosition,
    mode: ViewMode,
}

impl<'a, C, D, T> SelectionController<'a, C, D, T>
where
    C: Catalog,
    D: DisplaySink,
    T: TelemetrySink,
{
    /// Create a controller at the origin in basic view
    pub fn new(catalog: &'a C, display: &'a mut D, telemetry: &'a mut T) -> Self {
        Self {
            catalog,
            display,
            telemetry,
            state: SelectionState::Idle,
            position: GridPosition::ORIGIN,
            mode: ViewMode::Basic,
        }
    }

    /// Blank the display before the first cycle
    pub fn initialize(&mut self) -> Result<(), SinkError<D::Error, T::Error>> {
        self.display.clear().map_err(SinkError::Display)
    }

    /// Current cell
    pub fn position(&self) -> GridPosition {
        self.position
    }

    /// Current view mode
    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    /// Current selection state
    ///
    /// Always `Idle` between cycles.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Process one polling cycle
    ///
    /// Returns `Ok(None)` when nothing changed.
    pub fn step(&mut self, cycle: Cycle) -> Result<Option<Refresh>, SinkError<D::Error, T::Error>> {
        if cycle.toggle_view {
            self.mode = self.mode.toggled();
            self.apply(SelectionEvent::ToggleView);
        }

        // Only the highest-priority positional proposal is honored
        if let Some(key) = cycle.key {
            self.position = key.position();
            self.apply(SelectionEvent::KeySelect);
        } else if let Some(target) = cycle.remote {
            self.position = target;
            self.apply(SelectionEvent::RemoteSelect);
        } else if cycle.confirm {
            self.apply(SelectionEvent::Confirm);
        } else if let Some(direction) = cycle.stick {
            let candidate = self.position.step(direction);
            if candidate != self.position {
                self.position = candidate;
                self.apply(SelectionEvent::Navigate);
            }
        }

        self.flush()
    }

    fn apply(&mut self, event: SelectionEvent) {
        self.state = self.state.transition(event);
    }

    /// Drive the sinks for a pending change
    fn flush(&mut self) -> Result<Option<Refresh>, SinkError<D::Error, T::Error>> {
        let state = self.state;
        if !state.is_pending() {
            return Ok(None);
        }
        // Back to idle first so a failed sink is not driven again
        self.apply(SelectionEvent::Flushed);

        let catalog = self.catalog;
        let position = self.position;
        let element = catalog.lookup(position);

        self.display
            .render(position, self.mode, element)
            .map_err(SinkError::Display)?;

        let mut emitted = false;
        if state == SelectionState::Selected {
            if let Some(element) = element {
                self.telemetry
                    .emit(element, position)
                    .map_err(SinkError::Telemetry)?;
                emitted = true;
            }
        }

        Ok(Some(Refresh {
            state,
            position,
            mode: self.mode,
            occupied: element.is_some(),
            emitted,
        }))
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use core::convert::Infallible;

    use super::*;
    use crate::catalog::{Element, PERIODIC_TABLE};
    use crate::grid::Direction;
    use crate::input::KeyEvent;

    /// Built-in table with optional holes, counting lookups
    struct CountingCatalog {
        holes: &'static [(u8, u8)],
        /// Cell forced to hold an element even if the table has none
        filled: Option<(u8, u8)>,
        lookups: Cell<usize>,
    }

    impl CountingCatalog {
        fn new() -> Self {
            Self {
                holes: &[],
                filled: None,
                lookups: Cell::new(0),
            }
        }
    }

    impl Catalog for CountingCatalog {
        fn lookup(&self, position: GridPosition) -> Option<&Element> {
            self.lookups.set(self.lookups.get() + 1);
            let cell = (position.row(), position.col());
            if self.holes.contains(&cell) {
                return None;
            }
            if self.filled == Some(cell) {
                return PERIODIC_TABLE.lookup(GridPosition::ORIGIN);
            }
            PERIODIC_TABLE.lookup(position)
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        renders: usize,
        clears: usize,
        last: Option<(GridPosition, ViewMode, Option<u8>)>,
        fail: bool,
    }

    impl DisplaySink for RecordingDisplay {
        type Error = ();

        fn render(
            &mut self,
            position: GridPosition,
            mode: ViewMode,
            element: Option<&Element>,
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(());
            }
            self.renders += 1;
            self.last = Some((position, mode, element.map(|e| e.atomic_number)));
            Ok(())
        }

        fn clear(&mut self) -> Result<(), Self::Error> {
            self.clears += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingTelemetry {
        emits: usize,
        last: Option<(u8, GridPosition)>,
    }

    impl TelemetrySink for RecordingTelemetry {
        type Error = Infallible;

        fn emit(&mut self, element: &Element, position: GridPosition) -> Result<(), Self::Error> {
            self.emits += 1;
            self.last = Some((element.atomic_number, position));
            Ok(())
        }
    }

    fn pos(row: u8, col: u8) -> GridPosition {
        GridPosition::new(row, col).unwrap()
    }

    fn key(row: u8, col: u8) -> Cycle {
        Cycle {
            key: Some(KeyEvent { row, col, at_ms: 0 }),
            ..Cycle::default()
        }
    }

    fn stick(direction: Direction) -> Cycle {
        Cycle {
            stick: Some(direction),
            ..Cycle::default()
        }
    }

    fn toggle() -> Cycle {
        Cycle {
            toggle_view: true,
            ..Cycle::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let catalog = CountingCatalog::new();
        let mut display = RecordingDisplay::default();
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        ctrl.initialize().unwrap();
        assert_eq!(ctrl.position(), GridPosition::ORIGIN);
        assert_eq!(ctrl.view_mode(), ViewMode::Basic);
        assert_eq!(ctrl.state(), SelectionState::Idle);
        drop(ctrl);

        assert_eq!(display.clears, 1);
        assert_eq!(display.renders, 0);
    }

    #[test]
    fn test_keypad_select_renders_and_emits() {
        let catalog = CountingCatalog {
            filled: Some((2, 5)),
            ..CountingCatalog::new()
        };
        let mut display = RecordingDisplay::default();
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        let refresh = ctrl.step(key(2, 5)).unwrap().unwrap();
        assert_eq!(refresh.state, SelectionState::Selected);
        assert_eq!(refresh.position, pos(2, 5));
        assert!(refresh.occupied);
        assert!(refresh.emitted);
        assert_eq!(ctrl.state(), SelectionState::Idle);
        assert_eq!(ctrl.position(), pos(2, 5));
        drop(ctrl);

        assert_eq!(display.renders, 1);
        assert_eq!(display.last, Some((pos(2, 5), ViewMode::Basic, Some(1))));
        assert_eq!(telemetry.emits, 1);
        assert_eq!(telemetry.last, Some((1, pos(2, 5))));
    }

    #[test]
    fn test_up_at_top_row_is_noop() {
        let catalog = CountingCatalog::new();
        let mut display = RecordingDisplay::default();
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        assert_eq!(ctrl.step(stick(Direction::Up)).unwrap(), None);
        assert_eq!(ctrl.step(stick(Direction::Left)).unwrap(), None);
        assert_eq!(ctrl.position(), GridPosition::ORIGIN);
        drop(ctrl);

        assert_eq!(display.renders, 0);
        assert_eq!(catalog.lookups.get(), 0);
    }

    #[test]
    fn test_empty_cell_then_move_to_element() {
        let catalog = CountingCatalog {
            holes: &[(4, 10)],
            ..CountingCatalog::new()
        };
        let mut display = RecordingDisplay::default();
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        // Selecting an empty cell shows it but reports nothing
        let refresh = ctrl.step(key(4, 10)).unwrap().unwrap();
        assert!(!refresh.occupied);
        assert!(!refresh.emitted);

        let refresh = ctrl.step(stick(Direction::Right)).unwrap().unwrap();
        assert_eq!(refresh.state, SelectionState::Moved);
        assert_eq!(refresh.position, pos(4, 11));
        assert!(refresh.occupied);
        assert!(!refresh.emitted);
        drop(ctrl);

        assert_eq!(display.renders, 2);
        // Cadmium
        assert_eq!(display.last, Some((pos(4, 11), ViewMode::Basic, Some(48))));
        assert_eq!(telemetry.emits, 0);
    }

    #[test]
    fn test_keypad_beats_joystick() {
        let catalog = CountingCatalog::new();
        let mut display = RecordingDisplay::default();
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        let cycle = Cycle {
            stick: Some(Direction::Right),
            ..key(3, 7)
        };
        let refresh = ctrl.step(cycle).unwrap().unwrap();
        assert_eq!(refresh.position, pos(3, 7));
        assert_eq!(refresh.state, SelectionState::Selected);

        // The discarded move is not replayed
        assert_eq!(ctrl.step(Cycle::default()).unwrap(), None);
        assert_eq!(ctrl.position(), pos(3, 7));
    }

    #[test]
    fn test_keypad_beats_remote_select() {
        let catalog = CountingCatalog::new();
        let mut display = RecordingDisplay::default();
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        let cycle = Cycle {
            remote: Some(pos(6, 17)),
            ..key(1, 0)
        };
        let refresh = ctrl.step(cycle).unwrap().unwrap();
        assert_eq!(refresh.position, pos(1, 0));
    }

    #[test]
    fn test_remote_select_beats_confirm() {
        let catalog = CountingCatalog::new();
        let mut display = RecordingDisplay::default();
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        let cycle = Cycle {
            remote: Some(pos(0, 17)),
            confirm: true,
            stick: Some(Direction::Down),
            ..Cycle::default()
        };
        let refresh = ctrl.step(cycle).unwrap().unwrap();
        assert_eq!(refresh.position, pos(0, 17));
        assert!(refresh.emitted);
        drop(ctrl);

        assert_eq!(telemetry.emits, 1);
        assert_eq!(telemetry.last, Some((2, pos(0, 17))));
    }

    #[test]
    fn test_confirm_reselects_current_cell() {
        let catalog = CountingCatalog::new();
        let mut display = RecordingDisplay::default();
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        ctrl.step(stick(Direction::Down)).unwrap();
        let confirm = Cycle {
            confirm: true,
            ..Cycle::default()
        };
        let refresh = ctrl.step(confirm).unwrap().unwrap();
        assert_eq!(refresh.state, SelectionState::Selected);
        assert_eq!(refresh.position, pos(1, 0));
        drop(ctrl);

        // Lithium
        assert_eq!(telemetry.last, Some((3, pos(1, 0))));
        assert_eq!(display.renders, 2);
    }

    #[test]
    fn test_toggle_twice_restores_view() {
        let catalog = CountingCatalog::new();
        let mut display = RecordingDisplay::default();
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        let refresh = ctrl.step(toggle()).unwrap().unwrap();
        assert_eq!(refresh.state, SelectionState::Moved);
        assert_eq!(refresh.mode, ViewMode::Detailed);
        assert_eq!(refresh.position, GridPosition::ORIGIN);

        let refresh = ctrl.step(toggle()).unwrap().unwrap();
        assert_eq!(refresh.mode, ViewMode::Basic);
        assert_eq!(ctrl.position(), GridPosition::ORIGIN);
        drop(ctrl);

        assert_eq!(telemetry.emits, 0);
        assert_eq!(display.last, Some((GridPosition::ORIGIN, ViewMode::Basic, Some(1))));
    }

    #[test]
    fn test_toggle_applies_before_selection() {
        let catalog = CountingCatalog::new();
        let mut display = RecordingDisplay::default();
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        let cycle = Cycle {
            toggle_view: true,
            ..key(3, 7)
        };
        let refresh = ctrl.step(cycle).unwrap().unwrap();
        assert_eq!(refresh.state, SelectionState::Selected);
        assert_eq!(refresh.mode, ViewMode::Detailed);
        drop(ctrl);

        assert_eq!(display.renders, 1);
        assert_eq!(display.last, Some((pos(3, 7), ViewMode::Detailed, Some(26))));
    }

    #[test]
    fn test_one_lookup_per_transition() {
        let catalog = CountingCatalog::new();
        let mut display = RecordingDisplay::default();
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        ctrl.step(key(3, 7)).unwrap();
        assert_eq!(catalog.lookups.get(), 1);

        ctrl.step(Cycle::default()).unwrap();
        assert_eq!(catalog.lookups.get(), 1);

        let busy = Cycle {
            toggle_view: true,
            confirm: true,
            stick: Some(Direction::Up),
            ..Cycle::default()
        };
        ctrl.step(busy).unwrap();
        assert_eq!(catalog.lookups.get(), 2);

        ctrl.step(stick(Direction::Up)).unwrap();
        assert_eq!(catalog.lookups.get(), 3);
    }

    #[test]
    fn test_display_error_propagates_once() {
        let catalog = CountingCatalog::new();
        let mut display = RecordingDisplay {
            fail: true,
            ..RecordingDisplay::default()
        };
        let mut telemetry = RecordingTelemetry::default();
        let mut ctrl = SelectionController::new(&catalog, &mut display, &mut telemetry);

        assert_eq!(ctrl.step(key(0, 0)), Err(SinkError::Display(())));
        assert_eq!(ctrl.state(), SelectionState::Idle);
        // Not retried on the next cycle
        assert_eq!(ctrl.step(Cycle::default()), Ok(None));
        drop(ctrl);

        assert_eq!(telemetry.emits, 0);
    }
}
