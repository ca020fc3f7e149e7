//! Property tests for the command input

use proptest::prelude::*;

use quimikey_core::{GRID_COLS, GRID_ROWS};
use quimikey_protocol::{LineBuffer, RemoteCommand};

proptest! {
    #[test]
    fn select_always_lands_on_grid(row in any::<i32>(), col in any::<i32>()) {
        let line = format!("SEL {} {}", row, col);
        match RemoteCommand::parse(&line) {
            Ok(RemoteCommand::Select(position)) => {
                prop_assert!((position.row() as usize) < GRID_ROWS);
                prop_assert!((position.col() as usize) < GRID_COLS);
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn arbitrary_input_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut lines = LineBuffer::<32>::new();
        for byte in bytes {
            if let Ok(Some(line)) = lines.feed(byte) {
                prop_assert!(line.len() <= 32);
                prop_assert!(!line.contains('\n'));
                let _ = RemoteCommand::parse(&line);
            }
        }
    }
}
