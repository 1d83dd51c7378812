//! Mark balance invariant: X is never behind O and never more than one ahead.

use super::super::{Cell, GameState, Mark};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let count = |mark| {
            state
                .board()
                .cells()
                .iter()
                .filter(|cell| **cell == Cell::Marked(mark))
                .count()
        };
        let (x, o) = (count(Mark::X), count(Mark::O));
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X marks minus O marks is 0 or 1"
    }
}
