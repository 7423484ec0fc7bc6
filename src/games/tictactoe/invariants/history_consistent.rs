//! History consistency invariant: history length matches marked cells.

use super::super::Game;
use super::Invariant;

/// Invariant: history length equals the number of marked cells.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let marked = game.board().cells().filter(|(_, c)| !c.is_empty()).count();
        game.history().len() == marked
    }

    fn description() -> &'static str {
        "History length matches number of marked cells"
    }
}
