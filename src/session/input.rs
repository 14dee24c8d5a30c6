//! Player input seam.

use crate::core::PlayerCommand;
use crate::events::MatchSnapshot;

/// Supplies the player's command for each turn.
///
/// Implementations block until a valid command is available; the match
/// never sees malformed input. Any `FnMut(&MatchSnapshot) -> PlayerCommand`
/// closure is an input, which keeps tests short.
pub trait PlayerInput {
    fn select_command(&mut self, snapshot: &MatchSnapshot) -> PlayerCommand;
}

impl<F> PlayerInput for F
where
    F: FnMut(&MatchSnapshot) -> PlayerCommand,
{
    fn select_command(&mut self, snapshot: &MatchSnapshot) -> PlayerCommand {
        self(snapshot)
    }
}
