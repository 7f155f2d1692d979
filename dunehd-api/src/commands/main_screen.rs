//! Main screen command

use crate::command::DuneCommand;

/// Returns the player to the top-level navigator menu
///
/// Doubles as both "turn on" (it wakes a player from standby) and "stop"
/// (it abandons any running playback); the protocol has no dedicated
/// command for either.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainScreen;

impl DuneCommand for MainScreen {
    const NAME: &'static str = "main_screen";
}
