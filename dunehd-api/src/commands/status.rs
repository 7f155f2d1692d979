//! Status query command

use crate::command::DuneCommand;

/// Reads the player's state without changing anything
///
/// This is the command a polling loop issues on every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Status;

impl DuneCommand for Status {
    const NAME: &'static str = "status";
}
