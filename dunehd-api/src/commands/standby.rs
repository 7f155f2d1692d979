//! Standby command

use crate::command::DuneCommand;

/// Puts the player into low-power standby
///
/// The device keeps answering IP Control requests in standby; it reports
/// `player_state=standby` until woken.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standby;

impl DuneCommand for Standby {
    const NAME: &'static str = "standby";
}
