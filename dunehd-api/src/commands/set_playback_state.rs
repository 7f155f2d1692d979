//! Playback adjustment command

use crate::command::DuneCommand;

/// Speed argument for normal playback
pub const SPEED_PLAY: u32 = 256;

/// Speed argument for pause
pub const SPEED_PAUSE: u32 = 0;

/// Adjusts the running playback: speed, position, volume, or mute
///
/// The device accepts any combination of arguments in one request, but user
/// actions map onto exactly one each, so focused constructors are provided.
/// Arguments render in a fixed order (speed, position, volume, mute).
#[derive(Debug, Clone, Copy, Default)]
pub struct SetPlaybackState {
    pub speed: Option<u32>,
    pub position: Option<u64>,
    pub volume: Option<u32>,
    pub mute: Option<bool>,
}

impl SetPlaybackState {
    /// Set the playback speed; [`SPEED_PLAY`] resumes, [`SPEED_PAUSE`] pauses
    pub fn speed(speed: u32) -> Self {
        Self {
            speed: Some(speed),
            ..Self::default()
        }
    }

    /// Seek to an absolute position in seconds
    pub fn position(seconds: u64) -> Self {
        Self {
            position: Some(seconds),
            ..Self::default()
        }
    }

    /// Set the volume on the device's 0..=100 scale
    pub fn volume(volume: u32) -> Self {
        Self {
            volume: Some(volume),
            ..Self::default()
        }
    }

    /// Mute or unmute without touching the volume setting
    pub fn mute(mute: bool) -> Self {
        Self {
            mute: Some(mute),
            ..Self::default()
        }
    }
}

impl DuneCommand for SetPlaybackState {
    const NAME: &'static str = "set_playback_state";

    fn arguments(&self) -> Vec<(&'static str, String)> {
        let mut args = Vec::new();
        if let Some(speed) = self.speed {
            args.push(("speed", speed.to_string()));
        }
        if let Some(position) = self.position {
            args.push(("position", position.to_string()));
        }
        if let Some(volume) = self.volume {
            args.push(("volume", volume.to_string()));
        }
        if let Some(mute) = self.mute {
            args.push(("mute", if mute { "1" } else { "0" }.to_string()));
        }
        args
    }
}
