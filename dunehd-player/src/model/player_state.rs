//! Player state enumeration

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FeatureSet;

/// High-level mode of a Dune HD player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Device unreachable, or its last response was uninterpretable
    ///
    /// Also the state of a freshly constructed adapter that has not polled
    /// yet. The protocol cannot tell a powered-down device from an
    /// unreachable one, so there is no separate "off".
    Unavailable,
    /// Low-power standby; the device still answers requests
    Standby,
    /// Navigator menus, no media loaded
    Idle,
    /// File playback advancing (includes buffering)
    Playing,
    /// File playback paused
    Paused,
    /// Device reported a mode this adapter does not recognize
    Unknown,
}

impl PlayerState {
    /// Classify the `playback_state` value reported during file playback
    ///
    /// Buffering counts as playing: media is loaded and will advance
    /// without further user action.
    pub fn from_playback_state(state: &str) -> Self {
        match state {
            "paused" => PlayerState::Paused,
            "playing" | "buffering" => PlayerState::Playing,
            _ => PlayerState::Unknown,
        }
    }

    /// Whether the device counts as powered on for the host UI
    pub fn is_on(self) -> bool {
        matches!(
            self,
            PlayerState::Playing | PlayerState::Paused | PlayerState::Idle
        )
    }

    /// Commands that are valid to send in this state
    ///
    /// This is the single capability table: the classifier and the
    /// host-facing capability query both read it.
    pub fn supported_features(self) -> FeatureSet {
        match self {
            PlayerState::Playing | PlayerState::Paused => FeatureSet::PLAYBACK,
            PlayerState::Idle => FeatureSet::IDLE,
            PlayerState::Standby => FeatureSet::STANDBY,
            PlayerState::Unavailable | PlayerState::Unknown => FeatureSet::EMPTY,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState::Unavailable
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerState::Unavailable => "unavailable",
            PlayerState::Standby => "standby",
            PlayerState::Idle => "idle",
            PlayerState::Playing => "playing",
            PlayerState::Paused => "paused",
            PlayerState::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}
