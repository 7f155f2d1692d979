//! Capability flags and flag sets

use serde::{Deserialize, Serialize};

/// A single host-facing capability of the player
///
/// The set is closed: the protocol does not grow capabilities at runtime,
/// and hosts map each flag onto one UI affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Resume playback
    Play,
    /// Pause playback
    Pause,
    /// Abandon playback and return to the menus
    Stop,
    /// Seek to an absolute position
    Seek,
    /// Set the volume
    VolumeSet,
    /// Mute or unmute
    VolumeMute,
    /// Skip to the previous item
    PreviousTrack,
    /// Skip to the next item
    NextTrack,
    /// Wake from standby
    TurnOn,
    /// Enter standby
    TurnOff,
    /// Start playback of a given URL
    PlayMedia,
    /// Open a path or folder
    SelectSource,
    /// Accepted for interface parity; the device has no sound modes
    SelectSoundMode,
}

impl Feature {
    /// Every capability, in a stable order
    pub const ALL: [Feature; 13] = [
        Feature::Play,
        Feature::Pause,
        Feature::Stop,
        Feature::Seek,
        Feature::VolumeSet,
        Feature::VolumeMute,
        Feature::PreviousTrack,
        Feature::NextTrack,
        Feature::TurnOn,
        Feature::TurnOff,
        Feature::PlayMedia,
        Feature::SelectSource,
        Feature::SelectSoundMode,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// An immutable set of capabilities
///
/// Compact bitset over [`Feature`]: copying is free and comparison is exact,
/// which is what the state classification table trades in. The named sets
/// below are the only ones the classifier ever produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureSet(u16);

impl FeatureSet {
    /// No capabilities; reported for unreachable or unrecognized states
    pub const EMPTY: FeatureSet = FeatureSet(0);

    /// Everything the player can do during file playback
    pub const PLAYBACK: FeatureSet = FeatureSet::EMPTY
        .with(Feature::Play)
        .with(Feature::Pause)
        .with(Feature::Stop)
        .with(Feature::Seek)
        .with(Feature::VolumeSet)
        .with(Feature::VolumeMute)
        .with(Feature::PreviousTrack)
        .with(Feature::NextTrack)
        .with(Feature::TurnOn)
        .with(Feature::TurnOff)
        .with(Feature::PlayMedia)
        .with(Feature::SelectSource)
        .with(Feature::SelectSoundMode);

    /// Navigator menus: power control plus the ways to start media
    pub const IDLE: FeatureSet = FeatureSet::EMPTY
        .with(Feature::TurnOn)
        .with(Feature::TurnOff)
        .with(Feature::PlayMedia)
        .with(Feature::SelectSource)
        .with(Feature::SelectSoundMode);

    /// Standby: waking the device is the only meaningful action
    pub const STANDBY: FeatureSet = FeatureSet::EMPTY.with(Feature::TurnOn);

    /// Return a copy of the set with one capability added
    pub const fn with(self, feature: Feature) -> FeatureSet {
        FeatureSet(self.0 | feature.bit())
    }

    /// Whether the set contains a capability
    pub fn contains(self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    /// Whether the set is empty
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of capabilities in the set
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the contained capabilities in [`Feature::ALL`] order
    pub fn iter(self) -> impl Iterator<Item = Feature> {
        Feature::ALL
            .into_iter()
            .filter(move |feature| self.contains(*feature))
    }
}
