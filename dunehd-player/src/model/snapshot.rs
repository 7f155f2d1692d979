//! Point-in-time view of one device

use chrono::{DateTime, Utc};
use dunehd_api::{Result, StatusReport};
use serde::{Deserialize, Serialize};

use super::{FeatureSet, PlayerState};

/// Everything the adapter knows about one device at one instant
///
/// A snapshot is replaced wholesale by every poll or command round trip.
/// No field survives from one report into the next, so playback numbers can
/// never outlive the playback they belong to. Media fields are `None`
/// outside Playing/Paused, and `None` during playback when the device did
/// not report the corresponding parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// High-level mode
    pub state: PlayerState,
    /// Commands valid in this mode
    pub supported_features: FeatureSet,
    /// Raw mode string reported by the device
    pub source: Option<String>,
    /// Basename of the playing file, or the mode label outside playback
    pub media_title: Option<String>,
    /// Volume scaled to 0.0..=1.0
    pub volume_level: Option<f64>,
    /// Whether the device is muted
    pub is_muted: Option<bool>,
    /// Position within the current item in seconds
    pub media_position: Option<u64>,
    /// Duration of the current item in seconds
    pub media_duration: Option<u64>,
    /// Wall-clock time `media_position` was sampled
    pub position_updated_at: Option<DateTime<Utc>>,
}

impl PlayerSnapshot {
    /// Snapshot of a device that cannot be reached or understood
    ///
    /// Also what a freshly constructed adapter reports before its first
    /// poll: no state claim, no capabilities, no media fields.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Classify one status report into a fresh snapshot
    ///
    /// `now` is recorded as the sampling time of the reported position.
    /// Fails only on a protocol violation (a numeric parameter that does
    /// not parse); an unrecognized mode is data, not an error, and lands
    /// on [`PlayerState::Unknown`] with the raw value kept in `source`.
    pub fn from_status(report: &StatusReport, now: DateTime<Utc>) -> Result<Self> {
        let mut snapshot = PlayerSnapshot {
            source: report.player_state().map(str::to_string),
            ..PlayerSnapshot::default()
        };

        match report.player_state() {
            Some("standby") => {
                snapshot.state = PlayerState::Standby;
                snapshot.media_title = Some("standby".to_string());
            }
            Some("navigator") => {
                snapshot.state = PlayerState::Idle;
                snapshot.media_title = Some("navigator".to_string());
            }
            Some("file_playback") => {
                snapshot.state = report
                    .playback_state()
                    .map(PlayerState::from_playback_state)
                    .unwrap_or(PlayerState::Unknown);
                snapshot.media_title = report.playback_url().and_then(basename);

                // Playback numbers are only trusted when the secondary
                // state is understood; an unrecognized one keeps them None.
                if matches!(snapshot.state, PlayerState::Playing | PlayerState::Paused) {
                    snapshot.volume_level = report
                        .playback_volume()?
                        .map(|volume| (volume as f64 / 100.0).clamp(0.0, 1.0));
                    snapshot.is_muted = report.playback_mute()?;
                    snapshot.media_duration = report.playback_duration()?;
                    snapshot.media_position = report.playback_position()?;
                    snapshot.position_updated_at = Some(now);
                }
            }
            Some(other) => {
                snapshot.state = PlayerState::Unknown;
                snapshot.media_title = Some(other.to_string());
            }
            None => {
                snapshot.state = PlayerState::Unknown;
            }
        }

        snapshot.supported_features = snapshot.state.supported_features();
        Ok(snapshot)
    }

    /// Whether the device counts as powered on for the host UI
    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }
}

/// Final path segment of a playback URL, with directories stripped
fn basename(url: &str) -> Option<String> {
    match url.rsplit('/').next() {
        Some(name) if !name.is_empty() => Some(name.to_string()),
        _ => None,
    }
}
