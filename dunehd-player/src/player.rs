//! The device adapter

use chrono::{DateTime, Utc};
use dunehd_api::commands::{
    IrCode, LaunchMediaUrl, MainScreen, OpenPath, SetPlaybackState, Standby, Status, SPEED_PAUSE,
    SPEED_PLAY,
};
use dunehd_api::{ApiError, DuneClient, DuneCommand, Result};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::config::PlayerConfig;
use crate::model::{FeatureSet, PlayerSnapshot, PlayerState};

/// One Dune HD device, driven synchronously
///
/// Holds the latest [`PlayerSnapshot`] behind a lock and replaces it
/// wholesale after every round trip. All methods take `&self`: reads are
/// snapshot lookups, commands block for at most the configured timeout.
/// The adapter never issues concurrent requests on its own; an external
/// scheduler is expected to call [`DunePlayer::poll`] on a fixed interval
/// (see [`crate::config::RECOMMENDED_POLL_INTERVAL`]) without overlap.
#[derive(Debug)]
pub struct DunePlayer {
    config: PlayerConfig,
    client: DuneClient,
    snapshot: RwLock<PlayerSnapshot>,
}

impl DunePlayer {
    /// Create an adapter for one device
    ///
    /// No request is made yet; until the first poll the snapshot reports
    /// [`PlayerState::Unavailable`].
    pub fn new(config: PlayerConfig) -> Self {
        let client = DuneClient::with_timeout(config.timeout_duration());
        Self {
            config,
            client,
            snapshot: RwLock::new(PlayerSnapshot::unavailable()),
        }
    }

    /// Adapter with default name and timeout
    pub fn from_host(host: impl Into<String>) -> Self {
        Self::new(PlayerConfig::new(host))
    }

    /// Refresh the snapshot without changing device state
    pub fn poll(&self) -> Result<()> {
        self.sync(&Status)
    }

    /// Execute one command and rebuild the snapshot from its response
    ///
    /// Every command answers with the full status document, so control
    /// commands double as polls. Failure handling is split:
    /// - transport failures degrade the snapshot to unavailable and are
    ///   absorbed into `Ok` -- an unplugged device is normal operation,
    ///   and the host only ever looks at the snapshot;
    /// - parse and protocol failures degrade the snapshot the same way but
    ///   are returned, since something answered on the control port that
    ///   does not speak this protocol.
    ///
    /// At most one request per call, never retried. A command lost to a
    /// transport failure stays lost; the next scheduled poll corrects the
    /// picture.
    fn sync<C: DuneCommand>(&self, command: &C) -> Result<()> {
        debug!(
            host = %self.config.host,
            command = %command.to_command_string(),
            "sending command"
        );

        let outcome = self
            .client
            .execute(&self.config.host, command)
            .and_then(|report| PlayerSnapshot::from_status(&report, Utc::now()));

        match outcome {
            Ok(snapshot) => {
                debug!(host = %self.config.host, state = %snapshot.state, "snapshot replaced");
                *self.snapshot.write() = snapshot;
                Ok(())
            }
            Err(ApiError::Network(reason)) => {
                debug!(host = %self.config.host, %reason, "device unreachable");
                *self.snapshot.write() = PlayerSnapshot::unavailable();
                Ok(())
            }
            Err(error) => {
                warn!(host = %self.config.host, %error, "uninterpretable response");
                *self.snapshot.write() = PlayerSnapshot::unavailable();
                Err(error)
            }
        }
    }

    /// Wake the device into the navigator
    pub fn turn_on(&self) -> Result<()> {
        self.sync(&MainScreen)
    }

    /// Put the device into standby
    pub fn turn_off(&self) -> Result<()> {
        self.sync(&Standby)
    }

    /// Resume playback
    pub fn play(&self) -> Result<()> {
        self.sync(&SetPlaybackState::speed(SPEED_PLAY))
    }

    /// Pause playback
    pub fn pause(&self) -> Result<()> {
        self.sync(&SetPlaybackState::speed(SPEED_PAUSE))
    }

    /// Abandon playback and return to the navigator
    pub fn stop(&self) -> Result<()> {
        self.sync(&MainScreen)
    }

    /// Seek to an absolute position in seconds
    pub fn seek(&self, position: u64) -> Result<()> {
        self.sync(&SetPlaybackState::position(position))
    }

    /// Set the volume from the host's 0.0..=1.0 scale
    pub fn set_volume_level(&self, level: f64) -> Result<()> {
        self.sync(&SetPlaybackState::volume(device_volume(level)))
    }

    /// Mute or unmute without touching the volume setting
    pub fn mute_volume(&self, mute: bool) -> Result<()> {
        self.sync(&SetPlaybackState::mute(mute))
    }

    /// Open a path or folder on the device
    pub fn select_source(&self, source: &str) -> Result<()> {
        self.sync(&OpenPath::new(source))
    }

    /// Accepted for interface parity; the device has no sound modes
    pub fn select_sound_mode(&self, _sound_mode: &str) -> Result<()> {
        Ok(())
    }

    /// Start playback of a media URL immediately
    pub fn play_media(&self, media_url: &str) -> Result<()> {
        self.sync(&LaunchMediaUrl::new(media_url))
    }

    /// Skip to the previous item
    pub fn previous_track(&self) -> Result<()> {
        self.sync(&IrCode::previous_track())
    }

    /// Skip to the next item
    pub fn next_track(&self) -> Result<()> {
        self.sync(&IrCode::next_track())
    }

    /// Configured display name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Configured host address
    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// The latest snapshot, cloned
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.snapshot.read().clone()
    }

    pub fn state(&self) -> PlayerState {
        self.snapshot.read().state
    }

    /// Whether the device counts as powered on for the host UI
    pub fn is_on(&self) -> bool {
        self.snapshot.read().is_on()
    }

    /// Commands currently valid to send
    pub fn supported_features(&self) -> FeatureSet {
        self.snapshot.read().supported_features
    }

    pub fn volume_level(&self) -> Option<f64> {
        self.snapshot.read().volume_level
    }

    pub fn is_volume_muted(&self) -> Option<bool> {
        self.snapshot.read().is_muted
    }

    /// Raw mode string last reported by the device
    pub fn source(&self) -> Option<String> {
        self.snapshot.read().source.clone()
    }

    /// The protocol cannot enumerate sources
    pub fn source_list(&self) -> Option<Vec<String>> {
        None
    }

    pub fn sound_mode(&self) -> Option<String> {
        None
    }

    pub fn sound_mode_list(&self) -> Option<Vec<String>> {
        None
    }

    pub fn media_title(&self) -> Option<String> {
        self.snapshot.read().media_title.clone()
    }

    /// Position within the current item in seconds
    pub fn media_position(&self) -> Option<u64> {
        self.snapshot.read().media_position
    }

    /// Duration of the current item in seconds
    pub fn media_duration(&self) -> Option<u64> {
        self.snapshot.read().media_duration
    }

    /// Wall-clock time the position was sampled
    pub fn media_position_updated_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot.read().position_updated_at
    }

    /// Everything the device plays is presented as video
    pub fn media_content_type(&self) -> &'static str {
        "video"
    }
}

/// Scale a 0.0..=1.0 volume onto the device's 0..=100 integer range
fn device_volume(level: f64) -> u32 {
    (level.clamp(0.0, 1.0) * 100.0).round() as u32
}
