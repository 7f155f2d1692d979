//! Dune HD Media Player Adapter
//!
//! A sync-first, snapshot-backed adapter for Dune HD set-top boxes. It
//! polls the device's IP Control endpoint, classifies the reported state
//! into a small state machine, and exposes a standard media-player surface
//! plus fire-and-forget controls for embedding hosts.
//!
//! # Architecture
//!
//! ```text
//! scheduler → poll() → HTTP status round trip → classify → PlayerSnapshot
//!                                                              (reads)
//! controls  → command round trip ───────────────┘
//! ```
//!
//! The snapshot is the only mutable state and is replaced wholesale after
//! every round trip. An unreachable device is not an error; it is the
//! [`PlayerState::Unavailable`] snapshot.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dunehd_player::{DunePlayer, PlayerConfig};
//!
//! let player = DunePlayer::new(PlayerConfig::new("192.168.1.50"));
//!
//! // Scheduled every RECOMMENDED_POLL_INTERVAL by the embedding host
//! player.poll()?;
//!
//! if player.is_on() {
//!     println!("{}: {}", player.name(), player.state());
//!     if let Some(title) = player.media_title() {
//!         println!("now playing {}", title);
//!     }
//! }
//!
//! player.pause()?;
//! ```

pub mod config;
pub mod logging;
pub mod model;
pub mod player;

pub use config::{PlayerConfig, DEFAULT_NAME, DEFAULT_TIMEOUT, RECOMMENDED_POLL_INTERVAL};
pub use model::{Feature, FeatureSet, PlayerSnapshot, PlayerState};
pub use player::DunePlayer;

// Error types come from the API layer; polls and controls return them
// directly.
pub use dunehd_api::{ApiError, Result};

// Logging helpers
pub use logging::{init_logging, init_logging_from_env, LoggingError, LoggingMode};
