//! High-level Dune HD API for device control
//!
//! This crate provides a type-safe, trait-based API for driving Dune HD
//! media players over their IP Control protocol. It uses the private
//! `ipcontrol-client` crate for the low-level HTTP round trip.
//!
//! Every IP Control command, including state-changing ones, answers with
//! the same status document, so executing any command yields a
//! [`StatusReport`]:
//!
//! ```rust,ignore
//! use dunehd_api::{DuneClient, commands::Status};
//!
//! let client = DuneClient::new();
//! let report = client.execute("192.168.1.50", &Status)?;
//!
//! if report.player_state() == Some("standby") {
//!     println!("player is asleep");
//! }
//! ```

pub mod client;
pub mod command;
pub mod commands;
pub mod error;
pub mod status;

pub use client::DuneClient;
pub use command::DuneCommand;
pub use error::{ApiError, Result};
pub use status::StatusReport;

// Part of this crate's public surface through `StatusReport::new`.
pub use ipcontrol_client::ParamList;
