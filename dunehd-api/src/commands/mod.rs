//! IP Control commands understood by Dune HD players
//!
//! One module per protocol command. All of them answer with the same status
//! document; the split is purely about how each request is built.

mod ir_code;
mod launch_media_url;
mod main_screen;
mod open_path;
mod set_playback_state;
mod standby;
mod status;

pub use ir_code::{IrCode, IR_NEXT_TRACK, IR_PREVIOUS_TRACK};
pub use launch_media_url::LaunchMediaUrl;
pub use main_screen::MainScreen;
pub use open_path::OpenPath;
pub use set_playback_state::{SetPlaybackState, SPEED_PAUSE, SPEED_PLAY};
pub use standby::Standby;
pub use status::Status;
