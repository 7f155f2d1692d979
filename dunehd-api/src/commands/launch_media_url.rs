//! Media launch command

use crate::command::DuneCommand;

/// Starts playback of a media URL immediately
///
/// Unlike [`super::OpenPath`] this skips the navigator and goes straight
/// into file playback.
#[derive(Debug, Clone)]
pub struct LaunchMediaUrl {
    media_url: String,
}

impl LaunchMediaUrl {
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
        }
    }
}

impl DuneCommand for LaunchMediaUrl {
    const NAME: &'static str = "launch_media_url";

    fn arguments(&self) -> Vec<(&'static str, String)> {
        vec![(
            "media_url",
            urlencoding::encode(&self.media_url).into_owned(),
        )]
    }
}
