//! Path opening command

use crate::command::DuneCommand;

/// Opens a file, folder, or stream path on the player
///
/// Accepts anything the navigator can reach: SMB/NFS mounts, local storage
/// paths, and network URLs. Hosts drive "select source" through this.
#[derive(Debug, Clone)]
pub struct OpenPath {
    url: String,
}

impl OpenPath {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DuneCommand for OpenPath {
    const NAME: &'static str = "open_path";

    fn arguments(&self) -> Vec<(&'static str, String)> {
        vec![("url", urlencoding::encode(&self.url).into_owned())]
    }
}
