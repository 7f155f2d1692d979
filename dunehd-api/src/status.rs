//! Typed view over the status document

use std::str::FromStr;

use ipcontrol_client::ParamList;

use crate::error::{ApiError, Result};

/// Typed read access to the parameter list of an IP Control response
///
/// Every command answers with the same document shape, so this is the
/// response type of every execution. String parameters come back verbatim.
/// Numeric accessors keep two cases apart that must never be conflated:
/// a parameter the device did not report (`Ok(None)`, common outside file
/// playback) and a parameter that is present but not numeric
/// (`Err(ApiError::Protocol)`, a firmware mismatch).
#[derive(Debug, Clone)]
pub struct StatusReport {
    params: ParamList,
}

impl StatusReport {
    pub fn new(params: ParamList) -> Self {
        Self { params }
    }

    /// Raw access to any reported parameter
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Top-level mode reported by the device
    pub fn player_state(&self) -> Option<&str> {
        self.get("player_state")
    }

    /// Secondary mode within file playback
    pub fn playback_state(&self) -> Option<&str> {
        self.get("playback_state")
    }

    /// URL or path of the item being played
    pub fn playback_url(&self) -> Option<&str> {
        self.get("playback_url")
    }

    /// Volume on the device's 0..=100 scale
    pub fn playback_volume(&self) -> Result<Option<u32>> {
        self.numeric("playback_volume")
    }

    /// Mute flag; any nonzero integer counts as muted
    pub fn playback_mute(&self) -> Result<Option<bool>> {
        Ok(self.numeric::<i64>("playback_mute")?.map(|flag| flag != 0))
    }

    /// Duration of the current item in seconds
    pub fn playback_duration(&self) -> Result<Option<u64>> {
        self.numeric("playback_duration")
    }

    /// Position within the current item in seconds
    pub fn playback_position(&self) -> Result<Option<u64>> {
        self.numeric("playback_position")
    }

    fn numeric<T: FromStr>(&self, name: &str) -> Result<Option<T>> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value.parse::<T>().map(Some).map_err(|_| {
                ApiError::Protocol(format!(
                    "parameter \"{}\" is not numeric: \"{}\"",
                    name, value
                ))
            }),
        }
    }
}
