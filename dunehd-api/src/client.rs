use std::time::Duration;

use ipcontrol_client::IpControlClient;

use crate::{DuneCommand, Result, StatusReport};

/// A client for executing IP Control commands against actual devices
///
/// This client bridges the gap between the stateless command definitions
/// and network requests to Dune HD players. It carries no per-device state;
/// the target host is passed to every call, so one client can serve any
/// number of devices.
#[derive(Debug, Clone)]
pub struct DuneClient {
    http: IpControlClient,
}

impl DuneClient {
    /// Create a client with the protocol's default 20 second timeout
    pub fn new() -> Self {
        Self {
            http: IpControlClient::new(),
        }
    }

    /// Create a client with a custom per-request timeout
    ///
    /// The timeout is also advertised to the device in each request, so
    /// both ends give up on a command together.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            http: IpControlClient::with_timeout(timeout),
        }
    }

    /// Execute a command and return the status document it answered with
    ///
    /// Every IP Control command, including state-changing ones, responds
    /// with the full status parameter list, so a control command doubles
    /// as a status refresh.
    ///
    /// # Arguments
    /// * `host` - Host address of the device, with optional port
    /// * `command` - The command to execute
    pub fn execute<C: DuneCommand>(&self, host: &str, command: &C) -> Result<StatusReport> {
        let params = self.http.call(host, &command.to_command_string())?;
        Ok(StatusReport::new(params))
    }
}

impl Default for DuneClient {
    fn default() -> Self {
        Self::new()
    }
}
