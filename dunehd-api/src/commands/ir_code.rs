//! Infrared code injection command

use crate::command::DuneCommand;

/// Remote-control code for the previous-track button
pub const IR_PREVIOUS_TRACK: &str = "B649BF00";

/// Remote-control code for the next-track button
pub const IR_NEXT_TRACK: &str = "E21DBF00";

/// Replays a button of the stock infrared remote
///
/// Track skipping has no dedicated IP Control command, so the remote's
/// codes are injected instead. Codes are opaque 8-digit hex values in the
/// device's native byte order; they are sent verbatim and never derived.
#[derive(Debug, Clone)]
pub struct IrCode {
    code: String,
}

impl IrCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Previous-track button of the stock remote
    pub fn previous_track() -> Self {
        Self::new(IR_PREVIOUS_TRACK)
    }

    /// Next-track button of the stock remote
    pub fn next_track() -> Self {
        Self::new(IR_NEXT_TRACK)
    }
}

impl DuneCommand for IrCode {
    const NAME: &'static str = "ir_code";

    fn arguments(&self) -> Vec<(&'static str, String)> {
        vec![("ir_code", self.code.clone())]
    }
}
