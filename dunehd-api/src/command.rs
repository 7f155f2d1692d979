/// Base trait for all IP Control commands
///
/// Every command the protocol knows is a name plus zero or more `&name=value`
/// arguments, all packed into the `cmd` query parameter of a single GET
/// request. Implementations supply the name and the arguments; the rendering
/// is shared.
pub trait DuneCommand {
    /// The protocol-level command name (the `cmd=` value)
    const NAME: &'static str;

    /// Arguments appended to the command as `&name=value` pairs
    ///
    /// Values must already be in wire form: implementations are responsible
    /// for percent-encoding anything that is not a plain number or flag.
    fn arguments(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Render the full command string embedded in the request URL
    fn to_command_string(&self) -> String {
        let mut command = String::from(Self::NAME);
        for (name, value) in self.arguments() {
            command.push_str(&format!("&{}={}", name, value));
        }
        command
    }
}
