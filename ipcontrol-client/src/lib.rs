//! Private HTTP client for Dune HD IP Control communication
//!
//! This crate provides a minimal blocking client for the CGI endpoint that
//! Dune HD media players expose on their local network. Every command is a
//! single GET request, and every response is the same flat XML document of
//! `<param name=".." value=".."/>` elements, parsed here into a [`ParamList`].

mod error;

pub use error::IpControlError;

use std::collections::HashMap;
use std::time::Duration;
use xmltree::Element;

/// Per-request timeout used when none is configured
///
/// The same number of seconds is advertised to the device in the request
/// URL, so both sides give up on a command at the same moment.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Parameter list carried by every IP Control response
///
/// A flat name/value mapping. If the device repeats a name, the last
/// occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct ParamList {
    values: HashMap<String, String>,
}

impl ParamList {
    /// Build a parameter list from name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Look up a parameter value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of parameters in the list
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the device reported no parameters at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all name/value pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn from_document(root: &Element) -> Result<Self, IpControlError> {
        let mut values = HashMap::new();
        for node in &root.children {
            if let Some(child) = node.as_element() {
                if child.name != "param" {
                    continue;
                }
                let name = child.attributes.get("name").ok_or_else(|| {
                    IpControlError::Parse("param element missing name attribute".to_string())
                })?;
                let value = child.attributes.get("value").ok_or_else(|| {
                    IpControlError::Parse(format!(
                        "param element \"{}\" missing value attribute",
                        name
                    ))
                })?;
                values.insert(name.clone(), value.clone());
            }
        }
        Ok(Self { values })
    }
}

/// A minimal blocking client for the Dune HD IP Control endpoint
#[derive(Debug, Clone)]
pub struct IpControlClient {
    agent: ureq::Agent,
    timeout: Duration,
}

impl IpControlClient {
    /// Create a new client with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new client with a custom per-request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
            timeout,
        }
    }

    /// Send one IP Control command and return the parsed parameter list
    ///
    /// `command` lands verbatim in the `cmd` query parameter and may carry
    /// its own `&name=value` arguments (e.g. `set_playback_state&volume=50`);
    /// the device treats them as part of the command.
    ///
    /// One request per call, no retries. Timeouts, refused connections, and
    /// non-2xx responses come back as [`IpControlError::Network`]; a 2xx
    /// response whose body is not a parameter document comes back as
    /// [`IpControlError::Parse`].
    pub fn call(&self, host: &str, command: &str) -> Result<ParamList, IpControlError> {
        let url = format!(
            "http://{}/cgi-bin/do?cmd={}&timeout={}",
            host,
            command,
            self.timeout.as_secs()
        );

        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| IpControlError::Network(e.to_string()))?;

        let xml_text = response
            .into_string()
            .map_err(|e| IpControlError::Network(e.to_string()))?;

        let xml = Element::parse(xml_text.as_bytes())
            .map_err(|e| IpControlError::Parse(e.to_string()))?;

        // The root element's own name is not checked; firmware revisions
        // disagree on it, but the param children are stable.
        ParamList::from_document(&xml)
    }
}

impl Default for IpControlClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const STATUS_BODY: &str = r#"
        <command_result>
            <param name="player_state" value="file_playback"/>
            <param name="playback_state" value="playing"/>
            <param name="playback_volume" value="50"/>
        </command_result>
    "#;

    #[test]
    fn test_from_document_reads_params() {
        let xml = Element::parse(STATUS_BODY.as_bytes()).unwrap();
        let params = ParamList::from_document(&xml).unwrap();

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("player_state"), Some("file_playback"));
        assert_eq!(params.get("playback_volume"), Some("50"));
        assert_eq!(params.get("no_such_param"), None);
    }

    #[test]
    fn test_from_document_last_occurrence_wins() {
        let xml_str = r#"
            <command_result>
                <param name="player_state" value="standby"/>
                <param name="player_state" value="navigator"/>
            </command_result>
        "#;
        let xml = Element::parse(xml_str.as_bytes()).unwrap();
        let params = ParamList::from_document(&xml).unwrap();

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("player_state"), Some("navigator"));
    }

    #[test]
    fn test_from_document_ignores_other_children() {
        let xml_str = r#"
            <command_result>
                some text
                <status>ok</status>
                <param name="player_state" value="navigator"/>
            </command_result>
        "#;
        let xml = Element::parse(xml_str.as_bytes()).unwrap();
        let params = ParamList::from_document(&xml).unwrap();

        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_from_document_missing_name_attribute() {
        let xml_str = r#"
            <command_result>
                <param value="standby"/>
            </command_result>
        "#;
        let xml = Element::parse(xml_str.as_bytes()).unwrap();
        let result = ParamList::from_document(&xml);

        match result.unwrap_err() {
            IpControlError::Parse(msg) => assert!(msg.contains("missing name attribute")),
            other => panic!("Expected IpControlError::Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_from_document_missing_value_attribute() {
        let xml_str = r#"
            <command_result>
                <param name="player_state"/>
            </command_result>
        "#;
        let xml = Element::parse(xml_str.as_bytes()).unwrap();
        let result = ParamList::from_document(&xml);

        match result.unwrap_err() {
            IpControlError::Parse(msg) => assert!(msg.contains("player_state")),
            other => panic!("Expected IpControlError::Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_from_document_empty_document() {
        let xml = Element::parse(b"<command_result></command_result>".as_slice()).unwrap();
        let params = ParamList::from_document(&xml).unwrap();

        assert!(params.is_empty());
    }

    #[test]
    fn test_from_pairs() {
        let params = ParamList::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("3"));
        assert_eq!(params.get("b"), Some("2"));
    }

    #[test]
    fn test_client_creation() {
        let _client = IpControlClient::new();
        let _default_client = IpControlClient::default();
        let _slow_client = IpControlClient::with_timeout(Duration::from_secs(60));
    }

    #[test]
    fn test_call_parses_response() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/cgi-bin/do")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("cmd".into(), "status".into()),
                Matcher::UrlEncoded("timeout".into(), "20".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "text/xml")
            .with_body(STATUS_BODY)
            .create();

        let client = IpControlClient::new();
        let params = client.call(&server.host_with_port(), "status").unwrap();

        mock.assert();
        assert_eq!(params.get("player_state"), Some("file_playback"));
    }

    #[test]
    fn test_call_embeds_command_arguments() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/cgi-bin/do")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("cmd".into(), "set_playback_state".into()),
                Matcher::UrlEncoded("volume".into(), "50".into()),
                Matcher::UrlEncoded("timeout".into(), "5".into()),
            ]))
            .with_status(200)
            .with_body("<command_result></command_result>")
            .create();

        let client = IpControlClient::with_timeout(Duration::from_secs(5));
        let params = client
            .call(&server.host_with_port(), "set_playback_state&volume=50")
            .unwrap();

        mock.assert();
        assert!(params.is_empty());
    }

    #[test]
    fn test_call_http_error_is_network() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/cgi-bin/do")
            .match_query(Matcher::Any)
            .with_status(500)
            .create();

        let client = IpControlClient::new();
        let result = client.call(&server.host_with_port(), "status");

        match result.unwrap_err() {
            IpControlError::Network(_) => {}
            other => panic!("Expected IpControlError::Network, got {:?}", other),
        }
    }

    #[test]
    fn test_call_unreachable_host_is_network() {
        let client = IpControlClient::with_timeout(Duration::from_secs(1));
        let result = client.call("127.0.0.1:1", "status");

        match result.unwrap_err() {
            IpControlError::Network(_) => {}
            other => panic!("Expected IpControlError::Network, got {:?}", other),
        }
    }

    #[test]
    fn test_call_malformed_body_is_parse() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/cgi-bin/do")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<not-xml")
            .create();

        let client = IpControlClient::new();
        let result = client.call(&server.host_with_port(), "status");

        match result.unwrap_err() {
            IpControlError::Parse(_) => {}
            other => panic!("Expected IpControlError::Parse, got {:?}", other),
        }
    }
}
