//! End-to-end synchronization tests against a mock device
//!
//! Every scenario here drives a real `DunePlayer` through an actual HTTP
//! round trip, with mockito standing in for the device.

use dunehd_player::{ApiError, DunePlayer, FeatureSet, PlayerConfig, PlayerState};
use mockito::{Matcher, Mock, Server, ServerGuard};
use rstest::rstest;

fn status_body(params: &[(&str, &str)]) -> String {
    let mut body = String::from("<command_result>");
    for (name, value) in params {
        body.push_str(&format!("<param name=\"{}\" value=\"{}\"/>", name, value));
    }
    body.push_str("</command_result>");
    body
}

fn mock_status(server: &mut ServerGuard, params: &[(&str, &str)]) -> Mock {
    server
        .mock("GET", "/cgi-bin/do")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body(status_body(params))
        .create()
}

fn player_for(server: &Server) -> DunePlayer {
    DunePlayer::new(PlayerConfig::new(server.host_with_port()))
}

const PLAYING: &[(&str, &str)] = &[
    ("player_state", "file_playback"),
    ("playback_state", "playing"),
    ("playback_url", "/mnt/nfs/movies/test.mkv"),
    ("playback_volume", "50"),
    ("playback_mute", "0"),
    ("playback_duration", "5400"),
    ("playback_position", "120"),
];

#[test]
fn test_standby_poll_reports_power_on_only() {
    let mut server = Server::new();
    let mock = mock_status(&mut server, &[("player_state", "standby")]);

    let player = player_for(&server);
    player.poll().unwrap();

    mock.assert();
    assert_eq!(player.state(), PlayerState::Standby);
    assert_eq!(player.supported_features(), FeatureSet::STANDBY);
    assert!(!player.is_on());
    assert_eq!(player.source().as_deref(), Some("standby"));
    assert_eq!(player.media_title().as_deref(), Some("standby"));
    assert_eq!(player.volume_level(), None);
    assert_eq!(player.is_volume_muted(), None);
    assert_eq!(player.media_position(), None);
    assert_eq!(player.media_duration(), None);
    assert_eq!(player.media_position_updated_at(), None);
}

#[test]
fn test_playing_poll_reports_full_playback_surface() {
    let mut server = Server::new();
    let mock = mock_status(&mut server, PLAYING);

    let player = player_for(&server);
    player.poll().unwrap();

    mock.assert();
    assert_eq!(player.state(), PlayerState::Playing);
    assert_eq!(player.supported_features(), FeatureSet::PLAYBACK);
    assert!(player.is_on());
    assert_eq!(player.media_title().as_deref(), Some("test.mkv"));
    assert_eq!(player.volume_level(), Some(0.5));
    assert_eq!(player.is_volume_muted(), Some(false));
    assert_eq!(player.media_position(), Some(120));
    assert_eq!(player.media_duration(), Some(5400));
    assert!(player.media_position_updated_at().is_some());
}

#[rstest]
#[case("paused", PlayerState::Paused)]
#[case("playing", PlayerState::Playing)]
#[case("buffering", PlayerState::Playing)]
fn test_playback_state_classification(#[case] reported: &str, #[case] expected: PlayerState) {
    let mut server = Server::new();
    let _mock = mock_status(
        &mut server,
        &[
            ("player_state", "file_playback"),
            ("playback_state", reported),
        ],
    );

    let player = player_for(&server);
    player.poll().unwrap();

    assert_eq!(player.state(), expected);
    assert_eq!(player.supported_features(), FeatureSet::PLAYBACK);
}

#[test]
fn test_unknown_mode_keeps_raw_source_and_clears_capabilities() {
    let mut server = Server::new();
    let _mock = mock_status(&mut server, &[("player_state", "dvd_playback")]);

    let player = player_for(&server);
    player.poll().unwrap();

    assert_eq!(player.state(), PlayerState::Unknown);
    assert!(player.supported_features().is_empty());
    assert_eq!(player.source().as_deref(), Some("dvd_playback"));
    assert!(!player.is_on());
}

#[test]
fn test_unreachable_device_degrades_without_raising() {
    let player = DunePlayer::new(PlayerConfig::new("127.0.0.1:1").with_timeout(1));

    let result = player.poll();

    assert!(result.is_ok());
    assert_eq!(player.state(), PlayerState::Unavailable);
    assert!(player.supported_features().is_empty());
}

#[test]
fn test_http_error_degrades_without_raising() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/cgi-bin/do")
        .match_query(Matcher::Any)
        .with_status(500)
        .create();

    let player = player_for(&server);
    let result = player.poll();

    assert!(result.is_ok());
    assert_eq!(player.state(), PlayerState::Unavailable);
}

#[test]
fn test_malformed_body_surfaces_parse_error_and_degrades() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/cgi-bin/do")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<not-xml")
        .create();

    let player = player_for(&server);
    let result = player.poll();

    assert!(matches!(result.unwrap_err(), ApiError::Parse(_)));
    // A device that answers garbage must not keep claiming a live state.
    assert_eq!(player.state(), PlayerState::Unavailable);
    assert!(player.supported_features().is_empty());
}

#[test]
fn test_non_numeric_field_surfaces_protocol_error_and_degrades() {
    let mut server = Server::new();
    let _mock = mock_status(
        &mut server,
        &[
            ("player_state", "file_playback"),
            ("playback_state", "playing"),
            ("playback_volume", "loud"),
        ],
    );

    let player = player_for(&server);
    let result = player.poll();

    assert!(matches!(result.unwrap_err(), ApiError::Protocol(_)));
    assert_eq!(player.state(), PlayerState::Unavailable);
}

#[test]
fn test_leaving_playback_clears_every_media_field() {
    let mut server = Server::new();
    let first = mock_status(&mut server, PLAYING);

    let player = player_for(&server);
    player.poll().unwrap();
    first.assert();
    assert_eq!(player.volume_level(), Some(0.5));

    server.reset();
    let second = mock_status(&mut server, &[("player_state", "standby")]);
    player.poll().unwrap();
    second.assert();

    assert_eq!(player.state(), PlayerState::Standby);
    assert_eq!(player.volume_level(), None);
    assert_eq!(player.is_volume_muted(), None);
    assert_eq!(player.media_position(), None);
    assert_eq!(player.media_duration(), None);
    assert_eq!(player.media_position_updated_at(), None);
    assert_eq!(player.media_title().as_deref(), Some("standby"));
}

#[test]
fn test_device_disappearing_mid_session_degrades() {
    let mut server = Server::new();
    let _mock = mock_status(&mut server, PLAYING);

    let player = player_for(&server);
    player.poll().unwrap();
    assert_eq!(player.state(), PlayerState::Playing);

    // No mocks registered: mockito answers 501, i.e. a non-2xx transport
    // failure from the adapter's point of view.
    server.reset();
    let result = player.poll();

    assert!(result.is_ok());
    assert_eq!(player.state(), PlayerState::Unavailable);
    assert_eq!(player.media_title(), None);
}

/// Drive one control and assert the command string that reached the wire.
fn assert_control_sends(
    control: impl Fn(&DunePlayer) -> dunehd_player::Result<()>,
    expected_query: &[(&str, &str)],
) {
    let mut server = Server::new();
    let matchers: Vec<Matcher> = expected_query
        .iter()
        .map(|(name, value)| Matcher::UrlEncoded((*name).into(), (*value).into()))
        .collect();
    let mock = server
        .mock("GET", "/cgi-bin/do")
        .match_query(Matcher::AllOf(matchers))
        .with_status(200)
        .with_body(status_body(&[("player_state", "navigator")]))
        .create();

    let player = player_for(&server);
    control(&player).unwrap();

    mock.assert();
}

#[test]
fn test_power_and_transport_controls_send_documented_commands() {
    assert_control_sends(|p| p.turn_on(), &[("cmd", "main_screen")]);
    assert_control_sends(|p| p.turn_off(), &[("cmd", "standby")]);
    assert_control_sends(|p| p.stop(), &[("cmd", "main_screen")]);
    assert_control_sends(
        |p| p.play(),
        &[("cmd", "set_playback_state"), ("speed", "256")],
    );
    assert_control_sends(
        |p| p.pause(),
        &[("cmd", "set_playback_state"), ("speed", "0")],
    );
    assert_control_sends(
        |p| p.seek(1250),
        &[("cmd", "set_playback_state"), ("position", "1250")],
    );
}

#[test]
fn test_volume_controls_send_documented_commands() {
    assert_control_sends(
        |p| p.set_volume_level(0.5),
        &[("cmd", "set_playback_state"), ("volume", "50")],
    );
    assert_control_sends(
        |p| p.mute_volume(true),
        &[("cmd", "set_playback_state"), ("mute", "1")],
    );
    assert_control_sends(
        |p| p.mute_volume(false),
        &[("cmd", "set_playback_state"), ("mute", "0")],
    );
}

#[test]
fn test_track_skipping_sends_remote_codes() {
    assert_control_sends(
        |p| p.previous_track(),
        &[("cmd", "ir_code"), ("ir_code", "B649BF00")],
    );
    assert_control_sends(
        |p| p.next_track(),
        &[("cmd", "ir_code"), ("ir_code", "E21DBF00")],
    );
}

#[test]
fn test_media_selection_sends_encoded_urls() {
    assert_control_sends(
        |p| p.select_source("smb://nas/movies"),
        &[("cmd", "open_path"), ("url", "smb://nas/movies")],
    );
    assert_control_sends(
        |p| p.play_media("http://server/movie.mkv"),
        &[("cmd", "launch_media_url"), ("media_url", "http://server/movie.mkv")],
    );
}

#[test]
fn test_control_round_trip_refreshes_the_snapshot() {
    let mut server = Server::new();
    // The pause command answers with the already-paused status document.
    let mock = server
        .mock("GET", "/cgi-bin/do")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("cmd".into(), "set_playback_state".into()),
            Matcher::UrlEncoded("speed".into(), "0".into()),
        ]))
        .with_status(200)
        .with_body(status_body(&[
            ("player_state", "file_playback"),
            ("playback_state", "paused"),
            ("playback_url", "/mnt/nfs/movies/test.mkv"),
            ("playback_volume", "50"),
            ("playback_mute", "0"),
            ("playback_duration", "5400"),
            ("playback_position", "120"),
        ]))
        .create();

    let player = player_for(&server);
    player.pause().unwrap();

    mock.assert();
    assert_eq!(player.state(), PlayerState::Paused);
    assert_eq!(player.media_title().as_deref(), Some("test.mkv"));
}
