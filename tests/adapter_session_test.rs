use serde_json::Value;

use odd_one_out::adapter::{Session, SessionConfig};
use odd_one_out::core::GameState;

fn send(session: &mut Session, line: &str) -> Vec<Value> {
    session
        .handle_line(line)
        .unwrap()
        .iter()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn event_names(out: &[Value]) -> Vec<&str> {
    out.iter()
        .filter(|m| m["type"] == "event")
        .map(|m| m["name"].as_str().unwrap())
        .collect()
}

#[test]
fn adapter_tick_tap_and_observe() {
    let mut session = Session::new(GameState::new(12345), SessionConfig::default());

    let out = send(&mut session, r#"{"type":"tick","seq":1,"now_ms":0}"#);
    assert_eq!(event_names(&out), vec!["level_created", "time_updated"]);
    assert_eq!(out[0]["level"], 1);
    assert_eq!(out[1]["seconds"], 10);

    let out = send(&mut session, r#"{"type":"observe","seq":2}"#);
    assert_eq!(out.len(), 1);
    let obs = &out[0];
    assert_eq!(obs["type"], "observation");
    assert_eq!(obs["phase"], "awaiting_guess");
    assert_eq!(obs["running"], true);
    assert_eq!(obs["grid"]["rows"], 8);
    assert_eq!(obs["grid"]["cols"], 12);
    let tiles = obs["tiles"].as_array().unwrap();
    assert_eq!(tiles.len(), 96);
    assert_eq!(tiles.iter().filter(|t| !t.is_null()).count(), 9);

    let slot = session.game().round().correct_slot();
    let tap = format!(r#"{{"type":"tap","seq":3,"slot":{},"now_ms":500}}"#, slot);
    let out = send(&mut session, &tap);
    assert_eq!(out[0]["type"], "ack");
    assert_eq!(out[0]["ack"], 3);
    assert_eq!(out[0]["tap"], "correct");
    assert_eq!(event_names(&out), vec!["score_changed", "play_sound"]);
    assert_eq!(out[1]["score"], 1);
    assert_eq!(out[2]["sound"], "correct");

    let out = send(&mut session, r#"{"type":"tick","seq":4,"now_ms":2000}"#);
    assert_eq!(event_names(&out), vec!["level_created", "time_updated"]);
    assert_eq!(out[0]["level"], 2);
}

#[test]
fn adapter_reports_bad_input_and_keeps_going() {
    let mut session = Session::new(GameState::new(1), SessionConfig::default());

    let out = send(&mut session, "{not json");
    assert_eq!(out[0]["type"], "error");
    assert_eq!(out[0]["code"], "invalid_message");

    let out = send(&mut session, r#"{"type":"jump","seq":9}"#);
    assert_eq!(out[0]["code"], "unknown_type");
    assert_eq!(out[0]["ack"], 9);

    let out = send(&mut session, r#"{"type":"tap","seq":10}"#);
    assert_eq!(out[0]["code"], "invalid_message");

    assert!(send(&mut session, "   ").is_empty());

    let out = send(&mut session, r#"{"type":"tick","seq":11,"now_ms":5}"#);
    assert_eq!(event_names(&out), vec!["level_created", "time_updated"]);
}

#[test]
fn adapter_game_over_then_tap_requests_restart() {
    let mut session = Session::new(GameState::new(2), SessionConfig::default());
    send(&mut session, r#"{"type":"tick","seq":1,"now_ms":0}"#);

    let out = send(&mut session, r#"{"type":"tick","seq":2,"now_ms":10000}"#);
    assert_eq!(event_names(&out), vec!["time_updated", "game_over"]);

    let out = send(&mut session, r#"{"type":"tap","seq":3,"slot":0,"now_ms":10100}"#);
    assert_eq!(out[0]["tap"], "restart_requested");
    assert_eq!(event_names(&out), vec!["restart_scene"]);

    let out = send(&mut session, r#"{"type":"restart","seq":4}"#);
    assert_eq!(out[0]["type"], "ack");
    assert!(out[0].get("tap").is_none());
    assert_eq!(event_names(&out), vec!["score_changed", "level_created"]);
    assert!(session.game().running());
}

#[test]
fn adapter_streams_observations_when_enabled() {
    let mut session = Session::new(
        GameState::new(3),
        SessionConfig {
            stream_observations: true,
        },
    );
    let out = send(&mut session, r#"{"type":"tick","seq":1,"now_ms":0}"#);
    let last = out.last().unwrap();
    assert_eq!(last["type"], "observation");
    assert_eq!(last["time_remaining"], 10);

    let seqs: Vec<u64> = out.iter().map(|m| m["seq"].as_u64().unwrap()).collect();
    assert_eq!(seqs, vec![1, 2, 3]);
}
