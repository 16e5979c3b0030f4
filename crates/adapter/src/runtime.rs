//! Headless session.
//!
//! Feeds client messages into a [`GameState`] and turns the resulting core
//! events, acks and observations into outbound protocol messages. The session
//! is synchronous: one inbound line in, zero or more outbound lines out.

use anyhow::Result;

use crate::core::{GameSnapshot, GameState, GuessResult};
use crate::protocol::{
    parse_client_message, AckMessage, ClientMessage, ErrorCode, ErrorMessage, EventMessage,
    ObservationMessage, ServerMessage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Send an observation after every message that changed the game.
    pub stream_observations: bool,
}

impl SessionConfig {
    /// Read settings from environment variables.
    ///
    /// - `ODDONE_STREAM_OBSERVATIONS`: "1" or "true" enables streaming
    pub fn from_env() -> Self {
        let stream_observations = std::env::var("ODDONE_STREAM_OBSERVATIONS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);
        Self {
            stream_observations,
        }
    }
}

pub struct Session {
    game: GameState,
    config: SessionConfig,
    seq: u64,
    last_now_ms: u64,
    snapshot: GameSnapshot,
}

impl Session {
    pub fn new(game: GameState, config: SessionConfig) -> Self {
        let snapshot = game.snapshot();
        Self {
            game,
            config,
            seq: 0,
            last_now_ms: 0,
            snapshot,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Handle one raw input line and return the encoded response lines.
    pub fn handle_line(&mut self, line: &str) -> Result<Vec<String>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Vec::new());
        }

        let messages = match parse_client_message(line) {
            Ok(msg) => self.handle_message(msg),
            Err(e) => {
                log::debug!("rejecting malformed line: {}", e);
                vec![self.error(0, ErrorCode::InvalidMessage, e.to_string())]
            }
        };

        messages
            .iter()
            .map(|m| serde_json::to_string(m).map_err(Into::into))
            .collect()
    }

    /// Handle one parsed message.
    pub fn handle_message(&mut self, msg: ClientMessage) -> Vec<ServerMessage> {
        let mut out = Vec::new();
        let client_seq = msg.seq();

        let changed = match msg {
            ClientMessage::Tick(m) => {
                if let Err(err) = self.advance_clock(client_seq, m.now_ms) {
                    out.push(err);
                    return out;
                }
                self.game.tick(m.now_ms)
            }
            ClientMessage::Tap(m) => {
                if let Err(err) = self.advance_clock(client_seq, m.now_ms) {
                    out.push(err);
                    return out;
                }
                let result = self.game.guess(m.slot, m.now_ms);
                let seq = self.next_seq();
                out.push(ServerMessage::Ack(AckMessage {
                    seq,
                    ack: client_seq,
                    tap: Some(result.into()),
                }));
                result != GuessResult::Ignored
            }
            ClientMessage::Restart(_) => {
                self.game.restart();
                let seq = self.next_seq();
                out.push(ServerMessage::Ack(AckMessage {
                    seq,
                    ack: client_seq,
                    tap: None,
                }));
                true
            }
            ClientMessage::Observe(_) => {
                self.flush_events(&mut out);
                out.push(self.observation());
                return out;
            }
            ClientMessage::Unknown { msg_type, .. } => {
                out.push(self.error(
                    client_seq,
                    ErrorCode::UnknownType,
                    format!("unknown message type: {}", msg_type),
                ));
                return out;
            }
        };

        self.flush_events(&mut out);
        if changed && self.config.stream_observations {
            out.push(self.observation());
        }
        out
    }

    fn advance_clock(&mut self, client_seq: u64, now_ms: u64) -> Result<(), ServerMessage> {
        if now_ms < self.last_now_ms {
            return Err(self.error(
                client_seq,
                ErrorCode::TimeWentBackwards,
                format!(
                    "now_ms {} is earlier than the last timestamp {}",
                    now_ms, self.last_now_ms
                ),
            ));
        }
        self.last_now_ms = now_ms;
        Ok(())
    }

    fn flush_events(&mut self, out: &mut Vec<ServerMessage>) {
        let events: Vec<_> = self.game.drain_events().collect();
        for event in events {
            let seq = self.next_seq();
            out.push(ServerMessage::Event(EventMessage::from_event(seq, event)));
        }
    }

    fn observation(&mut self) -> ServerMessage {
        self.game.snapshot_into(&mut self.snapshot);
        let seq = self.next_seq();
        ServerMessage::Observation(ObservationMessage::from_snapshot(
            seq,
            &self.snapshot,
            self.game.palette(),
        ))
    }

    fn error(&mut self, ack: u64, code: ErrorCode, message: String) -> ServerMessage {
        let seq = self.next_seq();
        ServerMessage::Error(ErrorMessage {
            seq,
            ack,
            code,
            message,
        })
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{SeqOnlyMessage, TapMessage, TapResult, TickMessage};

    fn session() -> Session {
        Session::new(GameState::new(12345), SessionConfig::default())
    }

    #[test]
    fn first_tick_reports_level_and_time() {
        let mut s = session();
        let out = s.handle_message(ClientMessage::Tick(TickMessage { seq: 1, now_ms: 0 }));
        let names: Vec<_> = out
            .iter()
            .filter_map(|m| match m {
                ServerMessage::Event(e) => Some(e.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["level_created", "time_updated"]);
    }

    #[test]
    fn tap_is_acked_with_result() {
        let mut s = session();
        let slot = s.game().round().correct_slot();
        let out = s.handle_message(ClientMessage::Tap(TapMessage {
            seq: 7,
            slot,
            now_ms: 10,
        }));
        assert!(matches!(
            out.first(),
            Some(ServerMessage::Ack(AckMessage {
                ack: 7,
                tap: Some(TapResult::Correct),
                ..
            }))
        ));
    }

    #[test]
    fn backwards_time_is_rejected() {
        let mut s = session();
        s.handle_message(ClientMessage::Tick(TickMessage { seq: 1, now_ms: 500 }));
        let out = s.handle_message(ClientMessage::Tick(TickMessage { seq: 2, now_ms: 100 }));
        assert!(matches!(
            out.as_slice(),
            [ServerMessage::Error(ErrorMessage {
                ack: 2,
                code: ErrorCode::TimeWentBackwards,
                ..
            })]
        ));
    }

    #[test]
    fn streaming_sends_observation_after_changes() {
        let mut s = Session::new(
            GameState::new(1),
            SessionConfig {
                stream_observations: true,
            },
        );
        let out = s.handle_message(ClientMessage::Restart(SeqOnlyMessage { seq: 1 }));
        assert!(matches!(out.last(), Some(ServerMessage::Observation(_))));

        // A tick inside the same second changes nothing visible.
        s.handle_message(ClientMessage::Tick(TickMessage { seq: 2, now_ms: 0 }));
        let out = s.handle_message(ClientMessage::Tick(TickMessage { seq: 3, now_ms: 16 }));
        assert!(out.is_empty());
    }

    #[test]
    fn server_seq_is_monotonic() {
        let mut s = session();
        let mut all = Vec::new();
        all.extend(s.handle_message(ClientMessage::Tick(TickMessage { seq: 1, now_ms: 0 })));
        all.extend(s.handle_message(ClientMessage::Observe(SeqOnlyMessage { seq: 2 })));
        all.extend(s.handle_message(ClientMessage::Restart(SeqOnlyMessage { seq: 3 })));
        let seqs: Vec<u64> = all.iter().map(ServerMessage::seq).collect();
        let expected: Vec<u64> = (1..=seqs.len() as u64).collect();
        assert_eq!(seqs, expected);
    }
}
