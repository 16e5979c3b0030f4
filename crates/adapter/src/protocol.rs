//! Protocol module - JSON message types for the headless driver
//!
//! Line-delimited JSON: one message per line in each direction. Client
//! messages carry a `seq` chosen by the client; acks and errors echo it.
//! Server messages carry their own monotonically increasing `seq`.

use serde::{Deserialize, Serialize};

use crate::core::{GameSnapshot, Palette, Slot};
use crate::types::{GameEvent, Outcome};

// ============== Client -> Game Messages ==============

/// Advance the game clock to `now_ms` (monotonic, milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickMessage {
    #[serde(default)]
    pub seq: u64,
    pub now_ms: u64,
}

/// Tap grid slot `slot` at `now_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapMessage {
    #[serde(default)]
    pub seq: u64,
    pub slot: usize,
    pub now_ms: u64,
}

/// Restart from level 1, or request an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeqOnlyMessage {
    #[serde(default)]
    pub seq: u64,
}

/// Parsed incoming message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientMessage {
    Tick(TickMessage),
    Tap(TapMessage),
    Restart(SeqOnlyMessage),
    Observe(SeqOnlyMessage),
    /// Well-formed JSON with a `type` this protocol does not know.
    Unknown { seq: u64, msg_type: String },
}

impl ClientMessage {
    pub fn seq(&self) -> u64 {
        match self {
            ClientMessage::Tick(m) => m.seq,
            ClientMessage::Tap(m) => m.seq,
            ClientMessage::Restart(m) | ClientMessage::Observe(m) => m.seq,
            ClientMessage::Unknown { seq, .. } => *seq,
        }
    }
}

/// Parse one line of client input.
pub fn parse_client_message(json: &str) -> Result<ClientMessage, serde_json::Error> {
    #[derive(Debug, Deserialize)]
    #[serde(tag = "type")]
    enum InboundMessage {
        #[serde(rename = "tick")]
        Tick(TickMessage),
        #[serde(rename = "tap")]
        Tap(TapMessage),
        #[serde(rename = "restart")]
        Restart(SeqOnlyMessage),
        #[serde(rename = "observe")]
        Observe(SeqOnlyMessage),
    }

    match serde_json::from_str::<InboundMessage>(json) {
        Ok(InboundMessage::Tick(m)) => Ok(ClientMessage::Tick(m)),
        Ok(InboundMessage::Tap(m)) => Ok(ClientMessage::Tap(m)),
        Ok(InboundMessage::Restart(m)) => Ok(ClientMessage::Restart(m)),
        Ok(InboundMessage::Observe(m)) => Ok(ClientMessage::Observe(m)),
        Err(e) => {
            // Unknown message type is reported in-band, not as a parse error.
            #[derive(Debug, Deserialize)]
            struct TypeOnly {
                #[serde(rename = "type")]
                msg_type: Option<String>,
                seq: Option<u64>,
            }
            let probe = serde_json::from_str::<TypeOnly>(json)?;
            match probe.msg_type {
                Some(t) if !matches!(t.as_str(), "tick" | "tap" | "restart" | "observe") => {
                    Ok(ClientMessage::Unknown {
                        seq: probe.seq.unwrap_or(0),
                        msg_type: t,
                    })
                }
                _ => Err(e),
            }
        }
    }
}

// ============== Game -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "invalid_message")]
    InvalidMessage,
    #[serde(rename = "unknown_type")]
    UnknownType,
    #[serde(rename = "time_went_backwards")]
    TimeWentBackwards,
}

/// Result of a tap, as reported in an ack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TapResult {
    #[serde(rename = "ignored")]
    Ignored,
    #[serde(rename = "correct")]
    Correct,
    #[serde(rename = "wrong")]
    Wrong,
    #[serde(rename = "restart_requested")]
    RestartRequested,
}

impl From<crate::core::GuessResult> for TapResult {
    fn from(value: crate::core::GuessResult) -> Self {
        use crate::core::GuessResult;
        match value {
            GuessResult::Ignored => TapResult::Ignored,
            GuessResult::Resolved(Outcome::Correct) => TapResult::Correct,
            GuessResult::Resolved(Outcome::Wrong) => TapResult::Wrong,
            GuessResult::RestartRequested => TapResult::RestartRequested,
        }
    }
}

/// One core notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMessage {
    pub seq: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

impl EventMessage {
    pub fn from_event(seq: u64, event: GameEvent) -> Self {
        let mut msg = Self {
            seq,
            name: event.name().to_string(),
            level: None,
            score: None,
            seconds: None,
            sound: None,
        };
        match event {
            GameEvent::LevelCreated { level } => msg.level = Some(level),
            GameEvent::ScoreChanged { score } => msg.score = Some(score),
            GameEvent::TimeUpdated { seconds } => msg.seconds = Some(seconds),
            GameEvent::PlaySound(sound) => msg.sound = Some(sound.as_str().to_string()),
            GameEvent::GameOver | GameEvent::RestartScene => {}
        }
        msg
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckMessage {
    pub seq: u64,
    /// Client seq being acknowledged.
    pub ack: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap: Option<TapResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub seq: u64,
    /// Client seq that caused the error (0 when unknown).
    pub ack: u64,
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridInfo {
    pub rows: u16,
    pub cols: u16,
}

/// Full game state (sent on `observe`, and after every change when streaming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationMessage {
    pub seq: u64,
    pub round_id: u32,
    pub level: u32,
    pub round_level: u32,
    pub score: i32,
    pub time_remaining: i32,
    pub phase: String,
    pub running: bool,
    pub grid: GridInfo,
    /// Row-major piece names; `null` for hidden slots.
    pub tiles: Vec<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_guess: Option<usize>,
}

impl ObservationMessage {
    pub fn from_snapshot(seq: u64, snap: &GameSnapshot, palette: &Palette) -> Self {
        let tiles = snap
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Hidden => None,
                Slot::Wrong(id) | Slot::Correct(id) => palette.name(*id).map(str::to_string),
            })
            .collect();
        Self {
            seq,
            round_id: snap.round_id,
            level: snap.level,
            round_level: snap.round_level,
            score: snap.score,
            time_remaining: snap.time_remaining,
            phase: snap.phase.as_str().to_string(),
            running: snap.phase.is_running(),
            grid: GridInfo {
                rows: snap.grid_rows,
                cols: snap.grid_cols,
            },
            tiles,
            last_guess: snap.last_guess,
        }
    }
}

/// Any outbound message, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "event")]
    Event(EventMessage),
    #[serde(rename = "ack")]
    Ack(AckMessage),
    #[serde(rename = "error")]
    Error(ErrorMessage),
    #[serde(rename = "observation")]
    Observation(ObservationMessage),
}

impl ServerMessage {
    pub fn seq(&self) -> u64 {
        match self {
            ServerMessage::Event(m) => m.seq,
            ServerMessage::Ack(m) => m.seq,
            ServerMessage::Error(m) => m.seq,
            ServerMessage::Observation(m) => m.seq,
        }
    }
}
