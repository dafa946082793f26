//! Text framing for role messages.
//!
//! | message | frame |
//! |---|---|
//! | perception query | `QUERY` |
//! | action command / recommendation | `FORWARD`, `TURN_LEFT`, ... |
//! | perception report | `STENCH;BREEZE`, `SAFE` |
//! | game over | `GAME_OVER:SUCCESS`, `GAME_OVER:FAIL:pit` |
//! | refusal | `REFUSE:INVALID_ACTION:<token>`, `REFUSE:GAME_OVER:<outcome>`, `REFUSE:HALTED` |
//!
//! Tokens are matched case-insensitively and surrounding whitespace is
//! ignored.
use std::str::FromStr;

use super::{
    ActionCommand, EnvironmentReply, EnvironmentRequest, PerceptionReport, RecommendedAction,
    Refusal,
};
use crate::action::Action;
use crate::perception::{PerceptionSet, UnknownPerception};
use crate::state::{FailReason, Outcome};

const QUERY: &str = "QUERY";
const GAME_OVER: &str = "GAME_OVER:";
const REFUSE: &str = "REFUSE:";
const INVALID_ACTION: &str = "INVALID_ACTION";
const HALTED: &str = "HALTED";
const SUCCESS: &str = "SUCCESS";
const FAIL: &str = "FAIL";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("empty frame")]
    Empty,

    #[error("unknown action '{token}'")]
    UnknownAction { token: String },

    #[error(transparent)]
    UnknownPerception(#[from] UnknownPerception),

    #[error("unknown outcome '{text}'")]
    UnknownOutcome { text: String },

    #[error("unknown refusal '{text}'")]
    UnknownRefusal { text: String },
}

/// A message with a text frame representation.
pub trait Frame: Sized {
    fn encode(&self) -> String;

    fn decode(frame: &str) -> Result<Self, WireError>;
}

fn non_empty(frame: &str) -> Result<&str, WireError> {
    match frame.trim() {
        "" => Err(WireError::Empty),
        trimmed => Ok(trimmed),
    }
}

fn parse_action(token: &str) -> Result<Action, WireError> {
    Action::from_str(token).map_err(|_| WireError::UnknownAction {
        token: token.to_owned(),
    })
}

fn parse_outcome(text: &str) -> Result<Outcome, WireError> {
    let unknown = || WireError::UnknownOutcome {
        text: text.to_owned(),
    };
    if text.eq_ignore_ascii_case(SUCCESS) {
        return Ok(Outcome::Success);
    }
    let (head, reason) = text.split_once(':').ok_or_else(unknown)?;
    if !head.eq_ignore_ascii_case(FAIL) {
        return Err(unknown());
    }
    FailReason::from_str(reason)
        .map(Outcome::Fail)
        .map_err(|_| unknown())
}

/// Strips an ASCII case-insensitive prefix.
fn strip_prefix_ci<'a>(frame: &'a str, prefix: &str) -> Option<&'a str> {
    let head = frame.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &frame[prefix.len()..])
}

impl Frame for EnvironmentRequest {
    fn encode(&self) -> String {
        match self {
            EnvironmentRequest::PerceptionQuery => QUERY.to_owned(),
            EnvironmentRequest::Act(command) => command.action.to_string(),
        }
    }

    fn decode(frame: &str) -> Result<Self, WireError> {
        let frame = non_empty(frame)?;
        if frame.eq_ignore_ascii_case(QUERY) {
            return Ok(EnvironmentRequest::PerceptionQuery);
        }
        parse_action(frame).map(|action| EnvironmentRequest::Act(ActionCommand { action }))
    }
}

impl Frame for RecommendedAction {
    fn encode(&self) -> String {
        self.action.to_string()
    }

    fn decode(frame: &str) -> Result<Self, WireError> {
        parse_action(non_empty(frame)?).map(|action| RecommendedAction { action })
    }
}

impl Frame for PerceptionReport {
    fn encode(&self) -> String {
        self.perceptions.or_safe().to_string()
    }

    fn decode(frame: &str) -> Result<Self, WireError> {
        let perceptions = PerceptionSet::from_str(non_empty(frame)?)?;
        Ok(PerceptionReport { perceptions })
    }
}

impl Frame for Refusal {
    fn encode(&self) -> String {
        match self {
            Refusal::InvalidAction { token } => format!("{REFUSE}{INVALID_ACTION}:{token}"),
            Refusal::GameOver(outcome) => format!("{REFUSE}{GAME_OVER}{outcome}"),
            Refusal::Halted => format!("{REFUSE}{HALTED}"),
        }
    }

    fn decode(frame: &str) -> Result<Self, WireError> {
        let frame = non_empty(frame)?;
        let unknown = || WireError::UnknownRefusal {
            text: frame.to_owned(),
        };
        let body = strip_prefix_ci(frame, REFUSE).ok_or_else(unknown)?;

        if body.eq_ignore_ascii_case(HALTED) {
            return Ok(Refusal::Halted);
        }
        if let Some(outcome) = strip_prefix_ci(body, GAME_OVER) {
            return parse_outcome(outcome).map(Refusal::GameOver);
        }
        let (kind, token) = body.split_once(':').ok_or_else(unknown)?;
        if kind.eq_ignore_ascii_case(INVALID_ACTION) {
            return Ok(Refusal::InvalidAction {
                token: token.to_owned(),
            });
        }
        Err(unknown())
    }
}

impl Frame for EnvironmentReply {
    fn encode(&self) -> String {
        match self {
            EnvironmentReply::Perceptions(report) => report.encode(),
            EnvironmentReply::GameOver(outcome) => format!("{GAME_OVER}{outcome}"),
            EnvironmentReply::Refused(refusal) => refusal.encode(),
        }
    }

    fn decode(frame: &str) -> Result<Self, WireError> {
        let frame = non_empty(frame)?;
        if let Some(outcome) = strip_prefix_ci(frame, GAME_OVER) {
            return parse_outcome(outcome).map(EnvironmentReply::GameOver);
        }
        if strip_prefix_ci(frame, REFUSE).is_some() {
            return Refusal::decode(frame).map(EnvironmentReply::Refused);
        }
        PerceptionReport::decode(frame).map(EnvironmentReply::Perceptions)
    }
}
