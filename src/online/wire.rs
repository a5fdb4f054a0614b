//! JSON bodies exchanged with the move server.

use serde::{Deserialize, Serialize};

use crate::board::{Coord, Move};

/// Server key for the move made on `turn`: `move-000`, `move-001`, ...
#[must_use]
pub fn move_key(turn: u32) -> String {
    format!("move-{turn:03}")
}

/// Request body. The `action` field selects the operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Request {
    Clear {
        username: String,
    },
    Submit {
        username: String,
        #[serde(rename = "move")]
        mv: WireMove,
        key: String,
    },
    Query {
        username: String,
        key: String,
    },
}

/// Non-move submissions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Pass,
    Forfeit,
}

/// A move as it travels over the wire. Squares are `[row, col]`.
///
/// The server stores the `move` value verbatim and hands it back on query,
/// so a note for the opponent rides inside the step as `msg`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireMove {
    Signal(Signal),
    Step {
        fr: [i32; 2],
        to: [i32; 2],
        capture: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        msg: Option<String>,
    },
}

impl From<&Move> for WireMove {
    fn from(mv: &Move) -> Self {
        WireMove::Step {
            fr: [mv.from().row(), mv.from().col()],
            to: [mv.to().row(), mv.to().col()],
            capture: mv.is_capture(),
            msg: mv.message().map(str::to_owned),
        }
    }
}

impl WireMove {
    /// Origin and destination of a step
    #[must_use]
    pub fn squares(&self) -> Option<(Coord, Coord)> {
        match *self {
            WireMove::Step { fr, to, .. } => Some((Coord(fr[0], fr[1]), Coord(to[0], to[1]))),
            WireMove::Signal(_) => None,
        }
    }
}

/// Body of a successful `query`. `move` is absent while the key is unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "move", default)]
    pub mv: Option<WireMove>,
    /// Server status text, not written by the opponent
    #[serde(rename = "msg", default)]
    pub status: Option<String>,
}

/// Raw HTTP outcome handed back by a transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_key_is_zero_padded() {
        assert_eq!(move_key(0), "move-000");
        assert_eq!(move_key(7), "move-007");
        assert_eq!(move_key(123), "move-123");
        assert_eq!(move_key(1000), "move-1000");
    }

    #[test]
    fn test_submit_body() {
        let req = Request::Submit {
            username: "ada".into(),
            mv: WireMove::Step {
                fr: [1, 4],
                to: [3, 4],
                capture: false,
                msg: None,
            },
            key: move_key(2),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "action": "submit",
                "username": "ada",
                "move": {"fr": [1, 4], "to": [3, 4], "capture": false},
                "key": "move-002"
            })
        );
    }

    #[test]
    fn test_signal_bodies() {
        let req = Request::Submit {
            username: "ada".into(),
            mv: WireMove::Signal(Signal::Forfeit),
            key: move_key(9),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "action": "submit",
                "username": "ada",
                "move": "forfeit",
                "key": "move-009"
            })
        );
        assert_eq!(
            serde_json::to_value(Request::Clear {
                username: "ada".into()
            })
            .unwrap(),
            json!({"action": "clear", "username": "ada"})
        );
    }

    #[test]
    fn test_step_carries_note() {
        let req = Request::Submit {
            username: "ada".into(),
            mv: WireMove::Step {
                fr: [0, 0],
                to: [1, 1],
                capture: true,
                msg: Some("check".into()),
            },
            key: move_key(3),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "action": "submit",
                "username": "ada",
                "move": {"fr": [0, 0], "to": [1, 1], "capture": true, "msg": "check"},
                "key": "move-003"
            })
        );
    }

    #[test]
    fn test_decode_query_responses() {
        let pass: QueryResponse = serde_json::from_str(r#"{"move": "pass"}"#).unwrap();
        assert_eq!(pass.mv, Some(WireMove::Signal(Signal::Pass)));

        let step: QueryResponse = serde_json::from_str(
            r#"{"move": {"fr": [0, 1], "to": [2, 2], "capture": true, "msg": "hi"}, "msg": "ok"}"#,
        )
        .unwrap();
        assert_eq!(step.mv.as_ref().unwrap().squares(), Some((Coord(0, 1), Coord(2, 2))));
        assert!(matches!(&step.mv, Some(WireMove::Step { msg: Some(m), .. }) if m == "hi"));
        assert_eq!(step.status.as_deref(), Some("ok"));

        let pending: QueryResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(pending.mv, None);

        assert!(serde_json::from_str::<QueryResponse>(r#"{"move": "resign"}"#).is_err());
    }
}
