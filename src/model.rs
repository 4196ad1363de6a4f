//! Data that crosses the boundary between the generated program and its host.
use serde::{Deserialize, Serialize};

/// Which stream a message belongs to. Only standard output exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Stdout,
}

/// What the generated `print` primitive posts: `{ kind: "stdout", text }`.
///
/// Exactly two fields; anything else is a malformed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn stdout(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Stdout,
            text: text.into(),
        }
    }
}
