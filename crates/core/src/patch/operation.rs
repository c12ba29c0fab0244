use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The six RFC 6902 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Copy,
    Move,
    Remove,
    Replace,
    Test,
}

/// Auxiliary fields an operation needs besides `path`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    pub from: bool,
    pub value: bool,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Copy,
        Operation::Move,
        Operation::Remove,
        Operation::Replace,
        Operation::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Copy => "copy",
            Operation::Move => "move",
            Operation::Remove => "remove",
            Operation::Replace => "replace",
            Operation::Test => "test",
        }
    }

    pub fn requirements(self) -> Requirements {
        match self {
            Operation::Add | Operation::Replace | Operation::Test => Requirements {
                from: false,
                value: true,
            },
            Operation::Copy | Operation::Move => Requirements {
                from: true,
                value: false,
            },
            Operation::Remove => Requirements::default(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or(())
    }
}

/// One operation of a patch document, as received.
///
/// `op` stays a string so that unknown operations reach validation instead of
/// failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    #[serde(default)]
    pub op: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl PatchOperation {
    pub fn new(op: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            path: path.into(),
            from: None,
            value: None,
        }
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }

    /// The declared operation, if it is one of the six recognised names.
    pub fn operation(&self) -> Option<Operation> {
        self.op.parse().ok()
    }

    pub fn from_path(&self) -> &str {
        self.from.as_deref().unwrap_or_default()
    }
}
