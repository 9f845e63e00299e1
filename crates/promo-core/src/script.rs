//! Artifact scripts: a canvas size plus an ordered command list.

use crate::model::{Color, DrawCmd};
use serde::{Deserialize, Serialize};

/// One artifact's full description. Commands execute in order; later
/// commands paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactScript {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub commands: Vec<DrawCmd>,
}

impl ArtifactScript {
    #[must_use]
    pub fn new(name: impl Into<String>, width: u32, height: u32, background: Color) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            background,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, cmd: DrawCmd) -> &mut Self {
        self.commands.push(cmd);
        self
    }

    pub fn extend(&mut self, cmds: impl IntoIterator<Item = DrawCmd>) -> &mut Self {
        self.commands.extend(cmds);
        self
    }

    /// Number of commands of the given kind (see `DrawCmd::kind_name`).
    pub fn count_of(&self, kind: &str) -> usize {
        self.commands
            .iter()
            .filter(|cmd| cmd.kind_name() == kind)
            .count()
    }

    /// All text runs, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    /// Returns the serializer message if a value cannot be represented.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Script serialize error: {e}"))
    }

    /// Parse a script previously written by `to_json`.
    ///
    /// # Errors
    /// Returns the parser message on malformed input.
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Script parse error: {e}"))
    }
}
