use serde::{Deserialize, Serialize};

use crate::error::CommandError;


/// Named invocation parameters shared by every command in a chain.
///
/// Commands only ever see `&Options`; nothing downstream mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Options {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_file: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub game_files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulations: Option<u32>,
}

impl Options {
    /// Options carrying only a diagnostic label.
    pub fn named(name: &str) -> Self {
        Options {
            name: Some(name.to_string()),
            ..Options::default()
        }
    }

    /// Stable single-line rendering used as a process argument.
    ///
    /// Compact JSON, fields in declaration order, unset fields and an empty
    /// `game_files` omitted: `{"name":"demo","samples":42}`.
    pub fn render(&self) -> String {
        // Only strings, integers and string lists: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Copy every field set in `other` over this one. A non-empty
    /// `game_files` in `other` replaces the list wholesale.
    pub fn overlay(&mut self, other: Options) {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.samples.is_some() {
            self.samples = other.samples;
        }
        if other.game_file.is_some() {
            self.game_file = other.game_file;
        }
        if !other.game_files.is_empty() {
            self.game_files = other.game_files;
        }
        if other.summary_file.is_some() {
            self.summary_file = other.summary_file;
        }
        if other.simulations.is_some() {
            self.simulations = other.simulations;
        }
    }

    pub fn require_samples(&self) -> Result<u64, CommandError> {
        self.samples.ok_or(CommandError::MissingOption("samples"))
    }

    pub fn require_game_file(&self) -> Result<&str, CommandError> {
        self.game_file
            .as_deref()
            .ok_or(CommandError::MissingOption("game_file"))
    }

    pub fn require_summary_file(&self) -> Result<&str, CommandError> {
        self.summary_file
            .as_deref()
            .ok_or(CommandError::MissingOption("summary_file"))
    }

    pub fn require_simulations(&self) -> Result<u32, CommandError> {
        self.simulations
            .ok_or(CommandError::MissingOption("simulations"))
    }
}
