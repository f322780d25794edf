//! Request — the typed form of a parsed command line.

use std::fmt;

use crate::command::condition::SummarizeCondition;
use crate::types::options::Options;


/// Which command a run request selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Echo,
    Simulate,
    Summarize,
    Iterate,
    Conditional,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Echo => "echo",
            CommandKind::Simulate => "simulate",
            CommandKind::Summarize => "summarize",
            CommandKind::Iterate => "iterate",
            CommandKind::Conditional => "conditional",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "echo" => Some(CommandKind::Echo),
            "simulate" => Some(CommandKind::Simulate),
            "summarize" => Some(CommandKind::Summarize),
            "iterate" => Some(CommandKind::Iterate),
            "conditional" => Some(CommandKind::Conditional),
            _ => None,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// A command to run, with everything the command line said about it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub kind: CommandKind,
    /// Options given as flags. Layered over `options_file` when both are present.
    pub options: Options,
    /// YAML file to read base options from.
    pub options_file: Option<String>,
    /// Label for the echo command.
    pub label: Option<String>,
    /// Overrides the configured condition for the conditional command.
    pub condition: Option<SummarizeCondition>,
}

impl RunRequest {
    pub fn new(kind: CommandKind) -> Self {
        RunRequest {
            kind,
            options: Options::default(),
            options_file: None,
            label: None,
            condition: None,
        }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Run(RunRequest),
    Help { topic: Option<String> },
}
