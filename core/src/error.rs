use std::fmt;

use crate::invocation;

// ---------------------------------------------------------------------------
// Command errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum CommandError {
    /// The process ran and exited unsuccessfully. `code` is `None` when the
    /// process was terminated by a signal.
    Process {
        argv: Vec<String>,
        code: Option<i32>,
    },
    /// The program could not be started at all.
    Spawn {
        program: String,
        message: String,
    },
    /// An argument vector with no program in it.
    EmptyInvocation,
    /// A field the command needs to build its arguments was not set.
    MissingOption(&'static str),
}

impl CommandError {
    /// Exit code of the failed process, if there was one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CommandError::Process { code, .. } => *code,
            _ => None,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Process { argv, code: Some(code) } => {
                write!(f, "`{}` exited with status {}", invocation::display(argv), code)
            }
            CommandError::Process { argv, code: None } => {
                write!(f, "`{}` was terminated by a signal", invocation::display(argv))
            }
            CommandError::Spawn { program, message } => {
                write!(f, "failed to start '{}': {}", program, message)
            }
            CommandError::EmptyInvocation => write!(f, "empty argument vector"),
            CommandError::MissingOption(field) => {
                write!(f, "missing required option: {}", field)
            }
        }
    }
}

impl std::error::Error for CommandError {}
