//! Process invocation for commands.
//!
//! `Invoker` is the trait commands use to run an argument vector.
//! `ProcessInvoker` is the production implementation that spawns the program directly.
//! `MockInvoker` is the test double that records calls and returns preset responses.

use std::cell::RefCell;
use std::process::{Command, Stdio};

use crate::error::CommandError;
use crate::invocation;

/// Trait for running an argument vector and capturing its standard output.
pub trait Invoker {
    fn run(&self, argv: &[String]) -> Result<String, CommandError>;
}

/// Production invoker. Blocks until the child exits; stderr goes straight to
/// the parent's stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessInvoker;

impl Invoker for ProcessInvoker {
    fn run(&self, argv: &[String]) -> Result<String, CommandError> {
        let (program, args) = argv.split_first().ok_or(CommandError::EmptyInvocation)?;
        log::debug!("running {}", invocation::display(argv));
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| CommandError::Spawn {
                program: program.clone(),
                message: e.to_string(),
            })?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(CommandError::Process {
                argv: argv.to_vec(),
                code: output.status.code(),
            })
        }
    }
}

/// Test-double invoker that records argument vectors and returns pre-configured responses.
pub struct MockInvoker {
    responses: RefCell<Vec<Result<String, CommandError>>>,
    fallback: String,
    calls: RefCell<Vec<Vec<String>>>,
}

impl MockInvoker {
    /// Responses are handed out in order; once exhausted every call returns `Ok("")`.
    pub fn with_responses(responses: Vec<Result<String, CommandError>>) -> Self {
        let mut reversed = responses;
        reversed.reverse();
        MockInvoker {
            responses: RefCell::new(reversed),
            fallback: String::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every call succeeds with the same output.
    pub fn always(output: &str) -> Self {
        MockInvoker {
            responses: RefCell::new(Vec::new()),
            fallback: output.to_string(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn new() -> Self {
        Self::always("")
    }

    /// Every argument vector run so far, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// The most recent argument vector, if any.
    pub fn last_call(&self) -> Option<Vec<String>> {
        self.calls.borrow().last().cloned()
    }
}

impl Default for MockInvoker {
    fn default() -> Self {
        Self::new()
    }
}

impl Invoker for MockInvoker {
    fn run(&self, argv: &[String]) -> Result<String, CommandError> {
        self.calls.borrow_mut().push(argv.to_vec());
        let mut responses = self.responses.borrow_mut();
        if let Some(response) = responses.pop() {
            response
        } else {
            Ok(self.fallback.clone())
        }
    }
}
