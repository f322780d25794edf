//! Commands — uniform `execute(options) -> output` units.
//!
//! Leaf commands (`EchoCommand`, `SimulateCommand`, `SummarizeCommand`) turn
//! options into one argument vector and run it through an injected
//! [`Invoker`]. Composite commands (`IterativeSimulateCommand`,
//! `ConditionalSummarizeCommand`) run other commands, which they obtain from a
//! [`StepFactory`](composite::StepFactory) at the moment they need them.
//!
//! | Command | Runs |
//! |---------|------|
//! | `echo` | `echo <label> <options>` |
//! | `simulate` | `<interpreter> <simulate_script> --samples N -o FILE` |
//! | `summarize` | `<interpreter> <summarize_script> -o FILE GAME_FILE...` |
//! | `iterate` | simulate × N, then summarize |
//! | `conditional` | simulate, then summarize if the condition holds |

pub mod composite;
pub mod condition;
pub mod simulate;
pub mod summarize;

pub use composite::{ConditionalSummarizeCommand, IterativeSimulateCommand, ProcessSteps, StepFactory};
pub use condition::SummarizeCondition;
pub use simulate::SimulateCommand;
pub use summarize::SummarizeCommand;

use crate::error::CommandError;
use crate::infrastructure::Invoker;
use crate::types::options::Options;


/// A single unit of work over a shared, read-only options bag.
pub trait Command {
    /// Short identifier used in log lines.
    fn name(&self) -> &str;

    /// Run the command and return its captured output text.
    fn execute(&self, options: &Options) -> Result<String, CommandError>;
}


// ---------------------------------------------------------------------------
// EchoCommand
// ---------------------------------------------------------------------------

/// Placeholder command: echoes its label and the rendered options.
pub struct EchoCommand<'a> {
    invoker: &'a dyn Invoker,
    label: String,
}

impl<'a> EchoCommand<'a> {
    pub fn new(invoker: &'a dyn Invoker) -> Self {
        Self::with_label(invoker, "Command")
    }

    pub fn with_label(invoker: &'a dyn Invoker, label: &str) -> Self {
        EchoCommand {
            invoker,
            label: label.to_string(),
        }
    }

    /// `["echo", label, options.render()]`
    pub fn argv(&self, options: &Options) -> Vec<String> {
        vec!["echo".into(), self.label.clone(), options.render()]
    }
}

impl Command for EchoCommand<'_> {
    fn name(&self) -> &str {
        "echo"
    }

    fn execute(&self, options: &Options) -> Result<String, CommandError> {
        self.invoker.run(&self.argv(options))
    }
}
