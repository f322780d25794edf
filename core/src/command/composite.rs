//! Composite commands — chains of simulate and summarize steps.
//!
//! Composites never hold their sub-commands. They ask a [`StepFactory`] for a
//! step right before its first use, so a step that is never needed is never
//! built. Failures from any step propagate unchanged and end the chain.

use crate::error::CommandError;
use crate::infrastructure::Invoker;
use crate::types::config::ScriptPaths;
use crate::types::options::Options;

use super::condition::SummarizeCondition;
use super::simulate::SimulateCommand;
use super::summarize::SummarizeCommand;
use super::Command;

// ---------------------------------------------------------------------------
// StepFactory
// ---------------------------------------------------------------------------

/// Builds the leaf steps a composite runs.
pub trait StepFactory {
    fn simulate(&self) -> Box<dyn Command + '_>;
    fn summarize(&self) -> Box<dyn Command + '_>;
}

/// Factory producing the process-backed simulate and summarize commands.
pub struct ProcessSteps<'a> {
    invoker: &'a dyn Invoker,
    scripts: &'a ScriptPaths,
}

impl<'a> ProcessSteps<'a> {
    pub fn new(invoker: &'a dyn Invoker, scripts: &'a ScriptPaths) -> Self {
        ProcessSteps { invoker, scripts }
    }
}

impl StepFactory for ProcessSteps<'_> {
    fn simulate(&self) -> Box<dyn Command + '_> {
        Box::new(SimulateCommand::new(self.invoker, self.scripts))
    }

    fn summarize(&self) -> Box<dyn Command + '_> {
        Box::new(SummarizeCommand::new(self.invoker, self.scripts))
    }
}

// ---------------------------------------------------------------------------
// IterativeSimulateCommand
// ---------------------------------------------------------------------------

/// Runs the simulation `options.simulations` times, then summarizes once.
///
/// Returns the summary output; simulation outputs are dropped.
pub struct IterativeSimulateCommand<'a> {
    steps: &'a dyn StepFactory,
}

impl<'a> IterativeSimulateCommand<'a> {
    pub fn new(steps: &'a dyn StepFactory) -> Self {
        IterativeSimulateCommand { steps }
    }
}

impl Command for IterativeSimulateCommand<'_> {
    fn name(&self) -> &str {
        "iterate"
    }

    fn execute(&self, options: &Options) -> Result<String, CommandError> {
        let runs = options.require_simulations()?;

        let simulate = self.steps.simulate();
        for run in 1..=runs {
            log::info!("{}: simulation {}/{}", self.name(), run, runs);
            simulate.execute(options)?;
        }

        log::info!("{}: summarizing {} run(s)", self.name(), runs);
        let summarize = self.steps.summarize();
        summarize.execute(options)
    }
}

// ---------------------------------------------------------------------------
// ConditionalSummarizeCommand
// ---------------------------------------------------------------------------

/// Runs the simulation once and summarizes only when `condition` holds.
///
/// Returns the summary output when it ran, the simulation output otherwise.
pub struct ConditionalSummarizeCommand<'a> {
    steps: &'a dyn StepFactory,
    condition: SummarizeCondition,
}

impl<'a> ConditionalSummarizeCommand<'a> {
    pub fn new(steps: &'a dyn StepFactory, condition: SummarizeCondition) -> Self {
        ConditionalSummarizeCommand { steps, condition }
    }

    pub fn condition(&self) -> &SummarizeCondition {
        &self.condition
    }
}

impl Command for ConditionalSummarizeCommand<'_> {
    fn name(&self) -> &str {
        "conditional"
    }

    fn execute(&self, options: &Options) -> Result<String, CommandError> {
        let simulate = self.steps.simulate();
        let output = simulate.execute(options)?;

        let condition = self.condition();
        if !condition.evaluate(options, &output) {
            log::info!("{}: condition '{}' not met, skipping summary", self.name(), condition);
            return Ok(output);
        }

        log::info!("{}: condition '{}' met, summarizing", self.name(), condition);
        let summarize = self.steps.summarize();
        summarize.execute(options)
    }
}
