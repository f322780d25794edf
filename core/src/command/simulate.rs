use crate::error::CommandError;
use crate::infrastructure::Invoker;
use crate::types::config::ScriptPaths;
use crate::types::options::Options;

use super::Command;


/// Runs the simulation script once: `--samples N -o GAME_FILE`.
pub struct SimulateCommand<'a> {
    invoker: &'a dyn Invoker,
    scripts: &'a ScriptPaths,
}

impl<'a> SimulateCommand<'a> {
    pub fn new(invoker: &'a dyn Invoker, scripts: &'a ScriptPaths) -> Self {
        SimulateCommand { invoker, scripts }
    }

    /// Build the argument vector. Fails if `samples` or `game_file` is unset.
    pub fn argv(&self, options: &Options) -> Result<Vec<String>, CommandError> {
        let samples = options.require_samples()?;
        let game_file = options.require_game_file()?;
        Ok(vec![
            self.scripts.interpreter.clone(),
            self.scripts.simulate_script.clone(),
            "--samples".into(),
            samples.to_string(),
            "-o".into(),
            game_file.to_string(),
        ])
    }
}

impl Command for SimulateCommand<'_> {
    fn name(&self) -> &str {
        "simulate"
    }

    fn execute(&self, options: &Options) -> Result<String, CommandError> {
        let argv = self.argv(options)?;
        self.invoker.run(&argv)
    }
}
