use crate::error::CommandError;
use crate::infrastructure::Invoker;
use crate::types::config::ScriptPaths;
use crate::types::options::Options;

use super::Command;


/// Runs the summary script once: `-o SUMMARY_FILE GAME_FILE...`.
///
/// Game files are appended in the order given; the script aggregates in that order.
pub struct SummarizeCommand<'a> {
    invoker: &'a dyn Invoker,
    scripts: &'a ScriptPaths,
}

impl<'a> SummarizeCommand<'a> {
    pub fn new(invoker: &'a dyn Invoker, scripts: &'a ScriptPaths) -> Self {
        SummarizeCommand { invoker, scripts }
    }

    pub fn argv(&self, options: &Options) -> Result<Vec<String>, CommandError> {
        let summary_file = options.require_summary_file()?;
        let mut argv = vec![
            self.scripts.interpreter.clone(),
            self.scripts.summarize_script.clone(),
            "-o".into(),
            summary_file.to_string(),
        ];
        argv.extend(options.game_files.iter().cloned());
        Ok(argv)
    }
}

impl Command for SummarizeCommand<'_> {
    fn name(&self) -> &str {
        "summarize"
    }

    fn execute(&self, options: &Options) -> Result<String, CommandError> {
        let argv = self.argv(options)?;
        self.invoker.run(&argv)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MockInvoker;

    #[test]
    fn summarize_runs_script_with_output_and_inputs() {
        let invoker = MockInvoker::always("sample output\n");
        let scripts = ScriptPaths {
            interpreter: "python".into(),
            summarize_script: "Chapter_13/ch13_r06.py".into(),
            ..ScriptPaths::default()
        };
        let options = Options {
            name: Some("mock_options".into()),
            samples: Some(42),
            game_files: vec!["game_file.yaml".into()],
            summary_file: Some("summary_file.yaml".into()),
            ..Options::default()
        };

        let output = SummarizeCommand::new(&invoker, &scripts).execute(&options).unwrap();

        assert_eq!(output, "sample output\n");
        assert_eq!(
            invoker.calls(),
            vec![vec![
                "python".to_string(),
                "Chapter_13/ch13_r06.py".to_string(),
                "-o".to_string(),
                "summary_file.yaml".to_string(),
                "game_file.yaml".to_string(),
            ]]
        );
    }

    #[test]
    fn game_file_order_is_preserved() {
        let invoker = MockInvoker::new();
        let scripts = ScriptPaths::default();
        let options = Options {
            summary_file: Some("s.yaml".into()),
            game_files: vec!["z.yaml".into(), "a.yaml".into(), "m.yaml".into()],
            ..Options::default()
        };
        let argv = SummarizeCommand::new(&invoker, &scripts).argv(&options).unwrap();
        assert_eq!(&argv[2..], &["-o", "s.yaml", "z.yaml", "a.yaml", "m.yaml"]);
    }

    #[test]
    fn empty_game_files_passes_only_output_flag() {
        let invoker = MockInvoker::new();
        let scripts = ScriptPaths::default();
        let options = Options {
            summary_file: Some("data/y12.yaml".into()),
            ..Options::default()
        };
        let argv = SummarizeCommand::new(&invoker, &scripts).argv(&options).unwrap();
        assert_eq!(&argv[2..], &["-o", "data/y12.yaml"]);
    }

    #[test]
    fn missing_summary_file_does_not_spawn() {
        let invoker = MockInvoker::new();
        let scripts = ScriptPaths::default();
        let options = Options {
            game_files: vec!["a.yaml".into()],
            ..Options::default()
        };
        let result = SummarizeCommand::new(&invoker, &scripts).execute(&options);
        assert!(matches!(result, Err(CommandError::MissingOption("summary_file"))));
        assert!(invoker.calls().is_empty());
    }

    #[test]
    fn repeated_execution_is_identical() {
        let invoker = MockInvoker::always("summary\n");
        let scripts = ScriptPaths::default();
        let cmd = SummarizeCommand::new(&invoker, &scripts);
        let options = Options {
            summary_file: Some("s.yaml".into()),
            game_files: vec!["a.yaml".into(), "b.yaml".into()],
            ..Options::default()
        };
        let first = cmd.execute(&options).unwrap();
        let second = cmd.execute(&options).unwrap();
        assert_eq!(first, second);
        let calls = invoker.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }
}
