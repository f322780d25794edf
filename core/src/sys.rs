//! Sys — resolves a run request into options and a command, and runs it.

use std::fmt;
use std::path::Path;

use crate::command::{
    Command, ConditionalSummarizeCommand, EchoCommand, IterativeSimulateCommand, ProcessSteps,
    SimulateCommand, SummarizeCommand,
};
use crate::data::settings::{self, ConfigError};
use crate::error::CommandError;
use crate::infrastructure::Invoker;
use crate::request::{CommandKind, RunRequest};
use crate::types::config::Settings;
use crate::types::options::Options;


#[derive(Debug)]
pub enum SysError {
    Config(ConfigError),
    Command(CommandError),
}

impl fmt::Display for SysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SysError::Config(e) => write!(f, "{}", e),
            SysError::Command(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SysError {}

impl From<ConfigError> for SysError {
    fn from(e: ConfigError) -> Self {
        SysError::Config(e)
    }
}

impl From<CommandError> for SysError {
    fn from(e: CommandError) -> Self {
        SysError::Command(e)
    }
}


/// Settings plus the invoker every command built here will use.
pub struct Sys<'a> {
    settings: Settings,
    invoker: &'a dyn Invoker,
}

impl<'a> Sys<'a> {
    pub fn new(settings: Settings, invoker: &'a dyn Invoker) -> Self {
        Sys { settings, invoker }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Options file first, then flags on top.
    pub fn resolve_options(&self, request: &RunRequest) -> Result<Options, ConfigError> {
        let mut options = match &request.options_file {
            Some(path) => settings::load_options(Path::new(path))?,
            None => Options::default(),
        };
        options.overlay(request.options.clone());
        Ok(options)
    }

    /// Resolve options and run the requested command, returning its output.
    pub fn execute(&self, request: &RunRequest) -> Result<String, SysError> {
        let options = self.resolve_options(request)?;
        log::debug!("{} with options {}", request.kind, options.render());
        Ok(self.run(request, &options)?)
    }

    /// Build the command for `request` and execute it against `options`.
    pub fn run(&self, request: &RunRequest, options: &Options) -> Result<String, CommandError> {
        let scripts = &self.settings.scripts;
        let steps = ProcessSteps::new(self.invoker, scripts);
        let command: Box<dyn Command + '_> = match request.kind {
            CommandKind::Echo => match &request.label {
                Some(label) => Box::new(EchoCommand::with_label(self.invoker, label)),
                None => Box::new(EchoCommand::new(self.invoker)),
            },
            CommandKind::Simulate => Box::new(SimulateCommand::new(self.invoker, scripts)),
            CommandKind::Summarize => Box::new(SummarizeCommand::new(self.invoker, scripts)),
            CommandKind::Iterate => Box::new(IterativeSimulateCommand::new(&steps)),
            CommandKind::Conditional => {
                let condition = request
                    .condition
                    .clone()
                    .unwrap_or_else(|| self.settings.condition.clone());
                Box::new(ConditionalSummarizeCommand::new(&steps, condition))
            }
        };
        command.execute(options)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse::parse_args;
    use crate::command::condition::SummarizeCondition;
    use crate::infrastructure::MockInvoker;
    use crate::request::Request;

    fn request(kind: CommandKind, options: Options) -> RunRequest {
        RunRequest {
            options,
            ..RunRequest::new(kind)
        }
    }

    #[test]
    fn echo_request_uses_label() {
        let invoker = MockInvoker::always("echoed\n");
        let sys = Sys::new(Settings::default(), &invoker);
        let req = RunRequest {
            label: Some("Demo".into()),
            ..request(CommandKind::Echo, Options::named("n"))
        };
        assert_eq!(sys.execute(&req).unwrap(), "echoed\n");
        assert_eq!(
            invoker.last_call().unwrap(),
            vec!["echo".to_string(), "Demo".to_string(), r#"{"name":"n"}"#.to_string()]
        );
    }

    #[test]
    fn simulate_request_uses_configured_scripts() {
        let invoker = MockInvoker::always("sample output\n");
        let mut settings = Settings::default();
        settings.scripts.interpreter = "python3".into();
        let sys = Sys::new(settings, &invoker);
        let options = Options {
            samples: Some(42),
            game_file: Some("game_file.yaml".into()),
            ..Options::default()
        };
        sys.execute(&request(CommandKind::Simulate, options)).unwrap();
        assert_eq!(
            invoker.last_call().unwrap(),
            vec!["python3", "scripts/simulate.py", "--samples", "42", "-o", "game_file.yaml"]
        );
    }

    #[test]
    fn iterate_request_runs_n_plus_one_invocations() {
        let invoker = MockInvoker::always("ok\n");
        let sys = Sys::new(Settings::default(), &invoker);
        let options = Options {
            simulations: Some(3),
            samples: Some(10),
            game_file: Some("g.yaml".into()),
            summary_file: Some("s.yaml".into()),
            ..Options::default()
        };
        sys.execute(&request(CommandKind::Iterate, options)).unwrap();
        let calls = invoker.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[3][1], "scripts/summarize.py");
    }

    #[test]
    fn documented_iterate_usage_runs_end_to_end() {
        let args = [
            "iterate", "-n", "2", "--samples", "100",
            "--game-file", "data/game.yaml", "-o", "data/y12.yaml",
        ];
        let req = match parse_args(&args).unwrap() {
            Request::Run(req) => req,
            other => panic!("expected a run request, got {:?}", other),
        };
        let invoker = MockInvoker::always("ok\n");
        let sys = Sys::new(Settings::default(), &invoker);

        assert_eq!(sys.execute(&req).unwrap(), "ok\n");

        let calls = invoker.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(&calls[0][2..], &["--samples", "100", "-o", "data/game.yaml"]);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(&calls[2][2..], &["-o", "data/y12.yaml"]);
    }

    #[test]
    fn iterate_without_game_file_fails_before_spawning() {
        let args = ["iterate", "-n", "2", "--samples", "100", "-o", "data/y12.yaml"];
        let req = match parse_args(&args).unwrap() {
            Request::Run(req) => req,
            other => panic!("expected a run request, got {:?}", other),
        };
        let invoker = MockInvoker::new();
        let sys = Sys::new(Settings::default(), &invoker);
        let err = sys.execute(&req).unwrap_err();
        assert!(matches!(err, SysError::Command(CommandError::MissingOption("game_file"))));
        assert!(invoker.calls().is_empty());
    }

    #[test]
    fn conditional_request_falls_back_to_configured_condition() {
        let invoker = MockInvoker::always("ok\n");
        let settings = Settings {
            condition: SummarizeCondition::Never,
            ..Settings::default()
        };
        let sys = Sys::new(settings, &invoker);
        assert_eq!(sys.settings().condition, SummarizeCondition::Never);
        let options = Options {
            samples: Some(10),
            game_file: Some("g.yaml".into()),
            summary_file: Some("s.yaml".into()),
            ..Options::default()
        };
        sys.execute(&request(CommandKind::Conditional, options.clone())).unwrap();
        assert_eq!(invoker.calls().len(), 1);

        let req = RunRequest {
            condition: Some(SummarizeCondition::Always),
            ..request(CommandKind::Conditional, options)
        };
        sys.execute(&req).unwrap();
        assert_eq!(invoker.calls().len(), 3);
    }

    #[test]
    fn command_failure_is_command_error() {
        let invoker = MockInvoker::with_responses(vec![Err(CommandError::Process {
            argv: vec!["python".into()],
            code: Some(1),
        })]);
        let sys = Sys::new(Settings::default(), &invoker);
        let options = Options {
            samples: Some(1),
            game_file: Some("g.yaml".into()),
            ..Options::default()
        };
        let err = sys.execute(&request(CommandKind::Simulate, options)).unwrap_err();
        assert!(matches!(err, SysError::Command(CommandError::Process { .. })));
    }

    #[test]
    fn options_file_is_layered_under_flags() {
        let dir = std::env::temp_dir().join(format!("simchain-sys-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("options.yaml");
        std::fs::write(&path, "samples: 5\ngame_file: from_file.yaml\n").unwrap();

        let invoker = MockInvoker::new();
        let sys = Sys::new(Settings::default(), &invoker);
        let req = RunRequest {
            options_file: Some(path.to_string_lossy().into_owned()),
            ..request(
                CommandKind::Simulate,
                Options {
                    samples: Some(50),
                    ..Options::default()
                },
            )
        };
        let options = sys.resolve_options(&req).unwrap();
        assert_eq!(options.samples, Some(50));
        assert_eq!(options.game_file.as_deref(), Some("from_file.yaml"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_options_file_is_config_error() {
        let invoker = MockInvoker::new();
        let sys = Sys::new(Settings::default(), &invoker);
        let req = RunRequest {
            options_file: Some("/nonexistent/simchain.yaml".into()),
            ..RunRequest::new(CommandKind::Echo)
        };
        assert!(matches!(sys.execute(&req), Err(SysError::Config(_))));
        assert!(invoker.calls().is_empty());
    }
}
