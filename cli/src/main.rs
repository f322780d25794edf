//! simchain CLI — the command-line entry point.
//!
//! # Usage
//!
//! ```text
//! simchain simulate --samples 42 -o data/game.yaml
//! simchain summarize -o data/summary.yaml data/game_1.yaml data/game_2.yaml
//! simchain iterate -n 2 --samples 100 --game-file data/game.yaml -o data/y12.yaml
//! simchain conditional --samples 100 --game-file data/x.yaml --when metric:win_rate>0.5
//! ```

use std::path::PathBuf;
use std::process;

use simchain_core::cli::parse::parse_args;
use simchain_core::data::settings;
use simchain_core::error::CommandError;
use simchain_core::help::help_text;
use simchain_core::infrastructure::ProcessInvoker;
use simchain_core::request::Request;
use simchain_core::sys::{Sys, SysError};

/// Exit status for usage and configuration problems.
const EXIT_USAGE: i32 = 1;
/// Exit status when a command (or one of its processes) fails.
const EXIT_FAILURE: i32 = 2;
/// Environment variable selecting the log level.
const LOG_ENV: &str = "SIMCHAIN_LOG";


fn main() {
    logger_builder().init();

    let args: Vec<String> = std::env::args().collect();
    let arg_refs = program_args(&args);

    let request = match parse_args(&arg_refs) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("simchain: {}", e);
            process::exit(EXIT_USAGE);
        }
    };

    let run = match request {
        Request::Help { topic } => {
            println!("{}", help_text(topic.as_deref()));
            return;
        }
        Request::Run(run) => run,
    };

    let config_dir = resolve_config_dir();
    let settings = match settings::load_from_dir(&config_dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("simchain: {}", e);
            process::exit(EXIT_USAGE);
        }
    };

    let invoker = ProcessInvoker;
    let sys = Sys::new(settings, &invoker);
    match sys.execute(&run) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("simchain {}: {}", run.kind, e);
            process::exit(exit_code_for(&e));
        }
    }
}


/// Logger reading its filter from `SIMCHAIN_LOG`; silent when unset.
fn logger_builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "off"));
    builder.format_timestamp(None);
    builder
}


/// Arguments after the program name; empty when the OS passed no argv at all.
fn program_args(args: &[String]) -> Vec<&str> {
    args.get(1..)
        .unwrap_or(&[])
        .iter()
        .map(|s| s.as_str())
        .collect()
}


fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SIMCHAIN_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".config").join("simchain")
}


fn exit_code_for(err: &SysError) -> i32 {
    match err {
        SysError::Config(_) => EXIT_USAGE,
        SysError::Command(CommandError::MissingOption(_)) => EXIT_USAGE,
        SysError::Command(_) => EXIT_FAILURE,
    }
}
