//! Help system — usage text for the simchain CLI.
//!
//! `simchain help` prints the overview, `simchain help <command>` the detailed
//! usage of one command.


/// Generate help text for a given topic.
pub fn help_text(topic: Option<&str>) -> String {
    match topic {
        None => overview(),
        Some(t) => command_help(t).unwrap_or_else(|| {
            format!("Unknown help topic: '{}'. Run 'simchain help' for a list of commands.", t)
        }),
    }
}


fn overview() -> String {
    "\
simchain — run simulation and summary scripts as composable commands

Usage: simchain <command> [flags]

Commands:
  echo        [--label L]                      Echo the label and options (dry run)
  simulate    --samples N -o FILE              Run the simulation script once
  summarize   -o FILE GAME_FILE...             Run the summary script once
  iterate     -n N --samples N --game-file FILE -o FILE [GAME_FILE...]
                                               Simulate N times, then summarize
  conditional --samples N --game-file FILE [-o FILE] [--when COND]
                                               Simulate, then summarize if COND holds
  help [command]                               Show help

Common flags:
  --name L            Diagnostic label
  --options FILE      Read base options from a YAML file (flags override it)

Environment:
  SIMCHAIN_CONFIG_DIR  Directory holding settings.yaml (default ~/.config/simchain)
  SIMCHAIN_LOG         Log level: error, warn, info, debug, trace

Run 'simchain help <command>' for detailed help on a specific command."
        .into()
}


fn command_help(topic: &str) -> Option<String> {
    let text = match topic {
        "echo" => "\
simchain echo [--label L] [--name L] [--options FILE]

Runs `echo <label> <options>` where <options> is the options rendered as
compact JSON. The label defaults to 'Command'.",
        "simulate" => "\
simchain simulate --samples N -o FILE [--name L] [--options FILE]

Runs `<interpreter> <simulate_script> --samples N -o FILE` and prints its output.",
        "summarize" => "\
simchain summarize -o FILE GAME_FILE... [--options FILE]

Runs `<interpreter> <summarize_script> -o FILE GAME_FILE...`. Game files are
passed in the order given.",
        "iterate" => "\
simchain iterate -n N --samples N --game-file FILE -o SUMMARY [GAME_FILE...]

Runs the simulation N times with the same options, then the summary once.
Stops at the first failing simulation; the summary is then skipped.
Prints the summary output.",
        "conditional" => "\
simchain conditional --samples N --game-file FILE [-o SUMMARY] [GAME_FILE...] [--when COND]

Runs the simulation once, then the summary only if COND holds. Prints the
summary output, or the simulation output when the summary was skipped.

Conditions:
  always               Always summarize
  never                Never summarize
  summary              Summarize when a summary file is given (default)
  contains:TEXT        Simulation output contains TEXT
  metric:KEY>NUMBER    Simulation output is YAML and KEY is above NUMBER

The default comes from 'condition' in settings.yaml.",
        _ => return None,
    };
    Some(text.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_lists_every_command() {
        let text = help_text(None);
        for cmd in ["echo", "simulate", "summarize", "iterate", "conditional", "help"] {
            assert!(text.contains(cmd), "overview missing {}", cmd);
        }
    }

    #[test]
    fn command_help_found() {
        assert!(help_text(Some("conditional")).contains("metric:KEY>NUMBER"));
        assert!(help_text(Some("simulate")).contains("--samples"));
    }

    #[test]
    fn unknown_topic() {
        assert!(help_text(Some("nope")).starts_with("Unknown help topic"));
    }
}
