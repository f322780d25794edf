use crate::command::condition::SummarizeCondition;
use crate::request::{CommandKind, Request, RunRequest};


/// Parse CLI arguments into a typed Request.
///
/// The first argument is the subcommand (`echo`, `simulate`, `summarize`,
/// `iterate`, `conditional`, `help`). Arguments are expected WITHOUT the
/// program name.
pub fn parse_args(args: &[&str]) -> Result<Request, String> {
    if args.is_empty() {
        return Err("No command specified. Run 'simchain help' for usage.".into());
    }

    match args[0] {
        "help" | "--help" | "-h" => parse_help(args),
        name => match CommandKind::from_name(name) {
            Some(kind) => parse_run(kind, &args[1..]).map(Request::Run),
            None => Err(format!("Unknown command: '{}'", name)),
        },
    }
}


// ---------------------------------------------------------------------------
// Sub-parsers
// ---------------------------------------------------------------------------

/// `simchain help [topic]`
fn parse_help(args: &[&str]) -> Result<Request, String> {
    let topic = if args.len() > 1 {
        Some(args[1..].join(" "))
    } else {
        None
    };
    Ok(Request::Help { topic })
}

/// Flags shared by every run subcommand, plus the per-command ones.
///
/// `-o` names the simulation output for `simulate` and the summary output for
/// everything else. Positional arguments are game files, in order.
fn parse_run(kind: CommandKind, rest: &[&str]) -> Result<RunRequest, String> {
    let mut req = RunRequest::new(kind);

    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            "--name" => {
                i += 1;
                req.options.name = Some(take_arg(rest, i, "--name")?);
            }
            "--options" => {
                i += 1;
                req.options_file = Some(take_arg(rest, i, "--options")?);
            }
            "--samples" => {
                i += 1;
                req.options.samples = Some(parse_number(rest, i, "--samples")?);
            }
            "--simulations" | "-n" => {
                i += 1;
                req.options.simulations = Some(parse_number(rest, i, "--simulations")?);
            }
            "--game-file" => {
                i += 1;
                req.options.game_file = Some(take_arg(rest, i, "--game-file")?);
            }
            "--summary-file" => {
                i += 1;
                req.options.summary_file = Some(take_arg(rest, i, "--summary-file")?);
            }
            "-o" | "--output" => {
                i += 1;
                let path = take_arg(rest, i, "-o")?;
                if kind == CommandKind::Simulate {
                    req.options.game_file = Some(path);
                } else {
                    req.options.summary_file = Some(path);
                }
            }
            "--label" if kind == CommandKind::Echo => {
                i += 1;
                req.label = Some(take_arg(rest, i, "--label")?);
            }
            "--when" if kind == CommandKind::Conditional => {
                i += 1;
                let spec = take_arg(rest, i, "--when")?;
                req.condition = Some(SummarizeCondition::parse(&spec)?);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("Unknown flag for {}: '{}'", kind, flag));
            }
            file => {
                if matches!(kind, CommandKind::Echo | CommandKind::Simulate) {
                    return Err(format!("Unexpected argument for {}: '{}'", kind, file));
                }
                req.options.game_files.push(file.to_string());
            }
        }
        i += 1;
    }
    Ok(req)
}


// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Get the argument at `index` or return an error mentioning the flag.
fn take_arg(args: &[&str], index: usize, flag: &str) -> Result<String, String> {
    if index >= args.len() {
        return Err(format!("{} requires a value", flag));
    }
    Ok(args[index].into())
}

fn parse_number<T: std::str::FromStr>(args: &[&str], index: usize, flag: &str) -> Result<T, String> {
    let raw = take_arg(args, index, flag)?;
    raw.parse()
        .map_err(|_| format!("{} expects a non-negative integer, got '{}'", flag, raw))
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
