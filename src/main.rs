use anyhow::{Result, anyhow};
use log::{error, info};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::HashMap;
use timepicker::{
    Config, Granularity, Period, TimeFormat, TimeValue, TimepickerOptions, format_hour,
    format_time, from_date_time_to_string, normalize,
};

/// One REPL line: command word, positional words and `--flag [value]` pairs
#[derive(Debug)]
struct CommandArgs {
    command: String,
    args: Vec<String>,
    flags: HashMap<String, Option<String>>,
}

/// Split on spaces, keeping double-quoted text ("2:00 pm") as one word
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in input.chars() {
        match c {
            '"' => quoted = !quoted,
            ' ' if !quoted => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

impl CommandArgs {
    fn parse(input: &str) -> Result<Self> {
        let mut words = split_words(input).into_iter().peekable();
        let command = words.next().ok_or_else(|| anyhow!("No command provided"))?;

        let mut args = Vec::new();
        let mut flags = HashMap::new();
        while let Some(word) = words.next() {
            if word.starts_with("--") {
                let value = words.next_if(|next| !next.starts_with("--"));
                flags.insert(word, value);
            } else {
                args.push(word);
            }
        }

        Ok(CommandArgs { command, args, flags })
    }

    fn flag(&self, name: &str) -> Option<&str> {
        self.flags.get(name).and_then(|v| v.as_deref())
    }

    /// Time text is every positional word, so "6:30 pm" needs no quotes
    fn time_text(&self) -> Option<String> {
        (!self.args.is_empty()).then(|| self.args.join(" "))
    }
}

fn main() -> Result<()> {
    timepicker::init_logger("info");

    info!("Starting timepicker checker");
    let config = Config::load()?;

    let mut rl = DefaultEditor::new()?;
    println!("Timepicker checker. Type 'help' for commands.");

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                match process_command(&line, &config) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(err) => error!("Failed to process command: {:#}", err),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

/// Options from config, overridden by command flags
fn options_for(args: &CommandArgs, config: &Config) -> Result<TimepickerOptions> {
    let mut opts = config.picker.to_options()?;
    if let Some(format) = args.flag("--format") {
        opts.format = format.parse()?;
    }
    if let Some(locale) = args.flag("--locale") {
        opts.locale = Some(locale.to_string());
    }
    if let Some(numbering) = args.flag("--numbering") {
        opts.numbering_system = Some(numbering.to_string());
    }
    Ok(opts)
}

/// Returns false when the session should end
fn process_command(line: &str, config: &Config) -> Result<bool> {
    let args = CommandArgs::parse(line)?;
    let opts = options_for(&args, config)?;

    match args.command.as_str() {
        "check" => {
            let Some(time) = args.time_text() else {
                println!("Usage: check <time> [--min <time>] [--max <time>] [--gap <minutes>] [--granularity hours|minutes]");
                return Ok(true);
            };
            let mut constraint = config.constraints.to_constraint(&opts)?;
            if let Some(min) = args.flag("--min") {
                constraint.min = Some(TimeValue::parse(min, &opts)?);
            }
            if let Some(max) = args.flag("--max") {
                constraint.max = Some(TimeValue::parse(max, &opts)?);
            }
            if let Some(gap) = args.flag("--gap") {
                constraint.minutes_gap = Some(gap.parse()?);
            }
            if let Some(granularity) = args.flag("--granularity") {
                constraint.granularity = Some(granularity.parse::<Granularity>()?);
            }
            match constraint.check(&time, &opts)? {
                Some(true) => println!("available"),
                Some(false) => println!("unavailable"),
                None => println!("no time entered"),
            }
        }
        "parse" => {
            let Some(time) = args.time_text() else {
                println!("Usage: parse <time> [--locale <tag>] [--numbering <system>]");
                return Ok(true);
            };
            let value = TimeValue::parse(&time, &opts)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        "normalize" => {
            let time = args.time_text().unwrap_or_default();
            match normalize(time.as_str()) {
                Some(canonical) => println!("{}", canonical),
                None => println!("null"),
            }
        }
        "show" => {
            let time = args.time_text().unwrap_or_default();
            match TimeValue::parse(&time, &opts) {
                Ok(value) => println!("{}", from_date_time_to_string(&value, opts.format)),
                Err(_) => println!("{}", format_time(&time)),
            }
        }
        "hour" => {
            let (Some(hour), Some(period)) = (args.args.first(), args.args.get(1)) else {
                println!("Usage: hour <hour> <am|pm> [--format 12|24]");
                return Ok(true);
            };
            let hour: u32 = hour.parse()?;
            let period: Period = period.parse()?;
            println!("{}", format_hour(hour, opts.format, period));
        }
        "config" => {
            println!("{}", toml::to_string_pretty(config)?);
        }
        "help" => {
            println!("Available commands:");
            println!("  check <time> [--min <time>] [--max <time>] [--gap <minutes>] [--granularity hours|minutes] - Check availability");
            println!("  parse <time> - Show the parsed time value");
            println!("  normalize <time> - Show canonical HH:mm");
            println!("  show <time> [--format 12|24] - Show the time as displayed");
            println!("  hour <hour> <am|pm> [--format 12|24] - Convert a wheel hour to 24-hour");
            println!("  config - Show the active configuration");
            println!("  help - Show this help");
            println!("  exit - Exit the checker");
            println!("Flags --locale and --numbering apply to every command; default format is {}", TimeFormat::default());
        }
        "exit" | "quit" => return Ok(false),
        _ => {
            println!("Unknown command. Type 'help' for available commands.");
        }
    }

    Ok(true)
}
