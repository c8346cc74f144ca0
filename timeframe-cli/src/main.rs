use clap::Parser;
use jiff::civil::DateTime;
use jiff::Zoned;
use std::process;
use timeframe::Schedule;
use tracing_subscriber::EnvFilter;

const GRAMMAR_HELP: &str = "\
time-frames format: one or more segments of \"<Day>[-Day]@<time>-<time>\" separated by ampersand (&).
Day: a 3-letter weekday (Sun, Mon, etc.), time: a zero-padded 24-hour clock time HH:mm (08:00, 20:08, etc.)
Examples: \"Sun@09:00-17:00\", \"Sun-Thu@08:00-18:00&Fri@08:00-14:30\"";

#[derive(Parser)]
#[command(
    name = "timeframe",
    about = "Check if now is within the given weekly time-frames, or print the next valid date-time",
    after_help = GRAMMAR_HELP,
    version
)]
struct Cli {
    /// Time-frames string (e.g., "Sun-Thu@08:00-18:00&Fri@08:00-14:30")
    time_frames: Option<String>,

    /// Debug logging (implies logging on)
    #[arg(short, long)]
    debug: bool,

    /// Disable logging entirely
    #[arg(long)]
    no_log: bool,

    /// Evaluate against this civil datetime instead of the current clock
    #[arg(long)]
    now: Option<String>,

    /// Validate the time-frames string without evaluating
    #[arg(long)]
    check: bool,

    /// Show the parsed schedule as JSON
    #[arg(long)]
    parse: bool,
}

fn main() {
    let cli = Cli::parse();

    if !cli.no_log {
        let default = if cli.debug { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let time_frames = match cli.time_frames {
        Some(ref spec) => spec.as_str(),
        None => {
            eprintln!("error: no time-frames provided");
            process::exit(2);
        }
    };

    let schedule = match Schedule::parse(time_frames) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e.display_rich());
            eprintln!("{GRAMMAR_HELP}");
            process::exit(2);
        }
    };

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.parse {
        match serde_json::to_string_pretty(&schedule) {
            Ok(json) => {
                println!("{json}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    }

    // "Now" is sampled exactly once; the whole evaluation uses this instant.
    let now: DateTime = match cli.now {
        Some(ref s) => match s.parse() {
            Ok(dt) => dt,
            Err(e) => {
                eprintln!("error: invalid --now datetime: {e}");
                process::exit(2);
            }
        },
        None => Zoned::now().datetime(),
    };

    match schedule.evaluate(now) {
        Ok(verdict) => println!("{verdict}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
