use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;
use tickclock_core::config::TargetKind;

pub fn build_cli() -> Command {
    Command::new("tickclock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show the current date and time, refreshed once per second")
        .long_about("tickclock renders the current date and time under a regional convention (Russian by default, e.g. '15.01.2024 13:05:09') and keeps a display target up to date: a terminal line, a file polled by a status bar, or nothing at all.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("now")
                .about("Print the current date and time once")
                .arg(locale_arg())
                .arg(utc_offset_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("run")
                .about("Keep a display target updated until interrupted")
                .arg(locale_arg())
                .arg(utc_offset_arg())
                .arg(
                    Arg::new("interval-ms")
                        .long("interval-ms")
                        .short('i')
                        .help("Refresh period in milliseconds (overrides config, default: 1000)")
                        .value_parser(clap::value_parser!(u64).range(1..))
                )
                .arg(
                    Arg::new("target")
                        .long("target")
                        .short('t')
                        .help("Display target (overrides config, default: stdout)")
                        .value_parser(TargetKind::NAMES)
                )
                .arg(
                    Arg::new("path")
                        .long("path")
                        .short('p')
                        .help("File to keep updated when --target file is used")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .help("Stop after this many refreshes, the initial one included")
                        .value_parser(clap::value_parser!(u64).range(1..))
                )
        )
        .subcommand(
            Command::new("locales")
                .about("List supported locales with a sample rendering")
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}

fn locale_arg() -> Arg {
    Arg::new("locale")
        .long("locale")
        .short('l')
        .help("Locale tag such as ru-RU or en-US (overrides config, default: ru-RU)")
}

fn utc_offset_arg() -> Arg {
    Arg::new("utc-offset")
        .long("utc-offset")
        .help("Show time at a fixed UTC offset like +03:00 instead of local time")
        .allow_hyphen_values(true)
}
