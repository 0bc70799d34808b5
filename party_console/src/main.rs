// Legend for various fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better or faster.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod check_roster;
mod draft;
mod event_config;
mod raffle;

use clap::{ArgMatches, Command, arg};
use event_config::{EventConfig, parse_colors};


fn main() -> anyhow::Result<()> {
    // Stdout is reserved for JSON output.
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_args = |cmd: Command| {
        cmd.arg(arg!(--"config" <config_file> "Path to the event config (yaml)."))
            .arg(arg!(--"colors" <colors> "Comma-separated team colors, e.g. \"Red,Blue\"."))
            .arg(
                arg!(--"seed" <seed> "Random seed, for reproducible output.")
                    .value_parser(clap::value_parser!(u64)),
            )
    };

    let matches = Command::new("Party")
        .version(clap::crate_version!())
        .about("Team draft and playing order console app")
        .subcommand_required(true)
        .subcommand(event_args(
            Command::new("check-roster")
                .about("Verifies a roster file (JSON array of players).")
                .arg(arg!(<roster> "Roster file")),
        ))
        .subcommand(event_args(
            Command::new("draft")
                .about("Splits a roster into teams and prints the teams as JSON.")
                .arg(arg!(<roster> "Roster file")),
        ))
        .subcommand(event_args(
            Command::new("matchups")
                .about(concat!(
                    "Reads teams (a JSON array of teams or a {teams, matchups} object) and prints ",
                    "them together with a freshly generated playing order."
                ))
                .arg(arg!(<teams> "Teams file")),
        ))
        .subcommand(event_args(
            Command::new("event")
                .about("Drafts teams and generates the playing order in one go.")
                .arg(arg!(<roster> "Roster file")),
        ))
        .subcommand(event_args(
            Command::new("raffle")
                .about("Draws distinct winners from a roster.")
                .arg(arg!(<roster> "Roster file"))
                .arg(
                    arg!(-'n' --"winners" <n> "Number of winners")
                        .value_parser(clap::value_parser!(u64).range(1..=10_000))
                        .default_value("1"),
                ),
        ))
        .subcommand(
            Command::new("stress-test")
                .about("Runs random rosters through both engines and verifies the results.")
                .arg(
                    arg!(-'n' --"events" <n> "Number of random events")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .default_value("10000"),
                )
                .arg(arg!(--"seed" <seed> "Random seed").value_parser(clap::value_parser!(u64))),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check-roster", sub_matches)) => {
            let config = event_config(sub_matches)?;
            check_roster::run(required(sub_matches, "roster"), &config.colors)
        }
        Some(("draft", sub_matches)) => {
            draft::run_draft(required(sub_matches, "roster"), &event_config(sub_matches)?)
        }
        Some(("matchups", sub_matches)) => {
            draft::run_matchups(required(sub_matches, "teams"), &event_config(sub_matches)?)
        }
        Some(("event", sub_matches)) => {
            draft::run_event(required(sub_matches, "roster"), &event_config(sub_matches)?)
        }
        Some(("raffle", sub_matches)) => raffle::run(
            required(sub_matches, "roster"),
            *sub_matches.get_one::<u64>("winners").unwrap() as usize,
            &event_config(sub_matches)?,
        ),
        Some(("stress-test", sub_matches)) => stress_test::run(stress_test::StressTestConfig {
            num_events: *sub_matches.get_one::<u64>("events").unwrap() as usize,
            seed: sub_matches.get_one::<u64>("seed").copied(),
        }),
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}

// Clap enforces required positional arguments before we get here.
fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches.get_one::<String>(name).unwrap()
}

// Command-line flags override the config file.
fn event_config(matches: &ArgMatches) -> anyhow::Result<EventConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(filename) => EventConfig::load(filename)?,
        None => EventConfig::default(),
    };
    if let Some(colors) = matches.get_one::<String>("colors") {
        config.colors = parse_colors(colors)?;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    log::debug!("Event config: {config:?}");
    Ok(config)
}
