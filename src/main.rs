use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use command_center_lib::{
    commands,
    config::load_config,
    error::AppError,
    game::{GameStatus, Period},
    session::{Role, Session},
    team::Group,
};

#[derive(Parser)]
#[command(name = "command-center", about = "Tournament command center")]
struct Args {
    /// Config file
    #[arg(short, long, default_value = "command-center.toml")]
    config: PathBuf,

    /// Tournament file (TOML or JSON). Built-in event data is used when left out.
    #[arg(short, long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the group standings
    Standings {
        /// Only this group (A or B)
        #[arg(short, long)]
        group: Option<Group>,

        #[arg(long)]
        json: bool,
    },

    /// List the games
    Games {
        #[arg(long)]
        json: bool,
    },

    /// Record a score as the command director, then show the standings
    Record {
        #[arg(long)]
        game: u16,

        #[arg(long)]
        home: u16,

        #[arg(long)]
        away: u16,

        #[arg(long, default_value = "finished")]
        status: GameStatus,

        /// Period tag, e.g. OT or SO. Leaving it out records a regulation result.
        #[arg(long)]
        period: Option<String>,
    },
}

fn run(args: Args) -> Result<String, AppError> {
    let config = load_config(&args.config)?.resolve()?;
    command_center_lib::init_logging(&config)?;
    log::info!("{} {} command center starting", config.settings.event_name, config.settings.event_year);

    let mut data = command_center_lib::open_store(&config, args.data.as_deref())?;

    match args.command {
        Command::Standings { group, json } => commands::show_standings(&mut data, group, config.qualifying_spots, json),
        Command::Games { json } => commands::show_games(&data, json),
        Command::Record { game, home, away, status, period } => {
            let director = Session::build("Command Director", Role::Director);
            let period = period.as_deref().map(Period::parse);

            let line = commands::record_score(&mut data, &director, game, home, away, status, period)?;
            let table = commands::show_standings(&mut data, None, config.qualifying_spots, false)?;
            Ok(format!("{line}\n\n{table}"))
        }
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
