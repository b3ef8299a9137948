//! LifeQuest terminal front end.
//!
//! # Responsibility
//! - Build a session from command-line options.
//! - Read line commands from stdin until `quit` or end of input.

mod app;
mod commands;
mod leaderboard;
mod suggest;

use app::App;
use clap::Parser;
use commands::parse_command;
use lifequest_core::{
    default_log_level, init_logging, InMemoryTaskRepository, ProgressionService, SessionConfig,
    DEFAULT_USER_NAME,
};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use suggest::KeywordSuggester;

#[derive(Debug, Parser)]
#[command(name = "lifequest", version, about = "Turn daily tasks into game quests")]
struct Cli {
    /// Display name of the session user.
    #[arg(long, default_value = DEFAULT_USER_NAME)]
    name: String,
    /// trace|debug|info|warn|error
    #[arg(long, default_value = default_log_level())]
    log_level: String,
    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match (SessionConfig {
        user_name: cli.name,
        log_level: cli.log_level,
        log_dir: cli.log_dir,
    })
    .validate()
    {
        Ok(config) => config,
        Err(err) => {
            eprintln!("lifequest: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, dir) {
            eprintln!("lifequest: {err}");
            return ExitCode::FAILURE;
        }
    }

    let service = ProgressionService::new(InMemoryTaskRepository::new(), config.user_name);
    let mut app = App::new(service, Box::new(KeywordSuggester));

    match run(&mut app) {
        Ok(()) => {
            info!("event=session_end module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("lifequest: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(app: &mut App) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "LifeQuest — type `help` for commands.")?;

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(command)) => {
                if !app.handle(command, &mut stdout)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(message) => writeln!(stdout, "{message}")?,
        }
        stdout.flush()?;
    }
    Ok(())
}
