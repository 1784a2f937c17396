use std::io::{self, BufRead, Write};

use guess_game::shell::{Command, LogFormat, Session, ShellSettings};
use guess_game::GameRng;

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so they never interleave with the game screen.
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .json()
            .init(),
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .init(),
    }
}

fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    let settings = ShellSettings::from_env();
    init_tracing(settings.log_format);

    let rng = match settings.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "session started");

    let mut session = match Session::with_config(settings.game, rng) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return;
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", session.view());
    println!("commands: new | guess <n> | type <text> | submit | show | quit");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "failed to read input");
                break;
            }
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        if let Err(e) = command.execute(&mut session) {
            println!("!! {}", e);
        }
        println!("\n{}", session.view());
        let _ = stdout.flush();
    }

    tracing::info!("session ended");
}
