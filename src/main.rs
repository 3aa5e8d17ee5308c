use arena::build_info;
use arena::core::{Command, GameConfig, GameEngine};
use arena::ui::{self, name_prompt::prompt_player_name, TerminalFrontend, Tui};
use arena::utils::init_file_logging;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{info, warn};

fn print_help() {
    println!("Gladiator Arena - Turn-Based Terminal Combat\n");
    println!("Usage: arena [options]\n");
    println!("Options:");
    println!("  --seed N          Play a reproducible run");
    println!("  --fast            Speed up battle playback");
    println!("  --turn-delay MS   Milliseconds between turns (default 800)");
    println!("  --version         Show version information");
    println!("  --help            Show this help message");
}

fn parse_args() -> GameConfig {
    match GameConfig::from_args(std::env::args().skip(1)) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Version) => {
            println!("{}", build_info::version_string("arena"));
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            print_help();
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'arena --help' for usage.");
            std::process::exit(1);
        }
    }
}

fn play(terminal: &mut Tui, config: &GameConfig) -> io::Result<()> {
    let name = prompt_player_name(terminal)?;

    let rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut engine = GameEngine::new(&name, rng).with_timing(config.timing());

    let mut frontend = TerminalFrontend::new(terminal);
    let summary = engine.run(&mut frontend);
    if let Some(e) = frontend.take_error() {
        return Err(e);
    }

    info!(
        games = summary.games.len(),
        victories = summary.victories(),
        quit_mid_game = summary.quit_mid_game,
        "session over"
    );
    ui::show_farewell(terminal, &engine.hero().name)
}

fn main() -> io::Result<()> {
    let config = parse_args();

    // Logging is best effort; the game runs without it.
    let _log_guard = match init_file_logging() {
        Ok((guard, path)) => {
            info!(log = %path.display(), seed = ?config.seed, "arena starting");
            Some(guard)
        }
        Err(e) => {
            eprintln!("Warning: could not set up logging: {}", e);
            None
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = play(&mut terminal, &config);

    // Restore the terminal even if the game failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        warn!(error = %e, "arena exited with error");
    }
    result
}
