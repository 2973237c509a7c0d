use clap::Parser;
use emoji_guess::catalog::EmojiCatalog;
use emoji_guess::config::{self, WINDOW_HEIGHT, WINDOW_WIDTH};
use emoji_guess::error::GameError;
use emoji_guess::game::Game;
use emoji_guess::logging::{self, DEBUG_TOPICS};
use emoji_guess::render::Renderer;
use emoji_guess::round::RoundRules;
use emoji_guess::session::GameSession;
use log::{error, info, warn};
use macroquad::Window;
use macroquad::prelude::*;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of puzzles to build for the session.
    #[arg(long, default_value_t = config::TARGET_PUZZLE_COUNT)]
    count: usize,

    /// Seed for reproducible puzzle order and hint shuffles.
    #[arg(long)]
    seed: Option<u64>,

    /// Length of one round in seconds.
    #[arg(long, default_value_t = config::ROUND_SECONDS, value_parser = clap::value_parser!(u32).range(1..))]
    round_seconds: u32,

    /// Print the built puzzles and exit without opening a window. Only errors
    /// are logged in this mode.
    #[arg(long)]
    list: bool,

    /// Debug filter to specify log topics (e.g., "puzzle,round")
    /// Available topics: puzzle, round, render, input
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Emoji Guess".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

fn print_puzzles(session: &GameSession) {
    for (i, puzzle) in session.puzzles().iter().enumerate() {
        let hints: Vec<String> = puzzle
            .hints
            .iter()
            .map(|h| format!("{} {}", h.emoji, h.label))
            .collect();
        println!("{:>2}. {:<12} {}", i + 1, puzzle.word, hints.join(" | "));
    }
}

fn load_session(args: &Args) -> Result<GameSession, GameError> {
    let catalog = EmojiCatalog::builtin()?;
    let rules = RoundRules {
        round_seconds: args.round_seconds,
        ..RoundRules::default()
    };
    Ok(GameSession::build(catalog, args.count, rules, args.seed))
}

async fn play(session: GameSession) {
    info!("Initializing macroquad rendering system");
    let mut renderer = Renderer::new();
    renderer.load_fonts();
    info!("Renderer initialized.");

    // Run the game loop
    let mut game = Game::new(session, screen_width(), screen_height());
    if let Err(e) = game.run(&mut renderer).await {
        error!("Game loop failed: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logger with debug filters if provided
    let mut log_level = logging::parse_level(&args.log_level);
    if args.list {
        log_level = logging::listing_level(log_level);
    }
    if let Some(filter) = &args.debug_filter {
        for topic in filter.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !DEBUG_TOPICS.contains(&topic) {
                eprintln!("Warning: unknown debug topic '{}'", topic);
            }
        }
    }
    if let Err(e) = logging::init_logger(log_level, args.debug_filter.clone()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing Emoji Guess...");

    let session = match load_session(&args) {
        Ok(session) => session,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    if session.puzzles().is_empty() {
        warn!("No puzzles could be built; the game will stay on the loading screen.");
    }

    if args.list {
        print_puzzles(&session);
        return;
    }

    // The window only opens once everything above has succeeded
    Window::from_config(window_conf(), play(session));
}
