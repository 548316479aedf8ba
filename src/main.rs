use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_CELL_SIZE, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_TICK_INTERVAL_MS, INPUT_POLL_MS, THEME_GARDEN,
};
use grid_snake::game::GameState;
use grid_snake::grid::Board;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::logging;
use grid_snake::renderer;
use grid_snake::score::{HighScoreStore, JsonScoreStore, MemoryScoreStore};
use grid_snake::session::{Session, SessionEvent};
use grid_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use grid_snake::ui::hud::HudInfo;
use log::{debug, info, LevelFilter};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in pixels.
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u32,

    /// Board height in pixels.
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u32,

    /// Side length of one grid cell in pixels.
    #[arg(long = "cell-size", default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u32,

    /// Milliseconds between snake moves.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Drag distance that must be exceeded before a swipe turns the snake.
    #[arg(long = "swipe-threshold", default_value_t = DEFAULT_SWIPE_THRESHOLD)]
    swipe_threshold: i32,

    /// Override the high score file location.
    #[arg(long = "scores-file")]
    scores_file: Option<PathBuf>,

    /// Keep the high score in memory only.
    #[arg(long = "no-save")]
    no_save: bool,

    /// Override the log file location.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long = "log-level", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let board = Board::new(cli.width, cli.height, cli.cell_size)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path, cli.log_level) {
        eprintln!("Logging disabled ({}): {error}", log_path.display());
    }

    let store: Box<dyn HighScoreStore> = if cli.no_save {
        Box::new(MemoryScoreStore::default())
    } else {
        Box::new(
            cli.scores_file
                .clone()
                .map_or_else(JsonScoreStore::default, JsonScoreStore::new),
        )
    };

    info!(
        "board {}x{} with {}px cells ({}x{} grid)",
        board.width(),
        board.height(),
        board.cell_size(),
        board.columns(),
        board.rows()
    );

    let session = Session::new(
        GameState::new(board),
        Duration::from_millis(cli.tick_ms),
        store,
    );

    install_panic_hook();
    run(session, InputHandler::new(cli.swipe_threshold))
}

fn run<S: HighScoreStore>(mut session: Session<S>, mut input: InputHandler) -> io::Result<()> {
    let mut terminal_session = TerminalSession::enter()?;
    let poll_timeout = Duration::from_millis(INPUT_POLL_MS);

    loop {
        terminal_session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                session.state(),
                HudInfo {
                    high_score: session.high_score(),
                    last_final_score: session.last_final_score(),
                    theme: &THEME_GARDEN,
                },
            )
        })?;

        if let Some(game_input) = input.poll_input(poll_timeout)? {
            if matches!(game_input, GameInput::Quit) {
                session.stop();
                break;
            }

            if let Some(event) = session.apply_input(game_input, Instant::now()) {
                debug!("{event:?}");
            }
        }

        match session.poll(Instant::now()) {
            Some(SessionEvent::GameOver {
                final_score,
                new_high_score: true,
                ..
            }) => info!("new high score {final_score}"),
            Some(event) => debug!("{event:?}"),
            None => {}
        }
    }

    info!("quit with high score {}", session.high_score());
    Ok(())
}
