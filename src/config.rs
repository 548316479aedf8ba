use ratatui::style::Color;
use thiserror::Error;

/// Default board width in pixels.
pub const DEFAULT_BOARD_WIDTH: u32 = 400;

/// Default board height in pixels.
pub const DEFAULT_BOARD_HEIGHT: u32 = 400;

/// Side length of one grid cell in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Fixed tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum drag distance along the dominant axis before a swipe turns the snake.
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 0;

/// Score granted for each food eaten.
pub const FOOD_REWARD: u32 = 10;

/// How long the main loop waits for terminal input per frame.
pub const INPUT_POLL_MS: u64 = 16;

/// Terminal columns used to draw one grid cell (keeps cells roughly square).
pub const TERMINAL_COLUMNS_PER_CELL: u16 = 2;

/// Invalid startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("board {width}x{height} cannot hold a single {cell_size}px cell")]
    BoardTooSmall {
        width: i32,
        height: i32,
        cell_size: i32,
    },
    #[error("board {width}x{height} is not a whole number of {cell_size}px cells")]
    NotCellAligned {
        width: i32,
        height: i32,
        cell_size: i32,
    },
    #[error("dimension {0} is too large")]
    TooLarge(u32),
}

/// Colors applied to every drawn element.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake with a gold tail and an orange cake.
pub const THEME_GARDEN: Theme = Theme {
    snake_head: Color::Rgb(0x22, 0x8B, 0x22),
    snake_body: Color::Rgb(0x32, 0xCD, 0x32),
    snake_tail: Color::Rgb(0xFF, 0xD7, 0x00),
    food: Color::Rgb(0xFF, 0x45, 0x00),
    play_bg: Color::Black,
    border_fg: Color::White,
    hud_text: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

pub const GLYPH_SNAKE_HEAD_UP: &str = "^^";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "vv";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "<:";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = ":>";
pub const GLYPH_SNAKE_BODY: &str = "██";
pub const GLYPH_SNAKE_TAIL: &str = "▓▓";
pub const GLYPH_FOOD: &str = "▒▒";
