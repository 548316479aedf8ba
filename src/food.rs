use rand::Rng;

use crate::config::FOOD_REWARD;
use crate::grid::{Board, Cell};
use crate::snake::Snake;

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    #[must_use]
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        FOOD_REWARD
    }

    /// Spawns food in a cell the snake does not occupy.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board: Board, snake: &Snake) -> Self {
        Self::new(place(rng, snake, board))
    }
}

/// Picks a uniformly random grid cell not covered by `snake`.
///
/// Uses rejection sampling, so it never returns if the snake fills the
/// whole board.
#[must_use]
pub fn place<R: Rng + ?Sized>(rng: &mut R, snake: &Snake, board: Board) -> Cell {
    loop {
        let candidate = board.cell_at(
            rng.gen_range(0..board.columns()),
            rng.gen_range(0..board.rows()),
        );
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}
