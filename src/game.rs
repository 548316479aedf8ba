use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::food::Food;
use crate::grid::Board;
use crate::input::Direction;
use crate::snake::Snake;

/// Whether the simulation is advancing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Stopped,
}

/// Result of one call to [`GameState::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game is not running; nothing changed.
    Idle,
    /// The snake moved without eating.
    Moved,
    /// The snake ate and grew by one cell.
    Ate,
    /// The head ran into the body. The state is frozen as it was.
    GameOver { final_score: u32 },
}

/// Complete mutable game state for one run.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    board: Board,
    rng: StdRng,
}

impl GameState {
    /// Creates a stopped state seeded from system entropy.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_rng(board, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(board: Board, seed: u64) -> Self {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, mut rng: StdRng) -> Self {
        let snake = Snake::new(board.origin(), Direction::Right);
        let food = Food::spawn(&mut rng, board, &snake);

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Stopped,
            board,
            rng,
        }
    }

    /// Resets snake, score and food and starts running.
    pub fn start(&mut self) {
        self.snake = Snake::new(self.board.origin(), Direction::Right);
        self.score = 0;
        self.food = Food::spawn(&mut self.rng, self.board, &self.snake);
        self.status = GameStatus::Running;
    }

    /// Same reset as [`GameState::start`], valid from any status.
    pub fn restart(&mut self) {
        self.status = GameStatus::Stopped;
        self.start();
    }

    pub fn stop(&mut self) {
        self.status = GameStatus::Stopped;
    }

    /// Records a turn for the next tick. Only touches the pending intent.
    pub fn set_intent(&mut self, direction: Direction) {
        self.snake.set_intent(direction);
    }

    /// Advances the simulation by one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.snake.commit_intent();
        let head = self.snake.next_head(self.board);

        // The tail has not moved yet, so stepping onto it is fatal.
        if self.snake.occupies(head) {
            self.status = GameStatus::Stopped;
            return TickOutcome::GameOver {
                final_score: self.score,
            };
        }

        self.snake.push_head(head);

        if head == self.food.position {
            self.score += self.food.points();
            self.food = Food::spawn(&mut self.rng, self.board, &self.snake);
            TickOutcome::Ate
        } else {
            let _ = self.snake.pop_tail();
            TickOutcome::Moved
        }
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use crate::food::Food;
    use crate::grid::{Board, Cell};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{GameState, GameStatus, TickOutcome};

    fn running_state(seed: u64) -> GameState {
        let board = Board::new(400, 400, 20).expect("valid board");
        let mut state = GameState::new_with_seed(board, seed);
        state.start();
        state
    }

    #[test]
    fn fresh_state_is_stopped_and_does_not_tick() {
        let board = Board::new(400, 400, 20).expect("valid board");
        let mut state = GameState::new_with_seed(board, 1);

        assert_eq!(state.status, GameStatus::Stopped);
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert_eq!(state.snake.head(), Cell::new(200, 200));
    }

    #[test]
    fn start_resets_everything() {
        let mut state = running_state(2);
        state.score = 70;
        state.snake = Snake::new(Cell::new(0, 0), Direction::Up);
        state.stop();

        state.start();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Cell::new(200, 200));
        assert_eq!(state.snake.direction(), Direction::Right);
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn single_cell_snake_moves_right() {
        let mut state = running_state(3);
        state.food = Food::new(Cell::new(0, 0));

        assert_eq!(state.tick(), TickOutcome::Moved);
        let body: Vec<Cell> = state.snake.segments().copied().collect();
        assert_eq!(body, vec![Cell::new(220, 200)]);
    }

    #[test]
    fn head_wraps_across_right_edge() {
        let mut state = running_state(4);
        state.food = Food::new(Cell::new(100, 100));
        state.snake = Snake::from_segments(
            vec![Cell::new(380, 200), Cell::new(360, 200)],
            Direction::Right,
        );

        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake.head(), Cell::new(0, 200));
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn eating_grows_scores_and_replaces_food() {
        let mut state = running_state(5);
        state.snake = Snake::from_segments(
            vec![Cell::new(100, 100), Cell::new(80, 100)],
            Direction::Right,
        );
        state.food = Food::new(Cell::new(120, 100));

        assert_eq!(state.tick(), TickOutcome::Ate);
        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.tail(), Cell::new(80, 100));
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn reversal_intent_is_ignored() {
        let mut state = running_state(6);
        state.food = Food::new(Cell::new(0, 0));

        state.set_intent(Direction::Left);
        state.tick();

        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.snake.head(), Cell::new(220, 200));
    }

    #[test]
    fn stepping_onto_the_tail_is_fatal() {
        let mut state = running_state(7);
        state.food = Food::new(Cell::new(0, 0));
        state.snake = Snake::from_segments(
            vec![
                Cell::new(100, 100),
                Cell::new(120, 100),
                Cell::new(120, 120),
                Cell::new(100, 120),
            ],
            Direction::Down,
        );
        state.score = 30;

        // Head moves down onto (100, 120), the tail about to be vacated.
        assert_eq!(state.tick(), TickOutcome::GameOver { final_score: 30 });
        assert_eq!(state.status, GameStatus::Stopped);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.snake.head(), Cell::new(100, 100));
    }

    #[test]
    fn two_segment_snake_turning_into_itself_dies() {
        let mut state = running_state(8);
        state.food = Food::new(Cell::new(0, 0));
        state.snake = Snake::from_segments(
            vec![Cell::new(100, 100), Cell::new(120, 100)],
            Direction::Left,
        );
        // Committed Left, so Right is rejected and the snake keeps going.
        state.set_intent(Direction::Right);
        assert_eq!(state.tick(), TickOutcome::Moved);

        state.snake = Snake::from_segments(
            vec![Cell::new(100, 100), Cell::new(120, 100)],
            Direction::Right,
        );
        assert_eq!(state.tick(), TickOutcome::GameOver { final_score: 0 });
    }

    #[test]
    fn ticks_after_game_over_are_idle() {
        let mut state = running_state(9);
        state.snake = Snake::from_segments(
            vec![Cell::new(100, 100), Cell::new(120, 100)],
            Direction::Right,
        );
        state.tick();

        assert_eq!(state.tick(), TickOutcome::Idle);
    }
}
