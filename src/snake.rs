use std::collections::VecDeque;

use crate::grid::{Board, Cell};
use crate::input::{direction_change_is_valid, Direction};

/// Snake body, committed heading and the pending turn intent.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    intent: Option<Direction>,
}

impl Snake {
    /// Creates a one-cell snake at `start` heading in `direction`.
    #[must_use]
    pub fn new(start: Cell, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            intent: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Callers are responsible for passing a contiguous, duplicate-free body.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            intent: None,
        }
    }

    /// Records a turn for the next tick.
    ///
    /// Reversals are checked against the committed direction, so a reversal
    /// cannot be smuggled in behind an earlier, still-pending turn.
    pub fn set_intent(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.intent = Some(direction);
        }
    }

    /// Makes the pending intent the committed direction.
    pub fn commit_intent(&mut self) {
        if let Some(intent) = self.intent.take() {
            if direction_change_is_valid(self.direction, intent) {
                self.direction = intent;
            }
        }
    }

    /// Head cell one step ahead in the committed direction, wrapped onto the board.
    #[must_use]
    pub fn next_head(&self, board: Board) -> Cell {
        let head = self.head();
        let (dx, dy) = self.direction.unit_vector();
        board.wrap_cell(Cell {
            x: head.x + dx * board.cell_size(),
            y: head.y + dy * board.cell_size(),
        })
    }

    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn intent(&self) -> Option<Direction> {
        self.intent
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Board, Cell};
    use crate::input::Direction;

    use super::Snake;

    fn board() -> Board {
        Board::new(400, 400, 20).expect("valid board")
    }

    #[test]
    fn next_head_steps_one_cell() {
        let snake = Snake::new(Cell::new(200, 200), Direction::Right);

        assert_eq!(snake.next_head(board()), Cell::new(220, 200));
    }

    #[test]
    fn next_head_wraps_at_edges() {
        let snake = Snake::new(Cell::new(0, 0), Direction::Up);

        assert_eq!(snake.next_head(board()), Cell::new(0, 380));
    }

    #[test]
    fn intent_rejects_reverse_of_committed_direction() {
        let mut snake = Snake::new(Cell::new(200, 200), Direction::Up);

        snake.set_intent(Direction::Down);
        snake.commit_intent();

        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn reversal_is_checked_against_committed_not_pending() {
        let mut snake = Snake::new(Cell::new(200, 200), Direction::Right);

        snake.set_intent(Direction::Up);
        // Reverse of the pending Up, but legal against committed Right.
        snake.set_intent(Direction::Down);
        // Reverse of committed Right: dropped, Down stays pending.
        snake.set_intent(Direction::Left);

        assert_eq!(snake.intent(), Some(Direction::Down));
        snake.commit_intent();
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.intent(), None);
    }

    #[test]
    fn pop_tail_keeps_last_segment() {
        let mut snake = Snake::new(Cell::new(200, 200), Direction::Right);

        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }
}
