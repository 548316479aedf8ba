use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step `(dx, dy)` in grid cells; y grows downwards.
    #[must_use]
    pub fn unit_vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Start,
    Restart,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// A pointer sample on the input surface.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Turns a continuous pointer stream into direction intents.
///
/// Every processed sample becomes the new reference point, so the tracker
/// reacts to relative motion rather than to the distance from where the
/// drag began.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    threshold: i32,
    reference: Option<PointerPosition>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold: threshold.max(0),
            reference: None,
        }
    }

    /// Records the point where a drag starts.
    pub fn begin(&mut self, position: PointerPosition) {
        self.reference = Some(position);
    }

    /// Forgets the reference point once the pointer is released.
    pub fn end(&mut self) {
        self.reference = None;
    }

    /// Processes one move sample and returns the swiped direction, if any.
    pub fn track(&mut self, position: PointerPosition) -> Option<Direction> {
        let reference = self.reference.replace(position)?;

        let dx = position.x - reference.x;
        let dy = position.y - reference.y;

        if dx.abs() > dy.abs() {
            if dx.abs() <= self.threshold {
                return None;
            }
            Some(if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else {
            if dy.abs() <= self.threshold {
                return None;
            }
            Some(if dy > 0 {
                Direction::Down
            } else {
                Direction::Up
            })
        }
    }
}

/// Maps terminal keyboard and mouse events to [`GameInput`].
#[derive(Debug)]
pub struct InputHandler {
    swipe: SwipeTracker,
}

impl InputHandler {
    #[must_use]
    pub fn new(swipe_threshold: i32) -> Self {
        Self {
            swipe: SwipeTracker::new(swipe_threshold),
        }
    }

    /// Waits up to `timeout` for one terminal event and translates it.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        Ok(self.map_event(event::read()?))
    }

    /// Translates one terminal event.
    pub fn map_event(&mut self, event: Event) -> Option<GameInput> {
        match event {
            Event::Key(key) => map_key(key),
            Event::Mouse(mouse) => self.map_mouse(mouse),
            _ => None,
        }
    }

    fn map_mouse(&mut self, mouse: MouseEvent) -> Option<GameInput> {
        let position = pointer_from_terminal(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.begin(position);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.swipe.track(position).map(GameInput::Direction)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.swipe.end();
                None
            }
            _ => None,
        }
    }
}

/// Terminal rows are roughly twice as tall as columns are wide.
fn pointer_from_terminal(column: u16, row: u16) -> PointerPosition {
    PointerPosition {
        x: i32::from(column),
        y: i32::from(row) * 2,
    }
}

fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Start,
        KeyCode::Char('r' | 'R') => GameInput::Restart,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}
