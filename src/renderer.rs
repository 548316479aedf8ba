use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    Theme, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, TERMINAL_COLUMNS_PER_CELL,
};
use crate::game::GameState;
use crate::grid::{Board, Cell};
use crate::input::Direction;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: HudInfo<'_>) {
    let board = state.board();
    let (hud_area, play_area) = board_layout(frame.area(), board);

    render_hud(frame, hud_area, state.score, &info);

    let block = Block::bordered()
        .border_style(Style::new().fg(info.theme.border_fg))
        .style(Style::new().bg(info.theme.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, board, state.food.position, info.theme);
    render_snake(frame, inner, state, info.theme);

    if state.is_running() {
        return;
    }

    match info.last_final_score {
        Some(score) => render_game_over_menu(frame, play_area, score, info.high_score, info.theme),
        None => render_start_menu(frame, play_area, info.high_score, info.theme),
    }
}

/// Splits `area` into a one-line HUD and a bordered play area sized to the board.
fn board_layout(area: Rect, board: Board) -> (Rect, Rect) {
    let columns = u16::try_from(board.columns()).unwrap_or(u16::MAX);
    let rows = u16::try_from(board.rows()).unwrap_or(u16::MAX);
    let width = columns
        .saturating_mul(TERMINAL_COLUMNS_PER_CELL)
        .saturating_add(2);
    let height = rows.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [hud, play] = Layout::vertical([Constraint::Length(1), Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    (hud, play)
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, board: Board, food: Cell, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, board, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let board = state.board();
    let snake = &state.snake;
    let last_index = snake.len() - 1;

    let buffer = frame.buffer_mut();
    for (index, segment) in snake.segments().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, board, *segment) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (
                head_glyph(snake.direction()),
                Style::new()
                    .fg(theme.play_bg)
                    .bg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            )
        } else if index == last_index {
            (GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail))
        } else {
            (GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body))
        };

        buffer.set_string(x, y, glyph, style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Maps a pixel cell to the top-left terminal cell that draws it.
fn cell_to_terminal(inner: Rect, board: Board, cell: Cell) -> Option<(u16, u16)> {
    if !board.contains(cell) {
        return None;
    }

    let column = u16::try_from(cell.x / board.cell_size()).ok()?;
    let row = u16::try_from(cell.y / board.cell_size()).ok()?;

    let x = inner
        .x
        .saturating_add(column.saturating_mul(TERMINAL_COLUMNS_PER_CELL));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(TERMINAL_COLUMNS_PER_CELL) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use crate::config::THEME_GARDEN;
    use crate::game::GameState;
    use crate::grid::{Board, Cell};
    use crate::ui::hud::HudInfo;

    use super::{cell_to_terminal, render};

    fn board() -> Board {
        Board::new(400, 400, 20).expect("valid board")
    }

    #[test]
    fn cells_map_to_double_width_columns() {
        let inner = Rect::new(1, 2, 40, 20);

        assert_eq!(cell_to_terminal(inner, board(), Cell::new(0, 0)), Some((1, 2)));
        assert_eq!(
            cell_to_terminal(inner, board(), Cell::new(380, 380)),
            Some((39, 21))
        );
        assert_eq!(cell_to_terminal(inner, board(), Cell::new(400, 0)), None);
    }

    #[test]
    fn cells_outside_a_small_terminal_are_skipped() {
        let inner = Rect::new(0, 0, 10, 5);

        assert_eq!(cell_to_terminal(inner, board(), Cell::new(200, 0)), None);
        assert_eq!(cell_to_terminal(inner, board(), Cell::new(0, 200)), None);
    }

    #[test]
    fn start_screen_renders_without_panicking() {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        let state = GameState::new_with_seed(board(), 1);

        terminal
            .draw(|frame| {
                render(
                    frame,
                    &state,
                    HudInfo {
                        high_score: 90,
                        last_final_score: None,
                        theme: &THEME_GARDEN,
                    },
                )
            })
            .expect("draw should succeed");
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(8, 3);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        let mut state = GameState::new_with_seed(board(), 2);
        state.start();

        terminal
            .draw(|frame| {
                render(
                    frame,
                    &state,
                    HudInfo {
                        high_score: 0,
                        last_final_score: Some(20),
                        theme: &THEME_GARDEN,
                    },
                )
            })
            .expect("draw should succeed");
    }
}
