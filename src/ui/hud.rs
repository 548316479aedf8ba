use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;

/// Values shown around the board that are not part of the game state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    /// Final score of the last finished run, shown until the next start.
    pub last_final_score: Option<u32>,
    pub theme: &'a Theme,
}

/// Renders the score line into `area`: current score left, high score right.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32, info: &HudInfo<'_>) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    let style = Style::default()
        .fg(info.theme.hud_text)
        .add_modifier(Modifier::BOLD);

    frame.render_widget(
        Paragraph::new(Line::from(score_text(score)))
            .alignment(Alignment::Left)
            .style(style),
        left,
    );
    frame.render_widget(
        Paragraph::new(Line::from(high_score_text(info.high_score)))
            .alignment(Alignment::Right)
            .style(style),
        right,
    );
}

fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

fn high_score_text(high_score: u32) -> String {
    format!("High Score: {high_score}")
}
