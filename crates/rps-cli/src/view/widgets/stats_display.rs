use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use rps_engine::{GameSession, ROUNDS_PER_SESSION};

use crate::view::widgets::style;

/// Side panel with the current session and the lifetime statistics.
pub struct StatsDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap() + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    LabelValue(&'static str, &'static dyn Fn(&GameSession) -> String),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SESSION"),
    Row::LabelValue("SCORE:", &|session| session.score().to_string()),
    Row::LabelValue("ROUND:", &|session| {
        format!("{}/{ROUNDS_PER_SESSION}", session.rounds_played())
    }),
    Row::Empty,
    Row::FullLabel("OVERALL"),
    Row::LabelValue("ROUNDS:", &|session| {
        session.stats().rounds_judged().to_string()
    }),
    Row::LabelValue("CORRECT:", &|session| {
        session.stats().correct_answers().to_string()
    }),
    Row::LabelValue("ACCURACY:", &|session| {
        session
            .stats()
            .accuracy()
            .map_or_else(|| "-".to_owned(), |acc| format!("{:.0}%", acc * 100.0))
    }),
    Row::LabelValue("SESSIONS:", &|session| {
        session.stats().completed_sessions().to_string()
    }),
    Row::LabelValue("BEST:", &|session| session.stats().best_score().to_string()),
    Row::LabelValue("PERFECT:", &|session| {
        session.stats().perfect_sessions().to_string()
    }),
];

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style::TITLE)
                        .left_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style::DEFAULT)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.session), style::DEFAULT)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(session: &GameSession) -> String {
        let display = StatsDisplay::new(session);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_fresh_session() {
        let session = GameSession::new();
        let text = render_to_string(&session);
        assert!(text.contains("ROUND:"));
        assert!(text.contains("1/3"));
        assert!(text.contains("ACCURACY:"));
    }

    #[test]
    fn test_accuracy_after_rounds() {
        let mut session = GameSession::new();
        session.submit_choice(session.expected_move());
        session.acknowledge();
        session.submit_choice(session.current_move());

        let text = render_to_string(&session);
        assert!(text.contains("50%"), "{text}");
    }
}
