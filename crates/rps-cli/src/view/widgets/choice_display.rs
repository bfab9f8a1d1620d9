use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::Widget,
};
use rps_engine::Move;

use crate::view::widgets::style;

/// The three answer buttons, each labeled with its number key.
#[derive(Debug)]
pub struct ChoiceDisplay {
    selected: Option<Move>,
}

impl ChoiceDisplay {
    /// Creates the buttons with `selected` highlighted.
    ///
    /// Pass `None` to draw every button unhighlighted, e.g. while input is locked.
    pub fn new(selected: Option<Move>) -> Self {
        Self { selected }
    }
}

impl Widget for ChoiceDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = Layout::horizontal([Constraint::Fill(1); Move::LEN]).split(area);
        for (i, (mv, area)) in Move::ALL.into_iter().zip(areas.iter()).enumerate() {
            let label_style = if self.selected == Some(mv) {
                style::SELECTED
            } else {
                style::DEFAULT
            };
            let line = Line::from(vec![
                Span::styled(format!("[{}]", i + 1), style::KEY),
                Span::raw(" "),
                Span::styled(format!(" {mv} "), label_style),
            ])
            .centered();
            line.render(*area, buf);
        }
    }
}
