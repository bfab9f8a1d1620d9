use ratatui::{
    layout::{Constraint, HorizontalAlignment},
    prelude::{Buffer, Rect},
    text::{Line, Span, Text},
    widgets::{Block as BlockWidget, Clear, Padding, Paragraph, Widget},
};
use rps_engine::Judgment;

use crate::view::widgets::{color, style};

const WIDTH: u16 = 36;
const HEIGHT: u16 = 9;

/// Modal dialog announcing a judgment.
///
/// Non-final rounds offer "Continue"; the final round shows the final score
/// and offers "New Game".
#[derive(Debug)]
pub struct JudgmentDialog<'a> {
    judgment: &'a Judgment,
}

impl<'a> JudgmentDialog<'a> {
    pub fn new(judgment: &'a Judgment) -> Self {
        Self { judgment }
    }

    pub fn title(&self) -> &'static str {
        match (self.judgment.is_session_end, self.judgment.correct) {
            (true, _) => "Final Score",
            (false, true) => "Correct :)",
            (false, false) => "Incorrect :(",
        }
    }

    pub fn message(&self) -> String {
        if self.judgment.is_session_end {
            format!("Your final score is {}", self.judgment.score)
        } else {
            format!("Your score is {}", self.judgment.score)
        }
    }

    pub fn button(&self) -> &'static str {
        if self.judgment.is_session_end {
            "New Game"
        } else {
            "Continue"
        }
    }
}

impl Widget for JudgmentDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.centered(Constraint::Length(WIDTH), Constraint::Length(HEIGHT));
        let border_color = if self.judgment.correct {
            color::WIN
        } else {
            color::LOSE
        };

        let detail = if self.judgment.correct {
            Line::styled(format!("{} was right", self.judgment.chosen), style::DIM)
        } else {
            Line::styled(
                format!("The answer was {}", self.judgment.expected),
                style::DIM,
            )
        };
        let text = Text::from(vec![
            detail,
            Line::raw(""),
            Line::styled(self.message(), style::DEFAULT),
            Line::raw(""),
            Line::from(Span::styled(format!("[ {} ]", self.button()), style::SELECTED)),
        ])
        .centered();

        let block = BlockWidget::bordered()
            .title(Line::styled(self.title(), style::TITLE))
            .title_alignment(HorizontalAlignment::Center)
            .border_style(border_color)
            .padding(Padding::symmetric(1, 1));

        Clear.render(area, buf);
        Paragraph::new(text).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use rps_engine::Move;

    use super::*;

    fn judgment(correct: bool, score: usize, is_session_end: bool) -> Judgment {
        Judgment {
            chosen: Move::Rock,
            expected: if correct { Move::Rock } else { Move::Paper },
            correct,
            score,
            is_session_end,
        }
    }

    #[test]
    fn test_round_dialog_texts() {
        let correct = judgment(true, 2, false);
        let dialog = JudgmentDialog::new(&correct);
        assert_eq!(dialog.title(), "Correct :)");
        assert_eq!(dialog.message(), "Your score is 2");
        assert_eq!(dialog.button(), "Continue");

        let incorrect = judgment(false, 0, false);
        assert_eq!(JudgmentDialog::new(&incorrect).title(), "Incorrect :(");
    }

    #[test]
    fn test_final_dialog_texts() {
        let last = judgment(false, 1, true);
        let dialog = JudgmentDialog::new(&last);
        assert_eq!(dialog.title(), "Final Score");
        assert_eq!(dialog.message(), "Your final score is 1");
        assert_eq!(dialog.button(), "New Game");
    }
}
