use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::Widget,
};
use rps_engine::Move;

use crate::view::widgets::style;

const ROCK_ART: &[&str] = &[
    r"    _______     ",
    r"---'   ____)    ",
    r"      (_____)   ",
    r"      (_____)   ",
    r"      (____)    ",
    r"---.__(___)     ",
];

const PAPER_ART: &[&str] = &[
    r"     _______       ",
    r"---'    ____)____  ",
    r"           ______) ",
    r"          _______) ",
    r"         _______)  ",
    r"---.__________)    ",
];

const SCISSORS_ART: &[&str] = &[
    r"    _______        ",
    r"---'   ____)____   ",
    r"          ______)  ",
    r"       __________) ",
    r"      (____)       ",
    r"---.__(___)        ",
];

/// Height of the gesture art in rows.
const MOVE_ART_HEIGHT: u16 = 6;

fn art(mv: Move) -> &'static [&'static str] {
    match mv {
        Move::Rock => ROCK_ART,
        Move::Paper => PAPER_ART,
        Move::Scissors => SCISSORS_ART,
    }
}

/// Draws a move as ASCII art with its name underneath.
#[derive(Debug)]
pub struct MoveDisplay {
    mv: Move,
}

impl MoveDisplay {
    pub fn new(mv: Move) -> Self {
        Self { mv }
    }

    /// Rows needed for the art and the name.
    pub const HEIGHT: u16 = MOVE_ART_HEIGHT + 1;
}

impl Widget for MoveDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = art(self.mv).iter().copied().map(Line::from).collect();
        lines.push(Line::styled(self.mv.as_str(), style::TITLE));
        Text::from(lines)
            .style(style::DEFAULT)
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_has_fixed_height() {
        for mv in Move::ALL {
            assert_eq!(art(mv).len(), usize::from(MOVE_ART_HEIGHT), "{mv}");
        }
    }

    #[test]
    fn test_renders_move_name() {
        let area = Rect::new(0, 0, 24, 7);
        let mut buf = Buffer::empty(area);
        MoveDisplay::new(Move::Scissors).render(area, &mut buf);

        let last_row: String = (0..area.width)
            .map(|x| buf[(x, area.height - 1)].symbol())
            .collect();
        assert!(last_row.contains("Scissors"), "{last_row:?}");
    }
}
