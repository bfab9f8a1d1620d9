use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    choice_display::*, judgment_dialog::*, key_binding_display::*, move_display::*,
    stats_display::*,
};

mod choice_display;
mod judgment_dialog;
mod key_binding_display;
mod move_display;
mod stats_display;

pub mod color {
    use ratatui::style::Color;

    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const NAVY: Color = Color::Rgb(26, 51, 115);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    // Forest green and crimson backdrops for the two objectives.
    pub const WIN: Color = Color::Rgb(34, 139, 34);
    pub const LOSE: Color = Color::Rgb(194, 38, 66);
}

pub mod style {
    use ratatui::style::{Modifier, Style};
    use rps_engine::Objective;

    use crate::view::widgets::color;

    pub const DEFAULT: Style = Style::new().fg(color::WHITE);
    pub const DIM: Style = Style::new().fg(color::GRAY);
    pub const TITLE: Style = Style::new().fg(color::WHITE).add_modifier(Modifier::BOLD);
    pub const CARD: Style = Style::new().fg(color::WHITE).bg(color::NAVY);
    pub const SELECTED: Style = Style::new()
        .fg(color::YELLOW)
        .add_modifier(Modifier::BOLD.union(Modifier::REVERSED));
    pub const KEY: Style = Style::new().fg(color::CYAN);

    pub const fn objective(objective: Objective) -> Style {
        let bg = match objective {
            Objective::Win => color::WIN,
            Objective::Lose => color::LOSE,
        };
        Style::new()
            .fg(color::WHITE)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
