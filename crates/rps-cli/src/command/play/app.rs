use crossterm::event::Event;
use ratatui::Frame;
use rps_engine::SessionSeed;

use crate::{command::play::screen::PlayScreen, record::SessionHistory, tui::App};

#[derive(Debug)]
pub struct PlayApp {
    screen: PlayScreen,
}

impl PlayApp {
    pub fn new(seed: Option<SessionSeed>, history_size: usize) -> Self {
        Self {
            screen: PlayScreen::new(seed, history_size),
        }
    }

    pub fn into_history(self) -> SessionHistory {
        self.screen.into_history()
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.screen.should_exit()
    }

    fn handle_event(&mut self, event: &Event) {
        self.screen.handle_event(event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }
}
