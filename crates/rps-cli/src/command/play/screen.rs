use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
    widgets::{Block as BlockWidget, Padding},
};
use rps_engine::{Judgment, Move, ROUNDS_PER_SESSION, SessionSeed};

use crate::{
    record::{RecordingSession, SessionHistory},
    view::widgets::{
        ChoiceDisplay, JudgmentDialog, KeyBinding, KeyBindingDisplay, MoveDisplay, StatsDisplay,
        style,
    },
};

const PLAYING_KEYS: &[KeyBinding] = &[
    (&["1", "r"], "Rock"),
    (&["2", "p"], "Paper"),
    (&["3", "s"], "Scissors"),
    (&["←", "→"], "Select"),
    (&["Enter"], "Submit"),
    (&["q"], "Quit"),
];

const DIALOG_KEYS: &[KeyBinding] = &[(&["Enter", "Space"], "OK"), (&["q"], "Quit")];

#[derive(Debug)]
pub struct PlayScreen {
    session: RecordingSession,
    selected: Move,
    /// Judgment waiting to be acknowledged; input is locked while set.
    pending: Option<Judgment>,
    should_exit: bool,
}

impl PlayScreen {
    pub fn new(seed: Option<SessionSeed>, history_size: usize) -> Self {
        Self {
            session: RecordingSession::new(seed, history_size),
            selected: Move::Rock,
            pending: None,
            should_exit: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn into_history(self) -> SessionHistory {
        self.session.into_history()
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Event::Key(event) = event else {
            return;
        };
        if event.kind != KeyEventKind::Press {
            return;
        }
        if matches!(event.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_exit = true;
            return;
        }
        if self.pending.is_some() {
            if matches!(event.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.acknowledge();
            }
            return;
        }
        if let Some(mv) = move_for_key(event.code) {
            self.submit(mv);
            return;
        }
        match event.code {
            KeyCode::Left | KeyCode::Char('h') => self.selected = self.selected.beating(),
            KeyCode::Right | KeyCode::Char('l') => self.selected = self.selected.beaten_by(),
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(self.selected),
            _ => {}
        }
    }

    fn submit(&mut self, mv: Move) {
        self.selected = mv;
        self.pending = Some(self.session.submit_choice(mv));
    }

    fn acknowledge(&mut self) {
        self.session.acknowledge();
        self.pending = None;
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let viewport = frame
            .area()
            .centered(Constraint::Max(80), Constraint::Max(24));
        let stats = StatsDisplay::new(&self.session).block(
            BlockWidget::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::horizontal(1)),
        );
        let current_move = MoveDisplay::new(self.session.current_move());

        let [title_area, score_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(viewport);
        let [card_area, stats_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(stats.width())])
                .spacing(1)
                .areas(body_area);
        let stats_area = stats_area.centered_vertically(Constraint::Length(stats.height()));

        let card = BlockWidget::bordered()
            .style(style::CARD)
            .padding(Padding::horizontal(1));
        let [label_area, move_area, divider_area, objective_area, _, choices_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(MoveDisplay::HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(card.inner(card_area));

        let objective = self.session.objective();
        let selected = self.pending.is_none().then_some(self.selected);

        frame.render_widget(
            Line::styled("Rock Paper Scissors", style::TITLE).centered(),
            title_area,
        );
        frame.render_widget(
            Line::styled(
                format!(
                    "Score: {}    Round {}/{ROUNDS_PER_SESSION}",
                    self.session.score(),
                    self.session.rounds_played()
                ),
                style::DEFAULT,
            )
            .centered(),
            score_area,
        );
        frame.render_widget(card, card_area);
        frame.render_widget(
            Line::styled("Current Move", style::TITLE).centered(),
            label_area,
        );
        frame.render_widget(current_move, move_area);
        frame.render_widget(
            Line::styled("─".repeat(usize::from(divider_area.width)), style::DIM),
            divider_area,
        );
        frame.render_widget(
            Line::styled(format!(" Please {objective} "), style::objective(objective)).centered(),
            objective_area,
        );
        frame.render_widget(ChoiceDisplay::new(selected), choices_area);
        frame.render_widget(stats, stats_area);

        let keys = if self.pending.is_some() {
            DIALOG_KEYS
        } else {
            PLAYING_KEYS
        };
        frame.render_widget(KeyBindingDisplay::new(keys), help_area);

        if let Some(judgment) = &self.pending {
            frame.render_widget(JudgmentDialog::new(judgment), frame.area());
        }
    }
}

fn move_for_key(code: KeyCode) -> Option<Move> {
    match code {
        KeyCode::Char('1') => Some(Move::Rock),
        KeyCode::Char('2') => Some(Move::Paper),
        KeyCode::Char('3') => Some(Move::Scissors),
        KeyCode::Char(c) => Move::from_char(c),
        _ => None,
    }
}
