use crossterm::event;

use crate::tui::App;

/// Event-driven TUI runtime.
///
/// The game only changes state in response to input, so there is no tick:
/// the screen is redrawn once up front and then after every terminal event.
#[derive(Default, Debug)]
pub struct Tui {}

impl Tui {
    /// Creates a new Tui.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the application until `app.should_exit()` returns true.
    pub fn run<A>(self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                terminal.draw(|f| app.draw(f))?;
                let event = event::read()?;
                app.handle_event(&event);
            }
            Ok(())
        })
    }
}
