pub use self::{app::App, runner::Tui};

mod app;
mod runner;
