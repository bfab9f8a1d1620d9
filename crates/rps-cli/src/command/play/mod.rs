use std::path::PathBuf;

use rps_engine::SessionSeed;

use crate::{command::play::app::PlayApp, tui::Tui, util};

mod app;
mod screen;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the round sequence (32 hex digits); random when omitted
    #[clap(long)]
    seed: Option<SessionSeed>,
    /// Save the game recording to a file when quitting
    #[clap(long)]
    save_recording: bool,
    /// Directory to save recording files
    #[clap(long, default_value = "./data/recordings/")]
    record_dir: PathBuf,
    /// Maximum number of rounds to keep in memory (oldest are discarded)
    #[clap(long, default_value_t = 10000)]
    history_size: usize,
    /// Write debug logs to this file
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            save_recording: false,
            record_dir: PathBuf::from("./data/recordings/"),
            history_size: 10000,
            log_file: None,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        save_recording,
        record_dir,
        history_size,
        log_file,
    } = arg;

    util::init_logger(log_file.as_deref())?;

    let mut app = PlayApp::new(*seed, *history_size);
    Tui::new().run(&mut app)?;

    if *save_recording {
        let path = app.into_history().save(record_dir)?;
        eprintln!("Saved recording to {}", path.display());
    }

    Ok(())
}
