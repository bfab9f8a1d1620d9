use std::path::PathBuf;

use chrono::Utc;
use rand::{Rng, SeedableRng as _, rngs::StdRng};
use rps_engine::{
    GameSession, Move, ROUNDS_PER_SESSION, RoundSource, SessionSeed, correct_answer,
};

use crate::{
    schema::simulation::SimulationReport,
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of complete sessions to play
    #[clap(long, default_value_t = 1000)]
    sessions: usize,
    /// How the simulated player picks its moves
    #[clap(long, value_enum, default_value_t = Strategy::Random)]
    strategy: Strategy,
    /// Seed for the round sequence (32 hex digits); random when omitted
    #[clap(long)]
    seed: Option<SessionSeed>,
    /// Output file path (default: stdout)
    #[clap(long)]
    output: Option<PathBuf>,
    /// Write debug logs to this file
    #[clap(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Strategy {
    /// Always pick the correct answer
    Perfect,
    /// Pick uniformly at random
    Random,
    /// Repeat the shown move
    Mirror,
    /// Answer as if the objective were reversed
    Contrary,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Perfect => "perfect",
            Strategy::Random => "random",
            Strategy::Mirror => "mirror",
            Strategy::Contrary => "contrary",
        }
    }

    fn choose<S, R>(self, session: &GameSession<S>, rng: &mut R) -> Move
    where
        S: RoundSource,
        R: Rng,
    {
        match self {
            Strategy::Perfect => session.expected_move(),
            Strategy::Random => rng.random(),
            Strategy::Mirror => session.current_move(),
            Strategy::Contrary => {
                correct_answer(session.current_move(), session.objective().opposite())
            }
        }
    }
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        sessions,
        strategy,
        seed,
        output,
        log_file,
    } = arg;

    util::init_logger(log_file.as_deref())?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    log::info!(
        "simulating {sessions} sessions with strategy {} (seed {seed})",
        strategy.name()
    );
    let report = simulate(*strategy, seed, *sessions);
    log::info!(
        "finished: {} of {} rounds correct",
        report.stats.correct_answers(),
        report.stats.rounds_judged()
    );

    Output::save_json(&report, output.clone())?;
    Ok(())
}

fn simulate(strategy: Strategy, seed: SessionSeed, sessions: usize) -> SimulationReport {
    let mut session = GameSession::with_seed(seed);

    // Separate generator so the strategy never consumes draws from the round source.
    let mut rng_seed = [0; 32];
    rng_seed[..16].copy_from_slice(&seed.to_bytes());
    let mut rng = StdRng::from_seed(rng_seed);

    let mut score_histogram = [0; ROUNDS_PER_SESSION + 1];
    for _ in 0..sessions {
        loop {
            let choice = strategy.choose(&session, &mut rng);
            let judgment = session.submit_choice(choice);
            session.acknowledge();
            if judgment.is_session_end {
                score_histogram[judgment.score] += 1;
                break;
            }
        }
    }

    SimulationReport {
        simulated_at: Utc::now(),
        strategy: strategy.name().to_owned(),
        seed,
        sessions,
        accuracy: session.stats().accuracy(),
        stats: session.stats().clone(),
        score_histogram,
    }
}
