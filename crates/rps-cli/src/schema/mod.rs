pub mod record;
pub mod simulation;
