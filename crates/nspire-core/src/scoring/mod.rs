pub mod engine;
pub mod outcome;

pub use engine::{calculate_nspire_score, inspection_cycle};
pub use outcome::{PointsDeducted, ScoreResult};
