pub mod engine;
pub mod rng;
pub mod types;

pub use engine::{draw, evaluate, play, play_batch};
pub use rng::{OsRandomSource, RandomSource, RandomSourceError};
pub use types::*;
