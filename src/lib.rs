//! Fruit Slot - stateless slot machine over HTTP
//!
//! Draws three fruits from a fixed pool using the operating system CSPRNG
//! and reports a win when any fruit repeats.

pub mod api;
pub mod config;
pub mod errors;
pub mod slot;

pub use errors::{FruitSlotError, FruitSlotResult};
pub use slot::{
    draw, evaluate, OsRandomSource, RandomSource, RandomSourceError, Symbol, SYMBOL_POOL,
};
