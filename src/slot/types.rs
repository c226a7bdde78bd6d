use serde::{Deserialize, Serialize};
use std::fmt;

/// Message returned for a draw containing at least one repeated symbol
pub const WIN_MESSAGE: &str = "You win!";

/// Message returned for a draw with no repeated symbol
pub const LOSE_MESSAGE: &str = "Try again!";

/// Number of symbols in one draw
pub const SYMBOLS_PER_SPIN: usize = 3;

/// Number of independent draws in a batch play
pub const BATCH_SPINS: usize = 10;

/// Fruit symbol shown on the reels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbol {
    Cherry,
    Lemon,
    Orange,
    Grape,
    Watermelon,
    Pineapple,
}

/// Fixed, ordered pool every draw samples from
pub const SYMBOL_POOL: [Symbol; 6] = [
    Symbol::Cherry,
    Symbol::Lemon,
    Symbol::Orange,
    Symbol::Grape,
    Symbol::Watermelon,
    Symbol::Pineapple,
];

impl Symbol {
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Cherry => "Cherry",
            Symbol::Lemon => "Lemon",
            Symbol::Orange => "Orange",
            Symbol::Grape => "Grape",
            Symbol::Watermelon => "Watermelon",
            Symbol::Pineapple => "Pineapple",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Win/lose verdict for one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn from_win(win: bool) -> Self {
        if win {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }

    /// Player-facing message for this outcome
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => WIN_MESSAGE,
            Outcome::Lose => LOSE_MESSAGE,
        }
    }
}

/// One draw together with its evaluated outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spin {
    pub symbols: Vec<Symbol>,
    pub outcome: Outcome,
}

/// Result of a batch play.
///
/// `win_count` always equals the number of winning spins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub spins: Vec<Spin>,
    pub win_count: usize,
}

impl BatchResult {
    pub fn from_spins(spins: Vec<Spin>) -> Self {
        let win_count = spins.iter().filter(|spin| spin.outcome.is_win()).count();
        Self { spins, win_count }
    }
}
