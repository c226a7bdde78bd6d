//! API Response Models
//!
//! JSON bodies for the play endpoints. Field names are part of the public
//! contract.

use crate::slot::{BatchResult, Spin, Symbol};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /play body, also one entry of a batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayResponse {
    pub fruits: Vec<Symbol>,
    pub message: String,
}

/// GET /play/10 body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchPlayResponse {
    pub spins: Vec<PlayResponse>,
    pub win_count: usize,
}

impl From<Spin> for PlayResponse {
    fn from(spin: Spin) -> Self {
        Self {
            message: spin.outcome.message().to_string(),
            fruits: spin.symbols,
        }
    }
}

impl From<BatchResult> for BatchPlayResponse {
    fn from(batch: BatchResult) -> Self {
        Self {
            spins: batch.spins.into_iter().map(PlayResponse::from).collect(),
            win_count: batch.win_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{Outcome, WIN_MESSAGE};
    use serde_json::json;

    #[test]
    fn test_play_response_shape() {
        let response = PlayResponse::from(Spin {
            symbols: vec![Symbol::Grape, Symbol::Grape, Symbol::Watermelon],
            outcome: Outcome::Win,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "fruits": ["Grape", "Grape", "Watermelon"],
                "message": WIN_MESSAGE,
            })
        );
    }

    #[test]
    fn test_batch_response_shape() {
        let batch = BatchResult::from_spins(vec![Spin {
            symbols: vec![Symbol::Cherry, Symbol::Lemon, Symbol::Orange],
            outcome: Outcome::Lose,
        }]);

        let value = serde_json::to_value(BatchPlayResponse::from(batch)).unwrap();
        assert_eq!(value["win_count"], 0);
        assert_eq!(value["spins"][0]["message"], "Try again!");
        assert_eq!(value["spins"][0]["fruits"][2], "Orange");
    }
}
