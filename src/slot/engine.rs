use crate::slot::{
    rng::{RandomSource, RandomSourceError},
    types::{BatchResult, Outcome, Spin, Symbol, BATCH_SPINS, SYMBOLS_PER_SPIN, SYMBOL_POOL},
};
use std::collections::HashSet;

/// Draw `count` symbols uniformly from the pool, with replacement.
///
/// A count of zero yields an empty draw without consuming entropy.
pub fn draw(source: &dyn RandomSource, count: usize) -> Result<Vec<Symbol>, RandomSourceError> {
    let mut symbols = Vec::with_capacity(count);
    for _ in 0..count {
        let index = source.next_index(SYMBOL_POOL.len())?;
        symbols.push(SYMBOL_POOL[index]);
    }
    Ok(symbols)
}

/// True when any symbol appears at least twice, adjacent or not
pub fn evaluate(symbols: &[Symbol]) -> bool {
    if symbols.len() < 2 {
        return false;
    }

    let mut seen = HashSet::with_capacity(symbols.len());
    symbols.iter().any(|symbol| !seen.insert(*symbol))
}

/// Single play: one draw of three symbols and its outcome
pub fn play(source: &dyn RandomSource) -> Result<Spin, RandomSourceError> {
    let symbols = draw(source, SYMBOLS_PER_SPIN)?;
    let outcome = Outcome::from_win(evaluate(&symbols));
    Ok(Spin { symbols, outcome })
}

/// Batch play of ten independent spins.
///
/// All or nothing: the first failing draw aborts the batch.
pub fn play_batch(source: &dyn RandomSource) -> Result<BatchResult, RandomSourceError> {
    let spins = (0..BATCH_SPINS)
        .map(|_| play(source))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BatchResult::from_spins(spins))
}
