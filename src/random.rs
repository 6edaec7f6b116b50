//! Random-boolean sources for trip checks
//!
//! `Player::walk` asks a `CoinFlip` once per call whether the player keeps
//! their footing. Production code uses a `SeededCoin`; tests script the
//! outcomes with a `FixedCoin`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of fair random booleans
pub trait CoinFlip {
    /// Returns true when the player keeps their footing
    fn flip(&mut self) -> bool;
}

/// Coin backed by `StdRng`
///
/// Two coins built from the same seed produce the same sequence.
#[derive(Debug, Clone)]
pub struct SeededCoin {
    rng: StdRng,
}

impl SeededCoin {
    pub fn from_seed(seed: u64) -> Self {
        SeededCoin {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible coin seeded from the OS
    pub fn from_entropy() -> Self {
        SeededCoin {
            rng: StdRng::from_entropy(),
        }
    }
}

impl CoinFlip for SeededCoin {
    fn flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Coin that replays a fixed sequence of outcomes, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedCoin {
    outcomes: Vec<bool>,
    index: usize,
}

impl FixedCoin {
    /// Create a coin with the given sequence of outcomes
    ///
    /// An empty sequence behaves like `FixedCoin::constant(true)`.
    pub fn new(outcomes: Vec<bool>) -> Self {
        let outcomes = if outcomes.is_empty() { vec![true] } else { outcomes };
        FixedCoin { outcomes, index: 0 }
    }

    /// Create a coin that always lands the same way
    pub fn constant(outcome: bool) -> Self {
        Self::new(vec![outcome])
    }
}

impl CoinFlip for FixedCoin {
    fn flip(&mut self) -> bool {
        let outcome = self.outcomes[self.index % self.outcomes.len()];
        self.index += 1;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_coin_cycles() {
        let mut coin = FixedCoin::new(vec![true, false, false]);
        let flips: Vec<bool> = (0..6).map(|_| coin.flip()).collect();
        assert_eq!(flips, vec![true, false, false, true, false, false]);
    }

    #[test]
    fn test_fixed_coin_empty_sequence() {
        let mut coin = FixedCoin::new(Vec::new());
        assert!(coin.flip());
        assert!(coin.flip());
    }

    #[test]
    fn test_seeded_coin_is_reproducible() {
        let mut first = SeededCoin::from_seed(42);
        let mut second = SeededCoin::from_seed(42);

        let a: Vec<bool> = (0..64).map(|_| first.flip()).collect();
        let b: Vec<bool> = (0..64).map(|_| second.flip()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_coin_lands_both_ways() {
        let mut coin = SeededCoin::from_seed(7);
        let heads = (0..200).filter(|_| coin.flip()).count();
        assert!(heads > 0 && heads < 200, "heads = {}", heads);
    }
}
