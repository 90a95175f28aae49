//! Opponent move sources.
//!
//! The engine draws the computer's hand from a `MoveSource` rather than
//! calling into global randomness, so tests and replays can substitute a
//! deterministic source without touching engine logic.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::hand::Move;

/// Supplies the opponent's next hand, one per round.
pub trait MoveSource: fmt::Debug + Send {
    fn next_move(&mut self) -> Move;
}

/// Uniformly random opponent with no memory or strategy.
///
/// Backed by ChaCha8 so a seeded opponent replays the same hand sequence.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: ChaCha8Rng,
}

impl RandomOpponent {
    /// Create an opponent seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create a deterministic opponent. Same seed, same hand sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomOpponent {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }
}

/// Opponent that replays a fixed hand sequence, cycling when exhausted.
///
/// Intended for tests and scripted demos. An empty script degenerates to
/// always playing rock.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOpponent {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedOpponent {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves, next: 0 }
    }
}

impl MoveSource for ScriptedOpponent {
    fn next_move(&mut self) -> Move {
        if self.moves.is_empty() {
            return Move::Rock;
        }
        let mv = self.moves[self.next % self.moves.len()];
        self.next += 1;
        mv
    }
}
