//! Ritual State Library
//!
//! This crate provides state management for Ritual of Five Hands game logic.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Hands and Resolution** - The five ritual hands (rock, paper, scissors,
//!   lizard, spock), the fixed beats relation between them, and total
//!   deterministic round resolution.
//!
//! - **Ritual Engine** - The round-progression state machine: configure a
//!   player and round limit, submit hands, accumulate scores, and complete
//!   after the final round. Invalid operations are rejected without mutation.
//!
//! - **Opponent Sources** - The opponent's move supply as an injectable
//!   capability: uniformly random (seedable for reproducible rituals) or a
//!   scripted sequence for tests and replays.
//!
//! - **Session Management** - One independent engine per session, with
//!   indexed access and cleanup of completed rituals.
//!
//! # Design Principles
//!
//! 1. **State machines validate transitions** - Out-of-phase operations are
//!    rejected with clear errors and leave all state untouched.
//!
//! 2. **The engine owns its state** - No module-level mutable state; every
//!    session constructs its own engine and mutates it only through its
//!    operations.
//!
//! 3. **No I/O** - This crate is pure state, no rendering or networking.
//!    Rendering and input validation live in outer layers that call in.
//!
//! 4. **Serialization-ready** - Round results and ritual snapshots can be
//!    converted to JSON for clients.
//!
//! # Example
//!
//! ```rust
//! use ritual_state::state::{Move, RitualEngine, RoundOutcome, ScriptedOpponent};
//!
//! // Opponent plays a known sequence; use RitualEngine::new() for a random one.
//! let script = ScriptedOpponent::new(vec![Move::Scissors, Move::Rock, Move::Paper]);
//! let mut engine = RitualEngine::with_opponent(Box::new(script));
//!
//! engine.configure("Ava", 3).unwrap();
//!
//! // Rock crushes scissors.
//! let round = engine.submit_move(Move::Rock).unwrap();
//! assert_eq!(round.outcome, RoundOutcome::Win);
//! assert_eq!(round.player_score, 1);
//!
//! // Rock mirrors rock.
//! let round = engine.submit_move(Move::Rock).unwrap();
//! assert_eq!(round.outcome, RoundOutcome::Draw);
//!
//! // Paper covers rock; the ritual is complete after round 3.
//! let round = engine.submit_move(Move::Rock).unwrap();
//! assert_eq!(round.outcome, RoundOutcome::Lose);
//! assert!(round.ritual_complete);
//! assert!(engine.is_complete());
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
