//! State management module for the Ritual of Five Hands.
//!
//! This module provides the core state types and managers:
//!
//! - `hand` - The five hands, the beats relation, round resolution
//! - `opponent` - Opponent move sources (random, seeded, scripted)
//! - `ritual` - The ritual engine (phases, scores, round progression)
//! - `session` - Per-session engine ownership
//! - `feedback` - User-facing text for round and summary feedback
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       RitualManager                          │
//! │                                                              │
//! │  session_id → RitualEngine                                   │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │                 RitualEngine (per session)             │  │
//! │  │                                                        │  │
//! │  │   RitualState                 Box<dyn MoveSource>      │  │
//! │  │   (name, scores, round,       (opponent's next hand)   │  │
//! │  │    limit, phase)                                       │  │
//! │  │                                                        │  │
//! │  │   Unconfigured ──▶ InProgress ──▶ Complete             │  │
//! │  │        ▲               ▲    │         │                │  │
//! │  │        └───────────────┴────┴─────────┘                │  │
//! │  │                    reset / configure                   │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use ritual_state::state::{Move, RitualManager};
//!
//! let mut manager = RitualManager::new();
//!
//! // Each session owns an independent engine
//! let engine = manager.open("session-abc");
//! engine.configure("Alice", 5).unwrap();
//!
//! let round = engine.submit_move(Move::Spock).unwrap();
//! assert_eq!(round.current_round, 1);
//! ```

pub mod feedback;
pub mod hand;
pub mod opponent;
pub mod ritual;
pub mod session;

// Re-export commonly used types
pub use feedback::{idle_message, round_message, summary_message};
pub use hand::{resolve, Move, ParseMoveError, RoundOutcome};
pub use opponent::{MoveSource, RandomOpponent, ScriptedOpponent};
pub use ritual::{
    FinalVerdict, Phase, RitualEngine, RitualError, RitualState, RoundResult, DEFAULT_MAX_ROUNDS,
};
pub use session::RitualManager;
