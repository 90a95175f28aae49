//! Ritual engine: round resolution and game progression.
//!
//! Tracks one ritual session from configuration through its final round and
//! validates every transition.
//!
//! # State Diagram
//!
//! ```text
//!                 configure(name, limit)
//! ┌──────────────┐                ┌──────────────┐
//! │ Unconfigured │───────────────▶│  InProgress  │◀──┐
//! └──────────────┘                └──────┬───────┘   │ submit_move
//!        ▲                               │           │ (round < limit)
//!        │                               ├───────────┘
//!        │ reset(false)                  │ submit_move
//!        │                               │ (round reaches limit)
//!        │                               ▼
//!        │                        ┌──────────────┐
//!        └────────────────────────│   Complete   │
//!                                 └──────┬───────┘
//!                                        │ reset(true)
//!                                        ▼
//!                                   InProgress (same player, same limit)
//! ```

use std::fmt;

use super::hand::{resolve, Move, RoundOutcome};
use super::opponent::{MoveSource, RandomOpponent};

/// Round count the original ritual runs for; a suggested default for setup.
pub const DEFAULT_MAX_ROUNDS: u32 = 10;

/// Ritual lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No player or round limit configured yet
    #[default]
    Unconfigured,
    /// Accepting move submissions
    InProgress,
    /// All rounds resolved, submissions rejected
    Complete,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unconfigured => "unconfigured",
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
        }
    }

    /// Check if the ritual accepts move submissions.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Check if the ritual has finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a completed ritual ended, relative to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalVerdict {
    Victory,
    Defeat,
    Balance,
}

impl FinalVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Victory => "victory",
            Self::Defeat => "defeat",
            Self::Balance => "balance",
        }
    }
}

/// Ritual errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RitualError {
    /// Configuration rejected; nothing was changed.
    InvalidConfiguration { reason: &'static str },
    /// Move submitted outside the InProgress phase; nothing was changed.
    NotInProgress { phase: Phase },
}

impl fmt::Display for RitualError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "Invalid configuration: {}", reason)
            }
            Self::NotInProgress { phase } => {
                write!(f, "Ritual is not in progress (phase: {})", phase)
            }
        }
    }
}

impl std::error::Error for RitualError {}

/// One ritual session's state.
///
/// Owned exclusively by a `RitualEngine`; read through accessors and mutated
/// only by engine operations.
#[derive(Debug, Clone, Default)]
pub struct RitualState {
    player_name: String,
    max_rounds: u32,
    current_round: u32,
    player_score: u32,
    computer_score: u32,
    phase: Phase,
    configured_at: Option<chrono::DateTime<chrono::Utc>>,
    completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl RitualState {
    /// Player's display name. Empty while unconfigured.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rounds_remaining(&self) -> u32 {
        self.max_rounds.saturating_sub(self.current_round)
    }

    /// When the current ritual was configured.
    pub fn configured_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.configured_at
    }

    /// When the final round resolved.
    pub fn completed_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.completed_at
    }

    /// Final verdict once the ritual is complete, `None` before then.
    pub fn verdict(&self) -> Option<FinalVerdict> {
        if !self.phase.is_terminal() {
            return None;
        }
        Some(if self.player_score > self.computer_score {
            FinalVerdict::Victory
        } else if self.player_score < self.computer_score {
            FinalVerdict::Defeat
        } else {
            FinalVerdict::Balance
        })
    }

    /// Convert the ritual snapshot to JSON for clients.
    pub fn to_json(&self) -> serde_json::Value {
        let player_name = (!self.player_name.is_empty()).then(|| self.player_name.clone());

        serde_json::json!({
            "player_name": player_name,
            "phase": self.phase.as_str(),
            "current_round": self.current_round,
            "max_rounds": self.max_rounds,
            "player_score": self.player_score,
            "computer_score": self.computer_score,
            "verdict": self.verdict().map(|v| v.as_str()),
            "configured_at": self.configured_at.map(|t| t.to_rfc3339()),
            "completed_at": self.completed_at.map(|t| t.to_rfc3339()),
        })
    }
}

/// Result of one accepted move submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: RoundOutcome,
    pub player_score: u32,
    pub computer_score: u32,
    pub current_round: u32,
    pub ritual_complete: bool,
}

impl RoundResult {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "player_move": self.player_move.as_str(),
            "computer_move": self.computer_move.as_str(),
            "outcome": self.outcome.as_str(),
            "player_score": self.player_score,
            "computer_score": self.computer_score,
            "current_round": self.current_round,
            "ritual_complete": self.ritual_complete,
        })
    }
}

/// The ritual state machine.
///
/// Owns a `RitualState` and the opponent's move source. One engine per
/// session; no state is shared across engines.
#[derive(Debug)]
pub struct RitualEngine {
    state: RitualState,
    opponent: Box<dyn MoveSource>,
}

impl Default for RitualEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RitualEngine {
    /// Create an engine with an entropy-seeded random opponent.
    pub fn new() -> Self {
        Self::with_opponent(Box::new(RandomOpponent::from_entropy()))
    }

    /// Create an engine whose opponent replays deterministically from a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_opponent(Box::new(RandomOpponent::seeded(seed)))
    }

    /// Create an engine with a custom opponent source.
    pub fn with_opponent(opponent: Box<dyn MoveSource>) -> Self {
        Self {
            state: RitualState::default(),
            opponent,
        }
    }

    /// Current ritual state.
    pub fn state(&self) -> &RitualState {
        &self.state
    }

    /// Configure a new ritual: player name and round limit.
    ///
    /// Zeroes scores and the round counter and moves to `InProgress`.
    /// Accepted in any phase; configuring mid-ritual starts over. Rejected
    /// without mutation when the trimmed name is empty or the limit is zero.
    pub fn configure(&mut self, name: &str, round_limit: u32) -> Result<&RitualState, RitualError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RitualError::InvalidConfiguration {
                reason: "player name is blank",
            });
        }
        if round_limit == 0 {
            return Err(RitualError::InvalidConfiguration {
                reason: "round limit must be positive",
            });
        }

        self.state = RitualState {
            player_name: name.to_string(),
            max_rounds: round_limit,
            current_round: 0,
            player_score: 0,
            computer_score: 0,
            phase: Phase::InProgress,
            configured_at: Some(chrono::Utc::now()),
            completed_at: None,
        };
        Ok(&self.state)
    }

    /// Submit the player's hand for one round.
    ///
    /// Draws the opponent's hand, resolves the round, updates at most one
    /// score, and advances the round counter. The final round moves the
    /// ritual to `Complete`. Out-of-phase submissions are rejected before
    /// anything is drawn or mutated.
    pub fn submit_move(&mut self, player_move: Move) -> Result<RoundResult, RitualError> {
        if !self.state.phase.is_active() {
            return Err(RitualError::NotInProgress {
                phase: self.state.phase,
            });
        }

        let computer_move = self.opponent.next_move();
        let outcome = resolve(player_move, computer_move);

        match outcome {
            RoundOutcome::Win => self.state.player_score += 1,
            RoundOutcome::Lose => self.state.computer_score += 1,
            RoundOutcome::Draw => {}
        }
        self.state.current_round += 1;

        if self.state.current_round >= self.state.max_rounds {
            self.state.phase = Phase::Complete;
            self.state.completed_at = Some(chrono::Utc::now());
        }

        Ok(RoundResult {
            player_move,
            computer_move,
            outcome,
            player_score: self.state.player_score,
            computer_score: self.state.computer_score,
            current_round: self.state.current_round,
            ritual_complete: self.state.phase.is_terminal(),
        })
    }

    /// Check if the ritual has finished.
    pub fn is_complete(&self) -> bool {
        self.state.phase.is_terminal()
    }

    /// Start over.
    ///
    /// With `preserve_identity` the player name and round limit are kept and
    /// the ritual returns to `InProgress` ("new ritual, same player"); on an
    /// engine that was never configured there is no identity to keep and the
    /// state stays `Unconfigured`. Without it, everything is cleared back to
    /// `Unconfigured`.
    pub fn reset(&mut self, preserve_identity: bool) -> &RitualState {
        if preserve_identity && !self.state.player_name.is_empty() {
            self.state.current_round = 0;
            self.state.player_score = 0;
            self.state.computer_score = 0;
            self.state.phase = Phase::InProgress;
            self.state.configured_at = Some(chrono::Utc::now());
            self.state.completed_at = None;
        } else {
            self.state = RitualState::default();
        }
        &self.state
    }
}
