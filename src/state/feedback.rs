//! User-facing feedback text.
//!
//! Thin presentation adapter: pure string builders over engine outputs, with
//! no game logic of its own. Callers render these however they like.

use super::hand::RoundOutcome;
use super::ritual::{FinalVerdict, RitualState, RoundResult};

/// Feedback line for one resolved round.
pub fn round_message(result: &RoundResult) -> String {
    let mut text = format!(
        "You chose {}, the opponent chose {}. ",
        result.player_move, result.computer_move
    );

    text.push_str(match result.outcome {
        RoundOutcome::Win => "You win this round.",
        RoundOutcome::Lose => "You lose this round.",
        RoundOutcome::Draw => "The round is a draw.",
    });

    text
}

/// Final summary once the ritual is complete, `None` before then.
pub fn summary_message(state: &RitualState) -> Option<String> {
    let verdict = state.verdict()?;

    let mut text = format!(
        "The ritual is complete. Final score — You: {}, Opponent: {}. ",
        state.player_score(),
        state.computer_score()
    );

    text.push_str(match verdict {
        FinalVerdict::Victory => "You emerge from the circle victorious.",
        FinalVerdict::Defeat => "The opponent claims this ritual.",
        FinalVerdict::Balance => "The ritual ends in perfect balance.",
    });

    Some(text)
}

/// Prompt shown before any hand has been played.
pub fn idle_message() -> &'static str {
    "Choose a hand to begin the ritual."
}
