//! Session management.
//!
//! One independent `RitualEngine` per session, indexed by session id. No
//! state is shared across sessions; dropping an entry drops its ritual.

use std::collections::HashMap;

use super::ritual::RitualEngine;

/// Ritual manager - tracks one engine per session.
#[derive(Debug, Default)]
pub struct RitualManager {
    rituals: HashMap<String, RitualEngine>,
}

impl RitualManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the engine for a session, creating one (random opponent) if needed.
    pub fn open(&mut self, session_id: &str) -> &mut RitualEngine {
        self.rituals
            .entry(session_id.to_string())
            .or_insert_with(RitualEngine::new)
    }

    /// Install a custom-built engine (seeded or scripted opponent) for a
    /// session, replacing any existing one.
    pub fn insert(&mut self, session_id: impl Into<String>, engine: RitualEngine) {
        self.rituals.insert(session_id.into(), engine);
    }

    /// Get a session's engine.
    pub fn get(&self, session_id: &str) -> Option<&RitualEngine> {
        self.rituals.get(session_id)
    }

    /// Get a session's engine mutably.
    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut RitualEngine> {
        self.rituals.get_mut(session_id)
    }

    /// Remove a session's engine.
    pub fn remove(&mut self, session_id: &str) -> Option<RitualEngine> {
        self.rituals.remove(session_id)
    }

    /// Remove engines whose ritual is complete.
    /// Returns the session ids that were dropped.
    pub fn cleanup_complete(&mut self) -> Vec<String> {
        let complete: Vec<String> = self
            .rituals
            .iter()
            .filter(|(_, engine)| engine.is_complete())
            .map(|(id, _)| id.clone())
            .collect();

        for id in &complete {
            self.rituals.remove(id);
        }

        complete
    }

    /// Count sessions with a ritual in progress.
    pub fn active_count(&self) -> usize {
        self.rituals
            .values()
            .filter(|engine| engine.state().phase().is_active())
            .count()
    }

    /// Total session count.
    pub fn count(&self) -> usize {
        self.rituals.len()
    }

    /// All session ids.
    pub fn session_ids(&self) -> impl Iterator<Item = &String> {
        self.rituals.keys()
    }
}
