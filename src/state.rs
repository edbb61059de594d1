//! Application state: the character pool and the process-wide game session.
//!
//! Exactly one puzzle is "current" at a time; generating a new one discards
//! the previous one, and a reset clears both the puzzle and the stats. Every
//! mutation happens under the write half of one RwLock so concurrent
//! requests cannot lose counter updates.

use std::sync::Arc;

use rand::thread_rng;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::config::load_game_config_from_env;
use crate::domain::{Character, KnowledgeCard, Puzzle, SessionStats};
use crate::engine::{self, Outcome};
use crate::errors::PuzzleError;
use crate::generator;
use crate::pool::builtin_characters;

/// The single session: current puzzle plus cumulative stats.
#[derive(Debug, Default)]
pub struct GameSession {
    pub current: Option<Puzzle>,
    pub stats: SessionStats,
}

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<Vec<Character>>,
    pub session: Arc<RwLock<GameSession>>,
}

impl AppState {
    /// Build state from env: merge config characters into the built-in pool
    /// and start a fresh session.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let mut pool = builtin_characters();
        if let Some(cfg) = load_game_config_from_env() {
            for cc in cfg.characters {
                if cc.name.trim().is_empty() || cc.glyph.trim().is_empty() {
                    error!(target: "helperville_backend", name = %cc.name, "Skipping config character: empty name or glyph.");
                    continue;
                }
                // Built-ins win on name collisions.
                if pool.iter().any(|c| c.name == cc.name) {
                    continue;
                }
                pool.push(Character { name: cc.name, glyph: cc.glyph });
            }
        }
        info!(target: "helperville_backend", pool_size = pool.len(), "Character pool ready");

        Self {
            pool: Arc::new(pool),
            session: Arc::new(RwLock::new(GameSession::default())),
        }
    }

    /// Generate a puzzle at the session's current level and make it current.
    /// Returns the puzzle together with the current streak for the response.
    #[instrument(level = "info", skip(self))]
    pub async fn new_puzzle(&self) -> Result<(Puzzle, u32), PuzzleError> {
        let mut session = self.session.write().await;
        let level = session.stats.level;
        let puzzle = generator::generate(&self.pool, level, &mut thread_rng())?;
        info!(target: "puzzle", %level, id = %puzzle.id, operation = ?puzzle.operation, "Generated new puzzle");
        let streak = session.stats.consecutive_correct;
        session.current = Some(puzzle.clone());
        Ok((puzzle, streak))
    }

    /// Evaluate an answer against the current puzzle. The puzzle stays
    /// current afterwards; only a new generate or a reset supersedes it.
    #[instrument(level = "info", skip(self))]
    pub async fn submit_answer(&self, answer: i64) -> Result<(Outcome, Vec<KnowledgeCard>), PuzzleError> {
        let mut session = self.session.write().await;
        let puzzle = session.current.clone().ok_or(PuzzleError::NoActivePuzzle)?;
        let outcome = engine::apply_answer(&mut session.stats, &puzzle, answer);
        info!(
            target: "puzzle",
            id = %puzzle.id,
            correct = outcome.is_correct,
            level = outcome.level,
            streak = outcome.consecutive_correct,
            "Answer evaluated"
        );
        Ok((outcome, puzzle.knowledge_cards))
    }

    /// Read-only snapshot of the session stats.
    pub async fn stats(&self) -> SessionStats {
        self.session.read().await.stats.clone()
    }

    /// Reset stats to defaults and clear the current puzzle; returns the
    /// fresh stats.
    #[instrument(level = "info", skip(self))]
    pub async fn reset(&self) -> SessionStats {
        let mut session = self.session.write().await;
        *session = GameSession::default();
        info!(target: "puzzle", "Session reset");
        session.stats.clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
