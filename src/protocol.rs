//! Public JSON DTOs for the puzzle API (serde ready).
//! Wire names are camelCase to match the frontend's API client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{AttemptRecord, Character, KnowledgeCard, Op, OperationType, Puzzle, SessionStats, TeachingEquation};
use crate::engine::Outcome;
use crate::policy::level_description;

/// Pre-submission view of a puzzle. Carries everything the player needs to
/// reason the answer out, and nothing that gives it away: no `correctAnswer`
/// and no knowledge cards.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleOut {
    pub puzzle_id: String,
    pub level: u32,
    pub level_description: String,
    pub operation: OperationType,
    pub teaching_equations: Vec<TeachingEquation>,
    pub question_characters: Vec<Character>,
    pub question_operators: Vec<Op>,
    pub question: String,
    pub consecutive_correct: u32,
}

pub fn puzzle_to_out(p: &Puzzle, consecutive_correct: u32) -> PuzzleOut {
    PuzzleOut {
        puzzle_id: p.id.clone(),
        level: p.level,
        level_description: level_description(p.level),
        operation: p.operation,
        teaching_equations: p.teaching_equations.clone(),
        question_characters: p.question_characters.clone(),
        question_operators: p.question_operators.clone(),
        question: p.question.clone(),
        consecutive_correct,
    }
}

/// Submission body. `answer` stays a raw JSON value so a missing or
/// non-numeric field maps to our own 400 instead of a deserializer error.
#[derive(Debug, Deserialize)]
pub struct SubmitIn {
    #[serde(default)]
    pub answer: Option<Value>,
}

impl SubmitIn {
    /// The submitted answer as an integer, accepting integral floats
    /// (`12.0`) but nothing else.
    pub fn answer_as_int(&self) -> Option<i64> {
        match self.answer.as_ref()? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Some(i);
                }
                let f = n.as_f64()?;
                if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                    Some(f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Verdict plus updated stats, returned after every submission. The hidden
/// values are revealed here via the knowledge cards.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOut {
    pub correct: bool,
    pub correct_answer: i64,
    pub knowledge_cards: Vec<KnowledgeCard>,
    pub total_attempts: u64,
    pub correct_answers: u64,
    pub accuracy: u32,
    pub level: u32,
    pub level_description: String,
    pub consecutive_correct: u32,
    pub leveled_up: bool,
}

pub fn outcome_to_out(o: &Outcome, knowledge_cards: Vec<KnowledgeCard>) -> SubmitOut {
    SubmitOut {
        correct: o.is_correct,
        correct_answer: o.correct_answer,
        knowledge_cards,
        total_attempts: o.total_attempts,
        correct_answers: o.correct_answers,
        accuracy: o.accuracy,
        level: o.level,
        level_description: level_description(o.level),
        consecutive_correct: o.consecutive_correct,
        leveled_up: o.leveled_up,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOut {
    pub total_attempts: u64,
    pub correct_answers: u64,
    pub wrong_answers: u64,
    pub accuracy: u32,
    pub level: u32,
    pub level_description: String,
    pub consecutive_correct: u32,
}

pub fn stats_to_out(s: &SessionStats) -> StatsOut {
    StatsOut {
        total_attempts: s.total_attempts,
        correct_answers: s.correct_answers,
        wrong_answers: s.wrong_answers(),
        accuracy: s.accuracy(),
        level: s.level,
        level_description: level_description(s.level),
        consecutive_correct: s.consecutive_correct,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetOut {
    pub message: String,
    pub level: u32,
    pub total_attempts: u64,
    pub correct_answers: u64,
    pub consecutive_correct: u32,
    pub attempts: Vec<AttemptRecord>,
}

pub fn reset_to_out(s: &SessionStats) -> ResetOut {
    ResetOut {
        message: "Stats reset successfully".into(),
        level: s.level,
        total_attempts: s.total_attempts,
        correct_answers: s.correct_answers,
        consecutive_correct: s.consecutive_correct,
        attempts: s.attempts.clone(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryOut {
    pub total_attempts: u64,
    pub correct_answers: u64,
    pub level: u32,
    pub attempts: Vec<AttemptRecord>,
}

pub fn history_to_out(s: &SessionStats) -> HistoryOut {
    HistoryOut {
        total_attempts: s.total_attempts,
        correct_answers: s.correct_answers,
        level: s.level,
        attempts: s.attempts.clone(),
    }
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
