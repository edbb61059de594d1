//! Domain models used by the backend: characters, equations, puzzles, and session stats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community helper used as an operand's visual label (e.g. Doctor 👨‍⚕️).
/// Pure data, drawn from a fixed pool loaded at process start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
  pub name: String,
  pub glyph: String,
}

/// Arithmetic operator appearing in teaching equations and questions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
  #[serde(rename = "+")]
  Add,
  #[serde(rename = "-")]
  Sub,
}

impl Op {
  pub fn symbol(self) -> char {
    match self {
      Op::Add => '+',
      Op::Sub => '-',
    }
  }
}

/// How the question combines its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
  Addition,
  Mixed,
}

/// A fully-revealed example equation letting the player deduce one operand's
/// hidden value (e.g. "👨‍⚕️ + 👨‍⚕️ + 👨‍⚕️ = 15" ⇒ doctor = 5).
///
/// `operator` marks the operand's role in the question; the shown `total` is
/// always the additive total of the listed copies, so a `-` equation still
/// reads "B + B = 2·value".
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingEquation {
  pub characters: Vec<Character>,
  pub operator: Op,
  pub total: i64,
  pub display: String,
}

/// Post-submission reveal of one character's hidden value.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeCard {
  pub character: Character,
  pub value: i64,
}

/// One full game round. `correct_answer` stays server-side until an answer
/// is submitted; exactly one puzzle is current at a time process-wide.
#[derive(Clone, Debug)]
pub struct Puzzle {
  pub id: String,
  pub level: u32,
  pub operation: OperationType,
  pub teaching_equations: Vec<TeachingEquation>,
  pub question_characters: Vec<Character>,
  pub question_operators: Vec<Op>,
  pub question: String,
  pub knowledge_cards: Vec<KnowledgeCard>,
  pub correct_answer: i64,
}

/// One submitted answer, kept for the history endpoint. `level` is the level
/// the puzzle was generated at, not the level after any level-up.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
  pub answer: i64,
  pub correct: bool,
  pub expected: i64,
  pub level: u32,
  pub timestamp: DateTime<Utc>,
}

/// Process-wide accumulator, mutated only by the progression engine.
#[derive(Clone, Debug)]
pub struct SessionStats {
  pub level: u32,
  pub total_attempts: u64,
  pub correct_answers: u64,
  pub consecutive_correct: u32,
  pub attempts: Vec<AttemptRecord>,
}

impl Default for SessionStats {
  fn default() -> Self {
    Self {
      level: 1,
      total_attempts: 0,
      correct_answers: 0,
      consecutive_correct: 0,
      attempts: Vec::new(),
    }
  }
}

impl SessionStats {
  pub fn wrong_answers(&self) -> u64 {
    self.total_attempts - self.correct_answers
  }

  /// Rounded percentage of correct answers; 0 before the first attempt.
  pub fn accuracy(&self) -> u32 {
    if self.total_attempts == 0 {
      0
    } else {
      ((self.correct_answers as f64 / self.total_attempts as f64) * 100.0).round() as u32
    }
  }
}
