//! Difficulty policy: value ranges, operation mix and labels per level.
//!
//! Everything in this module is a pure function of the level; the only
//! randomness in the game lives in the generator, which consumes these
//! bounds and probabilities.

/// Levels never climb past this.
pub const LEVEL_CAP: u32 = 20;

/// Consecutive correct answers required for a level-up.
pub const STREAK_TARGET: u32 = 3;

/// Inclusive bounds for a single operand's hidden value at `level`.
/// Levels above the cap fall into the hardest bucket.
pub fn range_for_level(level: u32) -> (i64, i64) {
  match level {
    0..=3 => (2, 5),
    4..=6 => (3, 8),
    7..=9 => (5, 12),
    10..=12 => (8, 15),
    13..=15 => (10, 20),
    _ => (12, 25),
  }
}

/// Chance that a generation at `level` produces a mixed (A + B - C) puzzle.
/// Levels 1-7 are addition only; subtraction gets more likely from level 15.
pub fn subtraction_probability(level: u32) -> f64 {
  if level < 8 {
    0.0
  } else if level < 15 {
    0.4
  } else {
    0.6
  }
}

/// Human-readable label for the level's bucket, shown next to the puzzle.
pub fn level_description(level: u32) -> String {
  let (min, max) = range_for_level(level);
  let name = match level {
    0..=3 => "Very Easy Addition",
    4..=6 => "Easy Addition",
    7..=9 => "Addition Practice",
    10..=12 => "Addition & Subtraction",
    13..=15 => "Mixed Operations",
    _ => "Expert Challenge",
  };
  format!("⭐ Level {} - {} ({}-{})", level, name, min, max)
}
