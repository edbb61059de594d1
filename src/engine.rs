//! Progression engine: correctness, counters, streak and the level-up rule.

use chrono::Utc;
use tracing::info;

use crate::domain::{AttemptRecord, Puzzle, SessionStats};
use crate::policy::{LEVEL_CAP, STREAK_TARGET};

/// Result of applying one submitted answer to the session.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub is_correct: bool,
    pub correct_answer: i64,
    pub total_attempts: u64,
    pub correct_answers: u64,
    pub accuracy: u32,
    pub level: u32,
    pub consecutive_correct: u32,
    pub leveled_up: bool,
}

/// Compare `answer` against the current puzzle and fold the result into the
/// session stats.
///
/// Three consecutive correct answers raise the level by one (capped at
/// [`LEVEL_CAP`]) and consume the streak. The streak also resets when the
/// target is hit at the cap, even though the level cannot move there. Any
/// wrong answer resets the streak.
pub fn apply_answer(stats: &mut SessionStats, puzzle: &Puzzle, answer: i64) -> Outcome {
    let level_before = stats.level;
    let is_correct = answer == puzzle.correct_answer;

    stats.total_attempts += 1;
    if is_correct {
        stats.correct_answers += 1;
        stats.consecutive_correct += 1;
        if stats.consecutive_correct >= STREAK_TARGET {
            if stats.level < LEVEL_CAP {
                stats.level += 1;
            }
            stats.consecutive_correct = 0;
        }
    } else {
        stats.consecutive_correct = 0;
    }

    // The record carries the puzzle's level, not the possibly-raised one.
    stats.attempts.push(AttemptRecord {
        answer,
        correct: is_correct,
        expected: puzzle.correct_answer,
        level: puzzle.level,
        timestamp: Utc::now(),
    });

    let leveled_up = is_correct && stats.level > level_before;
    if leveled_up {
        info!(target: "puzzle", level = stats.level, "Level up");
    }

    Outcome {
        is_correct,
        correct_answer: puzzle.correct_answer,
        total_attempts: stats.total_attempts,
        correct_answers: stats.correct_answers,
        accuracy: stats.accuracy(),
        level: stats.level,
        consecutive_correct: stats.consecutive_correct,
        leveled_up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Character, Op, OperationType};

    fn puzzle_at(level: u32, correct_answer: i64) -> Puzzle {
        let character = |name: &str, glyph: &str| Character {
            name: name.into(),
            glyph: glyph.into(),
        };
        Puzzle {
            id: "test-puzzle".into(),
            level,
            operation: OperationType::Addition,
            teaching_equations: vec![],
            question_characters: vec![
                character("Doctor", "👨‍⚕️"),
                character("Cook", "👨‍🍳"),
                character("Police", "👮"),
            ],
            question_operators: vec![Op::Add, Op::Add],
            question: "👨‍⚕️ + 👨‍🍳 + 👮 = ?".into(),
            knowledge_cards: vec![],
            correct_answer,
        }
    }

    #[test]
    fn correct_answer_updates_counters() {
        let mut stats = SessionStats::default();
        let puzzle = puzzle_at(1, 12);
        let outcome = apply_answer(&mut stats, &puzzle, 12);
        assert!(outcome.is_correct);
        assert_eq!(outcome.total_attempts, 1);
        assert_eq!(outcome.correct_answers, 1);
        assert_eq!(outcome.accuracy, 100);
        assert_eq!(outcome.consecutive_correct, 1);
        assert!(!outcome.leveled_up);
    }

    #[test]
    fn wrong_answer_resets_streak() {
        let mut stats = SessionStats::default();
        let puzzle = puzzle_at(1, 12);
        apply_answer(&mut stats, &puzzle, 12);
        apply_answer(&mut stats, &puzzle, 12);
        let outcome = apply_answer(&mut stats, &puzzle, 99);
        assert!(!outcome.is_correct);
        assert_eq!(outcome.consecutive_correct, 0);
        assert_eq!(outcome.level, 1);
        assert_eq!(outcome.accuracy, 67); // 2/3 rounded
    }

    #[test]
    fn three_in_a_row_levels_up_and_consumes_streak() {
        let mut stats = SessionStats::default();
        let puzzle = puzzle_at(1, 12);
        assert!(!apply_answer(&mut stats, &puzzle, 12).leveled_up);
        assert!(!apply_answer(&mut stats, &puzzle, 12).leveled_up);
        let third = apply_answer(&mut stats, &puzzle, 12);
        assert!(third.leveled_up);
        assert_eq!(third.level, 2);
        assert_eq!(third.consecutive_correct, 0);
    }

    #[test]
    fn fourth_correct_answer_does_not_report_level_up_again() {
        let mut stats = SessionStats::default();
        let puzzle = puzzle_at(1, 12);
        for _ in 0..3 {
            apply_answer(&mut stats, &puzzle, 12);
        }
        // Same puzzle is still current; a further correct answer starts a
        // fresh streak at the new level without claiming another level-up.
        let fourth = apply_answer(&mut stats, &puzzle, 12);
        assert!(fourth.is_correct);
        assert!(!fourth.leveled_up);
        assert_eq!(fourth.level, 2);
        assert_eq!(fourth.consecutive_correct, 1);
    }

    #[test]
    fn level_is_capped_but_streak_still_resets() {
        let mut stats = SessionStats { level: LEVEL_CAP, ..Default::default() };
        let puzzle = puzzle_at(LEVEL_CAP, 30);
        for _ in 0..2 {
            apply_answer(&mut stats, &puzzle, 30);
        }
        let third = apply_answer(&mut stats, &puzzle, 30);
        assert_eq!(third.level, LEVEL_CAP);
        assert!(!third.leveled_up);
        assert_eq!(third.consecutive_correct, 0);
    }

    #[test]
    fn attempt_record_keeps_the_puzzle_level() {
        let mut stats = SessionStats { level: 4, consecutive_correct: 2, ..Default::default() };
        let puzzle = puzzle_at(4, 18);
        let outcome = apply_answer(&mut stats, &puzzle, 18);
        assert!(outcome.leveled_up);
        assert_eq!(outcome.level, 5);
        let record = stats.attempts.last().unwrap();
        assert_eq!(record.level, 4);
        assert_eq!(record.expected, 18);
        assert!(record.correct);
    }

    #[test]
    fn accuracy_is_zero_before_any_attempt() {
        let stats = SessionStats::default();
        assert_eq!(stats.accuracy(), 0);
        assert_eq!(stats.wrong_answers(), 0);
    }
}
