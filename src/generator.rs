//! Puzzle generation: pick three characters, assign hidden values from the
//! level's range, build teaching equations and the question.
//!
//! Randomness comes from a caller-supplied [`Rng`] so tests can drive
//! generation with a seeded `StdRng` and assert exact invariants.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{Character, KnowledgeCard, Op, OperationType, Puzzle, TeachingEquation};
use crate::policy;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The character pool cannot seat three distinct operands. This is a
    /// configuration problem, not a runtime one; we fail the request fast.
    #[error("character pool has {0} entries, need at least 3")]
    PoolTooSmall(usize),
}

/// Generate one puzzle at `level` from `pool`.
///
/// Addition: each teaching equation shows three copies of one character
/// summing to `3·value`; the question is `A + B + C = ?`.
///
/// Mixed: the B equation shows only two copies and is marked as the
/// subtracted operand; the question is `A + B - C = ?` and a negative raw
/// result is normalized to its absolute value so the published answer is
/// never below zero.
pub fn generate<R: Rng + ?Sized>(
    pool: &[Character],
    level: u32,
    rng: &mut R,
) -> Result<Puzzle, GenerateError> {
    if pool.len() < 3 {
        return Err(GenerateError::PoolTooSmall(pool.len()));
    }

    // Reshuffle the pool each call; the first three entries become A, B, C.
    let mut shuffled: Vec<&Character> = pool.iter().collect();
    shuffled.shuffle(rng);
    let a = shuffled[0].clone();
    let b = shuffled[1].clone();
    let c = shuffled[2].clone();

    // Hidden values are drawn independently; duplicates are fine.
    let (min, max) = policy::range_for_level(level);
    let value_a = rng.gen_range(min..=max);
    let value_b = rng.gen_range(min..=max);
    let value_c = rng.gen_range(min..=max);

    let operation = if rng.gen_bool(policy::subtraction_probability(level)) {
        OperationType::Mixed
    } else {
        OperationType::Addition
    };

    let (teaching_equations, question_operators, raw_answer) = match operation {
        OperationType::Addition => (
            vec![
                teaching_equation(&a, 3, Op::Add, value_a),
                teaching_equation(&b, 3, Op::Add, value_b),
                teaching_equation(&c, 3, Op::Add, value_c),
            ],
            vec![Op::Add, Op::Add],
            value_a + value_b + value_c,
        ),
        OperationType::Mixed => (
            vec![
                teaching_equation(&a, 3, Op::Add, value_a),
                teaching_equation(&b, 2, Op::Sub, value_b),
                teaching_equation(&c, 3, Op::Add, value_c),
            ],
            vec![Op::Add, Op::Sub],
            value_a + value_b - value_c,
        ),
    };

    // Published answers are never negative, even when the mixed draw
    // evaluates below zero.
    let correct_answer = raw_answer.abs();

    let question = format!(
        "{} {} {} {} {} = ?",
        a.glyph,
        question_operators[0].symbol(),
        b.glyph,
        question_operators[1].symbol(),
        c.glyph,
    );

    let knowledge_cards = vec![
        KnowledgeCard { character: a.clone(), value: value_a },
        KnowledgeCard { character: b.clone(), value: value_b },
        KnowledgeCard { character: c.clone(), value: value_c },
    ];

    let puzzle = Puzzle {
        id: Uuid::new_v4().to_string(),
        level,
        operation,
        teaching_equations,
        question_characters: vec![a, b, c],
        question_operators,
        question,
        knowledge_cards,
        correct_answer,
    };
    debug!(target: "puzzle", %level, id = %puzzle.id, operation = ?puzzle.operation, "Puzzle generated");
    Ok(puzzle)
}

fn teaching_equation(character: &Character, count: usize, operator: Op, value: i64) -> TeachingEquation {
    let total = value * count as i64;
    let glyphs: Vec<&str> = std::iter::repeat(character.glyph.as_str()).take(count).collect();
    TeachingEquation {
        characters: vec![character.clone(); count],
        operator,
        total,
        display: format!("{} = {}", glyphs.join(" + "), total),
    }
}
