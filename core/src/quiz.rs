//! Random selection for quiz rounds.

use rand::Rng;
use rand::seq::IndexedRandom;
use trivia_common::models::Question;

/// Draws one question uniformly from `pool`, or `None` when the pool is exhausted.
pub fn pick_question<'a, R: Rng + ?Sized>(pool: &'a [Question], rng: &mut R) -> Option<&'a Question> {
    pool.choose(rng)
}
