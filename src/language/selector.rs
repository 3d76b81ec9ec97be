use rand::seq::SliceRandom;
use rand::Rng;

/// Pick `count` words from `pool` without replacement.
///
/// Sampling is by position, so a pool holding the same word twice can yield
/// it twice. A pool smaller than `count` is returned whole, shuffled.
pub fn sample_words<R: Rng + ?Sized>(pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
    pool.choose_multiple(rng, count).cloned().collect()
}
