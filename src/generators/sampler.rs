// src/generators/sampler.rs
use log::warn;

use crate::models::WeightedOption;
use super::random::RandomSource;

/// Removes and returns one option from `pool`, chosen with probability
/// `weight / total_weight`.
///
/// The pool is a scratch copy owned by the caller for the duration of one
/// password; successive calls never see an entry twice. Returns `None` when
/// the pool is empty. A pool whose total weight is not positive falls back
/// to a uniform pick.
pub fn sample_weighted<R: RandomSource + ?Sized>(
    pool: &mut Vec<WeightedOption>,
    rng: &mut R,
) -> Option<WeightedOption> {
    if pool.is_empty() {
        return None;
    }

    let total: f64 = pool.iter().map(|opt| opt.weight).sum();
    if !(total.is_finite() && total > 0.0) {
        warn!(
            "Weighted pool of {} entries has unusable total weight {}, picking uniformly",
            pool.len(),
            total
        );
        let index = rng.next_index(pool.len());
        return Some(pool.remove(index));
    }

    let mut threshold = rng.next_uniform() * total;
    let mut selected = 0;
    for (index, opt) in pool.iter().enumerate() {
        threshold -= opt.weight;
        if threshold <= 0.0 {
            selected = index;
            break;
        }
    }

    Some(pool.remove(selected))
}
