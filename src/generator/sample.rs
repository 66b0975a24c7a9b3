use crate::error::{Error, Result};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use std::collections::HashMap;

/// How many seeds of each kind a recommendation round uses
pub const SEED_COUNT: usize = 5;

/// Draw [`SEED_COUNT`] keys from a count mapping, sampling with replacement,
/// each key weighted by its occurrence count. Duplicates are permitted; a
/// single-entry mapping simply yields that entry every time.
///
/// An empty mapping (or one whose counts are all zero) means there is nothing
/// to seed a recommendation with, which is an [`Error::InsufficientSeeds`]
/// rather than a silently empty playlist. `kind` names the seed type in that
/// diagnostic.
pub fn weighted_pick(
    counts: &HashMap<String, u32>,
    kind: &'static str,
    rng: &mut impl Rng,
) -> Result<Vec<String>> {
    let (keys, weights): (Vec<&String>, Vec<u32>) =
        counts.iter().map(|(key, &count)| (key, count)).unzip();

    let index = WeightedIndex::new(weights).map_err(|_| Error::InsufficientSeeds(kind))?;

    Ok((0..SEED_COUNT)
        .map(|_| keys[index.sample(rng)].clone())
        .collect())
}
