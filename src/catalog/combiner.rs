//! Multi-type combination policy

use crate::types::{PokemonId, TypeSet};
use std::collections::{HashMap, HashSet};

/// Minimum number of requested types a pokemon must have once three or more
/// types are requested
const MIN_SHARED_TYPES: usize = 2;

/// Combine the resolved sets of `type_count` requested types.
///
/// - 0 types: nothing.
/// - 1 type: that set.
/// - 2 types: the intersection, in the order of the first set.
/// - 3+ types: every id found in at least two of the sets, in order of first
///   appearance across the sets. Few pokemon have more than two types, so a
///   strict intersection of three or more would almost always be empty.
///
/// Every id appears at most once in the result.
pub fn combine(type_sets: &[TypeSet], type_count: usize) -> Vec<PokemonId> {
    match type_count {
        0 => Vec::new(),
        1 => dedup(type_sets.first().map(Vec::as_slice).unwrap_or_default()),
        2 => match type_sets {
            [first, second, ..] => intersect(first, second),
            _ => Vec::new(),
        },
        _ => at_least(type_sets, MIN_SHARED_TYPES.min(type_count)),
    }
}

fn dedup(ids: &[PokemonId]) -> Vec<PokemonId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

fn intersect(first: &[PokemonId], second: &[PokemonId]) -> Vec<PokemonId> {
    let second: HashSet<PokemonId> = second.iter().copied().collect();
    let shared: Vec<PokemonId> = first
        .iter()
        .copied()
        .filter(|id| second.contains(id))
        .collect();
    dedup(&shared)
}

/// Ids occurring at least `min_count` times across all sets
fn at_least(type_sets: &[TypeSet], min_count: usize) -> Vec<PokemonId> {
    let mut counts: HashMap<PokemonId, usize> = HashMap::new();
    let mut first_seen = Vec::new();

    for id in type_sets.iter().flatten().copied() {
        let count = counts.entry(id).or_insert(0);
        if *count == 0 {
            first_seen.push(id);
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .filter(|id| counts[id] >= min_count)
        .collect()
}
