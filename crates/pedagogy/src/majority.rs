// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Majority element by pair elimination.
//!
//! A majority element occurs more than `n / 2` times. Pairing up neighbours
//! and keeping one copy of every matching pair halves the input and keeps a
//! majority a majority: if `x` fills more than half the slots, it must win
//! more matching pairs than every other value combined.
//!
//! Odd lengths leave one element unpaired. It becomes the tie-breaker: when
//! the survivors split exactly in half, the unpaired element tips the
//! balance, so it is carried down the recursion and checked on the way back.
//! Every candidate is confirmed by counting, so the result is never wrong,
//! only possibly absent.

use std::collections::HashMap;
use std::hash::Hash;

fn occurrences<T: Eq>(items: &[T], target: &T) -> usize {
    return items.iter().filter(|item| *item == target).count();
}

/// The majority element of `items`, or `tie_breaker` when it fills exactly
/// half of `items`, or `None`.
///
/// O(n) per level on a halving input, O(n) overall.
pub fn majority_element<T: Eq + Clone>(items: &[T], tie_breaker: Option<T>) -> Option<T> {
    if items.is_empty() {
        return tie_breaker;
    }
    let tie_breaker = if items.len() % 2 == 1 {
        items.last().cloned()
    } else {
        tie_breaker
    };

    let survivors: Vec<T> = items
        .chunks_exact(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0].clone())
        .collect();
    let candidate = majority_element(&survivors, tie_breaker.clone())?;

    let count = occurrences(items, &candidate);
    if 2 * count > items.len() {
        return Some(candidate);
    }
    if 2 * count == items.len() && tie_breaker.as_ref() == Some(&candidate) {
        return Some(candidate);
    }
    return None;
}

/// True when some value occurs in more than half of `items`.
pub fn exists_majority<T: Eq + Clone>(items: &[T]) -> bool {
    return majority_element(items, None).is_some();
}

/// Counting baseline: tally every value, then look for one above half.
pub fn majority_baseline<T: Eq + Hash + Clone>(items: &[T]) -> Option<T> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_default() += 1;
    }
    return counts
        .into_iter()
        .find(|&(_, count)| 2 * count > items.len())
        .map(|(item, _)| item.clone());
}

pub fn exists_majority_baseline<T: Eq + Hash + Clone>(items: &[T]) -> bool {
    return majority_baseline(items).is_some();
}
