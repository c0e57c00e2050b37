// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Merge sort and inversion counting.
//!
//! An inversion is a pair `i < j` with `a[i] > a[j]`. Merging two sorted
//! halves exposes them in bulk: whenever the right head is taken ahead of the
//! left head, it inverts with every element still waiting on the left.

/// Merge two sorted slices. Ties take the left element first, so the merge
/// is stable.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    return merge_counting(left, right).0;
}

fn merge_counting<T: Ord + Clone>(left: &[T], right: &[T]) -> (Vec<T>, u64) {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut inversions = 0;
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i].clone());
            i += 1;
        } else {
            inversions += (left.len() - i) as u64;
            out.push(right[j].clone());
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    return (out, inversions);
}

/// Stable merge sort.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    return count_inversions(items).0;
}

/// Sort `items` and count its inversions in O(n log n).
pub fn count_inversions<T: Ord + Clone>(items: &[T]) -> (Vec<T>, u64) {
    if items.len() < 2 {
        return (items.to_vec(), 0);
    }
    let (left, right) = items.split_at(items.len() / 2);
    let (left, left_inversions) = count_inversions(left);
    let (right, right_inversions) = count_inversions(right);
    let (merged, split_inversions) = merge_counting(&left, &right);
    return (merged, left_inversions + right_inversions + split_inversions);
}

/// Count inversions by checking every pair.
pub fn naive_inversions<T: Ord + Clone>(items: &[T]) -> (Vec<T>, u64) {
    let mut inversions = 0;
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if items[i] > items[j] {
                inversions += 1;
            }
        }
    }
    let mut sorted = items.to_vec();
    sorted.sort();
    return (sorted, inversions);
}
