//! Comparison sorts over input positions
//!
//! Both sorts order the positions `0..len` and only ever read or swap
//! positions inside that range. A comparator that is not a total order
//! therefore still yields a permutation, never a panic. The last-value rules
//! are not transitive across value types, so every series sort goes through
//! here rather than the std slice sorts.

use std::cmp::Ordering;

/// Stable bottom-up merge sort of `0..len`.
///
/// Equal positions keep their relative order.
pub(crate) fn merge_sort<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut positions: Vec<usize> = (0..len).collect();
    let mut buffer = positions.clone();
    let mut width = 1usize;

    while width < len {
        let mut start = 0;
        while start < len {
            let mid = start.saturating_add(width).min(len);
            let end = mid.saturating_add(width).min(len);
            merge(
                &positions[start..mid],
                &positions[mid..end],
                &mut buffer[start..end],
                &mut compare,
            );
            start = end;
        }
        std::mem::swap(&mut positions, &mut buffer);
        width = width.saturating_mul(2);
    }
    positions
}

/// Merge two runs into `out`; ties take from `left`.
fn merge<F>(left: &[usize], right: &[usize], out: &mut [usize], compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left =
            j == right.len() || (i < left.len() && compare(right[j], left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

/// In-place heap sort of `0..len`. Equal positions may be reordered.
pub(crate) fn heap_sort<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut positions: Vec<usize> = (0..len).collect();
    for node in (0..len / 2).rev() {
        sift_down(&mut positions, node, len, &mut compare);
    }
    for end in (1..len).rev() {
        positions.swap(0, end);
        sift_down(&mut positions, 0, end, &mut compare);
    }
    positions
}

fn sift_down<F>(positions: &mut [usize], mut node: usize, end: usize, compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && compare(positions[child], positions[child + 1]) == Ordering::Less {
            child += 1;
        }
        if compare(positions[node], positions[child]) != Ordering::Less {
            break;
        }
        positions.swap(node, child);
        node = child;
    }
}

/// Rearrange `items` so that `items[k]` becomes the element previously at
/// `positions[k]`. `positions` must be a permutation of `0..items.len()`.
pub(crate) fn apply_positions<T>(items: &mut [T], mut positions: Vec<usize>) {
    for start in 0..items.len() {
        if positions[start] == start {
            continue;
        }
        let mut current = start;
        loop {
            let source = positions[current];
            positions[current] = current;
            if source == start {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}
