//! Floyd-Rivest selection.
//!
//! Before partitioning a large range, the algorithm estimates from order
//! statistics a small window around the target and recurses into it first,
//! so the eventual pivot is already close to the k-th smallest. On top of
//! that sits a partition whose pivot is deliberately the larger of two
//! boundary values, which keeps runs of duplicates from stalling the scans.

use crate::{SliceBy, Sortable};

// Range sizes above this are narrowed from order statistics estimates
// before partitioning.
const NARROWING_THRESHOLD: usize = 600;

/// Rearranges `data` so that its first `k` items are the `k` smallest and
/// the item at `k - 1` is the k-th smallest, as a full ascending sort would
/// place it.
///
/// `k` is 1-based; `k == 0` or `k > data.len()` is a no-op. Typically makes
/// fewer comparisons than quickselect on uniform-ish data. Allocates
/// nothing; the narrowing recursion is O(log log n) deep in expectation.
pub fn select<D: Sortable + ?Sized>(data: &mut D, k: usize) {
    let n = data.len();
    if k < 1 || k > n {
        return;
    }
    floyd_rivest(data, 0, n - 1, k - 1);
}

/// [`select`] for slices in their natural order.
pub fn select_ordered<T: Ord>(data: &mut [T], k: usize) {
    select(data, k);
}

/// [`select`] with a caller-supplied strict less-than predicate.
pub fn select_by<T, F>(data: &mut [T], k: usize, less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    select(&mut SliceBy { slice: data, less }, k);
}

/// Core loop on the closed interval `[left, right]` with absolute target
/// `t`. Invariant: the k-th smallest element always lies within the
/// interval.
pub(crate) fn floyd_rivest<D: Sortable + ?Sized>(
    data: &mut D,
    mut left: usize,
    mut right: usize,
    t: usize,
) {
    while right > left {
        let size = right - left;

        if size > NARROWING_THRESHOLD {
            // Tighten a window around the target first. The estimates come
            // from the order statistics of a uniform sample; they can be off
            // for skewed data, but the outer loop stays correct either way.
            let n = size + 1;
            let i = t - left + 1;
            let nf = n as f64;

            let z = nf.ln();
            let s = 0.5 * (2.0 * z / 3.0).exp();
            let mut sd = 0.5 * (z * s * (nf - s) / nf).sqrt();
            if i < n / 2 {
                sd = -sd;
            }

            let new_left = left.max((t as f64 - i as f64 * s / nf + sd) as usize);
            let new_right = right.min((t as f64 + (n - i) as f64 * s / nf + sd) as usize);

            floyd_rivest(data, new_left, new_right, t);
        }

        // Move the target estimate to the front, then park the larger of
        // the two boundary values where the scans will use it as the pivot.
        // Anything equal to the smaller boundary is then strictly less than
        // the pivot, so the scans below cannot stall on duplicates.
        data.swap(left, t);
        let swapped = data.less(left, right);
        let pivot = if swapped {
            data.swap(left, right);
            left
        } else {
            right
        };

        let (mut i, mut j) = (left, right);
        while i < j {
            // The items at i and j are classified but not yet placed;
            // swapping before the scans move guarantees progress even when
            // many items equal the pivot.
            data.swap(i, j);
            i += 1;
            j -= 1;

            while data.less(i, pivot) {
                i += 1;
            }
            while data.less(pivot, j) {
                j -= 1;
            }
        }

        // Put the pivot value on the boundary between the strictly-smaller
        // region and the rest. Where it currently sits depends on which
        // boundary won above.
        if swapped {
            data.swap(left, j);
        } else {
            j += 1;
            data.swap(right, j);
        }

        // j now splits the interval; keep only the side holding the target.
        if j <= t {
            left = j + 1;
        }
        if t <= j {
            // j == 0 forces t == 0 here, and left has just moved past it,
            // so the saturation only ever feeds a final failed loop check.
            right = j.saturating_sub(1);
        }
    }
}
