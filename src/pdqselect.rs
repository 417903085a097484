//! Pattern-defeating quickselect.
//!
//! The driver is the quickselect analogue of pdqsort: median-of-three /
//! approximate ninther pivots with a monotonicity hint, a cheap probe for
//! already sorted ranges, an equal-prefix pass for runs of duplicates,
//! deterministic pattern breaking when partitions come out lopsided, and a
//! heap-select fallback once too many bad pivots were chosen, which caps the
//! worst case at O(n log n).

use crate::heap_select::heap_select;
use crate::insertion_sort::{insertion_sort, partial_insertion_sort};
use crate::partition::{break_patterns, partition, partition_equal, reverse_range};
use crate::pivot::{choose_pivot, Hint};
use crate::{SliceBy, Sortable};

// Ranges up to this length are finished with a single insertion sort.
const MAX_INSERTION: usize = 12;

/// Rearranges `data` so that its first `k` items are the `k` smallest and
/// the item at `k - 1` is the k-th smallest, as a full ascending sort would
/// place it.
///
/// `k` is 1-based; `k == 0` or `k > data.len()` is a no-op. Runs in O(n)
/// expected time and O(n log n) worst case, allocating nothing.
pub fn select<D: Sortable + ?Sized>(data: &mut D, k: usize) {
    let n = data.len();
    if k < 1 || k > n {
        return;
    }
    let limit = (usize::BITS - n.leading_zeros()) as usize;
    pdqselect(data, 0, n, k - 1, limit);
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

/// Core loop. `t` is the absolute 0-based target, `a <= t < b`; `limit` is
/// the number of imbalanced partitions tolerated before falling back to
/// heap-select.
pub(crate) fn pdqselect<D: Sortable + ?Sized>(
    data: &mut D,
    mut a: usize,
    mut b: usize,
    t: usize,
    mut limit: usize,
) {
    // Selecting the minimum or maximum is a single scan.
    if t == a {
        let mut min = a;
        for i in a + 1..b {
            if data.less(i, min) {
                min = i;
            }
        }
        data.swap(a, min);
        return;
    }
    if t == b - 1 {
        let mut max = a;
        for i in a + 1..b {
            if data.less(max, i) {
                max = i;
            }
        }
        data.swap(b - 1, max);
        return;
    }

    let mut was_balanced = true;
    let mut was_partitioned = true;

    loop {
        let len = b - a;

        if len <= MAX_INSERTION {
            insertion_sort(data, a, b);
            return;
        }

        // Too many bad pivots: the heap fallback guarantees the worst case.
        if limit == 0 {
            heap_select(data, a, b, t);
            return;
        }

        // The last partition was lopsided, so the pivot samples may be
        // adversarial. Stir the range before sampling again.
        if !was_balanced {
            break_patterns(data, a, b);
            limit -= 1;
        }

        let (mut pivot, mut hint) = choose_pivot(data, a, b);
        if hint == Hint::Decreasing {
            reverse_range(data, a, b);
            // The pivot was pivot - a positions after the start of the
            // range; after reversing it is as many before the end.
            pivot = (b - 1) - (pivot - a);
            hint = Hint::Increasing;
        }

        // Likely already sorted; confirm cheaply and stop early.
        if was_balanced && was_partitioned && hint == Hint::Increasing {
            if partial_insertion_sort(data, a, b) {
                return;
            }
        }

        // If the item right before the range is not less than the pivot, the
        // range starts with a run of items equal to the pivot (everything
        // below a is <= everything in [a, b)). Peel the run off in one pass.
        if a > 0 && !data.less(a - 1, pivot) {
            let mid = partition_equal(data, a, b, pivot);
            if t < mid {
                // The target sits inside the equal run, already in place.
                return;
            }
            a = mid;
            continue;
        }

        let (mid, already_partitioned) = partition(data, a, b, pivot);
        was_partitioned = already_partitioned;

        let (left_len, right_len) = (mid - a, b - mid);
        let threshold = len / 8;

        if t < mid {
            was_balanced = left_len >= threshold;
            b = mid;
        } else if t > mid {
            was_balanced = right_len >= threshold;
            a = mid + 1;
        } else {
            // The pivot landed exactly on the target.
            return;
        }
    }
}
