// Indices within the heap (relative to the range start `a`)
//           0
//     1            2
//  3     4      5     6
//
// parent_index = (child_index - 1) / 2
// left_child = parent_index * 2 + 1
// right_child = left_child + 1

use crate::Sortable;

/// Selection on `[a, b)` through a bounded max-heap.
///
/// `t` is the absolute target index, `a <= t < b`. A max-heap is built over
/// the first `t - a + 1` positions; every remaining item that is smaller
/// than the heap root displaces it. When the scan is done the heap holds the
/// `t - a + 1` smallest items of the range with the largest of them at the
/// root, which is then swapped to its final position `t`.
///
/// Runs in O((b - a) log (t - a)) worst case, which is what makes it a safe
/// fallback when quickselect keeps picking bad pivots.
pub(crate) fn heap_select<D: Sortable + ?Sized>(data: &mut D, a: usize, b: usize, t: usize) {
    debug_assert!(a <= t && t < b);

    let size = b - a;
    let hi = t - a + 1;

    // Heapify the first hi items, bottom up.
    for i in (0..hi / 2).rev() {
        sift_down(data, i, hi, a);
    }

    // Anything smaller than the current maximum belongs in the heap.
    for i in hi..size {
        if data.less(a + i, a) {
            data.swap(a + i, a);
            sift_down(data, 0, hi, a);
        }
    }

    // The root is the (t - a + 1)-th smallest of the range.
    data.swap(a, t);
}

/// Restore the max-heap property for the tree rooted at `root`, within a
/// heap of `hi` items based at absolute index `base`.
fn sift_down<D: Sortable + ?Sized>(data: &mut D, mut root: usize, hi: usize, base: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= hi {
            return;
        }
        if child + 1 < hi && data.less(base + child, base + child + 1) {
            child += 1;
        }
        if !data.less(base + root, base + child) {
            return;
        }
        data.swap(base + root, base + child);
        root = child;
    }
}
