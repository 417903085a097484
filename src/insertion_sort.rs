use crate::Sortable;

/// Insertion sort on the range `[a, b)`.
///
/// Only used on short ranges, where it beats everything else.
pub(crate) fn insertion_sort<D: Sortable + ?Sized>(data: &mut D, a: usize, b: usize) {
    for i in a + 1..b {
        // data[a..i] is sorted, sink data[i] into place
        let mut j = i;
        while j > a && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

// Bail out after this many displaced elements.
const MAX_STEPS: usize = 5;
// Below this length, don't bother shifting elements into place at all.
const SHORTEST_SHIFTING: usize = 50;

/// Insertion sort on `[a, b)` that gives up early.
///
/// Returns `true` iff the whole range ended up sorted. The caller uses this
/// to cheaply confirm a "probably already sorted" signal from the pivot
/// chooser: a sorted range needs zero displacements, an almost sorted one a
/// handful, and anything else makes us bail out after [`MAX_STEPS`].
pub(crate) fn partial_insertion_sort<D: Sortable + ?Sized>(
    data: &mut D,
    a: usize,
    b: usize,
) -> bool {
    let mut i = a + 1;
    for _ in 0..MAX_STEPS {
        // Find the next out-of-order pair.
        while i < b && !data.less(i, i - 1) {
            i += 1;
        }

        if i == b {
            return true;
        }

        if b - a < SHORTEST_SHIFTING {
            return false;
        }

        data.swap(i, i - 1);

        // Shift the smaller one to the left.
        if i - a >= 2 {
            let mut j = i - 1;
            while j > a && data.less(j, j - 1) {
                data.swap(j, j - 1);
                j -= 1;
            }
        }

        // Shift the greater one to the right.
        if b - i >= 2 {
            let mut j = i + 1;
            while j < b && data.less(j, j - 1) {
                data.swap(j, j - 1);
                j += 1;
            }
        }
    }
    false
}
