use crate::Sortable;

/// Partition `[a, b)` around the item at `pivot`.
///
/// Returns `(mid, already_partitioned)`. Afterwards `data[a..mid]` is
/// strictly less than the pivot value, `data[mid]` is the pivot value, and
/// `data[mid+1..b]` is greater or equal.
///
/// `already_partitioned` is true iff the two initial scans crossed without
/// finding a single out-of-order pair, i.e. the range was already
/// partitioned around the pivot when we got it. The caller feeds this into
/// its already-sorted probe.
pub(crate) fn partition<D: Sortable + ?Sized>(
    data: &mut D,
    a: usize,
    b: usize,
    pivot: usize,
) -> (usize, bool) {
    // Park the pivot value at the front; position a is excluded from the
    // scans and restored at the end.
    data.swap(a, pivot);
    let (mut i, mut j) = (a + 1, b - 1);

    while i <= j && data.less(i, a) {
        i += 1;
    }
    while i <= j && !data.less(j, a) {
        j -= 1;
    }

    if i > j {
        data.swap(j, a);
        return (j, true);
    }

    data.swap(i, j);
    i += 1;
    j -= 1;

    loop {
        while i <= j && data.less(i, a) {
            i += 1;
        }
        while i <= j && !data.less(j, a) {
            j -= 1;
        }
        if i > j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }

    data.swap(j, a);
    (j, false)
}

/// Partition `[a, b)` into items equal to the value at `pivot` followed by
/// items strictly greater.
///
/// Returns the end of the equal prefix. The caller only invokes this when it
/// knows nothing in the range is smaller than the pivot value, which makes
/// runs of duplicates collapse in one pass instead of degrading quickselect
/// to quadratic behaviour.
pub(crate) fn partition_equal<D: Sortable + ?Sized>(
    data: &mut D,
    a: usize,
    b: usize,
    pivot: usize,
) -> usize {
    data.swap(a, pivot);
    let (mut i, mut j) = (a + 1, b - 1);

    loop {
        // data[i] == pivot value; nothing here is less than it.
        while i <= j && !data.less(a, i) {
            i += 1;
        }
        while i <= j && data.less(a, j) {
            j -= 1;
        }
        if i > j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
    i
}

/// Scatter a handful of items so the next pivot samples see different data.
///
/// Swaps three widely spaced pairs. The multiset is unchanged, but any
/// adversarial pattern that kept feeding the chooser bad samples is broken
/// up.
pub(crate) fn break_patterns<D: Sortable + ?Sized>(data: &mut D, a: usize, b: usize) {
    let len = b - a;
    debug_assert!(len > 4);

    let mid = a + len / 2;
    let step = len / 4;
    data.swap(a, a + step);
    data.swap(mid, mid + step);
    data.swap(b - 1, b - 1 - step);
}

/// Reverse `[a, b)` in place.
pub(crate) fn reverse_range<D: Sortable + ?Sized>(data: &mut D, a: usize, b: usize) {
    let (mut i, mut j) = (a, b - 1);
    while i < j {
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}
