use std::cmp::Ordering;

/// Below this length the selected entries are ordered by insertion sort.
const INSERTION_SORT_LIMIT: usize = 32;

/// Partial top-k selection.
/// - Keeps the `k` entries that rank first under `cmp` (`Less` ranks higher)
/// - Ties under `cmp` are broken by original position (earlier wins)
/// - Returns them in rank order
///
/// Complexity: O(n) selection + O(k log k) ordering of the survivors.
/// The rest of the input is never sorted.
#[inline]
pub fn select_top_k<T, I, F>(entries: I, k: usize, mut cmp: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    if k == 0 {
        return Vec::new();
    }

    // (original position, entry)
    let mut ranked: Vec<(usize, T)> = entries.into_iter().enumerate().collect();
    let mut order = |a: &(usize, T), b: &(usize, T)| cmp(&a.1, &b.1).then_with(|| a.0.cmp(&b.0));

    if ranked.len() > k {
        // k-1 番目より前は全て上位 (順序は未確定)
        ranked.select_nth_unstable_by(k - 1, &mut order);
        ranked.truncate(k);
    }

    if ranked.len() <= INSERTION_SORT_LIMIT {
        insertion_sort_by(&mut ranked, &mut order);
    } else {
        // positions are unique, so unstable is deterministic here
        ranked.sort_unstable_by(&mut order);
    }

    ranked.into_iter().map(|(_, entry)| entry).collect()
}

/// `select_top_k` over `(index, weight)` pairs, descending by weight.
#[inline]
pub fn top_k_desc<N, I>(entries: I, k: usize) -> Vec<(usize, N)>
where
    N: Copy + Into<f64>,
    I: IntoIterator<Item = (usize, N)>,
{
    select_top_k(entries, k, |a, b| {
        let (a, b): (f64, f64) = (a.1.into(), b.1.into());
        b.total_cmp(&a)
    })
}

/// Tiny insertion sort for small n.
#[inline(always)]
fn insertion_sort_by<T, F>(items: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j], &items[j - 1]) == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}
