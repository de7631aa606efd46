pub type Element = usize;

/// The repeat-cycle length x = n / (m + 1), rounded down.
pub fn cycle_length(n: usize, m: usize) -> usize {
    n / (m + 1)
}

pub fn build_sequence(n: usize, m: usize) -> Vec<Element> {
    if n == 0 {
        return vec![];
    }
    let x = cycle_length(n, m);
    assert!(
        x > 0,
        "cannot build a cyclic sequence: n = {} is smaller than m + 1 = {}",
        n,
        m + 1
    );
    (0..n).map(|i| i % x).collect()
}
