use rand::Rng;

/// Source of uniformly distributed indices for [`shuffle`].
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..=upper`.
    fn index_up_to(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.gen_range(0..=upper)
    }
}

/// In-place Fisher–Yates shuffle.
///
/// Walks `i` from the last index down to 1 and swaps `items[i]` with
/// `items[j]`, `j` drawn from `0..=i`. Slices of length 0 or 1 are left
/// untouched and no index is drawn for them.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index_up_to(i);
        items.swap(i, j);
    }
}
