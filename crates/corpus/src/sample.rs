use rand::seq::index;
use rand::Rng;

/// Uniform random subset of size `min(n, items.len())`, without
/// replacement. Result order is unspecified.
///
/// The single nondeterministic operation in the crate; callers inject the
/// random source so tests can pin a seed.
pub fn take_n_random<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], n: usize) -> Vec<T> {
    let amount = n.min(items.len());
    index::sample(rng, items.len(), amount)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}
