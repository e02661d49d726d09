//! Random input generation

use crate::algorithms::Element;
use rand::Rng;

/// `n` integers drawn uniformly from `1..=n`.
///
/// The value range grows with the length, so larger inputs also have more
/// distinct keys (and more decimal digits for radix sort).
pub fn rand_list<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Element> {
    if n == 0 {
        return Vec::new();
    }
    let high = Element::try_from(n).unwrap_or(Element::MAX);
    rand_list_in(n, 1, high, rng)
}

/// `n` integers drawn uniformly from `low..=high` (bounds may be given in
/// either order).
pub fn rand_list_in<R: Rng + ?Sized>(
    n: usize,
    low: Element,
    high: Element,
    rng: &mut R,
) -> Vec<Element> {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    (0..n).map(|_| rng.gen_range(low..=high)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let data = rand_list(1000, &mut rng);
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|&x| (1..=1000).contains(&x)));
    }

    #[test]
    fn test_empty() {
        let mut rng = StdRng::seed_from_u64(11);
        assert!(rand_list(0, &mut rng).is_empty());
    }

    #[test]
    fn test_swapped_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let data = rand_list_in(100, 10, -10, &mut rng);
        assert!(data.iter().all(|&x| (-10..=10).contains(&x)));
    }

    #[test]
    fn test_seed_reproducible() {
        let a = rand_list(64, &mut StdRng::seed_from_u64(42));
        let b = rand_list(64, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
