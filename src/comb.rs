//! Combinatorics.

use num_bigint::BigUint;
use num_traits::One;

use crate::factorial::Factorial;

/// Binomial coefficient: the number of combinations obtained when sampling `k` items from a
/// set of `n` without replacement. `choose(n, 1)` is `n` for every `n`, including the
/// degenerate `choose(0, 1) == 0`.
pub fn choose(n: u64, k: u64, factorial: &impl Factorial) -> BigUint {
    if k == 1 {
        return BigUint::from(n);
    }
    if k == 0 || k == n {
        return BigUint::one();
    }
    assert!(n > k, "n ({n}) < k ({k})");
    // k! * (n - k)! always divides n! exactly
    factorial.get(n) / (factorial.get(k) * factorial.get(n - k))
}

/// Combinations with repetition: `choose(n + k - 1, k)`.
pub fn multichoose(n: u64, k: u64, factorial: &impl Factorial) -> BigUint {
    choose(n + k - 1, k, factorial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factorial::{Cache, Calculator};

    #[test]
    fn choose_literals() {
        let f = Cache::default();
        let cases: &[(u64, u64, u64)] = &[
            (1, 1, 1),
            (2, 1, 2),
            (3, 2, 3),
            (4, 2, 6),
            (4, 4, 1),
            (9, 5, 126),
            (10, 2, 45),
            (10, 3, 120),
            (12, 3, 220),
            (18, 9, 48_620),
            (30, 21, 14_307_150),
        ];
        for &(n, k, expected) in cases {
            assert_eq!(BigUint::from(expected), choose(n, k, &f), "{n} choose {k}");
        }
    }

    #[test]
    fn degenerate_single_sample() {
        let f = Cache::default();
        assert_eq!(BigUint::from(0u8), choose(0, 1, &f));
    }

    #[test]
    fn unit_edges() {
        let f = Cache::default();
        for n in 0..=20u64 {
            assert_eq!(BigUint::one(), choose(n, 0, &f), "{n} choose 0");
            assert_eq!(BigUint::one(), choose(n, n, &f), "{n} choose {n}");
        }
    }

    #[test]
    fn symmetry() {
        let f = Cache::default();
        for n in 1..=24u64 {
            for k in 0..=n {
                assert_eq!(
                    choose(n, n - k, &f),
                    choose(n, k, &f),
                    "{n} choose {k} vs {n} choose {}",
                    n - k
                );
            }
        }
    }

    #[test]
    fn pascals_identity() {
        let f = Cache::default();
        for n in 2..=30u64 {
            for k in 1..n {
                assert_eq!(
                    choose(n - 1, k - 1, &f) + choose(n - 1, k, &f),
                    choose(n, k, &f),
                    "{n} choose {k}"
                );
            }
        }
    }

    #[test]
    fn exact_beyond_u64() {
        let f = Cache::default();
        let central = choose(70, 35, &f);
        assert!(central > BigUint::from(u64::MAX));
        assert_eq!(choose(69, 34, &f) + choose(69, 35, &f), central);
        assert_eq!(
            "112186277816662845432".parse::<BigUint>().unwrap(),
            central
        );
    }

    #[test]
    fn multichoose_is_choose_with_repetition() {
        let f = Cache::default();
        assert_eq!(BigUint::from(6u8), multichoose(3, 2, &f));
        assert_eq!(BigUint::from(21u8), multichoose(6, 2, &f));
        assert_eq!(BigUint::one(), multichoose(1, 0, &f));
    }

    #[test]
    fn factorial_sources_agree() {
        assert_eq!(
            choose(30, 21, &Calculator::default()),
            choose(30, 21, &Cache::default())
        );
    }
}
