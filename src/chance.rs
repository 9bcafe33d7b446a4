//! Exact counts and odds for the sum of a pool of like dice.

use num_bigint::{BigInt, BigUint};
use num_traits::{Pow, ToPrimitive, Zero};
use thiserror::Error;

use crate::comb::choose;
use crate::factorial::Factorial;

/// The outcome space does not fit the fixed-width boundary type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{s}^{n} is too large for a u64")]
pub struct OverflowError {
    pub s: u64,
    pub n: u64,
}

/// Counts the ordered rolls of `n` dice with `s` sides summing to exactly `p`.
///
/// Inclusion-exclusion form of stars-and-bars with an upper bound on each die: term `i`
/// weighs the arrangements in which `i` chosen dice have been pushed past `s`, so the
/// series alternately subtracts and restores the overcounted rolls. The running total is
/// signed because partial sums may dip below zero before the series settles.
pub fn count_rolls_with_sum(n: u64, s: u64, p: u64, factorial: &impl Factorial) -> BigUint {
    assert!(
        (n..=s * n).contains(&p),
        "sum {p} is not reachable with {n}d{s}"
    );
    let k_max = (p - n) / s;
    let mut total = BigInt::zero();
    for i in 0..=k_max {
        let term = choose(n, i, factorial) * choose(p - s * i - 1, p - s * i - n, factorial);
        // (-1)^i collapses to an add or a subtract
        if i % 2 == 0 {
            total += BigInt::from(term);
        } else {
            total -= BigInt::from(term);
        }
    }
    match total.to_biguint() {
        Some(total) => total,
        None => unreachable!("inclusion-exclusion settled negative for {n}d{s} sum {p}"),
    }
}

/// Counts the rolls of `n` dice with `s` sides whose sum is at least `target`. A target
/// below the minimum possible sum counts the whole outcome space; one beyond `s * n`
/// counts nothing.
pub fn count_rolls_at_least(n: u64, s: u64, target: u64, factorial: &impl Factorial) -> BigUint {
    let mut total = BigUint::zero();
    for p in target.max(n)..=s * n {
        total += count_rolls_with_sum(n, s, p, factorial);
    }
    total
}

/// The size of the outcome space for `n` dice with `s` sides: `s`^`n` as a `u64`. This is
/// the engine's only narrowing boundary; everything upstream stays arbitrary-precision.
pub fn outcomes(s: u64, n: u64) -> Result<u64, OverflowError> {
    Pow::pow(BigUint::from(s), n)
        .to_u64()
        .ok_or(OverflowError { s, n })
}

/// Percentage chance, in `[0, 100]`, that the sum of `n` dice with `s` sides is at least
/// `target`, rounded to two decimal places, half away from zero. A target no greater than
/// the minimum possible sum is trivially certain.
pub fn chance_at_least(
    n: u64,
    s: u64,
    target: u64,
    factorial: &impl Factorial,
) -> Result<f64, OverflowError> {
    if target <= n {
        return Ok(100.0);
    }
    let total = outcomes(s, n)?;
    // the matching count never exceeds s^n, so this narrowing cannot fail once total fits
    let matching = count_rolls_at_least(n, s, target, factorial)
        .to_u64()
        .ok_or(OverflowError { s, n })?;
    Ok((matching as f64 / total as f64 * 10000.0).round() / 100.0)
}
