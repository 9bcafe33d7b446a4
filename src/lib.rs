//! An exact combinatorial engine for dice-pool probabilities. Counts the ordered rolls of
//! _N_ dice with _S_ sides that sum to (or beyond) a target, and derives the percentage
//! chance of a pool meeting a difficulty threshold. All counting is performed in
//! arbitrary-precision integers; the only narrowing happens at the outcome-space boundary.

pub mod chance;
pub mod comb;
pub mod factorial;
pub mod print;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
