use std::sync::Mutex;

use num_bigint::BigUint;
use num_traits::One;

pub trait Factorial {
    fn get(&self, n: u64) -> BigUint;
}

/// Recomputes the running product on every call.
#[derive(Default)]
pub struct Calculator;

impl Factorial for Calculator {
    fn get(&self, n: u64) -> BigUint {
        let mut product = BigUint::one();
        for i in 2..=n {
            product *= i;
        }
        product
    }
}

/// Memoises factorials as they are first requested. Entries are append-only:
/// `entries[i] == i!` for every populated index, with `0!` and `1!` both 1, so a
/// populated value is never rewritten no matter how calls interleave.
#[derive(Default)]
pub struct Cache {
    entries: Mutex<Vec<BigUint>>,
}

impl Factorial for Cache {
    fn get(&self, n: u64) -> BigUint {
        let mut entries = self.entries.lock().expect("factorial cache poisoned");
        if entries.is_empty() {
            entries.push(BigUint::one());
        }
        while entries.len() as u64 <= n {
            let next = &entries[entries.len() - 1] * entries.len() as u64;
            entries.push(next);
        }
        entries[n as usize].clone()
    }
}
