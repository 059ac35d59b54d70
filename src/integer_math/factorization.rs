// src/integer_math/factorization.rs

pub struct Factorizer;

impl Factorizer {
    /// Prime factorization of `n` by trial division, in non-decreasing
    /// order with multiplicity. `n <= 1` has no prime factors and yields
    /// an empty vector.
    pub fn factorize(n: u64) -> Vec<u64> {
        let mut remaining = n;
        let mut factors = Vec::new();
        let mut i: u64 = 2;
        while i * i <= remaining {
            if remaining % i != 0 {
                i += 1;
            } else {
                remaining /= i;
                factors.push(i);
            }
        }
        if remaining > 1 {
            factors.push(remaining);
        }
        factors
    }

    pub fn is_prime(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        let mut i: u64 = 2;
        while i * i <= n {
            if n % i == 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}
