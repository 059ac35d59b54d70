// src/integer_math/gcd.rs

pub struct GCD;

impl GCD {
    pub fn find_lcm(numbers: &[u64]) -> u64 {
        numbers.iter().fold(1, |acc, &x| Self::find_lcm_pair(acc, x))
    }

    /// Least common multiple; `lcm(0, n) == 0` by convention.
    pub fn find_lcm_pair(left: u64, right: u64) -> u64 {
        if left == 0 || right == 0 {
            return 0;
        }
        (left / Self::find_gcd_pair(left, right)) * right
    }

    pub fn find_gcd(numbers: &[u64]) -> u64 {
        numbers.iter().fold(0, |acc, &x| Self::find_gcd_pair(acc, x))
    }

    /// Iterative Euclidean reduction: `(a, b) -> (b, a % b)` until `b == 0`.
    /// `find_gcd_pair(a, 0) == a`, so `find_gcd_pair(0, 0) == 0`.
    pub fn find_gcd_pair(left: u64, right: u64) -> u64 {
        let (mut a, mut b) = (left, right);
        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }

    pub fn are_coprime(numbers: &[u64]) -> bool {
        Self::find_gcd(numbers) == 1
    }
}
