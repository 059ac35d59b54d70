// src/integer_math/common_factors.rs

pub struct CommonFactors;

impl CommonFactors {
    /// Multiset intersection of two factor sequences as a two-pointer
    /// merge. Both inputs must already be sorted ascending; this is an
    /// unchecked precondition guaranteed by `Factorizer::factorize`.
    pub fn find(factors_a: &[u64], factors_b: &[u64]) -> Vec<u64> {
        let mut common = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < factors_a.len() && j < factors_b.len() {
            if factors_a[i] < factors_b[j] {
                i += 1;
            } else if factors_a[i] > factors_b[j] {
                j += 1;
            } else {
                common.push(factors_a[i]);
                i += 1;
                j += 1;
            }
        }
        common
    }
}
