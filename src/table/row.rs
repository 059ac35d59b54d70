// src/table/row.rs

use serde::{Deserialize, Serialize};

use crate::integer_math::common_factors::CommonFactors;
use crate::integer_math::factorization::Factorizer;
use crate::integer_math::gcd::GCD;

/// One result row per input pair. Rows are independent value types;
/// they carry no cross-row state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdRow {
    pub a: u64,
    pub b: u64,
    pub gcd: u64,
    pub factorization_a: Vec<u64>,
    pub factorization_b: Vec<u64>,
    pub common_factors: Vec<u64>,
}

impl GcdRow {
    pub fn compute(a: u64, b: u64) -> Self {
        let factorization_a = Factorizer::factorize(a);
        let factorization_b = Factorizer::factorize(b);
        let common_factors = CommonFactors::find(&factorization_a, &factorization_b);
        GcdRow {
            a,
            b,
            gcd: GCD::find_gcd_pair(a, b),
            factorization_a,
            factorization_b,
            common_factors,
        }
    }
}
