// src/integer_math/mod.rs

pub mod common_factors;
pub mod count_dictionary;
pub mod factorization;
pub mod gcd;
