// src/integer_math/count_dictionary.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exponent-form view of a factor sequence: maps each prime factor to
/// its multiplicity, ordered by factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountDictionary(BTreeMap<u64, u32>);

impl CountDictionary {
    pub fn new() -> Self {
        CountDictionary(BTreeMap::new())
    }

    pub fn add(&mut self, key: u64) {
        self.add_safe(key, 1);
    }

    fn add_safe(&mut self, key: u64, value: u32) {
        let entry = self.0.entry(key).or_insert(0);
        *entry += value;
    }

    pub fn combine(&mut self, other: &CountDictionary) {
        for (&key, &value) in &other.0 {
            self.add_safe(key, value);
        }
    }

    pub fn from_factors(factors: &[u64]) -> Self {
        let mut dict = CountDictionary::new();
        for &factor in factors {
            dict.add(factor);
        }
        dict
    }

    /// Flattens back to a non-decreasing factor sequence with
    /// multiplicity; inverse of `from_factors`.
    pub fn to_vec(&self) -> Vec<u64> {
        let mut factors = Vec::new();
        for (&key, &value) in &self.0 {
            for _ in 0..value {
                factors.push(key);
            }
        }
        factors
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn format_as_factorization(&self) -> String {
        let factors: Vec<String> = self
            .0
            .iter()
            .map(|(key, value)| {
                if *value == 1 {
                    format!("{}", key)
                } else {
                    format!("{}^{}", key, value)
                }
            })
            .collect();
        factors.join(" * ")
    }
}

impl Default for CountDictionary {
    fn default() -> Self {
        Self::new()
    }
}
