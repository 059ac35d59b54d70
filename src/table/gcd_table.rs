// src/table/gcd_table.rs

use std::io::Write;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::table::row::GcdRow;

/// Ordered batch result: one `GcdRow` per input pair, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdTable {
    rows: Vec<GcdRow>,
}

impl GcdTable {
    /// Builds the table sequentially, preserving input order. An empty
    /// input yields an empty table.
    pub fn build(pairs: &[(u64, u64)]) -> Self {
        debug!("Building gcd table for {} pairs", pairs.len());
        let rows = pairs.iter().map(|&(a, b)| GcdRow::compute(a, b)).collect();
        GcdTable { rows }
    }

    /// Parallel variant of `build`. Rows have no cross-row dependency,
    /// so they are computed in any order and collected back into input
    /// order; the result is identical to `build`.
    pub fn build_parallel(pairs: &[(u64, u64)]) -> Self {
        debug!("Building gcd table in parallel for {} pairs", pairs.len());
        let rows = pairs
            .par_iter()
            .map(|&(a, b)| GcdRow::compute(a, b))
            .collect();
        GcdTable { rows }
    }

    pub fn rows(&self) -> &[GcdRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.rows)
    }

    /// Writes the table as CSV. Factor sequences are rendered as
    /// `x`-joined products (e.g. `2x2x2x7`) so each row stays flat.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([
            "a",
            "b",
            "gcd",
            "factorization_a",
            "factorization_b",
            "common_factors",
        ])?;
        for row in &self.rows {
            wtr.write_record([
                row.a.to_string(),
                row.b.to_string(),
                row.gcd.to_string(),
                join_factors(&row.factorization_a),
                join_factors(&row.factorization_b),
                join_factors(&row.common_factors),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn join_factors(factors: &[u64]) -> String {
    factors
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("x")
}
