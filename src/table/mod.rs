// src/table/mod.rs

pub mod gcd_table;
pub mod row;

// Re-export main types for convenience
pub use gcd_table::GcdTable;
pub use row::GcdRow;
