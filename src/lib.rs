// src/lib.rs

pub mod config;
pub mod integer_math;
pub mod table;
