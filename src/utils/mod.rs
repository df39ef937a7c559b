pub mod lib_duckdb;
pub mod progress;
