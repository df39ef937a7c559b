pub mod emissions;
pub mod prod_db;
