pub mod coefficients;
pub mod product_emissions_archive;
