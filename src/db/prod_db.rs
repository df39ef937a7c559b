use crate::db::emissions::product_emissions_archive::ProductEmissionsArchive;

pub struct ProdDb {}

impl ProdDb {
    pub fn product_emissions() -> ProductEmissionsArchive {
        ProductEmissionsArchive {
            // the coefficients file ships with the repo
            base_dir: "data/emissions".to_string(),
            duckdb_path: "/home/adrian/Downloads/Archive/DuckDB/products.duckdb".to_string(),
        }
    }
}
