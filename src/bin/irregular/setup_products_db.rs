use std::error::Error;

use scope3::db::prod_db::ProdDb;

/// Rebuild the products database from scratch.  Drops any existing file.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let archive = ProdDb::product_emissions();
    archive.setup()?;

    Ok(())
}
