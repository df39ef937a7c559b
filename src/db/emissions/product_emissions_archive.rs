use duckdb::{params, Connection};
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fs;

use crate::db::emissions::coefficients::{parse_coefficients, CoefficientKey};
use crate::utils::progress::Progress;

/// Fixed-shape record stored in the `emissions` column of a product row,
/// wrapped in a one-element json array.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionRecord {
    // upstream data contract: a fixed literal, not a real hash
    pub emission_hash: String,
    pub unit: String,
    pub emissions: f64,
    pub start_usage_amount: u32,
}

impl EmissionRecord {
    pub fn new(coefficient: f64) -> EmissionRecord {
        EmissionRecord {
            emission_hash: "emissionHash".to_string(),
            unit: "kgCO2e".to_string(),
            emissions: coefficient,
            start_usage_amount: 0,
        }
    }
}

#[derive(Clone)]
pub struct ProductEmissionsArchive {
    pub base_dir: String,
    pub duckdb_path: String,
}

impl ProductEmissionsArchive {
    /// Return the coefficients filename.  Does not check if the file exists.
    pub fn filename(&self) -> String {
        self.base_dir.to_owned() + "/coefficients.json"
    }

    pub fn setup(&self) -> Result<(), Box<dyn Error>> {
        info!("initializing {} archive ...", "products");
        if fs::exists(&self.duckdb_path)? {
            fs::remove_file(&self.duckdb_path)?;
        }
        let conn = Connection::open(self.duckdb_path.clone())?;
        conn.execute_batch(
            r"
    BEGIN;
    CREATE TABLE IF NOT EXISTS products (
        sku VARCHAR NOT NULL,
        region VARCHAR NOT NULL,
        name VARCHAR,
        emissions VARCHAR,
    );
    CREATE UNIQUE INDEX idx ON products (sku, region);
    COMMENT ON TABLE products IS 'Product catalog, one row per (sku, region).  The emissions column holds a json array of emission records.';
    COMMIT;
        ",
        )?;
        Ok(())
    }

    /// Read the coefficients file into (key, coefficient) pairs, fully
    /// materialized, in file order.
    pub fn read_coefficients(&self) -> Result<Vec<(String, f64)>, Box<dyn Error>> {
        info!("reading coefficients from {} ...", self.filename());
        let buffer = fs::read_to_string(self.filename())?;
        Ok(parse_coefficients(&buffer)?)
    }

    /// Overwrite the emissions column for one (sku, region) product.  Return
    /// the number of rows changed.  A key that matches no row changes nothing
    /// and is not an error.
    pub fn update_product_emissions(
        &self,
        conn: &Connection,
        sku_id: &str,
        region: &str,
        coefficient: f64,
    ) -> Result<usize, Box<dyn Error>> {
        let emission_data = serde_json::to_string(&vec![EmissionRecord::new(coefficient)])?;
        let n = conn.execute(
            r"
    UPDATE products
    SET emissions = ?
    WHERE sku = ? AND region = ?
            ",
            params![emission_data, sku_id, region],
        )?;
        Ok(n)
    }

    /// Apply one update per coefficient entry, sequentially, in the order of
    /// the `coefficients` slice.  The first failed update aborts the run;
    /// updates already applied stay applied.  A key that doesn't split into
    /// prefix_sku_region is reported and skipped.
    pub fn patch_products(
        &self,
        conn: &Connection,
        coefficients: &[(String, f64)],
    ) -> Result<(), Box<dyn Error>> {
        info!("updating emissions for {} products ...", coefficients.len());
        let mut progress = Progress::new(coefficients.len());
        for (key, coefficient) in coefficients {
            match key.parse::<CoefficientKey>() {
                Ok(k) => {
                    self.update_product_emissions(conn, &k.sku_id, &k.region, *coefficient)?;
                }
                Err(e) => warn!("skipping entry {}: {}", key, e),
            }
            progress.tick();
        }
        progress.finish();

        info!("done");
        Ok(())
    }
}
