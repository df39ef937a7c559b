use std::{error::Error, path::Path, process, time::Duration};

use clap::Parser;
use log::{error, info};
use scope3::{db::prod_db::ProdDb, utils::lib_duckdb::pool_with_retry};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Environment name, e.g., test, prod
    #[arg(short, long, default_value = "prod")]
    env: String,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    dotenvy::from_path(Path::new(format!(".env/{}.env", args.env).as_str()))?;

    let archive = ProdDb::product_emissions();
    let coefficients = archive.read_coefficients()?;

    let pool = pool_with_retry(&archive.duckdb_path, 8, Duration::from_millis(25))?;
    let conn = pool.get()?;

    archive.patch_products(&conn, &coefficients)
}

/// One-time job.  Patch the emissions column of the products table from the
/// bundled coefficients file.
fn main() {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting: loading data into DB");
    match run(&args) {
        Ok(()) => {
            info!("Completed: loading data into DB");
            process::exit(0);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
