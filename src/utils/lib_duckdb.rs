use std::error::Error;
use std::thread;
use std::time::Duration;

use duckdb::DuckdbConnectionManager;
use r2d2::Pool;

/// Use this function to get a connection pool to a DuckDB instance.  Another
/// process may hold the write lock, so keep trying with exponential backoff.
/// Suggested `max_attempts = 8`, `initial_wait = Duration::from_millis(25)`.
pub fn pool_with_retry(
    duckdb_path: &str,
    max_attempts: u32,
    initial_wait: Duration,
) -> Result<Pool<DuckdbConnectionManager>, Box<dyn Error>> {
    let mut attempts = 0;
    let mut wait_duration = initial_wait;

    loop {
        let manager = DuckdbConnectionManager::file(duckdb_path)?;
        match Pool::builder().max_size(1).build(manager) {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                attempts += 1;
                if attempts >= max_attempts {
                    return Err(Box::new(e));
                }
                thread::sleep(wait_duration);
                wait_duration *= 2;
            }
        }
    }
}
