//! Startup seeding from a JSON file.
//!
//! The seed file holds a JSON array of restaurant payloads in the same shape
//! `POST /restaurants` accepts. It is only applied to an empty store, so
//! restarting against a populated database never duplicates documents. The
//! whole file is written in one batch: a failed seed leaves the store empty
//! and the next startup tries again.

use std::path::Path;

use anyhow::Context;
use restaurants_persistence::core::RestaurantStorage;
use restaurants_persistence::types::Restaurant;
use serde_json::Value;
use tracing::{info, warn};

/// Parses a seed document into validated restaurants.
///
/// Every entry is validated before anything is written; the first invalid
/// entry aborts with its index.
pub fn parse_seed(contents: &str) -> anyhow::Result<Vec<Restaurant>> {
    let value: Value = serde_json::from_str(contents).context("seed file is not valid JSON")?;

    let Value::Array(entries) = value else {
        anyhow::bail!("seed file must contain a JSON array of restaurants");
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            Restaurant::from_value(entry)
                .with_context(|| format!("invalid restaurant at seed entry {}", index))
        })
        .collect()
}

/// Loads `path` into `storage` if the store is empty.
///
/// Returns the number of restaurants inserted.
pub async fn seed_if_empty<S>(storage: &S, path: &Path) -> anyhow::Result<usize>
where
    S: RestaurantStorage + ?Sized,
{
    let existing = storage.count().await?;
    if existing > 0 {
        warn!(
            path = %path.display(),
            existing,
            "Store already holds restaurants, skipping seed file"
        );
        return Ok(0);
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let restaurants = parse_seed(&contents)?;

    let total = storage.create_batch(restaurants).await?.len();

    info!(path = %path.display(), count = total, "Seeded restaurants");
    Ok(total)
}
