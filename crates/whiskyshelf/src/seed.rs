//! Seed data inserted into an empty store at startup.

use whiskyshelf_core::storage::{Result, WhiskyRepository};
use whiskyshelf_core::whisky::Whisky;

/// The two records every fresh store starts with.
pub const SEED_WHISKIES: [(&str, &str); 2] = [
    ("Bowmore 15 Years Laimrig", "Scotland, Islay"),
    ("Talisker 57° North", "Scotland, Island"),
];

/// Inserts the seed records when the store is empty.
///
/// A store that already holds at least one record is left untouched, so
/// restarts against a durable backend never duplicate the seeds. Returns
/// whether seeding happened.
pub async fn seed_if_empty(repo: &dyn WhiskyRepository) -> Result<bool> {
    if !repo.list_all().await?.is_empty() {
        return Ok(false);
    }

    for (name, origin) in SEED_WHISKIES {
        let whisky = repo.create(Whisky::new(name, origin)).await?;
        tracing::debug!(id = ?whisky.id, name = %whisky.name, "Seeded whisky");
    }

    Ok(true)
}
