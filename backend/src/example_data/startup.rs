//! Startup seeding orchestration.

use std::sync::Arc;

use example_data::SeedDefinition;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::UserRepository;
use crate::domain::{ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError};
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed generation, validation, or persistence failed.
    #[error("example data seeding error: {0}")]
    Seeding(#[from] ExampleDataSeedingError),
}

/// Apply example data on startup when enabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use users_api::example_data::{ExampleDataSettings, seed_example_data_on_startup};
/// use users_api::outbound::memory::InMemoryUserRepository;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: Some(true),
///     seed: Some(42),
///     count: Some(12),
///     reset: Some(true),
/// };
/// let outcome = seed_example_data_on_startup(&settings, Arc::new(InMemoryUserRepository::new())).await?;
/// assert_eq!(outcome.map(|o| o.inserted), Some(12));
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup(
    settings: &ExampleDataSettings,
    repository: Arc<dyn UserRepository>,
) -> Result<Option<ExampleDataSeedOutcome>, StartupSeedingError> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let definition = SeedDefinition::new(settings.seed(), settings.user_count());
    let seeder = ExampleDataSeeder::new(repository);
    let outcome = seeder
        .seed(definition, settings.resets_storage())
        .await?;

    info!(
        seed = outcome.seed,
        cleared = outcome.cleared,
        inserted = outcome.inserted,
        "example data seeding applied"
    );
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    //! Startup seeding against the in-memory adapter.

    use super::*;
    use crate::outbound::memory::InMemoryUserRepository;
    use pagination::PageRequest;
    use rstest::rstest;

    fn settings(enabled: bool, seed: u64, count: usize) -> ExampleDataSettings {
        ExampleDataSettings {
            enabled: Some(enabled),
            seed: Some(seed),
            count: Some(count),
            reset: None,
        }
    }

    async fn emails(repository: &InMemoryUserRepository) -> Vec<String> {
        repository
            .list_page(PageRequest::default())
            .await
            .expect("list")
            .items()
            .iter()
            .map(|user| user.email().as_ref().to_owned())
            .collect()
    }

    #[rstest]
    #[tokio::test]
    async fn disabled_seeding_leaves_storage_untouched() {
        let repository = Arc::new(InMemoryUserRepository::new());

        let outcome = seed_example_data_on_startup(&settings(false, 1, 5), repository.clone())
            .await
            .expect("seeding skipped");

        assert!(outcome.is_none());
        assert!(emails(&repository).await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn reseeding_with_same_seed_reproduces_directory() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let config = settings(true, 9, 6);

        seed_example_data_on_startup(&config, repository.clone())
            .await
            .expect("first seed");
        let first = emails(&repository).await;
        let outcome = seed_example_data_on_startup(&config, repository.clone())
            .await
            .expect("second seed")
            .expect("seeding enabled");

        assert_eq!(outcome.cleared, 6);
        assert_eq!(emails(&repository).await, first);
        assert_eq!(first.len(), 6);
    }
}
