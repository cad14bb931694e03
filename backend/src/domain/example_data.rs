//! Example data seeding orchestration.
//!
//! Converts deterministic example-data output into validated domain users and
//! writes them through the repository port, optionally clearing storage first.

use std::sync::Arc;

use example_data::{ExampleUserSeed, GenerationError, SeedDefinition, generate_example_users};
use thiserror::Error;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{FieldErrors, NewUser, UserDraft};

/// Result of applying example data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleDataSeedOutcome {
    /// RNG seed used for generation.
    pub seed: u64,
    /// Users removed before seeding.
    pub cleared: u64,
    /// Users generated and stored.
    pub inserted: usize,
}

/// Errors raised while preparing or applying example data.
#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    /// User generation failed.
    #[error("example data generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated user failed backend validation.
    #[error("generated user {index} failed validation: {errors:?}")]
    InvalidUser {
        /// Zero-based position in the generated list.
        index: usize,
        /// Rejected fields.
        errors: FieldErrors,
    },
    /// Persistence adapter failed while seeding.
    #[error("example data persistence error: {0}")]
    Persistence(#[from] UserPersistenceError),
}

/// Service that orchestrates example data seeding.
#[derive(Clone)]
pub struct ExampleDataSeeder {
    repository: Arc<dyn UserRepository>,
}

impl ExampleDataSeeder {
    /// Create a new seeder with the given persistence adapter.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Generate `seed_def` users and store them.
    ///
    /// When `reset` is set every stored user is removed first, so repeated
    /// starts with the same seed produce the same directory.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError`] if generation, validation, or
    /// persistence fails.
    pub async fn seed(
        &self,
        seed_def: SeedDefinition,
        reset: bool,
    ) -> Result<ExampleDataSeedOutcome, ExampleDataSeedingError> {
        let users = generate_example_users(&seed_def)?
            .into_iter()
            .enumerate()
            .map(|(index, seed_user)| {
                convert_seed_user(seed_user)
                    .map_err(|errors| ExampleDataSeedingError::InvalidUser { index, errors })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cleared = if reset {
            self.repository.clear().await?
        } else {
            0
        };

        let inserted = users.len();
        for user in users {
            self.repository.insert(user).await?;
        }

        Ok(ExampleDataSeedOutcome {
            seed: seed_def.seed(),
            cleared,
            inserted,
        })
    }
}

fn convert_seed_user(seed_user: ExampleUserSeed) -> Result<NewUser, FieldErrors> {
    let ExampleUserSeed {
        email,
        first_name,
        last_name,
        avatar,
    } = seed_user;
    UserDraft {
        id: None,
        email,
        first_name,
        last_name,
        avatar,
    }
    .validate_new()
}

#[cfg(test)]
mod tests {
    //! Unit tests for example data seeding orchestration.

    use super::*;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::{User, UserId};
    use rstest::rstest;

    fn echo_insert(repo: &mut MockUserRepository, times: usize) {
        let mut next = 0_i64;
        repo.expect_insert().times(times).returning(move |new_user| {
            next += 1;
            let id = UserId::new(next).map_err(|err| UserPersistenceError::query(err.to_string()))?;
            Ok(User::new(id, new_user.profile))
        });
    }

    #[rstest]
    #[tokio::test]
    async fn seed_clears_then_inserts_when_reset() {
        let mut repo = MockUserRepository::new();
        repo.expect_clear().times(1).return_once(|| Ok(5));
        echo_insert(&mut repo, 3);

        let seeder = ExampleDataSeeder::new(Arc::new(repo));
        let outcome = seeder
            .seed(SeedDefinition::new(42, 3), true)
            .await
            .expect("seed succeeds");

        assert_eq!(
            outcome,
            ExampleDataSeedOutcome {
                seed: 42,
                cleared: 5,
                inserted: 3,
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn seed_keeps_existing_users_without_reset() {
        let mut repo = MockUserRepository::new();
        repo.expect_clear().never();
        echo_insert(&mut repo, 2);

        let seeder = ExampleDataSeeder::new(Arc::new(repo));
        let outcome = seeder
            .seed(SeedDefinition::new(7, 2), false)
            .await
            .expect("seed succeeds");

        assert_eq!(outcome.cleared, 0);
        assert_eq!(outcome.inserted, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn persistence_failures_are_surfaced() {
        let mut repo = MockUserRepository::new();
        repo.expect_clear()
            .times(1)
            .return_once(|| Err(UserPersistenceError::connection("refused")));
        repo.expect_insert().never();

        let seeder = ExampleDataSeeder::new(Arc::new(repo));
        let error = seeder
            .seed(SeedDefinition::new(1, 1), true)
            .await
            .expect_err("clear fails");

        assert!(matches!(error, ExampleDataSeedingError::Persistence(_)));
    }

    #[rstest]
    fn convert_seed_user_rejects_invalid_email() {
        let seed_user = ExampleUserSeed {
            email: "not-an-email".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            avatar: "https://x.test/a.png".to_owned(),
        };

        let errors = convert_seed_user(seed_user).expect_err("invalid email");
        assert_eq!(errors.as_slice().len(), 1);
    }
}
