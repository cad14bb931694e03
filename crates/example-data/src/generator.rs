//! Deterministic user generation from seed definitions.
//!
//! The same seed value always produces identical output, so a demo database
//! reseeded on every start looks the same each time.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::seed::{ExampleUserSeed, SeedDefinition};
use crate::validation::{is_valid_name, slug};

/// Maximum number of attempts to generate a valid name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Largest number of users a single seed may request.
pub const MAX_USERS: usize = 10_000;

/// Domain used for every generated email address.
const EMAIL_DOMAIN: &str = "example.com";

/// Base URL for generated avatars; a per-user path segment keeps them distinct.
const AVATAR_BASE: &str = "https://picsum.photos/seed";

/// Generates example users from a seed definition.
///
/// Uses the seed's `seed` value to initialise a deterministic RNG. Every
/// generated user has:
///
/// - First and last names drawn from the English locale and checked with
///   [`is_valid_name`](crate::is_valid_name)
/// - A unique email of the form `first.lastN@example.com`
/// - An `https` avatar URL
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - The seed asks for more than [`MAX_USERS`] users
/// - Name generation fails after maximum retries
///
/// # Example
///
/// ```
/// use example_data::{SeedDefinition, generate_example_users};
///
/// let seed = SeedDefinition::new(42, 3);
/// let users = generate_example_users(&seed).expect("generated");
///
/// assert_eq!(users.len(), 3);
/// // Same seed produces identical users
/// let again = generate_example_users(&seed).expect("generated");
/// assert_eq!(users, again);
/// ```
pub fn generate_example_users(
    seed_def: &SeedDefinition,
) -> Result<Vec<ExampleUserSeed>, GenerationError> {
    if seed_def.user_count() > MAX_USERS {
        return Err(GenerationError::TooManyUsers {
            requested: seed_def.user_count(),
            max: MAX_USERS,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    (1..=seed_def.user_count())
        .map(|ordinal| generate_single_user(&mut rng, ordinal))
        .collect()
}

fn generate_single_user(
    rng: &mut ChaCha8Rng,
    ordinal: usize,
) -> Result<ExampleUserSeed, GenerationError> {
    let first_name = generate_name(rng, "first_name", |r| FirstName(EN).fake_with_rng(r))?;
    let last_name = generate_name(rng, "last_name", |r| LastName(EN).fake_with_rng(r))?;

    let first_slug = slug(&first_name);
    let last_slug = slug(&last_name);
    let email = format!("{first_slug}.{last_slug}{ordinal}@{EMAIL_DOMAIN}");
    let avatar = format!("{AVATAR_BASE}/{first_slug}-{last_slug}-{ordinal}/128");

    Ok(ExampleUserSeed {
        email,
        first_name,
        last_name,
        avatar,
    })
}

/// Draws names until one passes validation.
fn generate_name(
    rng: &mut ChaCha8Rng,
    field: &'static str,
    mut draw: impl FnMut(&mut ChaCha8Rng) -> String,
) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let candidate = draw(rng);
        if is_valid_name(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::NameGenerationFailed {
        field,
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}
