//! Seed definitions and generated user records.
//!
//! These types are independent of backend domain types to avoid circular
//! dependencies; the backend converts them at the point of use.

use serde::{Deserialize, Serialize};

/// Parameters controlling one deterministic generation run.
///
/// # Example
///
/// ```
/// use example_data::SeedDefinition;
///
/// let seed = SeedDefinition::new(42, 20);
/// assert_eq!(seed.seed(), 42);
/// assert_eq!(seed.user_count(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDefinition {
    seed: u64,
    user_count: usize,
}

impl SeedDefinition {
    /// Create a seed definition.
    #[must_use]
    pub const fn new(seed: u64, user_count: usize) -> Self {
        Self { seed, user_count }
    }

    /// RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of users to generate.
    #[must_use]
    pub const fn user_count(&self) -> usize {
        self.user_count
    }
}

/// A generated example user record.
///
/// Field names match the user JSON served by the backend so a seed can be
/// posted to `/api/users` unchanged.
///
/// # Example
///
/// ```
/// use example_data::ExampleUserSeed;
///
/// let user = ExampleUserSeed {
///     email: "ada.lovelace1@example.com".to_owned(),
///     first_name: "Ada".to_owned(),
///     last_name: "Lovelace".to_owned(),
///     avatar: "https://picsum.photos/seed/ada-lovelace-1/128".to_owned(),
/// };
///
/// assert_eq!(user.first_name, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleUserSeed {
    /// Unique email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Absolute `https` URL of the avatar image.
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_user_seed_serializes_with_api_field_names() {
        let user = ExampleUserSeed {
            email: "a@b.com".to_owned(),
            first_name: "A".to_owned(),
            last_name: "B".to_owned(),
            avatar: "https://x.test/y.png".to_owned(),
        };
        let json = serde_json::to_value(&user).expect("serialize");
        assert_eq!(json["first_name"], "A");
        assert_eq!(json["last_name"], "B");
        assert_eq!(json["avatar"], "https://x.test/y.png");
    }

    #[test]
    fn seed_definition_deserializes_from_camel_case() {
        let seed: SeedDefinition =
            serde_json::from_str(r#"{"seed": 7, "userCount": 3}"#).expect("deserialize");
        assert_eq!(seed, SeedDefinition::new(7, 3));
    }
}
