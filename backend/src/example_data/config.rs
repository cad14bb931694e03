//! Example data configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Number of users generated when no count is configured.
pub const DEFAULT_USER_COUNT: usize = 20;

/// Configuration values controlling example data seeding at startup.
///
/// Seeding is on by default and clears storage first, so every start serves
/// the same deterministic directory.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Enable example data seeding on startup.
    pub enabled: Option<bool>,
    /// RNG seed for user generation.
    pub seed: Option<u64>,
    /// Number of users generated.
    pub count: Option<usize>,
    /// Remove existing users before seeding.
    pub reset: Option<bool>,
}

impl ExampleDataSettings {
    /// Whether seeding runs; defaults to `true`.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Configured seed, falling back to [`DEFAULT_SEED`].
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Configured user count, falling back to [`DEFAULT_USER_COUNT`].
    pub fn user_count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_USER_COUNT)
    }

    /// Whether storage is cleared first; defaults to `true`.
    pub fn resets_storage(&self) -> bool {
        self.reset.unwrap_or(true)
    }
}
