//! Error types for the example-data crate.
//!
//! Generation is the only fallible operation; its failures are reported
//! through a `thiserror` enum like the rest of the workspace.

use thiserror::Error;

/// Errors that can occur during user generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a usable name after the maximum number of retries.
    #[error("failed to generate valid {field} after {max_attempts} attempts")]
    NameGenerationFailed {
        /// Which name was being generated (`first_name` or `last_name`).
        field: &'static str,
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// The seed definition asks for more users than the generator supports.
    #[error("requested {requested} users but at most {max} can be generated")]
    TooManyUsers {
        /// Number of users requested.
        requested: usize,
        /// Upper bound in force.
        max: usize,
    },
}
