//! Service status and the static support block served with detailed users.

use serde::Serialize;

/// Availability of the service's dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    /// Whether user storage answered a ping.
    pub database: bool,
}

/// Support link returned alongside a user by the detailed endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportInfo {
    /// Where to find support.
    pub url: String,
    /// Short call to action.
    pub text: String,
}

impl Default for SupportInfo {
    fn default() -> Self {
        Self {
            url: "https://reqres.in/#support-heading".to_owned(),
            text: "To keep ReqRes free, contributions towards server costs are appreciated!"
                .to_owned(),
        }
    }
}
