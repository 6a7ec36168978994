//! Status indicator and mode banner derived from the status probe.

use fox_core::models::StatusResponse;

use crate::error::ClientError;

const LIVE_INDICATOR: &str = "Server live: will call OpenAI (ensure you want this)";
const MOCK_INDICATOR: &str = "Server in mock/no-key mode";
const UNREACHABLE_INDICATOR: &str = "Unable to reach server status";
pub const LIVE_BANNER: &str = "Mode: LIVE (server will call OpenAI)";
pub const MOCK_BANNER: &str = "Mode: MOCK (no credits used)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMode {
    Live,
    Mock,
    Unreachable,
}

/// What the UI shows about the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub mode: ServerMode,
    pub indicator: String,
    /// `None` leaves the banner as it was.
    pub banner: Option<&'static str>,
}

impl StatusView {
    pub fn from_result(result: Result<StatusResponse, ClientError>) -> Self {
        match result {
            Ok(status) if status.ok && !status.mock => Self {
                mode: ServerMode::Live,
                indicator: LIVE_INDICATOR.to_string(),
                banner: Some(LIVE_BANNER),
            },
            Ok(status) => Self {
                mode: ServerMode::Mock,
                indicator: status
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| MOCK_INDICATOR.to_string()),
                banner: Some(MOCK_BANNER),
            },
            Err(_) => Self {
                mode: ServerMode::Unreachable,
                indicator: UNREACHABLE_INDICATOR.to_string(),
                banner: None,
            },
        }
    }

    /// Indicator is drawn in the alert colour unless the server is live.
    pub fn is_alert(&self) -> bool {
        self.mode != ServerMode::Live
    }
}
