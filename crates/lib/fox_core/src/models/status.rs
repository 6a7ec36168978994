//! Status probe payload.

use serde::{Deserialize, Serialize};

use crate::credential::OffendingChar;

/// Body of `GET /api/status`. Never carries the credential itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub ok: bool,
    pub mock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<OffendingChar>>,
    /// Set in mock-mode reports: whether `MOCK_OPENAI=1` forced mock server-wide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_globally: Option<bool>,
}
