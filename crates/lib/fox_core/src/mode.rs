//! Mock-vs-live precedence.
//!
//! One rule decides whether a chat request reaches the paid upstream API:
//!
//! ```text
//! LIVE  iff  USE_OPENAI=1  and not MOCK_OPENAI=1  and not ?mock=1
//! MOCK  otherwise
//! ```
//!
//! The server-wide mode (status probe, startup banner) is the same rule with
//! no per-request override.

use std::fmt;

/// Where a chat request is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reply synthesised locally, no upstream call.
    Mock,
    /// Conversation forwarded to the upstream completion API.
    Live,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Mock => f.write_str("MOCK"),
            Mode::Live => f.write_str("LIVE"),
        }
    }
}

/// Process-wide mode flags, read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeFlags {
    /// `USE_OPENAI=1`.
    pub use_openai: bool,
    /// `MOCK_OPENAI=1`.
    pub mock_openai: bool,
}

impl ModeFlags {
    /// Builds flags from raw `USE_OPENAI` / `MOCK_OPENAI` values.
    pub fn from_values(use_openai: Option<&str>, mock_openai: Option<&str>) -> Self {
        Self {
            use_openai: flag_enabled(use_openai),
            mock_openai: flag_enabled(mock_openai),
        }
    }

    /// Resolves the mode for one request.
    pub fn resolve(&self, request_mock: bool) -> Mode {
        if self.use_openai && !self.mock_openai && !request_mock {
            Mode::Live
        } else {
            Mode::Mock
        }
    }

    /// Mode used when a request carries no override.
    pub fn server_mode(&self) -> Mode {
        self.resolve(false)
    }
}

/// A boolean-like setting is on only for the exact value `1`.
pub fn flag_enabled(value: Option<&str>) -> bool {
    value == Some("1")
}

/// Whether a `mock` query parameter forces mock mode for its request.
pub fn request_forces_mock(param: Option<&str>) -> bool {
    flag_enabled(param)
}
