//! API server configuration.

use std::fmt;
use std::path::PathBuf;

use fox_core::mode::{Mode, ModeFlags};
use fox_core::upstream::DEFAULT_BASE_URL;
use tracing::warn;

const DEFAULT_PORT: u16 = 3000;

/// Configuration for the API server, built once at startup.
#[derive(Clone)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:3000").
    pub bind_addr: String,
    /// `USE_OPENAI` / `MOCK_OPENAI`.
    pub mode: ModeFlags,
    /// Upstream credential. Empty counts as absent.
    pub openai_api_key: Option<String>,
    /// Upstream API root; `/chat/completions` is appended.
    pub openai_base_url: String,
    /// Directory holding the browser UI.
    pub static_dir: PathBuf,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable          | Default                     |
    /// |-------------------|-----------------------------|
    /// | `BIND_HOST`       | `0.0.0.0`                   |
    /// | `PORT`            | `3000`                      |
    /// | `USE_OPENAI`      | unset (mock)                |
    /// | `MOCK_OPENAI`     | unset                       |
    /// | `OPENAI_API_KEY`  | unset                       |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com/v1` |
    /// | `STATIC_DIR`      | `public`                    |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ApiConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("BIND_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(port = %raw, "invalid PORT, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            bind_addr: format!("{host}:{port}"),
            mode: ModeFlags::from_values(
                lookup("USE_OPENAI").as_deref(),
                lookup("MOCK_OPENAI").as_deref(),
            ),
            openai_api_key: lookup("OPENAI_API_KEY").filter(|key| !key.is_empty()),
            openai_base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
        }
    }

    /// Mode used for requests without a `mock` override.
    pub fn server_mode(&self) -> Mode {
        self.mode.server_mode()
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("bind_addr", &self.bind_addr)
            .field("mode", &self.mode)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}
