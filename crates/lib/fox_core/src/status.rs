//! Operability report behind the status probe.

use crate::credential;
use crate::error::CoreError;
use crate::mode::{Mode, ModeFlags};
use crate::models::StatusResponse;

const MOCK_DEFAULT: &str =
    "Server running in mock mode (USE_OPENAI not set). No credits will be used.";
const MOCK_FORCED: &str =
    "Server running in mock mode (MOCK_OPENAI=1 set). No credits will be used.";
const KEY_MISSING: &str = "USE_OPENAI=1 but OPENAI_API_KEY is not set on server";
const KEY_OK: &str = "OPENAI_API_KEY present and header-safe";

/// Reports whether live calls would work, without exposing the key.
///
/// In mock mode the credential is not inspected at all.
pub fn status_report(flags: ModeFlags, api_key: Option<&str>) -> StatusResponse {
    if flags.server_mode() == Mode::Mock {
        let message = if flags.use_openai { MOCK_FORCED } else { MOCK_DEFAULT };
        return StatusResponse {
            ok: false,
            mock: true,
            message: Some(message.to_string()),
            details: None,
            mock_globally: Some(flags.mock_openai),
        };
    }

    let failure = |message: String, details| StatusResponse {
        ok: false,
        mock: false,
        message: Some(message),
        details,
        mock_globally: None,
    };

    match credential::authorization_header(api_key) {
        Ok(_) => StatusResponse {
            ok: true,
            mock: false,
            message: Some(KEY_OK.to_string()),
            details: None,
            mock_globally: None,
        },
        Err(CoreError::MissingCredential) => failure(KEY_MISSING.to_string(), None),
        Err(CoreError::UnencodableCredential(details)) => {
            failure(credential::UNENCODABLE_MESSAGE.to_string(), Some(details))
        }
        Err(err) => failure(err.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIVE: ModeFlags = ModeFlags {
        use_openai: true,
        mock_openai: false,
    };

    #[test]
    fn mock_mode_skips_credential_check() {
        let report = status_report(ModeFlags::default(), Some("sk-✓"));
        assert!(!report.ok);
        assert!(report.mock);
        assert_eq!(report.message.as_deref(), Some(MOCK_DEFAULT));
        assert!(report.details.is_none());
        assert_eq!(report.mock_globally, Some(false));
    }

    #[test]
    fn mock_forced_globally() {
        let flags = ModeFlags {
            use_openai: true,
            mock_openai: true,
        };
        let report = status_report(flags, Some("sk-ok"));
        assert!(report.mock);
        assert_eq!(report.message.as_deref(), Some(MOCK_FORCED));
        assert_eq!(report.mock_globally, Some(true));
    }

    #[test]
    fn live_without_key() {
        let report = status_report(LIVE, None);
        assert!(!report.ok);
        assert!(!report.mock);
        assert_eq!(report.message.as_deref(), Some(KEY_MISSING));
    }

    #[test]
    fn live_with_unencodable_key() {
        let report = status_report(LIVE, Some("sk-✓"));
        assert!(!report.ok);
        let details = report.details.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].index, 10);
        assert_eq!(details[0].ord, 0x2713);
    }

    #[test]
    fn live_with_good_key() {
        let report = status_report(LIVE, Some("sk-live-abc"));
        assert!(report.ok);
        assert!(!report.mock);
    }

    #[test]
    fn never_echoes_the_key() {
        let key = "sk-very-secret-✓";
        for flags in [ModeFlags::default(), LIVE] {
            for api_key in [Some(key), Some("sk-very-secret"), None] {
                let body = serde_json::to_string(&status_report(flags, api_key)).unwrap();
                assert!(!body.contains("sk-very-secret"), "{body}");
            }
        }
    }
}
