//! Preference cookie decoding and encoding.
//!
//! The cookie value is base64 over a UTF-8 JSON object such as
//! `{"language":"hi","theme":"dark"}`. Padding is optional and may arrive
//! URL-escaped as `%3D`.

use crate::domain::model::{Language, UserPreferences};
use crate::utils::error::{Result, SiteError};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// One year, matching how long a visitor's language choice should stick.
pub const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct PreferenceResolver {
    cookie_name: String,
    default_language: Language,
}

impl PreferenceResolver {
    pub fn new(cookie_name: impl Into<String>, default_language: Language) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            default_language,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn defaults(&self) -> UserPreferences {
        UserPreferences {
            language: self.default_language,
            ..UserPreferences::default()
        }
    }

    /// Resolve preferences from the raw bytes of every `Cookie` header on the request.
    ///
    /// No header or no matching cookie yields the defaults. A present but
    /// undecodable cookie, including one with non-UTF-8 bytes, is an error the
    /// caller must not swallow. Other cookies are never inspected beyond their name.
    pub fn resolve(&self, cookie_headers: &[&[u8]]) -> Result<UserPreferences> {
        let Some(raw) = find_cookie(cookie_headers, &self.cookie_name) else {
            return Ok(self.defaults());
        };

        let raw = std::str::from_utf8(raw).map_err(|e| SiteError::PreferenceDecode {
            message: format!("invalid UTF-8 in cookie: {}", e),
        })?;
        let prefs = self.decode(raw)?;
        tracing::debug!(language = %prefs.language, theme = ?prefs.theme, "Resolved preferences from cookie");
        Ok(prefs)
    }

    pub fn decode(&self, raw: &str) -> Result<UserPreferences> {
        let trimmed = raw.trim().trim_matches('"');
        let unescaped = trimmed.replace("%3D", "=").replace("%3d", "=");

        let bytes = LENIENT
            .decode(unescaped.as_bytes())
            .map_err(|e| SiteError::PreferenceDecode {
                message: format!("invalid base64: {}", e),
            })?;

        let text = String::from_utf8(bytes).map_err(|e| SiteError::PreferenceDecode {
            message: format!("invalid UTF-8: {}", e),
        })?;

        // `null` is what an unset cookie serializes to on some clients.
        if text.trim() == "null" {
            return Ok(self.defaults());
        }

        let mut value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| SiteError::PreferenceDecode {
                message: format!("invalid JSON: {}", e),
            })?;

        if let Some(obj) = value.as_object_mut() {
            if !obj.contains_key("language") {
                obj.insert(
                    "language".to_string(),
                    serde_json::Value::String(self.default_language.code().to_string()),
                );
            }
        }

        serde_json::from_value(value).map_err(|e| SiteError::PreferenceDecode {
            message: format!("unexpected preference shape: {}", e),
        })
    }

    pub fn encode(&self, prefs: &UserPreferences) -> Result<String> {
        let json = serde_json::to_string(prefs)?;
        Ok(STANDARD.encode(json.as_bytes()))
    }

    /// Full `Set-Cookie` header value persisting `prefs`.
    pub fn set_cookie_header(&self, prefs: &UserPreferences) -> Result<String> {
        let value = self.encode(prefs)?;
        Ok(format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax; HttpOnly",
            self.cookie_name, value, COOKIE_MAX_AGE_SECS
        ))
    }
}

/// First cookie called `name`, searched across all header values in order.
fn find_cookie<'a>(headers: &[&'a [u8]], name: &str) -> Option<&'a [u8]> {
    headers
        .iter()
        .copied()
        .flat_map(|header| header.split(|b| *b == b';'))
        .find_map(|pair| {
            let eq = pair.iter().position(|b| *b == b'=')?;
            (pair[..eq].trim_ascii() == name.as_bytes()).then(|| &pair[eq + 1..])
        })
}
