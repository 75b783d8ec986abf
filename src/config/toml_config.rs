use crate::domain::model::{Dealer, Language};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_COOKIE_NAME: &str = "user-preferences";
pub const DEFAULT_CDN_BASE_URL: &str = "https://cdn.example.com/media";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub dealers: DealersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub cookie_name: String,
    pub default_language: Option<String>,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            default_language: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// JSON table replacing the embedded one.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    pub cdn_base_url: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DealersConfig {
    pub backend_url: Option<String>,
    #[serde(default, rename = "static")]
    pub static_dealers: Vec<Dealer>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_socket_addr("server.bind_address", &self.server.bind_address)?;

        if let Some(timeout) = self.server.request_timeout_secs {
            validation::validate_range("server.request_timeout_secs", timeout, 1, 120)?;
        }

        validation::validate_cookie_name(
            "preferences.cookie_name",
            &self.preferences.cookie_name,
        )?;
        self.parsed_default_language()?;

        if let Some(path) = &self.content.path {
            validation::validate_path("content.path", path)?;
        }

        validation::validate_url("images.cdn_base_url", &self.images.cdn_base_url)?;

        if let Some(url) = &self.dealers.backend_url {
            validation::validate_url("dealers.backend_url", url)?;
        }

        for (i, dealer) in self.dealers.static_dealers.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("dealers.static[{}].name", i),
                &dealer.name,
            )?;
            validation::validate_non_empty_string(
                &format!("dealers.static[{}].city", i),
                &dealer.city,
            )?;
        }

        Ok(())
    }

    fn parsed_default_language(&self) -> Result<Language> {
        match &self.preferences.default_language {
            None => Ok(Language::default()),
            Some(code) => code
                .parse()
                .map_err(|reason| SiteError::InvalidConfigValueError {
                    field: "preferences.default_language".to_string(),
                    value: code.clone(),
                    reason,
                }),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_address(&self) -> &str {
        &self.server.bind_address
    }

    fn cookie_name(&self) -> &str {
        &self.preferences.cookie_name
    }

    fn default_language(&self) -> Language {
        // validated at startup; fall back rather than fail mid-request
        self.parsed_default_language().unwrap_or_default()
    }

    fn cdn_base_url(&self) -> &str {
        &self.images.cdn_base_url
    }

    fn content_path(&self) -> Option<&str> {
        self.content.path.as_deref()
    }

    fn dealer_backend_url(&self) -> Option<&str> {
        self.dealers.backend_url.as_deref()
    }

    fn request_timeout_secs(&self) -> u64 {
        self.server
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
