use crate::utils::error::{Result, SiteError};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Cookie names are HTTP tokens: no separators, whitespace or control characters.
pub fn validate_cookie_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    let forbidden = "()<>@,;:\\\"/[]?={} \t";
    if let Some(bad) = name
        .chars()
        .find(|c| c.is_control() || forbidden.contains(*c) || !c.is_ascii())
    {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: format!("Character {:?} is not allowed in a cookie name", bad),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("images.cdn_base_url", "https://example.com").is_ok());
        assert!(validate_url("images.cdn_base_url", "http://example.com").is_ok());
        assert!(validate_url("images.cdn_base_url", "").is_err());
        assert!(validate_url("images.cdn_base_url", "invalid-url").is_err());
        assert!(validate_url("images.cdn_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        let addr = validate_socket_addr("server.bind_address", "127.0.0.1:3000").unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(validate_socket_addr("server.bind_address", "localhost").is_err());
    }

    #[test]
    fn test_validate_cookie_name() {
        assert!(validate_cookie_name("preferences.cookie_name", "user-preferences").is_ok());
        assert!(validate_cookie_name("preferences.cookie_name", "").is_err());
        assert!(validate_cookie_name("preferences.cookie_name", "user prefs").is_err());
        assert!(validate_cookie_name("preferences.cookie_name", "prefs;x").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.request_timeout_secs", 10u64, 1, 120).is_ok());
        assert!(validate_range("server.request_timeout_secs", 0u64, 1, 120).is_err());
        assert!(validate_range("server.request_timeout_secs", 121u64, 1, 120).is_err());
    }
}
