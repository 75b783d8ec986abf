use crate::utils::error::{Result, SiteError};
use url::Url;

#[derive(Debug, Clone)]
pub struct ImageCdn {
    base: Url,
}

impl ImageCdn {
    pub fn new(base_url: &str) -> Result<Self> {
        // A trailing slash makes `join` append instead of replacing the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalized).map_err(|e| SiteError::InvalidConfigValueError {
            field: "images.cdn_base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        Ok(Self { base })
    }

    pub fn url(&self, path: &str, width: Option<u32>) -> String {
        let mut url = match self.base.join(path.trim_start_matches('/')) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Could not build CDN URL for '{}': {}", path, e);
                return path.to_string();
            }
        };
        if let Some(width) = width {
            url.query_pairs_mut().append_pair("w", &width.to_string());
        }
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_path_under_base() {
        let cdn = ImageCdn::new("https://cdn.example.com/media").unwrap();
        assert_eq!(
            cdn.url("/home/hero.jpg", None),
            "https://cdn.example.com/media/home/hero.jpg"
        );
    }

    #[test]
    fn test_width_becomes_query() {
        let cdn = ImageCdn::new("https://cdn.example.com/media/").unwrap();
        assert_eq!(
            cdn.url("batteries/solar-150.png", Some(480)),
            "https://cdn.example.com/media/batteries/solar-150.png?w=480"
        );
    }

    #[test]
    fn test_rejects_relative_base() {
        assert!(ImageCdn::new("media/images").is_err());
    }
}
