use crate::domain::model::{Dealer, Language};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only vernacular lookup handed to every renderer.
pub trait ContentProvider: Send + Sync {
    /// Localized text for `key`; unknown keys come back as the key itself.
    fn get_content(&self, key: &str, language: Language) -> String;

    fn try_get(&self, key: &str, language: Language) -> Option<&str>;
}

#[async_trait]
pub trait DealerLookup: Send + Sync {
    /// `Ok(None)` means the backend knows no dealer for `city`.
    async fn get_dealer_for_city(&self, city: &str) -> Result<Option<Vec<Dealer>>>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn cookie_name(&self) -> &str;
    fn default_language(&self) -> Language;
    fn cdn_base_url(&self) -> &str;
    fn content_path(&self) -> Option<&str>;
    fn dealer_backend_url(&self) -> Option<&str>;
    fn request_timeout_secs(&self) -> u64;
}
