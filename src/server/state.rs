use crate::adapters::{HttpDealerLookup, ImageCdn, StaticDealerDirectory};
use crate::config::toml_config::TomlConfig;
use crate::core::content::ContentStore;
use crate::core::preferences::PreferenceResolver;
use crate::domain::model::Dealer;
use crate::domain::ports::{ConfigProvider, ContentProvider, DealerLookup};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Shared, read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentProvider>,
    pub dealers: Arc<dyn DealerLookup>,
    pub resolver: PreferenceResolver,
    pub cdn: ImageCdn,
}

impl AppState {
    pub fn new(
        content: Arc<dyn ContentProvider>,
        dealers: Arc<dyn DealerLookup>,
        resolver: PreferenceResolver,
        cdn: ImageCdn,
    ) -> Self {
        Self {
            content,
            dealers,
            resolver,
            cdn,
        }
    }

    pub fn from_config(config: &TomlConfig) -> Result<Self> {
        Self::build(config, config.dealers.static_dealers.clone())
    }

    pub fn build<C: ConfigProvider>(config: &C, static_dealers: Vec<Dealer>) -> Result<Self> {
        let content = match config.content_path() {
            Some(path) => ContentStore::from_file(path)?,
            None => ContentStore::embedded()?,
        };
        tracing::info!("📚 Content table ready with {} keys", content.len());

        let dealers: Arc<dyn DealerLookup> = match config.dealer_backend_url() {
            Some(url) => {
                tracing::info!("🏪 Dealer lookups go to {}", url);
                Arc::new(HttpDealerLookup::new(
                    url,
                    Duration::from_secs(config.request_timeout_secs()),
                )?)
            }
            None => {
                let directory = StaticDealerDirectory::new(static_dealers);
                if directory.is_empty() {
                    tracing::warn!(
                        "No dealer backend and no static dealers configured; \
                         every search will come back empty"
                    );
                } else {
                    tracing::info!("🏪 Using {} statically configured dealers", directory.len());
                }
                Arc::new(directory)
            }
        };

        Ok(Self {
            content: Arc::new(content),
            dealers,
            resolver: PreferenceResolver::new(config.cookie_name(), config.default_language()),
            cdn: ImageCdn::new(config.cdn_base_url())?,
        })
    }
}
