// Adapters layer: concrete implementations for external systems (dealer backend, image CDN).

pub mod http_dealers;
pub mod image_cdn;
pub mod static_dealers;

pub use http_dealers::HttpDealerLookup;
pub use image_cdn::ImageCdn;
pub use static_dealers::StaticDealerDirectory;
