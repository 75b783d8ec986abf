pub mod composer;
pub mod content;
pub mod cursor;
pub mod dealer_locator;
pub mod preferences;

pub use crate::domain::model::{Dealer, DealerLocatorOutcome, Language, UserPreferences};
pub use crate::domain::ports::{ConfigProvider, ContentProvider, DealerLookup};
pub use crate::utils::error::Result;
