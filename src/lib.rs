pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod server;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{content::ContentStore, preferences::PreferenceResolver};
pub use crate::server::{router, AppState};
pub use crate::utils::error::{Result, SiteError};
