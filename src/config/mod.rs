mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, NavigationConfig, UiConfig, DEFAULT_REDIRECT_DELAY_MS};
