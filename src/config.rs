//! 比較設定
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::{
    DEFAULT_CONFIG_FILE,
    load_settings,
};
pub use types::{
    CompareSettings,
    ConfigError,
    ValidationError,
};
