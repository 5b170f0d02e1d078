//! # Bodkin Configuration
//!
//! The configuration source for the injection engine. Settings are read once,
//! at engine construction; there is no hot reload.
//!
//! Settings can come from a TOML document, from the process environment
//! (`BODKIN_*` variables, with `.env` support), or be built programmatically:
//!
//! ```rust
//! use bodkin_conf::Settings;
//!
//! let settings = Settings::new()
//! 	.with_mock_provider("stub")
//! 	.with_custom_marker("myapp::Session");
//!
//! assert_eq!(settings.mock_provider.as_deref(), Some("stub"));
//! ```

mod error;
mod settings;

pub use error::{SettingsError, SettingsResult};
pub use settings::{
	ENV_CUSTOM_MARKERS, ENV_CUSTOM_PROVIDERS, ENV_MOCK_PROVIDER, Settings,
};
