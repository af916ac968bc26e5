//! Optional `.complexity.toml` settings.
//!
//! ```toml
//! [display]
//! color = "never"
//! emoji = "auto"
//!
//! [init]
//! project_name = "Acme API"
//! ```

mod core;
mod loader;

pub use self::core::{ComplexityConfig, DisplayConfig, InitConfig, CONFIG_FILE};
pub use loader::{directory_ancestors, load_config, parse_and_validate_config};
