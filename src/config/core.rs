use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use serde::Deserialize;

pub const CONFIG_FILE: &str = ".complexity.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComplexityConfig {
    #[serde(default)]
    pub display: Option<DisplayConfig>,

    /// Defaults for `complexity init`
    #[serde(default)]
    pub init: Option<InitConfig>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub color: ColorMode,
    #[serde(default)]
    pub emoji: EmojiMode,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InitConfig {
    pub project_name: Option<String>,
}

impl ComplexityConfig {
    /// Console formatting: `--plain` wins, then environment variables, then
    /// the `[display]` table.
    pub fn formatting(&self, plain: bool) -> FormattingConfig {
        if plain {
            return FormattingConfig::plain();
        }

        let display = self.display.unwrap_or_default();
        FormattingConfig::new(display.color, display.emoji).with_env_overrides()
    }

    pub fn init_project_name(&self) -> Option<&str> {
        self.init
            .as_ref()
            .and_then(|init| init.project_name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
