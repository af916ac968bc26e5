use super::core::{ComplexityConfig, CONFIG_FILE};
use crate::io::FileSystem;
use std::path::{Path, PathBuf};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from TOML text
pub fn parse_and_validate_config(contents: &str) -> Result<ComplexityConfig, String> {
    let config = toml::from_str::<ComplexityConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE}: {e}"))?;

    if let Some(init) = &config.init {
        if init.project_name.as_deref().is_some_and(|name| name.contains('\n')) {
            return Err(format!("{CONFIG_FILE}: init.project_name must be a single line"));
        }
    }

    Ok(config)
}

/// `start` and its parents, nearest first, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

fn try_load_config_from_path(fs: &dyn FileSystem, config_path: &Path) -> Option<ComplexityConfig> {
    if !fs.is_file(config_path) {
        return None;
    }

    let contents = match fs.read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Nearest `.complexity.toml` at or above `start`, or defaults.
///
/// A broken config file never fails a command; it is logged and skipped.
pub fn load_config(fs: &dyn FileSystem, start: &Path) -> ComplexityConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE))
        .find_map(|path| try_load_config_from_path(fs, &path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ComplexityConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
    use crate::testkit::MemoryFileSystem;
    use indoc::indoc;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [display]
            color = "never"
            emoji = "always"

            [init]
            project_name = "Acme API"
        "#})
        .unwrap();

        assert_eq!(
            config.display,
            Some(DisplayConfig {
                color: ColorMode::Never,
                emoji: EmojiMode::Always,
            })
        );
        assert_eq!(config.init_project_name(), Some("Acme API"));
    }

    #[test]
    fn test_parse_rejects_unknown_sections() {
        assert!(parse_and_validate_config("[thresholds]\ncomplexity = 10\n").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_color() {
        let err = parse_and_validate_config("[display]\ncolor = \"rainbow\"\n").unwrap_err();
        assert!(err.contains(".complexity.toml"));
    }

    #[test]
    fn test_blank_project_name_is_ignored() {
        let config = parse_and_validate_config("[init]\nproject_name = \"  \"\n").unwrap();
        assert_eq!(config.init_project_name(), None);
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_load_config_finds_nearest_file() {
        let fs = MemoryFileSystem::new()
            .with_file("/repo/.complexity.toml", "[init]\nproject_name = \"Outer\"\n")
            .with_file("/repo/app/.complexity.toml", "[init]\nproject_name = \"Inner\"\n");
        let config = load_config(&fs, Path::new("/repo/app/src"));
        assert_eq!(config.init_project_name(), Some("Inner"));
    }

    #[test]
    fn test_load_config_skips_broken_file() {
        let fs = MemoryFileSystem::new()
            .with_file("/repo/.complexity.toml", "[init]\nproject_name = \"Outer\"\n")
            .with_file("/repo/app/.complexity.toml", "not = [valid");
        let config = load_config(&fs, Path::new("/repo/app"));
        assert_eq!(config.init_project_name(), Some("Outer"));
    }

    #[test]
    fn test_plain_flag_overrides_display() {
        let config = ComplexityConfig {
            display: Some(DisplayConfig {
                color: ColorMode::Always,
                emoji: EmojiMode::Always,
            }),
            init: None,
        };
        assert_eq!(config.formatting(true), FormattingConfig::plain());
    }
}
