use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::BmiScaleConfig;
use crate::core::errors::{Error, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".bmiscale.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<BmiScaleConfig, String> {
    let config = toml::from_str::<BmiScaleConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    config.validate()?;
    Ok(config)
}

/// Try loading config from a specific path, logging why it was skipped
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BmiScaleConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while walking ancestors
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
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

/// Per-user config location, e.g. `~/.config/bmiscale/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bmiscale").join("config.toml"))
}

/// Candidate files in lookup order, starting at `start`
pub fn candidate_paths(start: PathBuf) -> Vec<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .collect()
}

/// Load configuration by searching from `start`, falling back to defaults.
pub fn load_config_from_dir(start: PathBuf) -> BmiScaleConfig {
    candidate_paths(start)
        .iter()
        .find_map(|path| try_load_config_from_path(path))
        .unwrap_or_else(|| {
            tracing::debug!("No usable config found. Using default config.");
            BmiScaleConfig::default()
        })
}

/// Load configuration from the current directory hierarchy.
pub fn load_config() -> BmiScaleConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from_dir(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            BmiScaleConfig::default()
        }
    }
}

/// Load an explicitly named config file; unlike discovery, failures are errors.
pub fn load_config_file(path: &Path) -> Result<BmiScaleConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system("Failed to read config", path, e))?;
    parse_and_validate_config(&contents).map_err(Error::Configuration)
}

/// Write the default configuration to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Configuration(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    let contents = toml::to_string_pretty(&BmiScaleConfig::default())?;
    fs::write(path, contents).map_err(|e| Error::file_system("Failed to write config", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [input]
            max_fraction_digits = 2
        "#})
        .unwrap();
        assert_eq!(config.input.max_fraction_digits, 2);
        assert_eq!(config.input.max_integer_digits, 4);
        assert_eq!(config.range.max, 1000.0);
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let err = parse_and_validate_config(indoc! {r#"
            [range]
            min = 10.0
            max = 5.0
        "#})
        .unwrap_err();
        assert!(err.contains("range.min"));
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let err = parse_and_validate_config("[input\nmax = ").unwrap_err();
        assert!(err.starts_with("Failed to parse .bmiscale.toml"));
    }

    #[test]
    fn test_directory_ancestors_depth_limited() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_load_config_from_parent_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[range]\nmax = 300.0\n",
        )
        .unwrap();

        let config = load_config_from_dir(nested);
        assert_eq!(config.range.max, 300.0);
    }

    #[test]
    fn test_invalid_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[input]\nmax_fraction_digits = 0\n",
        )
        .unwrap();

        assert!(try_load_config_from_path(&temp.path().join(CONFIG_FILE_NAME)).is_none());
    }

    #[test]
    fn test_write_default_config_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);

        write_default_config(&path, false).unwrap();
        assert_eq!(load_config_file(&path).unwrap(), BmiScaleConfig::default());

        let err = write_default_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert!(write_default_config(&path, true).is_ok());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
