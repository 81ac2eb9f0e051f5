use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::{write_default_config, CONFIG_FILE_NAME};

/// Write `.bmiscale.toml` with the default settings into `dir`.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    Ok(config_path)
}

/// Write `.bmiscale.toml` into the current directory.
pub fn init_config(force: bool) -> Result<()> {
    let config_path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_file;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = init_config_in(dir.path(), false).unwrap();
        let config = load_config_file(&path).unwrap();
        assert_eq!(config, Default::default());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        init_config_in(dir.path(), false).unwrap();
        assert!(init_config_in(dir.path(), false).is_err());
        assert!(init_config_in(dir.path(), true).is_ok());
    }
}
