//! Settings loading from `config.toml`

use std::path::{Path, PathBuf};

use favgame_core::prelude::*;

use super::types::Settings;

const FAVGAME_DIR: &str = ".favgame";
const CONFIG_FILENAME: &str = "config.toml";
const API_KEY_ENV: &str = "FAVGAME_API_KEY";

/// User-wide config file, e.g. `~/.config/favgame/config.toml`
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("favgame").join(CONFIG_FILENAME))
}

/// Load settings for a run started in `working_dir`.
///
/// A `.favgame/config.toml` in the working directory wins over the user-wide
/// file. `FAVGAME_API_KEY` overrides the configured API key when set.
pub fn load_settings(working_dir: &Path) -> Settings {
    let local_path = working_dir.join(FAVGAME_DIR).join(CONFIG_FILENAME);

    let mut settings = if local_path.exists() {
        load_settings_from(&local_path)
    } else if let Some(global_path) = global_config_path() {
        load_settings_from(&global_path)
    } else {
        Settings::default()
    };

    apply_env_overrides(&mut settings);
    settings
}

/// Load settings from one file, falling back to defaults on any problem
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            debug!("Using API key from {}", API_KEY_ENV);
            settings.api.api_key = key;
        }
    }
}

/// Write a commented default `config.toml` into `dir` unless one exists
pub fn init_config_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# favgame configuration

[api]
base_url = "https://api.rawg.io/api"
api_key = ""            # or set FAVGAME_API_KEY
timeout_secs = 10

[favorites]
# path = "/path/to/favorites.json"

[behavior]
rollback_on_failure = true   # revert the favorite icon when saving fails

[ui]
icons = "unicode"       # or "nerd_fonts"
header_height = 12
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn write_local_config(dir: &Path, content: &str) {
        let favgame_dir = dir.join(FAVGAME_DIR);
        std::fs::create_dir_all(&favgame_dir).unwrap();
        std::fs::write(favgame_dir.join(CONFIG_FILENAME), content).unwrap();
    }

    #[test]
    fn test_load_settings_from_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings_from(&temp.path().join("nope.toml"));

        assert!(settings.behavior.rollback_on_failure);
        assert_eq!(settings.api.timeout_secs, 10);
    }

    #[test]
    #[serial]
    fn test_local_config_is_used() {
        std::env::remove_var(API_KEY_ENV);
        let temp = tempdir().unwrap();
        write_local_config(
            temp.path(),
            r#"
[api]
api_key = "from-file"
timeout_secs = 3

[behavior]
rollback_on_failure = false
"#,
        );

        let settings = load_settings(temp.path());

        assert_eq!(settings.api.api_key, "from-file");
        assert_eq!(settings.api.timeout_secs, 3);
        assert!(!settings.behavior.rollback_on_failure);
    }

    #[test]
    #[serial]
    fn test_env_api_key_overrides_file() {
        let temp = tempdir().unwrap();
        write_local_config(temp.path(), "[api]\napi_key = \"from-file\"\n");

        std::env::set_var(API_KEY_ENV, "from-env");
        let settings = load_settings(temp.path());
        std::env::remove_var(API_KEY_ENV);

        assert_eq!(settings.api.api_key, "from-env");
    }

    #[test]
    #[serial]
    fn test_blank_env_api_key_is_ignored() {
        let temp = tempdir().unwrap();
        write_local_config(temp.path(), "[api]\napi_key = \"from-file\"\n");

        std::env::set_var(API_KEY_ENV, "   ");
        let settings = load_settings(temp.path());
        std::env::remove_var(API_KEY_ENV);

        assert_eq!(settings.api.api_key, "from-file");
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings_from(&path);
        assert!(settings.behavior.rollback_on_failure);
    }

    #[test]
    fn test_init_config_dir_writes_valid_toml() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("favgame");

        let path = init_config_dir(&dir).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let settings: Settings = toml::from_str(&content).expect("Default config should be valid");
        assert!(settings.behavior.rollback_on_failure);
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\nheader_height = 20\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings_from(&path).ui.header_height, 20);
    }
}
