//! XDG Base Directory paths for switchboard.
//!
//! CLI tools should use XDG paths for cross-platform consistency,
//! not platform-native paths.

use std::path::PathBuf;

const APP_DIR: &str = "switchboard";

/// Get the switchboard config directory.
///
/// Returns `$XDG_CONFIG_HOME/switchboard` if set, otherwise
/// `~/.config/switchboard`.
///
/// # Examples
///
/// ```
/// use switchboard_paths::config_dir;
///
/// let config = config_dir();
/// let file = config.join("config.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join(APP_DIR)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config").join(APP_DIR)
    } else {
        PathBuf::from(".config").join(APP_DIR)
    }
}

/// Path of the user-level config file.
pub fn user_config_file() -> PathBuf {
    config_dir().join("config.toml")
}
