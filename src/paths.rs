//! Path resolution for roster data files.
//!
//! Provides XDG-compliant path resolution for the default database location.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "roster";

/// Get XDG-compliant data directory for roster.
///
/// Uses `$XDG_DATA_HOME/roster`, falling back to `~/.local/share/roster`.
/// When neither variable is set the current directory is used.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));

    data_home.join(APP_DIR)
}

/// Get database file path (data_dir/roster.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("roster.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_data_dir_uses_xdg_data_home() {
        let previous = env::var("XDG_DATA_HOME").ok();
        unsafe {
            env::set_var("XDG_DATA_HOME", "/tmp/xdg-roster-test");
        }

        assert_eq!(get_data_dir(), PathBuf::from("/tmp/xdg-roster-test/roster"));
        assert_eq!(
            get_db_path(),
            PathBuf::from("/tmp/xdg-roster-test/roster/roster.db")
        );

        unsafe {
            match previous {
                Some(value) => env::set_var("XDG_DATA_HOME", value),
                None => env::remove_var("XDG_DATA_HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_db_path_is_inside_data_dir() {
        let db_path = get_db_path();
        assert_eq!(db_path.parent(), Some(get_data_dir().as_path()));
        assert_eq!(db_path.file_name().unwrap(), "roster.db");
    }
}
