//! Locations probed during discovery, resolved once from the current user's directories.

use std::path::{Path, PathBuf};

use cfg_if::cfg_if;
use tracing::debug;

use crate::error::ServerIconError;

/// Every location discovery is allowed to look at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPaths {
    /// Julti's per-user directory, holding the `profiles` folder
    pub path_julti: PathBuf,
    /// Directories whose children (and grandchildren) are checked for launcher executables
    pub sweep_locations: Vec<PathBuf>,
    /// Launcher directories which may hold a config file and `instances` folder without an
    /// executable alongside
    pub launcher_roots: Vec<PathBuf>,
    /// Where the folder picker starts out
    pub path_browse_start: PathBuf,
}

impl SearchPaths {
    /// Resolves all search paths for the current user
    pub fn detect() -> Result<Self, ServerIconError> {
        let path_home = dirs::home_dir().ok_or(ServerIconError::NoHomeDir)?;
        let path_data = dirs::data_dir().unwrap_or_else(|| default_data_dir(&path_home));

        let search_paths = Self::new(&path_home, &path_data);
        debug!("Resolved search paths: {search_paths:#?}");

        Ok(search_paths)
    }

    /// Builds all search paths from the given home and data directories
    pub fn new(path_home: &Path, path_data: &Path) -> Self {
        Self {
            path_julti: path_home.join(".Julti"),
            sweep_locations: get_sweep_locations(path_home, path_data),
            launcher_roots: get_launcher_roots(path_home, path_data),
            path_browse_start: path_home.to_path_buf(),
        }
    }

    /// Julti's `profiles` folder
    pub fn path_julti_profiles(&self) -> PathBuf {
        self.path_julti.join("profiles")
    }
}

cfg_if! {
    if #[cfg(target_os = "windows")] {
        /// Launcher executables looked for during the sweep, compared case-insensitively
        pub const LAUNCHER_EXECUTABLES: &[&str] = &["multimc.exe", "prismlauncher.exe"];

        fn default_data_dir(path_home: &Path) -> PathBuf {
            path_home.join("AppData").join("Roaming")
        }

        fn get_sweep_locations(path_home: &Path, _path_data: &Path) -> Vec<PathBuf> {
            vec![
                path_home.join("Desktop"),
                path_home.join("Documents"),
                path_home.join("AppData").join("Roaming"),
                path_home.join("AppData").join("Local").join("Programs"),
                path_home.join("Downloads"),
                PathBuf::from("C:\\"),
            ]
        }

        fn get_launcher_roots(_path_home: &Path, path_data: &Path) -> Vec<PathBuf> {
            vec![path_data.join("PrismLauncher")]
        }
    } else {
        /// Launcher executables looked for during the sweep, compared case-insensitively
        pub const LAUNCHER_EXECUTABLES: &[&str] =
            &["multimc.exe", "prismlauncher.exe", "multimc", "prismlauncher"];

        fn default_data_dir(path_home: &Path) -> PathBuf {
            path_home.join(".local/share")
        }

        fn get_sweep_locations(path_home: &Path, path_data: &Path) -> Vec<PathBuf> {
            vec![
                path_home.join("Desktop"),
                path_home.join("Documents"),
                path_data.to_path_buf(),
                path_home.join("Applications"),
                path_home.join("Downloads"),
                PathBuf::from("/"),
            ]
        }

        fn get_launcher_roots(path_home: &Path, path_data: &Path) -> Vec<PathBuf> {
            vec![
                path_data.join("PrismLauncher"),
                path_data.join("multimc"),
                path_home.join(".var/app/org.prismlauncher.PrismLauncher/data/PrismLauncher"),
            ]
        }
    }
}
