// PATHS:
// - <location>/multimc.exe, <location>/*/multimc.exe (and prismlauncher)
// - <data>/PrismLauncher/, <data>/multimc/
use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use tracing::{debug, error};
use walkdir::WalkDir;

use super::add_instances_from_folder;
use crate::{
    config::{LAUNCHER_EXECUTABLES, SearchPaths},
    data::{DiscoveryStage, InstancePaths},
    macros::logs::{debug_path, warn_no_instances},
    parsers::parse_instance_dirs,
    utils::some_if_file,
};

const STAGE: DiscoveryStage = DiscoveryStage::LauncherSweep;

/// Config file name for a launcher executable, e.g. `MultiMC.exe` -> `multimc.cfg`
fn get_config_name(executable_name: &str) -> String {
    let base_name = executable_name.split('.').next().unwrap_or(executable_name);
    format!("{}.cfg", base_name.to_lowercase())
}

fn is_launcher_executable(file_name: &str) -> bool {
    LAUNCHER_EXECUTABLES.contains(&file_name.to_lowercase().as_str())
}

/// A directory holding a launcher's config file and its default `instances` folder
#[derive(Debug, Clone, PartialEq, Eq)]
struct LauncherInstall {
    path_root: PathBuf,
    config_names: Vec<String>,
}

impl LauncherInstall {
    fn from_executable(path_executable: &Path) -> Option<Self> {
        let path_root = path_executable.parent()?.to_path_buf();
        let executable_name = path_executable.file_name()?.to_str()?;

        Some(Self {
            path_root,
            config_names: vec![get_config_name(executable_name)],
        })
    }

    /// Without an executable the launcher could be any of the known ones
    fn from_root(path_root: &Path) -> Self {
        Self {
            path_root: path_root.to_path_buf(),
            config_names: LAUNCHER_EXECUTABLES
                .iter()
                .map(|name| get_config_name(name))
                .unique()
                .collect(),
        }
    }

    /// Adds instances from the default `instances` folder and every configured `InstanceDir`,
    /// returning how many were new
    #[tracing::instrument(level = "trace", skip(instance_paths))]
    fn add_instances(&self, instance_paths: &mut InstancePaths) -> usize {
        let mut added = add_instances_from_folder(&self.path_root.join("instances"), instance_paths);

        for config_name in &self.config_names {
            let Some(path_config) = some_if_file(self.path_root.join(config_name)) else {
                continue;
            };
            debug_path!("launcher config", path_config);

            let file_content = match read_to_string(&path_config) {
                Ok(file_content) => file_content,
                Err(e) => {
                    error!("{STAGE:?} - Error reading launcher config at {path_config:?}: {e}");
                    continue;
                }
            };

            for instance_dir in parse_instance_dirs(&file_content) {
                let mut path_instances = PathBuf::from(instance_dir);
                if !path_instances.is_absolute() {
                    path_instances = self.path_root.join(path_instances);
                }
                debug_path!("configured instances folder", path_instances);

                added += add_instances_from_folder(&path_instances, instance_paths);
            }
        }

        added
    }
}

/// Finds launcher executables directly inside the given location, or one folder deeper
fn find_launcher_executables(path_location: &Path) -> Vec<PathBuf> {
    WalkDir::new(path_location)
        .min_depth(1)
        .max_depth(2)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_str().is_some_and(is_launcher_executable))
        .map(|entry| entry.into_path())
        .collect()
}

/// Sweeps the configured locations for launchers and adds all of their instances, returning how
/// many were new
#[tracing::instrument(level = "trace", skip_all)]
pub fn add_instances_from_sweep(search_paths: &SearchPaths, instance_paths: &mut InstancePaths) -> usize {
    let executables: Vec<PathBuf> = search_paths
        .sweep_locations
        .iter()
        .flat_map(|path_location| find_launcher_executables(path_location))
        .collect();
    debug!("{STAGE:?} - Found launcher executables: {executables:?}");

    let launcher_installs = executables
        .iter()
        .filter_map(|path_executable| LauncherInstall::from_executable(path_executable))
        .chain(
            search_paths
                .launcher_roots
                .iter()
                .filter(|path_root| path_root.is_dir())
                .map(|path_root| LauncherInstall::from_root(path_root)),
        );

    let mut added = 0;
    for launcher_install in launcher_installs {
        added += launcher_install.add_instances(instance_paths);
    }

    if added == 0 {
        warn_no_instances!();
    }

    added
}
