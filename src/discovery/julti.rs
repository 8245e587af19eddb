// PATHS:
// - ~/.Julti/profiles/*
use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    data::{DiscoveryStage, InstancePaths},
    error::ServerIconError,
    macros::logs::{debug_found_instance, debug_path, warn_no_instances},
    parsers::{JultiProfile, parse_julti_profile},
    utils::{list_dir, to_absolute},
};

const STAGE: DiscoveryStage = DiscoveryStage::JultiProfiles;

/// Reads the instance paths recorded in a single Julti profile file, made absolute
fn read_profile(path_profile: &Path) -> Result<Vec<PathBuf>, ServerIconError> {
    let file_content = read_to_string(path_profile)?;
    let JultiProfile { instance_paths } = parse_julti_profile(&file_content)?;

    Ok(instance_paths
        .iter()
        .map(|path| to_absolute(Path::new(path)))
        .collect())
}

/// Adds every instance path recorded in any Julti profile, returning how many were new.
///
/// Profiles which can't be read or parsed are skipped.
#[tracing::instrument(level = "trace", skip(instance_paths))]
pub fn add_instances_from_profiles(path_profiles: &Path, instance_paths: &mut InstancePaths) -> usize {
    debug_path!("profiles folder", path_profiles);

    let Ok(paths_profile) = list_dir(path_profiles) else {
        return 0;
    };

    let mut added = 0;
    for path_profile in paths_profile {
        let paths_instance = match read_profile(&path_profile) {
            Ok(paths) => paths,
            Err(e) => {
                debug!("{STAGE:?} - Skipping unusable profile at {path_profile:?}: {e}");
                continue;
            }
        };

        for path_instance in paths_instance {
            if instance_paths.insert(path_instance.clone()) {
                debug_found_instance!(path_instance);
                added += 1;
            }
        }
    }

    if added == 0 {
        warn_no_instances!();
    }

    added
}
