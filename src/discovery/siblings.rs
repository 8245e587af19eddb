use std::path::{Path, PathBuf};

use tracing::debug;

use super::add_instances_from_folder;
use crate::{
    data::{DiscoveryStage, InstancePaths},
    macros::logs::{debug_path, warn_no_instances},
    utils::has_marker_file,
};

const STAGE: DiscoveryStage = DiscoveryStage::SiblingInstances;

/// For a path like `<instances>/<instance>/.minecraft`, returns `<instances>` if `<instance>`
/// holds the instance marker file
fn get_instances_folder(path_data: &Path) -> Option<PathBuf> {
    let path_instance = path_data.parent()?;
    if !has_marker_file(path_instance) {
        return None;
    }

    path_instance.parent().map(Path::to_path_buf)
}

/// Adds every sibling instance of the first known instance which lives inside a launcher's
/// `instances` folder, returning how many were new. Only that first match is expanded.
#[tracing::instrument(level = "trace", skip_all)]
pub fn add_sibling_instances(instance_paths: &mut InstancePaths) -> usize {
    let Some(path_instances) = instance_paths.iter().find_map(|p| get_instances_folder(p)) else {
        debug!("{STAGE:?} - No known instance is inside an instances folder");
        return 0;
    };
    debug_path!("instances folder", path_instances);

    let added = add_instances_from_folder(&path_instances, instance_paths);
    if added == 0 {
        warn_no_instances!();
    }

    added
}
